use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "auth-front")]
#[command(about = "Sign in or create an account against the account API")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "auth-front.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Authenticate with email and password
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Create a new account
    Signup {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        password_confirmation: String,
    },
}
