use anyhow::Context;
use auth_front::app::factories::{
    make_local_save_access_token, make_login_validation, make_remote_add_account,
    make_remote_authentication, make_signup_validation,
};
use auth_front::domain::model::FormData;
use auth_front::utils::{logger, validation::Validate};
use auth_front::{CliArgs, ClientConfig, Command, LoginFlow, SignUpFlow, SubmitError, SubmitOutcome};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = ClientConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    logger::init_cli_logger(
        args.verbose,
        config.logging.level.as_deref(),
        config.logging.format,
    );
    tracing::info!("Starting auth-front");
    tracing::debug!("Config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = match args.command {
        Command::Login { email, password } => {
            let form = FormData::new()
                .with("email", email)
                .with("password", password);
            let flow = LoginFlow::new(
                make_login_validation(),
                make_remote_authentication(&config)?,
                make_local_save_access_token(&config),
            );
            flow.submit(&form).await
        }
        Command::Signup {
            name,
            email,
            password,
            password_confirmation,
        } => {
            let form = FormData::new()
                .with("name", name)
                .with("email", email)
                .with("password", password)
                .with("passwordConfirmation", password_confirmation);
            let flow = SignUpFlow::new(
                make_signup_validation(),
                make_remote_add_account(&config)?,
                make_local_save_access_token(&config),
            );
            flow.submit(&form).await
        }
    };

    match result {
        Ok(SubmitOutcome::SignedIn(_)) => {
            println!(
                "✅ Signed in. Access token saved under {}",
                config.storage.token_dir
            );
        }
        Ok(SubmitOutcome::NoSession) => {
            println!("✅ Request accepted. No session was issued.");
        }
        Err(SubmitError::Invalid(errors)) => {
            for error in errors {
                eprintln!("❌ {}: {}", error.field, error.message);
            }
            std::process::exit(1);
        }
        Err(SubmitError::Remote(e)) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
        Err(SubmitError::Client(e)) => {
            tracing::error!("Submit failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(3);
        }
    }

    Ok(())
}
