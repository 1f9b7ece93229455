pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, Command};

pub use adapters::{LocalStorageAdapter, ReqwestHttpClient};
pub use app::{LoginFlow, SignUpFlow, SubmitError, SubmitOutcome};
pub use config::ClientConfig;
pub use core::remote::{RemoteAddAccount, RemoteAuthentication};
pub use core::validation::{ValidationBuilder, ValidationComposite};
pub use utils::error::{ClientError, Result};
