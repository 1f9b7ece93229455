//! Wiring: builds the validation sets and adapters used by each form.

use crate::adapters::{LocalStorageAdapter, ReqwestHttpClient};
use crate::config::ClientConfig;
use crate::core::remote::{RemoteAddAccount, RemoteAuthentication};
use crate::core::save_access_token::LocalSaveAccessToken;
use crate::core::validation::{ValidationBuilder, ValidationComposite};
use crate::utils::error::Result;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";

pub fn make_api_url(config: &ClientConfig, path: &str) -> String {
    format!("{}{}", config.api.base_url.trim_end_matches('/'), path)
}

pub fn make_http_client(config: &ClientConfig) -> Result<ReqwestHttpClient> {
    ReqwestHttpClient::with_timeout(config.timeout())
}

pub fn make_remote_authentication(
    config: &ClientConfig,
) -> Result<RemoteAuthentication<ReqwestHttpClient>> {
    Ok(RemoteAuthentication::new(
        make_api_url(config, LOGIN_PATH),
        make_http_client(config)?,
    ))
}

pub fn make_remote_add_account(
    config: &ClientConfig,
) -> Result<RemoteAddAccount<ReqwestHttpClient>> {
    Ok(RemoteAddAccount::new(
        make_api_url(config, SIGNUP_PATH),
        make_http_client(config)?,
    ))
}

pub fn make_local_storage_adapter(config: &ClientConfig) -> LocalStorageAdapter {
    LocalStorageAdapter::new(&config.storage.token_dir)
}

pub fn make_local_save_access_token(
    config: &ClientConfig,
) -> LocalSaveAccessToken<LocalStorageAdapter> {
    LocalSaveAccessToken::new(make_local_storage_adapter(config))
}

pub fn make_login_validation() -> ValidationComposite {
    ValidationComposite::build(
        [
            ValidationBuilder::field("email").required().email().build(),
            ValidationBuilder::field("password").required().min(5).build(),
        ]
        .concat(),
    )
}

pub fn make_signup_validation() -> ValidationComposite {
    ValidationComposite::build(
        [
            ValidationBuilder::field("name").required().min(5).build(),
            ValidationBuilder::field("email").required().email().build(),
            ValidationBuilder::field("password").required().min(5).build(),
            ValidationBuilder::field("passwordConfirmation")
                .required()
                .same_as("password")
                .build(),
        ]
        .concat(),
    )
}
