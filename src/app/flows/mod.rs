//! Submit handling for the login and sign-up forms.
//!
//! A flow gates submission on every field passing validation, performs the
//! remote call once and stores the issued access token. Errors leave the flow
//! ready for another submit.

pub mod login_flow;
pub mod signup_flow;

pub use login_flow::LoginFlow;
pub use signup_flow::SignUpFlow;

use crate::domain::errors::DomainError;
use crate::domain::model::{AccountModel, FormData};
use crate::domain::ports::{SaveAccessToken, Validation};
use crate::utils::error::ClientError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    SignedIn(AccountModel),
    /// The server accepted the request without issuing a session.
    NoSession,
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),

    #[error(transparent)]
    Remote(#[from] DomainError),

    #[error(transparent)]
    Client(ClientError),
}

impl From<ClientError> for SubmitError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Domain(e) => SubmitError::Remote(e),
            other => SubmitError::Client(other),
        }
    }
}

/// Messages for every failing field, in `fields` order.
pub fn collect_field_errors<V: Validation + ?Sized>(
    validation: &V,
    fields: &[&str],
    form: &FormData,
) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|field| {
            validation.validate(field, form).map(|message| FieldError {
                field: field.to_string(),
                message,
            })
        })
        .collect()
}

pub(crate) async fn finish<S: SaveAccessToken + ?Sized>(
    save_access_token: &S,
    account: Option<AccountModel>,
) -> Result<SubmitOutcome, SubmitError> {
    match account {
        Some(account) => {
            save_access_token.save(&account.access_token).await?;
            Ok(SubmitOutcome::SignedIn(account))
        }
        None => Ok(SubmitOutcome::NoSession),
    }
}
