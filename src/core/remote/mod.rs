//! Use cases backed by the account API.
//!
//! Each adapter serializes its typed params, performs exactly one POST through
//! an [`HttpPostClient`] and classifies the status code. Codes missing from an
//! adapter's table always end up as [`DomainError::Unexpected`].

pub mod remote_add_account;
pub mod remote_authentication;

pub use remote_add_account::RemoteAddAccount;
pub use remote_authentication::RemoteAuthentication;

use crate::domain::errors::DomainError;
use crate::domain::http::{HttpPostClient, HttpPostParams, HttpResponse};
use crate::domain::model::AccountModel;
use serde::Serialize;

pub(crate) async fn post_json<C, P>(
    client: &C,
    url: &str,
    params: &P,
) -> Result<HttpResponse, DomainError>
where
    C: HttpPostClient + ?Sized,
    P: Serialize + Sync,
{
    let body = serde_json::to_value(params).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize request body");
        DomainError::Unexpected
    })?;

    tracing::debug!("Posting to: {}", url);
    let response = client
        .post(HttpPostParams {
            url: url.to_string(),
            body: Some(body),
        })
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, url = %url, "No response from transport");
            DomainError::Unexpected
        })?;
    tracing::debug!("Response status: {}", response.status_code);

    Ok(response)
}

/// A 200 must carry a decodable account body.
pub(crate) fn decode_account(body: Option<serde_json::Value>) -> Result<AccountModel, DomainError> {
    let body = body.ok_or_else(|| {
        tracing::warn!("Successful response without a body");
        DomainError::Unexpected
    })?;
    serde_json::from_value(body).map_err(|e| {
        tracing::warn!(error = %e, "Response body is not an account");
        DomainError::Unexpected
    })
}
