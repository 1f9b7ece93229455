use super::{decode_account, post_json};
use crate::domain::errors::DomainError;
use crate::domain::http::{HttpPostClient, HttpStatusCode};
use crate::domain::model::{AccountModel, AddAccountParams};
use crate::domain::ports::AddAccount;
use async_trait::async_trait;

pub struct RemoteAddAccount<C: HttpPostClient> {
    url: String,
    http_post_client: C,
}

impl<C: HttpPostClient> RemoteAddAccount<C> {
    pub fn new(url: impl Into<String>, http_post_client: C) -> Self {
        Self {
            url: url.into(),
            http_post_client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl<C: HttpPostClient> AddAccount for RemoteAddAccount<C> {
    async fn add(&self, params: &AddAccountParams) -> Result<Option<AccountModel>, DomainError> {
        let response = post_json(&self.http_post_client, &self.url, params).await?;

        match response.status_code {
            HttpStatusCode::Ok => decode_account(response.body).map(Some),
            HttpStatusCode::NoContent => Ok(None),
            // Both forbidden and conflict are how the API reports a taken email.
            HttpStatusCode::Forbidden | HttpStatusCode::Conflict => {
                tracing::warn!("Sign-up rejected: email already registered");
                Err(DomainError::EmailInUse)
            }
            status => {
                tracing::warn!(status = %status, "Unexpected sign-up response");
                Err(DomainError::Unexpected)
            }
        }
    }
}
