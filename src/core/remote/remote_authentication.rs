use super::{decode_account, post_json};
use crate::domain::errors::DomainError;
use crate::domain::http::{HttpPostClient, HttpStatusCode};
use crate::domain::model::{AccountModel, AuthenticationParams};
use crate::domain::ports::Authentication;
use async_trait::async_trait;

pub struct RemoteAuthentication<C: HttpPostClient> {
    url: String,
    http_post_client: C,
}

impl<C: HttpPostClient> RemoteAuthentication<C> {
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
impl<C: HttpPostClient> Authentication for RemoteAuthentication<C> {
    async fn auth(
        &self,
        params: &AuthenticationParams,
    ) -> Result<Option<AccountModel>, DomainError> {
        let response = post_json(&self.http_post_client, &self.url, params).await?;

        match response.status_code {
            HttpStatusCode::Ok => decode_account(response.body).map(Some),
            HttpStatusCode::NoContent => Ok(None),
            HttpStatusCode::Unauthorized => {
                tracing::warn!("Invalid login attempt");
                Err(DomainError::InvalidCredentials)
            }
            status => {
                tracing::warn!(status = %status, "Unexpected authentication response");
                Err(DomainError::Unexpected)
            }
        }
    }
}
