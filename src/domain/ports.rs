use crate::domain::errors::DomainError;
use crate::domain::model::{AccountModel, AddAccountParams, AuthenticationParams, FormData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub use crate::domain::http::HttpPostClient;

/// `Ok(None)` means the server accepted the call without issuing a session.
#[async_trait]
pub trait Authentication: Send + Sync {
    async fn auth(
        &self,
        params: &AuthenticationParams,
    ) -> std::result::Result<Option<AccountModel>, DomainError>;
}

#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(
        &self,
        params: &AddAccountParams,
    ) -> std::result::Result<Option<AccountModel>, DomainError>;
}

#[async_trait]
pub trait SaveAccessToken: Send + Sync {
    async fn save(&self, access_token: &str) -> Result<()>;
}

pub trait SetStorage: Send + Sync {
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Consumed by forms once per field: returns the message to show, if any.
pub trait Validation: Send + Sync {
    fn validate(&self, field_name: &str, input: &FormData) -> Option<String>;
}
