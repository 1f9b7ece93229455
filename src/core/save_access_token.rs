use crate::domain::errors::DomainError;
use crate::domain::ports::{SaveAccessToken, SetStorage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";

pub struct LocalSaveAccessToken<S: SetStorage> {
    storage: S,
}

impl<S: SetStorage> LocalSaveAccessToken<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S: SetStorage> SaveAccessToken for LocalSaveAccessToken<S> {
    async fn save(&self, access_token: &str) -> Result<()> {
        if access_token.is_empty() {
            tracing::warn!("Refusing to store an empty access token");
            return Err(DomainError::Unexpected.into());
        }
        self.storage.set(ACCESS_TOKEN_KEY, access_token).await?;
        tracing::debug!("Access token stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ClientError;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct SetStorageMock {
        entries: Arc<Mutex<Vec<(String, String)>>>,
        fail: bool,
    }

    impl SetStorage for SetStorageMock {
        async fn set(&self, key: &str, value: &str) -> Result<()> {
            if self.fail {
                return Err(ClientError::StorageError {
                    message: "disk full".to_string(),
                });
            }
            self.entries
                .lock()
                .await
                .push((key.to_string(), value.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_save_calls_storage_with_token_key() {
        let storage = SetStorageMock::default();
        let sut = LocalSaveAccessToken::new(storage.clone());

        sut.save("tok-123").await.unwrap();

        let entries = storage.entries.lock().await;
        assert_eq!(
            *entries,
            vec![("accessToken".to_string(), "tok-123".to_string())]
        );
    }

    #[tokio::test]
    async fn test_save_propagates_storage_failure() {
        let storage = SetStorageMock {
            fail: true,
            ..Default::default()
        };
        let sut = LocalSaveAccessToken::new(storage);

        let result = sut.save("tok-123").await;
        assert!(matches!(result, Err(ClientError::StorageError { .. })));
    }

    #[tokio::test]
    async fn test_save_rejects_empty_token() {
        let storage = SetStorageMock::default();
        let sut = LocalSaveAccessToken::new(storage.clone());

        let result = sut.save("").await;
        assert!(matches!(
            result,
            Err(ClientError::Domain(DomainError::Unexpected))
        ));
        assert!(storage.entries.lock().await.is_empty());
    }
}
