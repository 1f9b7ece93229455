use crate::domain::ports::SetStorage;
use crate::utils::error::{ClientError, Result};
use std::path::{Path, PathBuf};

/// Key/value storage with one file per key under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorageAdapter {
    base_path: PathBuf,
}

impl LocalStorageAdapter {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let full_path = self.key_path(key)?;
        match tokio::fs::read_to_string(full_path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ClientError::StorageError {
                message: format!("invalid storage key: {:?}", key),
            });
        }
        Ok(self.base_path.join(key))
    }
}

impl SetStorage for LocalStorageAdapter {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let full_path = self.key_path(key)?;
        tokio::fs::create_dir_all(&self.base_path).await?;
        tokio::fs::write(&full_path, value).await?;
        tracing::debug!("Stored {} in {}", key, full_path.display());
        Ok(())
    }
}
