use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable keyed snapshot storage, the device-local persistence seam.
/// Each store serializes its whole persisted record under one key.
#[async_trait::async_trait]
pub trait StateStorage: Send + Sync {
    /// Returns the raw record for `key`, or `None` if nothing was ever saved.
    async fn load(&self, key: &str) -> StorageResult<Option<String>>;
    async fn save(&self, key: &str, value: String) -> StorageResult<()>;
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
