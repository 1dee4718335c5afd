use thiserror::Error;

/// Failure of [`ChainedHashMap::remove`](crate::ChainedHashMap::remove).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveError {
    #[error("the key {key} does not exist")]
    KeyNotFound { key: i64 },
}
