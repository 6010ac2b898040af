pub mod memory;
pub mod rfps;

use async_trait::async_trait;

use crate::models::RfpRow;

pub use memory::MemoryStore;
pub use rfps::SqliteStore;

#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    /// A stored row could not be turned back into a record.
    Integrity(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(err) => write!(f, "{err}"),
            StoreError::Integrity(msg) => write!(f, "corrupt row: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Persistence for the `rfps` table.
///
/// Every method issues a single statement. Nothing here creates or migrates
/// schema, and neither update nor delete fails when the id matches no row.
#[async_trait]
pub trait RfpStore: Send + Sync {
    async fn insert(&self, row: &RfpRow) -> Result<(), StoreError>;
    async fn query_all(&self) -> Result<Vec<RfpRow>, StoreError>;
    async fn query_by_id(&self, id: &str) -> Result<Option<RfpRow>, StoreError>;
    /// Overwrite every column except `id`. Returns the number of rows affected.
    async fn update_by_id(&self, row: &RfpRow) -> Result<u64, StoreError>;
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
    async fn count(&self) -> Result<i64, StoreError>;
}
