use async_trait::async_trait;
use dashmap::DashMap;

use super::{RfpStore, StoreError};
use crate::models::RfpRow;

/// In-process store keyed by id. Rows are lost when the store is dropped.
#[derive(Default)]
pub struct MemoryStore {
    rows: DashMap<String, RfpRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a row in place as-is, bypassing the handler. Used to seed fixtures.
    pub fn put_raw(&self, row: RfpRow) {
        self.rows.insert(row.id.clone(), row);
    }
}

#[async_trait]
impl RfpStore for MemoryStore {
    async fn insert(&self, row: &RfpRow) -> Result<(), StoreError> {
        use dashmap::mapref::entry::Entry;

        match self.rows.entry(row.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Integrity(format!(
                "duplicate primary key {}",
                row.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(row.clone());
                Ok(())
            }
        }
    }

    async fn query_all(&self) -> Result<Vec<RfpRow>, StoreError> {
        Ok(self.rows.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn query_by_id(&self, id: &str) -> Result<Option<RfpRow>, StoreError> {
        Ok(self.rows.get(id).map(|entry| entry.value().clone()))
    }

    async fn update_by_id(&self, row: &RfpRow) -> Result<u64, StoreError> {
        match self.rows.get_mut(&row.id) {
            Some(mut existing) => {
                *existing = row.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.rows.remove(id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.rows.len() as i64)
    }
}
