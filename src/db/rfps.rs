use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{RfpStore, StoreError};
use crate::models::RfpRow;

const COLUMNS: &str = "id, carrier_name, date_submitted, employee_count, misc_data";

/// SQLite-backed store over a shared connection pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RfpStore for SqliteStore {
    async fn insert(&self, row: &RfpRow) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO rfps (id, carrier_name, date_submitted, employee_count, misc_data)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&row.id)
        .bind(&row.carrier_name)
        .bind(row.date_submitted)
        .bind(row.employee_count)
        .bind(&row.misc_data)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn query_all(&self) -> Result<Vec<RfpRow>, StoreError> {
        let rows = sqlx::query_as::<_, RfpRow>(&format!("SELECT {COLUMNS} FROM rfps"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn query_by_id(&self, id: &str) -> Result<Option<RfpRow>, StoreError> {
        let row = sqlx::query_as::<_, RfpRow>(&format!("SELECT {COLUMNS} FROM rfps WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_by_id(&self, row: &RfpRow) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE rfps SET carrier_name = ?, date_submitted = ?, employee_count = ?, misc_data = ?
             WHERE id = ?",
        )
        .bind(&row.carrier_name)
        .bind(row.date_submitted)
        .bind(row.employee_count)
        .bind(&row.misc_data)
        .bind(&row.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM rfps WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rfps")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}
