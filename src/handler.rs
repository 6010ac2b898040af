use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::codec;
use crate::config::UpdateMode;
use crate::db::{RfpStore, StoreError};
use crate::error::AppError;
use crate::models::{zero_timestamp, Rfp, RfpPayload, RfpRow};

/// The five RFP operations over an injected store.
///
/// Each call is a single stateless transaction: no locking, no retries, and
/// no read-then-write isolation between concurrent callers.
#[derive(Clone)]
pub struct RfpHandler {
    store: Arc<dyn RfpStore>,
    update_mode: UpdateMode,
}

impl RfpHandler {
    pub fn new(store: Arc<dyn RfpStore>, update_mode: UpdateMode) -> Self {
        Self { store, update_mode }
    }

    pub async fn create(&self, body: &[u8]) -> Result<Rfp, AppError> {
        let payload = decode_payload(body)?;

        let rfp = payload.into_rfp(Uuid::new_v4(), Utc::now());
        let row = to_row(&rfp)?;
        self.store.insert(&row).await?;

        tracing::debug!("Created RFP {}", rfp.id);
        Ok(rfp)
    }

    /// All records in store order. One corrupt row fails the whole listing.
    pub async fn list(&self) -> Result<Vec<Rfp>, AppError> {
        let rows = self.store.query_all().await?;
        let rfps = rows.into_iter().map(from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(rfps)
    }

    pub async fn get(&self, id: &str) -> Result<Rfp, AppError> {
        let id = parse_id(id).ok_or_else(not_found)?;
        let row = self
            .store
            .query_by_id(&id.to_string())
            .await?
            .ok_or_else(not_found)?;
        from_row(row)
    }

    /// Full replace of every field but `id`, which always comes from the path.
    pub async fn update(&self, id: &str, body: &[u8]) -> Result<Rfp, AppError> {
        let payload = decode_payload(body)?;
        let parsed = parse_id(id);

        let date_submitted = payload.date_submitted.unwrap_or_else(zero_timestamp);
        let rfp = payload.into_rfp(parsed.unwrap_or_else(Uuid::nil), date_submitted);
        let row = to_row(&rfp)?;

        // An unparseable id matches no row, so the write is skipped.
        let Some(id) = parsed else {
            return match self.update_mode {
                UpdateMode::Strict => Err(not_found()),
                UpdateMode::Permissive => {
                    tracing::debug!("Update of RFP '{id}' skipped: not a UUID");
                    Ok(rfp)
                }
            };
        };

        let affected = self.store.update_by_id(&row).await?;
        if affected == 0 {
            match self.update_mode {
                UpdateMode::Strict => return Err(not_found()),
                UpdateMode::Permissive => {
                    tracing::debug!("Update of RFP {id} matched no row");
                }
            }
        }

        Ok(rfp)
    }

    /// Succeeds whether or not the row existed.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let Some(id) = parse_id(id) else {
            return Ok(());
        };
        self.store.delete_by_id(&id.to_string()).await?;
        tracing::debug!("Deleted RFP {id}");
        Ok(())
    }
}

/// A literal `null` body decodes as an all-zero payload.
fn decode_payload(body: &[u8]) -> Result<RfpPayload, AppError> {
    serde_json::from_slice::<Option<RfpPayload>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| AppError::Decode(format!("Invalid request payload: {e}")))
}

fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

fn not_found() -> AppError {
    AppError::NotFound("RFP not found".to_string())
}

fn to_row(rfp: &Rfp) -> Result<RfpRow, AppError> {
    let misc_data = codec::encode(&rfp.misc_data).map_err(AppError::Encode)?;
    Ok(RfpRow {
        id: rfp.id.to_string(),
        carrier_name: rfp.carrier_name.clone(),
        date_submitted: rfp.date_submitted,
        employee_count: rfp.employee_count,
        misc_data,
    })
}

fn from_row(row: RfpRow) -> Result<Rfp, AppError> {
    let id = Uuid::parse_str(&row.id)
        .map_err(|e| StoreError::Integrity(format!("id '{}': {e}", row.id)))?;
    let misc_data = codec::decode(&row.misc_data)
        .map_err(|e| StoreError::Integrity(format!("misc_data of {id}: {e}")))?;
    Ok(Rfp {
        id,
        carrier_name: row.carrier_name,
        date_submitted: row.date_submitted,
        employee_count: row.employee_count,
        misc_data,
    })
}
