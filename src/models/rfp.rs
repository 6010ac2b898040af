use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A proposal record as exposed over the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rfp {
    pub id: Uuid,
    pub carrier_name: String,
    pub date_submitted: DateTime<Utc>,
    pub employee_count: i64,
    pub misc_data: serde_json::Value,
}

/// One row of the `rfps` table. `misc_data` holds the encoded JSON text.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RfpRow {
    pub id: String,
    pub carrier_name: String,
    pub date_submitted: DateTime<Utc>,
    pub employee_count: i64,
    pub misc_data: String,
}

/// Request body for create and update. Omitted or `null` fields take their zero value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RfpPayload {
    /// Accepted for compatibility with clients that echo records back; never used.
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub carrier_name: String,
    pub date_submitted: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub employee_count: i64,
    pub misc_data: serde_json::Value,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RfpPayload {
    /// Materialize the payload as a record under the given identity and timestamp.
    pub fn into_rfp(self, id: Uuid, date_submitted: DateTime<Utc>) -> Rfp {
        Rfp {
            id,
            carrier_name: self.carrier_name,
            date_submitted,
            employee_count: self.employee_count,
            misc_data: self.misc_data,
        }
    }
}

/// Timestamp written when an update body carries no `date_submitted`.
pub fn zero_timestamp() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
