use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// One ledger movement as served by the passbook data API.
/// Immutable once fetched; owned by the session for the duration of a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Line position on the passbook page (1-based), assigned by the backend.
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(deserialize_with = "de_transaction_date")]
    pub transaction_date: NaiveDate,
    /// Transaction code column ("sandi").
    #[serde(default)]
    pub sandi_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub debit: Option<f64>,
    #[serde(default)]
    pub credit: Option<f64>,
    #[serde(default)]
    pub balance: Option<f64>,
    /// Operator name column ("petugas").
    #[serde(default)]
    pub teller_name: Option<String>,
}

/// The backend sends either a plain date or a full timestamp depending on
/// the endpoint version. Accept both, keep the date part.
fn de_transaction_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(serde::de::Error::custom)
}
