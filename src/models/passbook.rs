use serde::{Deserialize, Serialize};

/// Pagination state of a physical passbook, persisted by the backend.
/// The core only reads `last_printed_line`; outcomes are reported back and
/// the backend advances the state itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassbookInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub passbook_number: Option<String>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub last_printed_line: u32,
    #[serde(default)]
    pub lines_per_page: Option<u32>,
    #[serde(default)]
    pub remaining_lines: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Payload of GET /api/passbook/{accountId}/print-data.
///
/// When there is nothing left to print the backend answers HTTP 200 with an
/// `error` message and no transaction array, so every field needs a default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintData {
    #[serde(default)]
    pub transactions: Vec<super::Transaction>,
    #[serde(default)]
    pub passbook: Option<PassbookInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PrintData {
    /// Logical resume point (1-based) for the next line to print.
    pub fn start_line(&self) -> u32 {
        self.passbook
            .as_ref()
            .map(|p| p.last_printed_line + 1)
            .unwrap_or(1)
    }
}

/// Payload of GET /api/passbook/{accountId}/status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassbookStatus {
    #[serde(default)]
    pub has_passbook: bool,
    #[serde(default)]
    pub passbook_number: Option<String>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub last_printed_line: Option<u32>,
    #[serde(default)]
    pub remaining_lines: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub unprinted_transaction_count: u32,
}

/// Payload of POST /api/passbook/{accountId}/next-page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextPageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub last_printed_line: Option<u32>,
    #[serde(default)]
    pub remaining_lines: Option<u32>,
}
