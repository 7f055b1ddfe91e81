//! Blocking client for the passbook ledger REST API.
//!
//! The backend owns all persisted passbook state; this client only reads
//! print data and posts outcomes back. Sessions consume it through the
//! `LedgerApi` trait so tests can substitute an in-memory fake.

use crate::errors::{AppError, AppResult};
use crate::models::{NextPageResponse, PassbookStatus, PrintData, PrintStatus};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body of POST /api/passbook/print-result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintResultRequest {
    pub account_id: String,
    pub status: PrintStatus,
    pub printed_transaction_ids: Vec<String>,
    pub printer_name: String,
    pub printer_port: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// The slice of the ledger API a print session needs.
pub trait LedgerApi {
    fn fetch_print_data(&self, account_id: &str) -> AppResult<PrintData>;
    fn report_result(&self, request: &PrintResultRequest) -> AppResult<()>;
}

/// Error body the backend uses for non-success answers.
#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    error: Option<String>,
}

pub struct LedgerClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl LedgerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("rpassbook/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/passbook{path}", self.base_url)
    }

    pub fn status(&self, account_id: &str) -> AppResult<PassbookStatus> {
        let response = self.client.get(self.url(&format!("/{account_id}/status"))).send()?;
        if !response.status().is_success() {
            return Err(AppError::Fetch(error_message(response)));
        }
        Ok(response.json()?)
    }

    pub fn next_page(&self, account_id: &str) -> AppResult<NextPageResponse> {
        let response = self
            .client
            .post(self.url(&format!("/{account_id}/next-page")))
            .send()?;
        if !response.status().is_success() {
            return Err(AppError::Fetch(error_message(response)));
        }
        Ok(response.json()?)
    }
}

impl LedgerApi for LedgerClient {
    fn fetch_print_data(&self, account_id: &str) -> AppResult<PrintData> {
        let response = self
            .client
            .get(self.url(&format!("/{account_id}/print-data")))
            .send()
            .map_err(|e| AppError::Fetch(e.to_string()))?;
        if !response.status().is_success() {
            return Err(AppError::Fetch(error_message(response)));
        }
        response
            .json::<PrintData>()
            .map_err(|e| AppError::Fetch(format!("invalid print data payload: {e}")))
    }

    fn report_result(&self, request: &PrintResultRequest) -> AppResult<()> {
        let response = self
            .client
            .post(self.url("/print-result"))
            .json(request)
            .send()
            .map_err(|e| AppError::Reporting(e.to_string()))?;
        if !response.status().is_success() {
            return Err(AppError::Reporting(error_message(response)));
        }
        Ok(())
    }
}

/// Prefer the backend's own error message, fall back to the HTTP status.
fn error_message(response: reqwest::blocking::Response) -> String {
    let status = response.status();
    match response.json::<ApiError>() {
        Ok(ApiError { error: Some(msg) }) => msg,
        _ => format!("ledger service answered {status}"),
    }
}
