use serde::Serialize;

/// Final status reported to the ledger service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrintStatus {
    Success,
    Partial,
    Failed,
}

impl PrintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrintStatus::Success => "SUCCESS",
            PrintStatus::Partial => "PARTIAL",
            PrintStatus::Failed => "FAILED",
        }
    }
}

/// One transaction that could not be formatted or transmitted.
#[derive(Debug, Clone, Serialize)]
pub struct LineFailure {
    pub id: String,
    pub error: String,
}

/// Accumulated result of one print job.
///
/// Invariant: `printed` and `failed` are disjoint, and after the job every
/// attempted transaction ends up in exactly one of the two.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PrintOutcome {
    pub success: bool,
    pub printed: Vec<String>,
    pub failed: Vec<LineFailure>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl PrintOutcome {
    pub fn record_printed(&mut self, id: &str) {
        self.printed.push(id.to_string());
    }

    pub fn record_failed(&mut self, id: &str, error: impl ToString) {
        self.failed.push(LineFailure {
            id: id.to_string(),
            error: error.to_string(),
        });
    }

    /// SUCCESS when nothing failed, PARTIAL when some lines made it,
    /// FAILED when none did.
    pub fn status(&self) -> PrintStatus {
        if self.failed.is_empty() && self.error.is_none() {
            PrintStatus::Success
        } else if !self.printed.is_empty() {
            PrintStatus::Partial
        } else {
            PrintStatus::Failed
        }
    }
}
