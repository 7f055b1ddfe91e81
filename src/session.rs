//! Print session orchestration: fetch, format, position, transmit, report.
//!
//! Strictly sequential by design. Paper motion and character positioning
//! are physical ordering constraints, so every step completes before the
//! next begins and line transmission is never parallelized. All mutable
//! state (the outcome accumulators, the connection handle) is owned by the
//! session's execution path.

use crate::api::{LedgerApi, PrintResultRequest};
use crate::errors::{AppError, AppResult};
use crate::layout::{self, LayoutConfig};
use crate::models::{PrintOutcome, PrintStatus, Transaction};
use crate::transport::{CompatibilityProbe, PrinterTransport};
use crate::ui::messages;

/// Where a session currently stands.
///
/// `Idle → CheckingCompatibility → Fetching → Connecting → Printing →
/// Reporting → {Done | Failed}`. Anything that fails before `Printing`
/// aborts the whole session; inside `Printing` faults are isolated per
/// transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    CheckingCompatibility,
    Fetching,
    Connecting,
    Printing,
    Reporting,
    Done,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Fired once per attempted transaction, in ascending index order.
pub struct ProgressEvent<'a> {
    pub current: usize,
    pub total: usize,
    pub transaction: &'a Transaction,
}

/// UI seam. The default methods make observers opt-in per callback.
pub trait SessionObserver {
    fn progress(&mut self, _event: &ProgressEvent<'_>) {}
    fn status(&mut self, _level: StatusLevel, _message: &str) {}
}

/// Observer used by the CLI: leveled messages on the terminal.
#[derive(Default)]
pub struct ConsoleObserver {
    pub quiet: bool,
}

impl SessionObserver for ConsoleObserver {
    fn progress(&mut self, event: &ProgressEvent<'_>) {
        if !self.quiet {
            println!("   line {}/{}", event.current, event.total);
        }
    }

    fn status(&mut self, level: StatusLevel, message: &str) {
        match level {
            StatusLevel::Info => messages::info(message),
            StatusLevel::Success => messages::success(message),
            StatusLevel::Warning => messages::warning(message),
            StatusLevel::Error => messages::error(message),
        }
    }
}

pub struct PrintSession<'a> {
    api: &'a dyn LedgerApi,
    probe: &'a dyn CompatibilityProbe,
    transport: &'a mut dyn PrinterTransport,
    layout: LayoutConfig,
    phase: SessionPhase,
}

impl<'a> PrintSession<'a> {
    pub fn new(
        api: &'a dyn LedgerApi,
        probe: &'a dyn CompatibilityProbe,
        transport: &'a mut dyn PrinterTransport,
        layout: LayoutConfig,
    ) -> Self {
        Self {
            api,
            probe,
            transport,
            layout,
            phase: SessionPhase::Idle,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Run one print job for `account_id`.
    ///
    /// Pre-print failures (capability, fetch, connect) abort with an error
    /// and nothing is reported. Once printing starts, the outcome is always
    /// reported exactly once, best effort, and per-line faults never abort
    /// the batch.
    pub fn run(
        &mut self,
        account_id: &str,
        observer: &mut dyn SessionObserver,
    ) -> AppResult<PrintOutcome> {
        self.phase = SessionPhase::CheckingCompatibility;
        if let Err(e) = self.probe.check() {
            self.phase = SessionPhase::Failed;
            observer.status(StatusLevel::Error, &e.to_string());
            return Err(e);
        }

        self.phase = SessionPhase::Fetching;
        observer.status(StatusLevel::Info, "Fetching transaction data...");
        let data = match self.api.fetch_print_data(account_id) {
            Ok(data) => data,
            Err(e) => {
                self.phase = SessionPhase::Failed;
                observer.status(StatusLevel::Error, &e.to_string());
                return Err(e);
            }
        };

        if data.transactions.is_empty() {
            self.phase = SessionPhase::Done;
            observer.status(StatusLevel::Warning, "No transactions to print");
            return Ok(PrintOutcome {
                success: true,
                message: Some("No new transactions to print".into()),
                ..Default::default()
            });
        }
        observer.status(
            StatusLevel::Info,
            &format!("Found {} transactions to print", data.transactions.len()),
        );

        if !self.transport.is_connected() {
            self.phase = SessionPhase::Connecting;
            observer.status(
                StatusLevel::Info,
                &format!("Connecting to printer ({} transport)...", self.transport.label()),
            );
            if let Err(e) = self.transport.connect() {
                self.phase = SessionPhase::Failed;
                observer.status(StatusLevel::Error, &e.to_string());
                return Err(e);
            }
            observer.status(StatusLevel::Info, "Printer connected");
        }

        self.phase = SessionPhase::Printing;
        observer.status(StatusLevel::Info, "Printing transactions...");
        let outcome = self.print_batch(&data.transactions, data.start_line(), observer);

        self.phase = SessionPhase::Reporting;
        let status = outcome.status();
        self.report(account_id, &outcome, status, observer);

        match status {
            PrintStatus::Success => {
                observer.status(
                    StatusLevel::Success,
                    &format!("Successfully printed {} transactions", outcome.printed.len()),
                );
                self.phase = SessionPhase::Done;
            }
            PrintStatus::Partial => {
                observer.status(
                    StatusLevel::Warning,
                    &format!(
                        "Partially printed {} of {} transactions",
                        outcome.printed.len(),
                        data.transactions.len()
                    ),
                );
                self.phase = SessionPhase::Done;
            }
            PrintStatus::Failed => {
                let detail = outcome.error.as_deref().unwrap_or("all lines failed");
                observer.status(StatusLevel::Error, &format!("Print failed: {detail}"));
                self.phase = SessionPhase::Failed;
            }
        }

        Ok(outcome)
    }

    /// The printing loop proper. A single bad line is recorded and skipped;
    /// only positioning or finalize faults mark the whole batch.
    fn print_batch(
        &mut self,
        transactions: &[Transaction],
        start_line: u32,
        observer: &mut dyn SessionObserver,
    ) -> PrintOutcome {
        let mut outcome = PrintOutcome::default();
        let total = transactions.len();

        if let Err(e) = self.transport.position_to_start(start_line) {
            outcome.error = Some(e.to_string());
            return outcome;
        }

        for (index, tx) in transactions.iter().enumerate() {
            let line = layout::build_line(tx, &self.layout);
            match self.transport.write_line(&line) {
                Ok(()) => outcome.record_printed(&tx.id),
                Err(e) => {
                    let fault = AppError::Line {
                        id: tx.id.clone(),
                        message: e.to_string(),
                    };
                    observer.status(StatusLevel::Warning, &fault.to_string());
                    outcome.record_failed(&tx.id, e);
                }
            }
            observer.progress(&ProgressEvent {
                current: index + 1,
                total,
                transaction: tx,
            });
        }

        if let Err(e) = self.transport.finalize() {
            outcome.error = Some(e.to_string());
        }

        outcome.success = outcome.error.is_none() && outcome.failed.is_empty();
        outcome
    }

    /// Best effort: a reporting failure is logged and never changes the
    /// already-computed outcome.
    fn report(
        &mut self,
        account_id: &str,
        outcome: &PrintOutcome,
        status: PrintStatus,
        observer: &mut dyn SessionObserver,
    ) {
        let info = self.transport.port_info();
        let request = PrintResultRequest {
            account_id: account_id.to_string(),
            status,
            printed_transaction_ids: outcome.printed.clone(),
            printer_name: info
                .as_ref()
                .map(|i| i.name.clone())
                .unwrap_or_else(|| "Passbook Printer".into()),
            printer_port: info
                .as_ref()
                .map(|i| i.port.clone())
                .unwrap_or_else(|| "UNKNOWN".into()),
            error_message: outcome.error.clone(),
        };

        if let Err(e) = self.api.report_result(&request) {
            observer.status(
                StatusLevel::Warning,
                &format!("Failed to report print result: {e}"),
            );
        }
    }
}
