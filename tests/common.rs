#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rpassbook::api::{LedgerApi, PrintResultRequest};
use rpassbook::errors::{AppError, AppResult};
use rpassbook::models::{PassbookInfo, PrintData, Transaction};
use rpassbook::transport::{CompatibilityProbe, PortInfo, PrinterTransport};
use std::cell::RefCell;

pub fn rpb() -> Command {
    cargo_bin_cmd!("rpassbook")
}

/// A transaction with the fields the layout engine cares about.
pub fn tx(
    id: &str,
    line_number: u32,
    debit: Option<f64>,
    credit: Option<f64>,
    balance: Option<f64>,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        line_number: Some(line_number),
        transaction_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        sandi_code: Some("C01".to_string()),
        description: Some("SETORAN TUNAI".to_string()),
        debit,
        credit,
        balance,
        teller_name: Some("SITI".to_string()),
    }
}

pub fn passbook(last_printed_line: u32) -> PassbookInfo {
    PassbookInfo {
        id: Some("pb-1".to_string()),
        passbook_number: Some("PB-0001".to_string()),
        current_page: Some(1),
        last_printed_line,
        lines_per_page: Some(30),
        remaining_lines: Some(30 - last_printed_line),
        status: Some("ACTIVE".to_string()),
    }
}

pub fn print_data(transactions: Vec<Transaction>, last_printed_line: u32) -> PrintData {
    PrintData {
        transactions,
        passbook: Some(passbook(last_printed_line)),
        error: None,
    }
}

/// Scriptable in-memory transport: records everything, fails on demand.
pub struct MockTransport {
    pub connected: bool,
    /// 1-based indices of write_line calls that must fail.
    pub fail_writes: Vec<usize>,
    pub fail_connect: bool,
    pub fail_finalize: bool,
    pub lines: Vec<String>,
    pub positioned_at: Option<u32>,
    pub connect_calls: usize,
    pub finalized: bool,
    write_count: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            connected: false,
            fail_writes: Vec::new(),
            fail_connect: false,
            fail_finalize: false,
            lines: Vec::new(),
            positioned_at: None,
            connect_calls: 0,
            finalized: false,
            write_count: 0,
        }
    }
}

impl PrinterTransport for MockTransport {
    fn label(&self) -> &'static str {
        "mock"
    }

    fn connect(&mut self) -> AppResult<()> {
        self.connect_calls += 1;
        if self.fail_connect {
            return Err(AppError::Connection("mock printer unreachable".into()));
        }
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.connected = false;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn position_to_start(&mut self, start_line: u32) -> AppResult<()> {
        if !self.connected {
            return Err(AppError::NotConnected);
        }
        self.positioned_at = Some(start_line);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> AppResult<()> {
        if !self.connected {
            return Err(AppError::NotConnected);
        }
        self.write_count += 1;
        if self.fail_writes.contains(&self.write_count) {
            return Err(AppError::Connection("mock write fault".into()));
        }
        self.lines.push(text.to_string());
        Ok(())
    }

    fn finalize(&mut self) -> AppResult<()> {
        if !self.connected {
            return Err(AppError::NotConnected);
        }
        if self.fail_finalize {
            return Err(AppError::Connection("mock finalize fault".into()));
        }
        self.finalized = true;
        Ok(())
    }

    fn port_info(&self) -> Option<PortInfo> {
        self.connected.then(|| PortInfo {
            name: "Mock Printer".to_string(),
            port: "MOCK0".to_string(),
        })
    }
}

/// In-memory ledger API: serves one PrintData fixture, records reports.
pub struct MockLedger {
    pub data: PrintData,
    pub fail_fetch: bool,
    pub fail_report: bool,
    pub fetch_calls: RefCell<usize>,
    pub reports: RefCell<Vec<PrintResultRequest>>,
}

impl MockLedger {
    pub fn new(data: PrintData) -> Self {
        Self {
            data,
            fail_fetch: false,
            fail_report: false,
            fetch_calls: RefCell::new(0),
            reports: RefCell::new(Vec::new()),
        }
    }
}

impl LedgerApi for MockLedger {
    fn fetch_print_data(&self, _account_id: &str) -> AppResult<PrintData> {
        *self.fetch_calls.borrow_mut() += 1;
        if self.fail_fetch {
            return Err(AppError::Fetch("mock backend down".into()));
        }
        Ok(self.data.clone())
    }

    fn report_result(&self, request: &PrintResultRequest) -> AppResult<()> {
        if self.fail_report {
            return Err(AppError::Reporting("mock backend down".into()));
        }
        self.reports.borrow_mut().push(request.clone());
        Ok(())
    }
}

pub struct MockProbe {
    pub ok: bool,
}

impl CompatibilityProbe for MockProbe {
    fn check(&self) -> AppResult<()> {
        if self.ok {
            Ok(())
        } else {
            Err(AppError::Compatibility("mock capability missing".into()))
        }
    }
}
