//! Managed-spooler transport.
//!
//! Nothing is written to the device directly: print commands accumulate in
//! an ordered batch which is submitted as a single job to a locally running
//! spooler service over HTTP. The spooler acknowledges the batch as a
//! whole, so a "printed" line only means the command was accepted into the
//! batch, not that ink reached paper.

use crate::errors::{AppError, AppResult};
use crate::pagination::{self, HeaderOffsetPolicy};
use crate::transport::{CompatibilityProbe, PortInfo, PrinterTransport};
use chrono::Local;
use serde::Serialize;
use serde_json::{Value, json};
use std::time::Duration;

/// One structured command inside a spooler batch.
#[derive(Debug, Clone, Serialize)]
pub struct SpoolCommand {
    #[serde(rename = "type")]
    pub command_type: String,
    pub payload: Value,
    #[serde(rename = "extraData", skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Value>,
}

impl SpoolCommand {
    pub fn text(line: &str) -> Self {
        Self {
            command_type: "text".into(),
            payload: json!(line),
            extra_data: None,
        }
    }

    pub fn feed(lines: u32) -> Self {
        Self {
            command_type: "feed".into(),
            payload: json!(lines),
            extra_data: None,
        }
    }

    pub fn cut() -> Self {
        Self {
            command_type: "cut".into(),
            payload: Value::Null,
            extra_data: None,
        }
    }

    pub fn close() -> Self {
        Self {
            command_type: "close".into(),
            payload: Value::Null,
            extra_data: None,
        }
    }
}

/// Batch job as posted to the spooler.
#[derive(Debug, Serialize)]
struct PrintBatchRequest<'a> {
    key: String,
    printer: &'a str,
    payload: &'a [SpoolCommand],
    #[serde(rename = "textSpecial")]
    text_special: String,
}

pub struct ManagedSpoolTransport {
    spooler_url: String,
    configured_printer: Option<String>,
    header_lines: u32,
    header_policy: HeaderOffsetPolicy,
    client: reqwest::blocking::Client,
    printer: Option<String>,
    connected: bool,
    batch: Vec<SpoolCommand>,
}

impl ManagedSpoolTransport {
    pub fn new(
        spooler_url: impl Into<String>,
        printer: Option<String>,
        header_lines: u32,
        header_policy: HeaderOffsetPolicy,
    ) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self {
            spooler_url: spooler_url.into(),
            configured_printer: printer,
            header_lines,
            header_policy,
            client,
            printer: None,
            connected: false,
            batch: Vec::new(),
        }
    }

    /// Printer names known to the spooler. Usable before `connect`.
    pub fn get_printers(&self) -> AppResult<Vec<String>> {
        let url = format!("{}/printers", self.spooler_url);
        let response = self.client.get(&url).send().map_err(|e| {
            AppError::Connection(format!("spooler not reachable at {}: {e}", self.spooler_url))
        })?;
        if !response.status().is_success() {
            return Err(AppError::Connection(format!(
                "spooler answered {} on {url}",
                response.status()
            )));
        }
        response
            .json::<Vec<String>>()
            .map_err(|e| AppError::Connection(format!("invalid printer list from spooler: {e}")))
    }

    /// Commands queued so far. The batch is only transmitted by `finalize`.
    pub fn batch(&self) -> &[SpoolCommand] {
        &self.batch
    }

    fn ensure_connected(&self) -> AppResult<()> {
        if self.connected {
            Ok(())
        } else {
            Err(AppError::NotConnected)
        }
    }

    fn submit_batch(&mut self) -> AppResult<()> {
        let printer = self.printer.as_deref().ok_or(AppError::NotConnected)?;
        let request = PrintBatchRequest {
            key: format!("rpassbook-{}", Local::now().format("%Y%m%d%H%M%S%3f")),
            printer,
            payload: &self.batch,
            text_special: String::new(),
        };

        let url = format!("{}/print", self.spooler_url);
        let response = self.client.post(&url).json(&request).send().map_err(|e| {
            AppError::Connection(format!("failed to submit print job to spooler: {e}"))
        })?;
        if !response.status().is_success() {
            return Err(AppError::Connection(format!(
                "spooler rejected print job: {}",
                response.status()
            )));
        }
        self.batch.clear();
        Ok(())
    }
}

impl PrinterTransport for ManagedSpoolTransport {
    fn label(&self) -> &'static str {
        "spool"
    }

    fn connect(&mut self) -> AppResult<()> {
        if self.connected {
            return Ok(());
        }

        let printers = self.get_printers()?;
        if printers.is_empty() {
            return Err(AppError::Connection(
                "no printers configured on the spooler".into(),
            ));
        }

        let chosen = match &self.configured_printer {
            Some(name) => {
                if !printers.iter().any(|p| p == name) {
                    return Err(AppError::Connection(format!(
                        "printer '{name}' is not known to the spooler"
                    )));
                }
                name.clone()
            }
            None => printers[0].clone(),
        };

        self.printer = Some(chosen);
        self.connected = true;
        self.batch.clear();
        Ok(())
    }

    fn disconnect(&mut self) {
        self.connected = false;
        self.printer = None;
        self.batch.clear();
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    /// Forward-only whole-line feeds counted from page top: the header
    /// block offset is folded in here because the spooler has no notion of
    /// a current position to move from.
    fn position_to_start(&mut self, start_line: u32) -> AppResult<()> {
        self.ensure_connected()?;
        let feeds = pagination::feed_lines(start_line, self.header_lines, self.header_policy);
        for _ in 0..feeds {
            self.batch.push(SpoolCommand::feed(1));
        }
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> AppResult<()> {
        self.ensure_connected()?;
        self.batch.push(SpoolCommand::text(&format!("{text}\n")));
        Ok(())
    }

    fn finalize(&mut self) -> AppResult<()> {
        self.ensure_connected()?;
        self.batch.push(SpoolCommand::close());
        self.submit_batch()
    }

    fn port_info(&self) -> Option<PortInfo> {
        self.printer.as_ref().map(|name| PortInfo {
            name: name.clone(),
            port: "SPOOL".into(),
        })
    }
}

/// Capability probe: the spooler must be reachable and expose at least one
/// printer before a session is allowed to start.
pub struct SpoolerProbe {
    spooler_url: String,
}

impl SpoolerProbe {
    pub fn new(spooler_url: impl Into<String>) -> Self {
        Self {
            spooler_url: spooler_url.into(),
        }
    }
}

impl CompatibilityProbe for SpoolerProbe {
    fn check(&self) -> AppResult<()> {
        let transport = ManagedSpoolTransport::new(
            self.spooler_url.clone(),
            None,
            0,
            HeaderOffsetPolicy::Always,
        );
        match transport.get_printers() {
            Ok(printers) if !printers.is_empty() => Ok(()),
            Ok(_) => Err(AppError::Compatibility(
                "print spooler is running but no printer is configured".into(),
            )),
            Err(_) => Err(AppError::Compatibility(format!(
                "print spooler is not reachable at {}",
                self.spooler_url
            ))),
        }
    }
}
