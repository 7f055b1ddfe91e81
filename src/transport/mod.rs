//! Printer transports.
//!
//! One capability set, two structurally different implementations: the
//! managed spooler batches structured commands and submits them over HTTP,
//! the direct serial driver writes raw ESC/P2 bytes to the device. The
//! session and layout logic are written once against the trait.

pub mod escp;
pub mod serial;
pub mod spool;

pub use serial::{DirectSerialTransport, SerialProbe};
pub use spool::{ManagedSpoolTransport, SpoolerProbe};

use crate::errors::AppResult;

/// Printer identity reported back to the ledger service.
#[derive(Debug, Clone)]
pub struct PortInfo {
    pub name: String,
    pub port: String,
}

/// Capability set shared by both printer families.
///
/// Lifecycle is `disconnected → connected → disconnected` with at most one
/// live handle per transport value. `connect` is idempotent when already
/// connected; any write before a successful `connect` or after
/// `disconnect` fails with `AppError::NotConnected`.
pub trait PrinterTransport {
    /// Driver label for status messages.
    fn label(&self) -> &'static str;

    fn connect(&mut self) -> AppResult<()>;

    fn disconnect(&mut self);

    fn is_connected(&self) -> bool;

    /// Move the print head so the next written line lands on the logical
    /// resume line (1-based). How the motion is expressed is up to the
    /// transport; see the pagination module.
    fn position_to_start(&mut self, start_line: u32) -> AppResult<()>;

    /// Transmit one formatted ledger line.
    fn write_line(&mut self, text: &str) -> AppResult<()>;

    /// Flush whatever the transport buffered and finish the job.
    fn finalize(&mut self) -> AppResult<()>;

    fn port_info(&self) -> Option<PortInfo>;
}

/// Environment capability check, queried exactly once at session start.
/// Injected so sessions are testable without real hardware or a running
/// spooler process.
pub trait CompatibilityProbe {
    fn check(&self) -> AppResult<()>;
}
