//! Direct serial transport for Epson PLQ-series passbook printers.
//!
//! Raw ESC/P2 bytes over a fixed 9600 8N1 link, no parity, no flow
//! control. Port discovery filters on the Epson USB vendor id when no port
//! is configured explicitly. Each line goes out as CR + text + LF with a
//! short pause so the device's receive buffer keeps up.

use crate::errors::{AppError, AppResult};
use crate::pagination;
use crate::transport::{CompatibilityProbe, PortInfo, PrinterTransport, escp};
use serialport::{DataBits, FlowControl, Parity, SerialPort, SerialPortType, StopBits};
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Epson USB vendor id, used to pick the passbook printer out of whatever
/// else is plugged in.
pub const EPSON_VENDOR_ID: u16 = 0x04B8;

const BAUD_RATE: u32 = 9600;

pub struct DirectSerialTransport {
    configured_port: Option<String>,
    /// Line spacing in 1/180 inch units (30 = 1/6 inch).
    line_spacing: u32,
    inter_line_delay: Duration,
    port: Option<Box<dyn SerialPort>>,
    port_name: Option<String>,
}

impl DirectSerialTransport {
    pub fn new(
        configured_port: Option<String>,
        line_spacing: u32,
        inter_line_delay_ms: u64,
    ) -> Self {
        Self {
            configured_port,
            line_spacing,
            inter_line_delay: Duration::from_millis(inter_line_delay_ms),
            port: None,
            port_name: None,
        }
    }

    /// Resolve the device path: the configured port wins, otherwise the
    /// first enumerated port with the Epson vendor id.
    fn resolve_port(&self) -> AppResult<String> {
        if let Some(name) = &self.configured_port {
            return Ok(name.clone());
        }
        find_epson_port()?.ok_or_else(|| {
            AppError::Connection(
                "no Epson passbook printer found on any serial port".into(),
            )
        })
    }

    fn send_bytes(&mut self, bytes: &[u8]) -> AppResult<()> {
        let port = self.port.as_mut().ok_or(AppError::NotConnected)?;
        port.write_all(bytes)?;
        Ok(())
    }

    fn ensure_open(&self) -> AppResult<()> {
        if self.port.is_some() {
            Ok(())
        } else {
            Err(AppError::NotConnected)
        }
    }

    /// ESC $ : absolute horizontal position in 1/60 inch units.
    pub fn set_horizontal_position(&mut self, units: u16) -> AppResult<()> {
        self.send_bytes(&escp::absolute_position(units))
    }

    /// Manual forward paper motion in 1/180 inch units.
    pub fn advance_paper(&mut self, units: u32) -> AppResult<()> {
        self.send_bytes(&escp::advance_paper_chunked(units))
    }

    /// Manual reverse feed in 1/180 inch units. Realignment only; never
    /// invoked by pagination.
    pub fn reverse_feed(&mut self, units: u32) -> AppResult<()> {
        self.send_bytes(&escp::reverse_feed_chunked(units))
    }
}

impl PrinterTransport for DirectSerialTransport {
    fn label(&self) -> &'static str {
        "serial"
    }

    fn connect(&mut self) -> AppResult<()> {
        if self.port.is_some() {
            return Ok(());
        }

        let name = self.resolve_port()?;
        let port = serialport::new(&name, BAUD_RATE)
            .data_bits(DataBits::Eight)
            .stop_bits(StopBits::One)
            .parity(Parity::None)
            .flow_control(FlowControl::None)
            .timeout(Duration::from_secs(5))
            .open()
            .map_err(|e| AppError::Connection(format!("failed to open {name}: {e}")))?;

        self.port = Some(port);
        self.port_name = Some(name);

        // Reset, then fix the line pitch for the whole job.
        self.send_bytes(&escp::init())?;
        let spacing = self.line_spacing.min(255) as u8;
        self.send_bytes(&escp::line_spacing(spacing))?;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.port = None;
        self.port_name = None;
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }

    /// Fractional paper advance from the current head position (line 1
    /// after a page insert). The pre-printed header is part of the page
    /// geometry the backend tracks, so no header offset is added here.
    fn position_to_start(&mut self, start_line: u32) -> AppResult<()> {
        self.ensure_open()?;
        if let Some(units) = pagination::advance_units(start_line, 1, self.line_spacing) {
            self.send_bytes(&escp::advance_paper_chunked(units))?;
        }
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> AppResult<()> {
        self.send_bytes(&[escp::CR])?;
        self.send_bytes(text.as_bytes())?;
        self.send_bytes(&[escp::LF])?;
        thread::sleep(self.inter_line_delay);
        Ok(())
    }

    fn finalize(&mut self) -> AppResult<()> {
        self.send_bytes(&[escp::CR])?;
        let port = self.port.as_mut().ok_or(AppError::NotConnected)?;
        port.flush()?;
        Ok(())
    }

    fn port_info(&self) -> Option<PortInfo> {
        self.port_name.as_ref().map(|port| PortInfo {
            name: "Epson PLQ".into(),
            port: port.clone(),
        })
    }
}

/// First serial port whose USB descriptor carries the Epson vendor id.
fn find_epson_port() -> AppResult<Option<String>> {
    let ports = serialport::available_ports()?;
    Ok(ports.into_iter().find_map(|p| match p.port_type {
        SerialPortType::UsbPort(info) if info.vid == EPSON_VENDOR_ID => Some(p.port_name),
        _ => None,
    }))
}

/// Capability probe: a usable serial device must be present before a
/// session is allowed to start.
pub struct SerialProbe {
    configured_port: Option<String>,
}

impl SerialProbe {
    pub fn new(configured_port: Option<String>) -> Self {
        Self { configured_port }
    }
}

impl CompatibilityProbe for SerialProbe {
    fn check(&self) -> AppResult<()> {
        if let Some(name) = &self.configured_port {
            let ports = serialport::available_ports()
                .map_err(|e| AppError::Compatibility(format!("serial enumeration failed: {e}")))?;
            if ports.iter().any(|p| &p.port_name == name) {
                return Ok(());
            }
            return Err(AppError::Compatibility(format!(
                "configured serial port {name} is not present"
            )));
        }

        match find_epson_port() {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(AppError::Compatibility(
                "no Epson passbook printer detected on any serial port".into(),
            )),
            Err(e) => Err(AppError::Compatibility(format!(
                "serial enumeration failed: {e}"
            ))),
        }
    }
}
