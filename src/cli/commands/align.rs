use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::transport::{DirectSerialTransport, PrinterTransport};
use crate::ui::messages::success;

/// Handle the `align` subcommand: manual paper realignment on the serial
/// printer, the only family that can wind paper backward.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Align {
        forward,
        reverse,
        port,
    } = cmd
    {
        let units = match (*forward, *reverse) {
            (Some(u), None) | (None, Some(u)) => u,
            _ => {
                return Err(AppError::Other(
                    "specify exactly one of --forward or --reverse".into(),
                ));
            }
        };

        let mut transport = DirectSerialTransport::new(
            port.clone().or_else(|| cfg.serial_port.clone()),
            cfg.line_spacing,
            cfg.inter_line_delay_ms,
        );
        transport.connect()?;

        let moved = if forward.is_some() {
            transport.advance_paper(units)
        } else {
            transport.reverse_feed(units)
        };
        let finished = moved.and_then(|_| transport.finalize());
        transport.disconnect();
        finished?;

        let direction = if forward.is_some() { "forward" } else { "backward" };
        success(format!("Paper moved {direction} by {units}/180 inch"));
    }
    Ok(())
}
