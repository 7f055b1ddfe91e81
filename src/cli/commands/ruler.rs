use crate::cli::parser::Commands;
use crate::config::{Config, Driver};
use crate::errors::AppResult;
use crate::layout;
use crate::transport::{DirectSerialTransport, ManagedSpoolTransport, PrinterTransport};
use crate::ui::messages::success;

/// Handle the `ruler` subcommand: print three character-position lines so
/// column offsets can be measured against the physical book.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ruler {
        driver,
        printer,
        port,
    } = cmd
    {
        let driver = (*driver).unwrap_or(cfg.driver);
        let layout_cfg = cfg.layout_for(driver);

        let mut transport: Box<dyn PrinterTransport> = match driver {
            Driver::Spool => Box::new(ManagedSpoolTransport::new(
                cfg.spooler_url.clone(),
                printer.clone().or_else(|| cfg.printer.clone()),
                cfg.header_lines,
                cfg.header_offset_policy,
            )),
            Driver::Serial => Box::new(DirectSerialTransport::new(
                port.clone().or_else(|| cfg.serial_port.clone()),
                cfg.line_spacing,
                cfg.inter_line_delay_ms,
            )),
        };

        transport.connect()?;
        let result = print_ruler(transport.as_mut(), layout_cfg.canvas_width);
        transport.disconnect();
        result?;

        success("Ruler printed");
    }
    Ok(())
}

fn print_ruler(transport: &mut dyn PrinterTransport, width: usize) -> AppResult<()> {
    for line in layout::ruler_lines(width) {
        transport.write_line(&line)?;
    }
    transport.finalize()
}
