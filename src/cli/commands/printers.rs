use crate::config::Config;
use crate::errors::AppResult;
use crate::pagination::HeaderOffsetPolicy;
use crate::transport::ManagedSpoolTransport;
use crate::ui::messages::{info, warning};

/// Handle the `printers` subcommand: list what the local spooler exposes.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let transport = ManagedSpoolTransport::new(
        cfg.spooler_url.clone(),
        None,
        cfg.header_lines,
        HeaderOffsetPolicy::default(),
    );
    let printers = transport.get_printers()?;

    if printers.is_empty() {
        warning("The spooler is running but no printer is configured");
        return Ok(());
    }

    info(format!("{} printer(s) available:", printers.len()));
    for name in printers {
        println!("   {name}");
    }
    Ok(())
}
