use crate::api::LedgerClient;
use crate::cli::parser::Commands;
use crate::config::{Config, Driver};
use crate::errors::AppResult;
use crate::models::PrintOutcome;
use crate::session::{ConsoleObserver, PrintSession};
use crate::transport::{
    DirectSerialTransport, ManagedSpoolTransport, SerialProbe, SpoolerProbe,
};
use crate::ui::messages::{job_header, warning};

/// Handle the `print` subcommand: one full print session for one account.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Print {
        account_id,
        driver,
        printer,
        port,
        quiet,
    } = cmd
    {
        let driver = (*driver).unwrap_or(cfg.driver);
        let layout = cfg.layout_for(driver);
        let api = LedgerClient::new(cfg.api_base_url.clone());
        let mut observer = ConsoleObserver { quiet: *quiet };

        job_header(format!(
            "Passbook print for account {account_id} ({} driver)",
            driver.as_str()
        ));

        let outcome = match driver {
            Driver::Spool => {
                let probe = SpoolerProbe::new(cfg.spooler_url.clone());
                let mut transport = ManagedSpoolTransport::new(
                    cfg.spooler_url.clone(),
                    printer.clone().or_else(|| cfg.printer.clone()),
                    cfg.header_lines,
                    cfg.header_offset_policy,
                );
                let mut session = PrintSession::new(&api, &probe, &mut transport, layout);
                session.run(account_id, &mut observer)?
            }
            Driver::Serial => {
                let serial_port = port.clone().or_else(|| cfg.serial_port.clone());
                let probe = SerialProbe::new(serial_port.clone());
                let mut transport = DirectSerialTransport::new(
                    serial_port,
                    cfg.line_spacing,
                    cfg.inter_line_delay_ms,
                );
                let mut session = PrintSession::new(&api, &probe, &mut transport, layout);
                session.run(account_id, &mut observer)?
            }
        };

        report_failures(&outcome);
    }
    Ok(())
}

fn report_failures(outcome: &PrintOutcome) {
    for failure in &outcome.failed {
        warning(format!("   {} → {}", failure.id, failure.error));
    }
}
