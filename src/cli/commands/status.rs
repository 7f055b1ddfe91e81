use crate::api::LedgerClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

/// Handle the `status` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { account_id } = cmd {
        let client = LedgerClient::new(cfg.api_base_url.clone());
        let status = client.status(account_id)?;

        if !status.has_passbook {
            warning("No passbook issued for this account yet");
        } else {
            info(format!(
                "Passbook {}",
                status.passbook_number.as_deref().unwrap_or("-")
            ));
            println!("   page:            {}", fmt_opt(status.current_page));
            println!("   last line:       {}", fmt_opt(status.last_printed_line));
            println!("   remaining lines: {}", fmt_opt(status.remaining_lines));
            println!(
                "   status:          {}",
                status.status.as_deref().unwrap_or("-")
            );
        }
        println!(
            "   unprinted transactions: {}",
            status.unprinted_transaction_count
        );
    }
    Ok(())
}

fn fmt_opt(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}
