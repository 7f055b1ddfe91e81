use crate::api::LedgerClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `next-page` subcommand: tell the backend the teller turned
/// the physical page so line counting restarts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::NextPage { account_id } = cmd {
        let client = LedgerClient::new(cfg.api_base_url.clone());
        let response = client.next_page(account_id)?;

        if !response.success {
            return Err(AppError::Other("backend refused the page turn".into()));
        }
        success(format!(
            "Passbook advanced to page {}, printing resumes at line {}",
            response.current_page.unwrap_or(0),
            response.last_printed_line.unwrap_or(0) + 1
        ));
    }
    Ok(())
}
