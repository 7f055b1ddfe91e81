use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg).unwrap_or_else(|_| "<unprintable>".into())
            );
        }

        // ---- CHECK CONFIG ----
        if *check {
            match cfg.check() {
                Ok(()) => success("Configuration is valid"),
                Err(e) => {
                    error(format!("Configuration problem: {e}"));
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
