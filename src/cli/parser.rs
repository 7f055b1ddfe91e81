use crate::config::Driver;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rpassbook
/// Teller-side CLI to print savings passbook ledgers
#[derive(Parser)]
#[command(
    name = "rpassbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print savings passbook ledgers on spooler-managed and serial dot-matrix printers",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values for mistakes")]
        check: bool,
    },

    /// List printers known to the local spooler
    Printers,

    /// Show passbook state and unprinted transaction count for an account
    Status {
        /// Account UUID
        account_id: String,
    },

    /// Print all unprinted transactions of an account into its passbook
    Print {
        /// Account UUID
        account_id: String,

        /// Printer family to use (default from config)
        #[arg(long, value_enum)]
        driver: Option<Driver>,

        /// Spooler printer name (spool driver)
        #[arg(long)]
        printer: Option<String>,

        /// Serial device path, e.g. /dev/ttyUSB0 or COM3 (serial driver)
        #[arg(long)]
        port: Option<String>,

        /// Suppress per-line progress output
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Record a manual page turn for an account's passbook
    NextPage {
        /// Account UUID
        account_id: String,
    },

    /// Print a character-position ruler to calibrate column offsets
    Ruler {
        /// Printer family to use (default from config)
        #[arg(long, value_enum)]
        driver: Option<Driver>,

        /// Spooler printer name (spool driver)
        #[arg(long)]
        printer: Option<String>,

        /// Serial device path (serial driver)
        #[arg(long)]
        port: Option<String>,
    },

    /// Manually realign passbook paper on a serial printer
    Align {
        /// Move the paper forward by N units of 1/180 inch
        #[arg(long, value_name = "UNITS", conflicts_with = "reverse")]
        forward: Option<u32>,

        /// Wind the paper backward by N units of 1/180 inch
        #[arg(long, value_name = "UNITS", conflicts_with = "forward")]
        reverse: Option<u32>,

        /// Serial device path (discovered by vendor id when omitted)
        #[arg(long)]
        port: Option<String>,
    },
}
