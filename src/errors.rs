//! Unified application error type.
//! All modules (transport, session, api, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Device / spooler related
    // ---------------------------
    #[error("Required printing capability missing: {0}")]
    Compatibility(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Printer not connected")]
    NotConnected,

    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    // ---------------------------
    // Single-line faults (recorded per transaction, never fatal)
    // ---------------------------
    #[error("Failed to print line for transaction {id}: {message}")]
    Line { id: String, message: String },

    // ---------------------------
    // Ledger service related
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch print data: {0}")]
    Fetch(String),

    #[error("Failed to report print result: {0}")]
    Reporting(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
