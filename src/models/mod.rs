// src/models/mod.rs

pub mod outcome;
pub mod passbook;
pub mod transaction;

pub use outcome::{LineFailure, PrintOutcome, PrintStatus};
pub use passbook::{NextPageResponse, PassbookInfo, PassbookStatus, PrintData};
pub use transaction::Transaction;
