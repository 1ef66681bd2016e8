//! Unified application error type.
//! All modules (config, dataset, core) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Dataset-related
    // ---------------------------
    #[error("Data file not found: {0}")]
    MissingDataFile(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{0}' in {1}")]
    MissingColumn(String, String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid start time '{value}' on line {line}")]
    InvalidTimestamp { value: String, line: usize },

    #[error("Invalid trip duration '{value}' on line {line}")]
    InvalidDuration { value: String, line: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
