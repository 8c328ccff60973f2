//! Error types for the NBA heights pipeline

use thiserror::Error;


pub type Result<T> = std::result::Result<T, HeightsError>;

#[derive(Error, Debug)]
pub enum HeightsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),

    #[error("Request timed out: {url}")]
    Timeout { url: String },

    #[error("Result set '{name}' missing from stats response")]
    MissingResultSet { name: String },

    #[error("Column '{column}' missing from result set '{result_set}'")]
    MissingColumn { result_set: String, column: String },

    #[error("Team not found in directory: {name}")]
    TeamNotFound { name: String },

    #[error("Chart rendering failed: {message}")]
    Chart { message: String },
}

impl HeightsError {
    /// Whether a retry of the same request may succeed.
    ///
    /// Only request timeouts count; connection refusals, HTTP status errors
    /// and malformed payloads fail the unit of work immediately.
    pub fn is_transient(&self) -> bool {
        match self {
            HeightsError::Timeout { .. } => true,
            HeightsError::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}
