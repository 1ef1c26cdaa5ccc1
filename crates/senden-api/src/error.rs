use thiserror::Error;

/// Errors from the Google Sheets collaborator.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("service account key error: {0}")]
    Key(String),

    #[error("token exchange failed (status {status}): {message}")]
    Token { status: u16, message: String },

    #[error("Sheets API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}
