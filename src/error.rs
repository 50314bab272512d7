//! Error types for schoolmail-client

use crate::resolver::ComposeErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mail service error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("response parsing error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("compose validation failed: {0}")]
    Invalid(ComposeErrors),
}

pub type Result<T> = std::result::Result<T, Error>;
