//! Mail service connection configuration

use crate::error::{Error, Result};
use std::env;

/// Default number of messages per list page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Connection configuration for the remote mail service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub base_url: String,
    /// Optional bearer token sent with every request.
    pub token: Option<String>,
    /// List page size used by the store.
    pub page_size: usize,
}

impl ServiceConfig {
    /// Create a configuration with defaults for everything but the URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Load the configuration from environment variables
    ///
    /// Reads from `.env` file if present. Required variables:
    /// - `MAIL_API_URL`
    ///
    /// Optional (with defaults):
    /// - `MAIL_API_TOKEN` (default: none)
    /// - `MAIL_PAGE_SIZE` (default: `10`)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("MAIL_API_URL").map_err(|_| Error::Config("MAIL_API_URL not set".into()))?;

        let page_size = match env::var("MAIL_PAGE_SIZE") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("Invalid MAIL_PAGE_SIZE: {e}")))?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            token: env::var("MAIL_API_TOKEN").ok(),
            page_size,
            ..Self::new(base_url)
        })
    }
}
