//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first if present.
//!
//! - `OTP_SERVER_URL` - Base URL of the login server (default: `http://localhost:8080`)
//! - `OTP_WINDOW_TITLE` - Window title (default: `OTP Login`)
//! - `RUST_LOG` - Log filter (default: `info`)

use anyhow::{bail, Result};
use std::env;

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
const DEFAULT_WINDOW_TITLE: &str = "OTP Login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL without trailing slash; endpoint paths are appended to it.
    pub server_url: String,
    pub window_title: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_url = lookup("OTP_SERVER_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned());
        let server_url = server_url.trim().trim_end_matches('/').to_owned();
        if !(server_url.starts_with("http://") || server_url.starts_with("https://")) {
            bail!("OTP_SERVER_URL must start with http:// or https://, got {server_url:?}");
        }

        let window_title = lookup("OTP_WINDOW_TITLE")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_WINDOW_TITLE.to_owned());

        Ok(Self {
            server_url,
            window_title,
        })
    }
}
