use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::ui::contact::DEFAULT_RECIPIENT;

const DEFAULT_FORM_ACTION: &str = "https://formspree.io/f/YOUR_FORM_ID";

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub site_root: PathBuf,
    /// When set, content and the resume are fetched from this base URL
    /// instead of `site_root`.
    pub content_base_url: Option<String>,
    pub content_fetch_timeout: Duration,
    pub theme_store_path: PathBuf,
    pub contact_form_action: Option<String>,
    pub contact_recipient: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let site_root = PathBuf::from(get("SITE_ROOT").unwrap_or_else(|| "site".to_string()));
        let timeout_ms = get("CONTENT_FETCH_TIMEOUT_MS")
            .unwrap_or_else(|| "5000".to_string())
            .parse::<u64>()
            .context("CONTENT_FETCH_TIMEOUT_MS must be a number of milliseconds")?;

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            content_base_url: get("CONTENT_BASE_URL").filter(|s| !s.trim().is_empty()),
            content_fetch_timeout: Duration::from_millis(timeout_ms),
            theme_store_path: get("THEME_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| site_root.join(".preferences.json")),
            contact_form_action: Some(
                get("CONTACT_FORM_ACTION").unwrap_or_else(|| DEFAULT_FORM_ACTION.to_string()),
            )
            .filter(|s| !s.trim().is_empty()),
            contact_recipient: get("CONTACT_RECIPIENT")
                .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
            site_root,
        })
    }
}
