//! Server configuration from environment variables.
//!
//! A `.env` file in the working directory is loaded first if present; real
//! environment variables win over it.

use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DATA_FILE: &str = "data/data.md";
pub const DEFAULT_RESUME_FILE: &str = "resume/resume.pdf";
pub const DEFAULT_RESUME_DOWNLOAD_NAME: &str = "resume.pdf";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@example.com";
pub const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 10;

/// Settings for the outbound mail relay.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_file: PathBuf,
    pub resume_file: PathBuf,
    pub resume_download_name: String,
    pub port: u16,
    pub fallback_contact_email: String,
    /// `None` when `MAIL_API_URL` is unset; the contact form then reports
    /// delivery failures.
    pub mail: Option<MailConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            resume_file: PathBuf::from(DEFAULT_RESUME_FILE),
            resume_download_name: DEFAULT_RESUME_DOWNLOAD_NAME.to_string(),
            port: DEFAULT_PORT,
            fallback_contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            mail: None,
        }
    }
}

impl ServerConfig {
    /// Load `.env` (if any), then read the process environment.
    pub fn from_env() -> Self {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let mail = get("MAIL_API_URL").map(|api_url| {
            let timeout_secs = match get("MAIL_TIMEOUT_SECS") {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    tracing::warn!(
                        "Invalid MAIL_TIMEOUT_SECS {:?}, using {}",
                        raw,
                        DEFAULT_MAIL_TIMEOUT_SECS
                    );
                    DEFAULT_MAIL_TIMEOUT_SECS
                }),
                None => DEFAULT_MAIL_TIMEOUT_SECS,
            };
            MailConfig {
                api_url,
                api_key: get("MAIL_API_KEY").unwrap_or_default(),
                from: get("MAIL_FROM").unwrap_or_default(),
                timeout: Duration::from_secs(timeout_secs),
            }
        });

        Self {
            data_file: get("DATA_FILE").map(PathBuf::from).unwrap_or(defaults.data_file),
            resume_file: get("RESUME_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.resume_file),
            resume_download_name: get("RESUME_DOWNLOAD_NAME")
                .unwrap_or(defaults.resume_download_name),
            port,
            fallback_contact_email: get("FALLBACK_CONTACT_EMAIL")
                .unwrap_or(defaults.fallback_contact_email),
            mail,
        }
    }

    /// Log the effective configuration. The mail API key is never printed.
    pub fn log(&self) {
        tracing::info!("Configuration:");
        tracing::info!("  DATA_FILE: {}", self.data_file.display());
        tracing::info!("  RESUME_FILE: {}", self.resume_file.display());
        tracing::info!("  PORT: {}", self.port);
        tracing::info!("  FALLBACK_CONTACT_EMAIL: {}", self.fallback_contact_email);
        match &self.mail {
            Some(mail) => tracing::info!(
                "  MAIL_API_URL: {} (timeout {:?}, key {})",
                mail.api_url,
                mail.timeout,
                if mail.api_key.is_empty() { "unset" } else { "set" }
            ),
            None => tracing::info!("  MAIL_API_URL: unset (contact form disabled)"),
        }
    }
}

fn load_dotenv() {
    if Path::new(".env").exists() {
        match dotenv::from_filename(".env") {
            Ok(_) => tracing::info!("Loaded .env file from current directory"),
            Err(e) => tracing::warn!("Failed to load .env file: {}", e),
        }
    }
}
