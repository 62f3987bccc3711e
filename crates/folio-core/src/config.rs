// Rust guideline compliant 2026-10-12

//! Configuration management for Folio.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for a Folio site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Title shown at the top of the rendered page.
    #[serde(default = "default_site_title")]
    pub site_title: String,

    /// Name of the portfolio owner.
    #[serde(default)]
    pub owner_name: String,

    /// URL prefix under which uploaded blobs are served.
    #[serde(default = "default_blob_base_url")]
    pub blob_base_url: String,

    /// Web URL of the site's Git repository, used to link commits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Email of the admin account.
    #[serde(default)]
    pub admin_email: String,

    /// SHA-256 hex digest of the admin password.
    #[serde(default)]
    pub admin_password_sha256: String,

    /// Hours an admin session stays valid.
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u32,
}

fn default_site_title() -> String {
    "Portfolio".to_string()
}

fn default_blob_base_url() -> String {
    "/media".to_string()
}

fn default_session_ttl_hours() -> u32 {
    12
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            owner_name: String::new(),
            blob_base_url: default_blob_base_url(),
            repository_url: None,
            output_format: OutputFormat::default(),
            admin_email: String::new(),
            admin_password_sha256: String::new(),
            session_ttl_hours: default_session_ttl_hours(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.folio/config.toml`
    /// 3. Environment variables with `FOLIO_` prefix
    ///
    /// # Arguments
    ///
    /// * `folio_dir` - Path to the `.folio` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(folio_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = folio_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FOLIO_SITE_TITLE`
    /// - `FOLIO_OWNER_NAME`
    /// - `FOLIO_BLOB_BASE_URL`
    /// - `FOLIO_REPOSITORY_URL`
    /// - `FOLIO_OUTPUT_FORMAT` - json/table/plain
    /// - `FOLIO_ADMIN_EMAIL`
    /// - `FOLIO_ADMIN_PASSWORD_SHA256`
    /// - `FOLIO_SESSION_TTL_HOURS`
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("FOLIO_SITE_TITLE") {
            self.site_title = val;
        }

        if let Ok(val) = std::env::var("FOLIO_OWNER_NAME") {
            self.owner_name = val;
        }

        if let Ok(val) = std::env::var("FOLIO_BLOB_BASE_URL") {
            self.blob_base_url = val;
        }

        if let Ok(val) = std::env::var("FOLIO_REPOSITORY_URL") {
            self.repository_url = Some(val).filter(|v| !v.is_empty());
        }

        if let Ok(val) = std::env::var("FOLIO_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "FOLIO_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("FOLIO_ADMIN_EMAIL") {
            self.admin_email = val;
        }

        if let Ok(val) = std::env::var("FOLIO_ADMIN_PASSWORD_SHA256") {
            self.admin_password_sha256 = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("FOLIO_SESSION_TTL_HOURS") {
            self.session_ttl_hours = val.parse().map_err(|_| {
                Error::Config("FOLIO_SESSION_TTL_HOURS must be a positive number".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - session_ttl_hours is zero
    /// - admin_password_sha256 is set but is not a 64-character hex digest
    fn validate(&self) -> Result<()> {
        if self.session_ttl_hours == 0 {
            return Err(Error::Config(
                "session_ttl_hours must be greater than 0".to_string(),
            ));
        }

        let digest = &self.admin_password_sha256;
        if !digest.is_empty()
            && (digest.len() != 64 || !digest.bytes().all(|b| b.is_ascii_hexdigit()))
        {
            return Err(Error::Config(
                "admin_password_sha256 must be a 64-character hex digest".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns true when admin credentials are configured.
    pub fn has_admin(&self) -> bool {
        !self.admin_email.is_empty() && !self.admin_password_sha256.is_empty()
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, folio_dir: &Path) -> Result<()> {
        let config_path = folio_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
