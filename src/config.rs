use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use portfolio_notification::EmailConfig;
use serde::Deserialize;
use std::{collections::BTreeMap, env};
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Target of the "Download Resume" button.
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            resume_url: default_resume_url(),
        }
    }
}

fn default_resume_url() -> String {
    "/static/resume/resume.pdf".to_string()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy email variables (EMAIL_API_KEY, EMAIL_FROM_ADDRESS, RESEND_*), blanks ignored
    /// 2. Environment variables (PORTFOLIO__SERVER__PORT, etc.)
    /// 3. Config file (--config, CONFIG_PATH or config/default.toml)
    /// 4. Defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        for (key, value) in email_overrides(|var| env::var(var).ok()) {
            builder = builder.set_override(key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !portfolio_contact::is_valid_email(&self.email.contact_address) {
            return Err(format!(
                "Email contact_address is not a valid address: {}",
                self.email.contact_address
            ));
        }
        if self.email.from_address.trim().is_empty() {
            return Err("Email from_address must not be empty".to_string());
        }
        if self.email.timeout_secs == 0 {
            return Err("Email timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Legacy email variables as config overrides. Blank values are skipped and
/// the EMAIL_* names win over the RESEND_* aliases.
fn email_overrides(lookup: impl Fn(&str) -> Option<String>) -> BTreeMap<&'static str, String> {
    let mut overrides = BTreeMap::new();

    for (var, key) in [
        ("RESEND_API_KEY", "email.api_key"),
        ("RESEND_FROM_EMAIL", "email.from_address"),
        ("EMAIL_API_KEY", "email.api_key"),
        ("EMAIL_FROM_ADDRESS", "email.from_address"),
    ] {
        if let Some(value) = lookup(var).filter(|value| !value.trim().is_empty()) {
            overrides.insert(key, value);
        }
    }

    overrides
}
