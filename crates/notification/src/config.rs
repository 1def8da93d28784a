use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Transport {
    /// Provider HTTP API (`POST {api_url}/emails`)
    #[default]
    Api,
    /// Provider SMTP relay, authenticated with the same key
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// Delivery is disabled while this is unset or blank.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default)]
    pub transport: Transport,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_smtp_username")]
    pub smtp_username: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            from_address: default_from_address(),
            contact_address: default_contact_address(),
            transport: Transport::default(),
            api_url: default_api_url(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: default_smtp_username(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EmailConfig {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

fn default_from_address() -> String {
    "Portfolio <onboarding@resend.dev>".to_string()
}

fn default_contact_address() -> String {
    "navdeepshahof@gmail.com".to_string()
}

fn default_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_smtp_host() -> String {
    "smtp.resend.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_username() -> String {
    "resend".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}
