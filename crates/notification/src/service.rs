//! Email notification service using the provider HTTP API or lettre SMTP

use std::time::Duration;

use lettre::{
    Message, SmtpTransport, Transport as _,
    message::{MultiPart, header},
    transport::smtp::authentication::Credentials,
};
use serde::Serialize;

use crate::{EmailConfig, Transport};

#[derive(Clone)]
enum Mailer {
    Api {
        client: reqwest::Client,
        url: String,
        api_key: String,
    },
    Smtp(SmtpTransport),
}

/// Outgoing message, shared by both transports
#[derive(Debug, Clone, Serialize)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: Mailer,
    from: String,
    to: String,
}

impl EmailService {
    /// Builds the service, or returns `None` when no api key is configured.
    pub fn from_config(config: &EmailConfig) -> anyhow::Result<Option<Self>> {
        let Some(api_key) = config.api_key() else {
            tracing::info!("Email api key not configured, contact delivery disabled");
            return Ok(None);
        };

        let mailer = match config.transport {
            Transport::Api => {
                let client = reqwest::Client::builder()
                    .timeout(Duration::from_secs(config.timeout_secs))
                    .build()?;

                tracing::info!(
                    api_url = %config.api_url,
                    from = %config.from_address,
                    "Email service initialized with http api transport"
                );

                Mailer::Api {
                    client,
                    url: format!("{}/emails", config.api_url.trim_end_matches('/')),
                    api_key: api_key.to_owned(),
                }
            }
            Transport::Smtp => {
                let creds = Credentials::new(config.smtp_username.clone(), api_key.to_owned());

                // Port 465 is implicit TLS, everything else negotiates STARTTLS
                let builder = if config.smtp_port == 465 {
                    SmtpTransport::relay(&config.smtp_host)?
                } else {
                    SmtpTransport::starttls_relay(&config.smtp_host)?
                };

                tracing::info!(
                    smtp_host = %config.smtp_host,
                    smtp_port = config.smtp_port,
                    from = %config.from_address,
                    "Email service initialized with smtp transport"
                );

                Mailer::Smtp(
                    builder
                        .port(config.smtp_port)
                        .credentials(creds)
                        .timeout(Some(Duration::from_secs(config.timeout_secs)))
                        .build(),
                )
            }
        };

        Ok(Some(Self {
            mailer,
            from: config.from_address.clone(),
            to: config.contact_address.clone(),
        }))
    }

    /// Builds a message from the configured sender to the configured recipient.
    pub fn compose(
        &self,
        reply_to: Option<String>,
        subject: impl Into<String>,
        html: impl Into<String>,
        text: impl Into<String>,
    ) -> Email {
        Email {
            from: self.from.to_owned(),
            to: vec![self.to.to_owned()],
            reply_to,
            subject: subject.into(),
            html: html.into(),
            text: text.into(),
        }
    }

    pub async fn send(&self, email: Email) -> anyhow::Result<()> {
        tracing::info!(to = ?email.to, subject = %email.subject, "Sending email");

        match &self.mailer {
            Mailer::Api {
                client,
                url,
                api_key,
            } => {
                let resp = client
                    .post(url)
                    .bearer_auth(api_key)
                    .json(&email)
                    .send()
                    .await?;

                let status = resp.status();
                if !status.is_success() {
                    let body = resp.text().await.unwrap_or_default();
                    anyhow::bail!("email api responded with {status}: {body}");
                }
            }
            Mailer::Smtp(mailer) => {
                let message = build_message(&email)?;
                let mailer = mailer.clone();

                tokio::task::spawn_blocking(move || mailer.send(&message)).await??;
            }
        }

        Ok(())
    }
}

fn build_message(email: &Email) -> anyhow::Result<Message> {
    let mut builder = Message::builder()
        .from(email.from.parse()?)
        .subject(email.subject.to_owned());

    for to in &email.to {
        builder = builder.to(to.parse()?);
    }

    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(reply_to.parse()?);
    }

    let message = if email.html.is_empty() {
        builder
            .header(header::ContentType::TEXT_PLAIN)
            .body(email.text.to_owned())?
    } else {
        builder.multipart(MultiPart::alternative_plain_html(
            email.text.to_owned(),
            email.html.to_owned(),
        ))?
    };

    Ok(message)
}
