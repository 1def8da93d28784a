//! Shared fixtures for the HTTP tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use portfolio::{
    AppState, Showcase,
    config::{Config, LoggingConfig, ServerConfig, SiteConfig},
};
use portfolio_contact::{Command, ContactRecord, ContactSubmission, Journal, Notifier};
use portfolio_notification::EmailConfig;

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<ContactSubmission>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _submission: &ContactSubmission) -> anyhow::Result<()> {
        anyhow::bail!("provider returned 503")
    }
}

#[derive(Default)]
pub struct MemoryJournal {
    pub records: Mutex<Vec<ContactRecord>>,
}

impl MemoryJournal {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl Journal for MemoryJournal {
    fn record(&self, record: &ContactRecord) -> anyhow::Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub struct BrokenJournal;

impl Journal for BrokenJournal {
    fn record(&self, _record: &ContactRecord) -> anyhow::Result<()> {
        anyhow::bail!("log sink closed")
    }
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        site: SiteConfig::default(),
        email: EmailConfig::default(),
        logging: LoggingConfig::default(),
    }
}

pub fn state_with(command: Command, showcase: Showcase) -> AppState {
    AppState {
        config: config(),
        contact: command,
        showcase: Arc::new(showcase),
    }
}

/// State whose submissions land in the returned journal.
pub fn setup_state(notifier: Option<Arc<dyn Notifier>>) -> (AppState, Arc<MemoryJournal>) {
    let journal = Arc::new(MemoryJournal::default());
    let command = Command::new(notifier).with_journal(journal.clone());

    (state_with(command, Showcase::default()), journal)
}

pub fn json_request(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "subject": "Project inquiry",
        "message": "I'd like to build something."
    })
}
