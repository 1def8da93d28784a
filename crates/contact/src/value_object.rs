use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};
use validator::{Validate, ValidationErrors};

/// Deliberately lax: `a@b..c` passes, `a@b` does not.
pub static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email format regex must compile")
});

const TIMESTAMP_FORMAT: &[FormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_FORMAT.is_match(value)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl From<ContactError> for portfolio_shared::Error {
    fn from(value: ContactError) -> Self {
        Self::Validate(value.to_string())
    }
}

impl From<&ValidationErrors> for ContactError {
    fn from(errors: &ValidationErrors) -> Self {
        let missing = errors
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .any(|error| error.code == "required" || error.code == "length");

        if missing {
            Self::MissingFields
        } else {
            Self::InvalidEmail
        }
    }
}

/// Raw form payload, as posted by the page.
///
/// Fields accept any JSON value. Falsy values (`null`, `false`, `0`, `""`)
/// count as absent; anything else is turned into its string form, so
/// `"email": 5` is checked against the email format as `"5"`. An empty
/// array stringifies to `""` and is treated as absent too.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct ContactInput {
    #[serde(default, deserialize_with = "loose_string")]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    #[validate(required, length(min = 1), regex(path = *EMAIL_FORMAT))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    #[validate(required, length(min = 1))]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.filter(is_truthy).map(|value| to_text(&value)))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                item => to_text(item),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

impl ContactInput {
    /// Reads a request body. Only malformed JSON and a bare `null` are
    /// errors; any other non-object body yields an input with no fields.
    pub fn from_json(body: &[u8]) -> portfolio_shared::Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(anyhow::Error::from)?;

        match value {
            Value::Null => portfolio_shared::bail!("contact payload is null"),
            Value::Object(_) => Ok(serde_json::from_value(value).map_err(anyhow::Error::from)?),
            _ => Ok(Self::default()),
        }
    }

    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl TryFrom<ContactInput> for ContactSubmission {
    type Error = ContactError;

    fn try_from(input: ContactInput) -> Result<Self, Self::Error> {
        if let Err(errors) = input.validate() {
            return Err(ContactError::from(&errors));
        }

        match (input.name, input.email, input.subject, input.message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(ContactError::MissingFields),
        }
    }
}

/// A submission as written to the log once it has been acknowledged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    #[serde(flatten)]
    pub submission: ContactSubmission,
    pub timestamp: String,
}

impl ContactRecord {
    pub fn at(
        submission: ContactSubmission,
        at: OffsetDateTime,
    ) -> portfolio_shared::Result<Self> {
        let timestamp = match at.to_offset(time::UtcOffset::UTC).format(TIMESTAMP_FORMAT) {
            Ok(timestamp) => timestamp,
            Err(err) => portfolio_shared::bail!("failed to format submission timestamp: {err}"),
        };

        Ok(Self {
            submission,
            timestamp,
        })
    }

    pub fn now(submission: ContactSubmission) -> portfolio_shared::Result<Self> {
        Self::at(submission, OffsetDateTime::now_utc())
    }
}
