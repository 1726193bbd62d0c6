//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::LinkRequest;
use crate::domain::entities::UrlRecord;

/// Request to shorten one or more URLs.
///
/// The whole batch succeeds or fails together.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 5, message = "A batch must contain between 1 and 5 URLs"))]
    pub urls: Vec<UrlItem>,
}

/// Individual URL to be shortened.
///
/// Field contents are checked by the link service, which reports every
/// failing row at once.
#[derive(Debug, Serialize, Deserialize)]
pub struct UrlItem {
    #[serde(default)]
    pub url: String,

    /// Optional custom short code.
    #[serde(default)]
    pub custom_code: Option<String>,

    /// Lifetime in minutes; defaults to the service setting when omitted.
    #[serde(default)]
    pub validity: Option<ValidityInput>,
}

/// Validity as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidityInput {
    Number(serde_json::Number),
    Text(String),
}

impl From<ValidityInput> for String {
    fn from(input: ValidityInput) -> Self {
        match input {
            ValidityInput::Number(n) => n.to_string(),
            ValidityInput::Text(s) => s,
        }
    }
}

impl From<UrlItem> for LinkRequest {
    fn from(item: UrlItem) -> Self {
        Self {
            url: item.url,
            custom_code: item.custom_code,
            validity: item.validity.map(String::from),
        }
    }
}

/// Links created by a successful batch, in request order.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub items: Vec<ShortenedLink>,
}

#[derive(Debug, Serialize)]
pub struct ShortenedLink {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShortenedLink {
    pub fn from_record(record: UrlRecord, base_url: &str) -> Self {
        Self {
            short_url: record.short_code.url(base_url),
            code: record.id,
            long_url: record.long_url,
            created_at: record.created_at,
            expires_at: record.expires_at,
        }
    }
}
