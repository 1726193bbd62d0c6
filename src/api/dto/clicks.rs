//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ClickEvent;

/// Individual click event information.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub clicked_at: DateTime<Utc>,
    pub user_agent: String,
    pub referrer: String,
}

impl From<ClickEvent> for ClickInfo {
    fn from(click: ClickEvent) -> Self {
        Self {
            clicked_at: click.timestamp,
            user_agent: click.user_agent,
            referrer: click.referrer,
        }
    }
}
