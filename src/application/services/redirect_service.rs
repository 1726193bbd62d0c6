//! Short code resolution service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{ClickEvent, ShortCode};
use crate::domain::event_logger::EventLogger;
use crate::domain::log_event::LogPackage;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Terminal state of a resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The link is live; a click was recorded and the client goes here.
    Redirect(String),
    /// No link has this code.
    NotFound,
    /// The link exists but its validity period is over.
    Expired,
}

/// Client details captured for click analytics.
#[derive(Debug, Clone, Default)]
pub struct Visitor {
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

/// Resolves short codes to their targets and records clicks.
pub struct RedirectService<L: LinkRepository> {
    link_repository: Arc<L>,
    events: EventLogger,
}

impl<L: LinkRepository> RedirectService<L> {
    pub fn new(link_repository: Arc<L>, events: EventLogger) -> Self {
        Self {
            link_repository,
            events,
        }
    }

    /// Resolves `code` at the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only on registry failures; a missing or
    /// expired link is a [`Resolution`], not an error.
    pub async fn resolve(&self, code: &ShortCode, visitor: Visitor) -> Result<Resolution, AppError> {
        self.resolve_at(code, visitor, Utc::now()).await
    }

    /// Resolves `code` as of `now`.
    ///
    /// # Flow
    ///
    /// 1. Lookup: unknown code → [`Resolution::NotFound`]
    /// 2. Expiry check: `now > expires_at` → [`Resolution::Expired`]
    /// 3. Append a [`ClickEvent`] and return [`Resolution::Redirect`]
    ///
    /// Expired lookups and misses do not record clicks.
    pub async fn resolve_at(
        &self,
        code: &ShortCode,
        visitor: Visitor,
        now: DateTime<Utc>,
    ) -> Result<Resolution, AppError> {
        let Some(record) = self.link_repository.find_by_code(code.as_str()).await? else {
            self.events
                .error(LogPackage::Api, format!("Shortcode not found: {code}"));
            return Ok(Resolution::NotFound);
        };

        if record.is_expired_at(now) {
            self.events
                .warn(LogPackage::Api, format!("Expired URL accessed: {code}"));
            return Ok(Resolution::Expired);
        }

        self.events.info(
            LogPackage::Api,
            format!("Redirecting from {code} to {}", record.long_url),
        );

        let click = ClickEvent::new(
            now,
            visitor.user_agent.as_deref(),
            visitor.referrer.as_deref(),
        );

        if !self.link_repository.record_click(&record.id, click).await? {
            tracing::warn!(code = %code, "Link removed before click could be recorded");
        }

        Ok(Resolution::Redirect(record.long_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlRecord;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Duration;

    fn code(s: &str) -> ShortCode {
        ShortCode::parse(s).unwrap()
    }

    fn record(created_at: DateTime<Utc>) -> UrlRecord {
        UrlRecord::new(
            code("abc123"),
            "https://example.com".to_string(),
            created_at,
            created_at + Duration::minutes(30),
        )
    }

    fn service(repo: MockLinkRepository) -> RedirectService<MockLinkRepository> {
        RedirectService::new(Arc::new(repo), EventLogger::local_only())
    }

    #[tokio::test]
    async fn test_resolve_live_link_records_click() {
        let created = Utc::now();
        let now = created + Duration::minutes(5);

        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .withf(|c| c == "abc123")
            .times(1)
            .returning(move |_| Ok(Some(record(created))));
        repo.expect_record_click()
            .withf(move |id, click| {
                id == "abc123"
                    && click.timestamp == now
                    && click.user_agent == "TestBot/1.0"
                    && click.referrer == "direct"
            })
            .times(1)
            .returning(|_, _| Ok(true));

        let visitor = Visitor {
            user_agent: Some("TestBot/1.0".to_string()),
            referrer: None,
        };
        let result = service(repo)
            .resolve_at(&code("abc123"), visitor, now)
            .await
            .unwrap();

        assert_eq!(result, Resolution::Redirect("https://example.com".to_string()));
    }

    #[tokio::test]
    async fn test_resolve_expired_link_records_nothing() {
        let created = Utc::now();

        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(record(created))));
        repo.expect_record_click().times(0);

        let result = service(repo)
            .resolve_at(
                &code("abc123"),
                Visitor::default(),
                created + Duration::minutes(31),
            )
            .await
            .unwrap();

        assert_eq!(result, Resolution::Expired);
    }

    #[tokio::test]
    async fn test_resolve_at_exact_expiry_still_redirects() {
        let created = Utc::now();

        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .returning(move |_| Ok(Some(record(created))));
        repo.expect_record_click().times(1).returning(|_, _| Ok(true));

        let result = service(repo)
            .resolve_at(
                &code("abc123"),
                Visitor::default(),
                created + Duration::minutes(30),
            )
            .await
            .unwrap();

        assert!(matches!(result, Resolution::Redirect(_)));
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_record_click().times(0);

        let result = service(repo)
            .resolve(&code("xyz999"), Visitor::default())
            .await
            .unwrap();

        assert_eq!(result, Resolution::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_redirects_when_record_vanishes_mid_flight() {
        let created = Utc::now();

        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .returning(move |_| Ok(Some(record(created))));
        repo.expect_record_click().times(1).returning(|_, _| Ok(false));

        let result = service(repo)
            .resolve_at(&code("abc123"), Visitor::default(), created)
            .await
            .unwrap();

        assert_eq!(result, Resolution::Redirect("https://example.com".to_string()));
    }
}
