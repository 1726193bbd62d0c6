//! Batch link creation and removal service.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::domain::entities::{ShortCode, UrlRecord};
use crate::domain::event_logger::EventLogger;
use crate::domain::log_event::LogPackage;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, RowError, ShortenError};
use crate::utils::code_generator::{self, generate_code};
use crate::utils::url_validator::parse_target_url;

/// Maximum number of rows accepted in one creation batch.
pub const MAX_BATCH_SIZE: usize = 5;

/// Default link lifetime in minutes when a row does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

/// Attempts at generating a non-colliding code before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// One row of a creation batch, as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct LinkRequest {
    pub url: String,
    pub custom_code: Option<String>,
    /// Lifetime in minutes, unparsed. `None` means the service default.
    pub validity: Option<String>,
}

/// Service for creating and deleting shortened links.
///
/// Creation is all-or-nothing: every row of a batch is validated, every row
/// failure is collected, and the registry is only touched when the whole
/// batch is valid.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    events: EventLogger,
    default_validity_minutes: u32,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, events: EventLogger) -> Self {
        Self {
            link_repository,
            events,
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
        }
    }

    /// Overrides the lifetime applied to rows without an explicit validity.
    pub fn with_default_validity(mut self, minutes: u32) -> Self {
        self.default_validity_minutes = minutes;
        self
    }

    /// Creates short links for a batch of 1 to [`MAX_BATCH_SIZE`] rows.
    ///
    /// # Row Validation
    ///
    /// Each row is checked in order and stops at its first failure:
    ///
    /// 1. URL present
    /// 2. URL is absolute `http`/`https`
    /// 3. Custom code (if any) is long enough, routable, and not taken by the
    ///    registry or an earlier row of the same batch; otherwise a unique
    ///    code is generated
    /// 4. Validity is a positive whole number of minutes
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every failed row when any row
    /// fails, or when the batch size is out of range. Returns
    /// [`AppError::Conflict`] if a code was claimed concurrently between
    /// validation and commit. Returns [`AppError::Internal`] if no unique code
    /// could be generated.
    pub async fn create_batch(&self, rows: Vec<LinkRequest>) -> Result<Vec<UrlRecord>, AppError> {
        self.create_batch_at(rows, Utc::now()).await
    }

    /// Same as [`Self::create_batch`] with an explicit creation time.
    pub async fn create_batch_at(
        &self,
        rows: Vec<LinkRequest>,
        now: DateTime<Utc>,
    ) -> Result<Vec<UrlRecord>, AppError> {
        if rows.is_empty() || rows.len() > MAX_BATCH_SIZE {
            return Err(AppError::bad_request(
                format!("A batch must contain between 1 and {MAX_BATCH_SIZE} URLs"),
                json!({ "provided": rows.len() }),
            ));
        }

        let mut records = Vec::with_capacity(rows.len());
        let mut errors = Vec::new();
        let mut pending: HashSet<String> = HashSet::new();

        for (index, row) in rows.into_iter().enumerate() {
            match self.build_record(row, &pending, now).await? {
                Ok(record) => {
                    pending.insert(record.id.clone());
                    records.push(record);
                }
                Err(error) => errors.push(RowError {
                    row: index + 1,
                    error,
                }),
            }
        }

        if !errors.is_empty() {
            let err = AppError::rejected_batch(&errors);
            self.events
                .warn(LogPackage::Api, format!("Validation errors: {err}"));
            return Err(err);
        }

        self.link_repository.add_many(records.clone()).await?;

        self.events.info(
            LogPackage::Api,
            format!("{} URLs successfully shortened.", records.len()),
        );

        Ok(records)
    }

    /// Checks a trimmed custom code against format rules and the registry.
    ///
    /// # Errors
    ///
    /// The outer `Result` carries registry failures; the inner one carries
    /// [`ShortenError::ShortcodeTooShort`], [`ShortenError::InvalidShortcode`]
    /// or [`ShortenError::ShortcodeDuplicate`].
    pub async fn validate_custom_code(
        &self,
        code: &str,
    ) -> Result<Result<ShortCode, ShortenError>, AppError> {
        self.validate_custom_code_against(code, &HashSet::new())
            .await
    }

    /// Removes a link by its code.
    ///
    /// Returns `Ok(false)` when no such link exists; nothing else changes.
    pub async fn delete_link(&self, code: &str) -> Result<bool, AppError> {
        let removed = self.link_repository.remove(code).await?;

        if removed {
            self.events
                .info(LogPackage::Api, format!("Deleted short link {code}"));
        }

        Ok(removed)
    }

    async fn build_record(
        &self,
        row: LinkRequest,
        pending: &HashSet<String>,
        now: DateTime<Utc>,
    ) -> Result<Result<UrlRecord, ShortenError>, AppError> {
        let raw_url = row.url.trim();
        if raw_url.is_empty() {
            return Ok(Err(ShortenError::MissingUrl));
        }

        let Some(long_url) = parse_target_url(raw_url) else {
            return Ok(Err(ShortenError::InvalidUrlFormat));
        };

        let custom_code = row
            .custom_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let short_code = match custom_code {
            Some(code) => match self.validate_custom_code_against(code, pending).await? {
                Ok(code) => code,
                Err(e) => return Ok(Err(e)),
            },
            None => self.generate_unique_code(pending).await?,
        };

        let expires_at = match self.expiry_for(row.validity.as_deref(), now) {
            Some(expires_at) => expires_at,
            None => return Ok(Err(ShortenError::InvalidValidity)),
        };

        Ok(Ok(UrlRecord::new(
            short_code,
            long_url.to_string(),
            now,
            expires_at,
        )))
    }

    async fn validate_custom_code_against(
        &self,
        code: &str,
        pending: &HashSet<String>,
    ) -> Result<Result<ShortCode, ShortenError>, AppError> {
        let short_code = match code_generator::validate_custom_code(code) {
            Ok(short_code) => short_code,
            Err(e) => return Ok(Err(e)),
        };

        if pending.contains(short_code.as_str())
            || self
                .link_repository
                .find_by_code(short_code.as_str())
                .await?
                .is_some()
        {
            return Ok(Err(ShortenError::ShortcodeDuplicate(
                short_code.to_string(),
            )));
        }

        Ok(Ok(short_code))
    }

    /// Computes the expiry for a raw validity value.
    ///
    /// A missing value falls back to the default. Returns `None` for anything
    /// that is not a positive whole number or overflows the calendar.
    fn expiry_for(&self, raw: Option<&str>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let minutes: i64 = match raw {
            Some(raw) => raw.trim().parse().ok()?,
            None => i64::from(self.default_validity_minutes),
        };

        if minutes < 1 {
            return None;
        }

        now.checked_add_signed(Duration::try_minutes(minutes)?)
    }

    /// Generates a code unknown to both the registry and the pending batch.
    async fn generate_unique_code(&self, pending: &HashSet<String>) -> Result<ShortCode, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if pending.contains(&code) {
                continue;
            }

            if self.link_repository.find_by_code(&code).await?.is_none() {
                return ShortCode::parse(&code).map_err(|e| {
                    AppError::internal(
                        "Generated an invalid short code",
                        json!({ "reason": e.to_string() }),
                    )
                });
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
