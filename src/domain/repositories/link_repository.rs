//! Repository trait for the URL registry.

use crate::domain::entities::{ClickEvent, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Registry of shortened URLs.
///
/// The registry is the only place URL records are stored and mutated. It
/// keeps records in insertion order and guarantees that short codes are unique
/// at every instant. It does not validate URLs or validity periods; that is
/// the job of [`crate::application::services::LinkService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Appends a batch of records, preserving their order.
    ///
    /// The batch is applied atomically: either every record is appended or
    /// none is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if any short code in the batch is
    /// already stored or appears twice within the batch.
    async fn add_many(&self, records: Vec<UrlRecord>) -> Result<(), AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Appends a click to the record with the given id.
    ///
    /// Returns `Ok(false)` and changes nothing when no record has that id.
    async fn record_click(&self, id: &str, click: ClickEvent) -> Result<bool, AppError>;

    /// Removes the record with the given id.
    ///
    /// Returns `Ok(false)` when no record has that id; other records are
    /// never touched.
    async fn remove(&self, id: &str) -> Result<bool, AppError>;

    /// Returns a snapshot of all records in insertion order.
    async fn list(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Returns the number of stored records.
    async fn count(&self) -> Result<usize, AppError>;
}
