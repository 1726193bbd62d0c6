//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A shortened URL with its click history
//! - [`ClickEvent`] - A single resolved redirect
//! - [`ShortCode`] - Validated short code used as route parameter and key

pub mod click;
pub mod link;
pub mod short_code;

pub use click::{ClickEvent, DIRECT_REFERRER, UNKNOWN_USER_AGENT};
pub use link::UrlRecord;
pub use short_code::{MAX_CODE_LENGTH, ShortCode, ShortCodeError};
