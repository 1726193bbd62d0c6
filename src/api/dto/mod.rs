//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request
//! envelopes are checked with validator.

pub mod clicks;
pub mod health;
pub mod shorten;
pub mod stats;
pub mod stats_list;
