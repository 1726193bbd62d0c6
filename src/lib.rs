//! # Snaplink
//!
//! A small in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, the registry trait, and event logging
//! - **Application Layer** ([`application`]) - Creation, resolution, and analytics services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry and remote log sink
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML page for unknown or expired links
//!
//! ## Features
//!
//! - Batch creation of up to five links with all-or-nothing validation
//! - Custom or generated short codes with time-limited validity
//! - Click tracking with user agent and referrer
//! - Aggregated analytics with search
//! - Optional forwarding of application events to a remote log collector
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000"
//! cargo run
//! ```
//!
//! Records live only for the lifetime of the process.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        LinkRequest, LinkService, RedirectService, Resolution, StatsService, Visitor,
    };
    pub use crate::domain::entities::{ClickEvent, ShortCode, UrlRecord};
    pub use crate::domain::event_logger::EventLogger;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
