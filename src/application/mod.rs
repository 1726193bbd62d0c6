//! Application layer services implementing business logic.
//!
//! Services orchestrate registry calls, validation and event logging, and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Batch link creation and removal
//! - [`services::redirect_service::RedirectService`] - Short code resolution and click recording
//! - [`services::stats_service::StatsService`] - Analytics over the registry

pub mod services;
