//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory URL registry
//! - [`remote_log`] - Delivery of log entries to the remote collector

pub mod persistence;
pub mod remote_log;
