//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Registry trait definition
//! - [`log_event`] - Structured event model for the remote log sink
//! - [`event_logger`] - Fire-and-forget handle for emitting events
//! - [`log_worker`] - Background delivery of events
//!
//! # Event Flow
//!
//! 1. A service emits an event through [`event_logger::EventLogger`]
//! 2. The entry is written to `tracing` and sent to a bounded channel
//! 3. [`log_worker::run_log_worker`] posts it via
//!    [`crate::infrastructure::remote_log::LogTransport`]

pub mod entities;
pub mod event_logger;
pub mod log_event;
pub mod log_worker;
pub mod repositories;
