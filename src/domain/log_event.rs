//! Structured event model for the remote log sink.

use serde::Serialize;
use std::fmt;

/// Application stack that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStack {
    Frontend,
    Backend,
}

/// Severity of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Part of the application an event originates from.
///
/// The set is fixed by the log collector; frontend-only packages are kept so
/// the wire format stays complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogPackage {
    Api,
    Component,
    Hook,
    Page,
    State,
    Style,
    Auth,
    Config,
    Middleware,
    Utils,
}

impl LogPackage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Component => "component",
            Self::Hook => "hook",
            Self::Page => "page",
            Self::State => "state",
            Self::Style => "style",
            Self::Auth => "auth",
            Self::Config => "config",
            Self::Middleware => "middleware",
            Self::Utils => "utils",
        }
    }
}

impl fmt::Display for LogPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single event as posted to the log collector.
///
/// Serializes to `{"stack", "level", "package", "message"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub stack: LogStack,
    pub level: LogLevel,
    pub package: LogPackage,
    pub message: String,
}

impl LogEntry {
    /// Creates a backend event.
    pub fn backend(level: LogLevel, package: LogPackage, message: impl Into<String>) -> Self {
        Self {
            stack: LogStack::Backend,
            level,
            package,
            message: message.into(),
        }
    }
}
