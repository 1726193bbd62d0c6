//! Utility functions for code generation and URL checks.
//!
//! - [`code_generator`] - Short code generation and custom code format rules
//! - [`url_validator`] - Target URL validation

pub mod code_generator;
pub mod url_validator;
