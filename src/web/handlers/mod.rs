//! HTML template rendering handlers.

mod not_found;

pub use not_found::{NotFoundTemplate, not_found_handler};
