//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::book::Book;
use crate::core::library::builtin_seed;
use crate::core::state::App;

/// The built-in catalog, reused as the standard test seed.
pub fn sample_seed() -> Vec<Book> {
    builtin_seed()
}

/// Creates a test App over the sample seed with default settings.
pub fn test_app() -> App {
    App::new(sample_seed())
}
