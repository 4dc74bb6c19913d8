//! # Application State
//!
//! Core business state for bookrack. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog            // seed + working view
//! ├── search_term: String         // last applied search term
//! ├── sort: Option<SortOption>    // last applied ordering (None = seed order)
//! ├── status_message: String      // title bar text
//! └── currency: String            // symbol prefixed to prices
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::catalog::{Catalog, SortOption};
use crate::core::config::ResolvedConfig;
use crate::core::book::Book;

pub struct App {
    pub catalog: Catalog,
    pub search_term: String,
    pub sort: Option<SortOption>,
    pub status_message: String,
    pub currency: String,
}

impl App {
    pub fn new(seed: Vec<Book>) -> Self {
        Self {
            catalog: Catalog::new(seed),
            search_term: String::new(),
            sort: None,
            status_message: String::from("Welcome to bookrack!"),
            currency: String::from("$"),
        }
    }

    /// Build the initial state from a resolved config: currency symbol and
    /// the configured default ordering applied to the full seed.
    pub fn from_config(seed: Vec<Book>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(seed);
        app.currency = config.currency.clone();
        if config.default_sort.is_some() {
            app.sort = config.default_sort;
            app.catalog.sort(app.sort);
        }
        app
    }
}
