//! # Book Record
//!
//! The single data type the catalog operates on. Everything except
//! `is_favorite` is fixed at seed time; `is_favorite` is flipped by
//! `Catalog::toggle_favorite` (always on a fresh value, never in place).

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// `name` and `image` are explicitly optional: library files in the wild
/// carry records without a title or cover reference, and the catalog must
/// degrade gracefully instead of failing on them. `image` is an opaque
/// asset reference — the core never inspects it, the UI just displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub name: Option<String>,
    pub author: String,
    pub publish_year: i32,
    pub price: f64,
    /// Star count, 0–5.
    pub rating: u8,
    /// Defaults to false when absent from a library file.
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub image: Option<String>,
}

impl Book {
    /// True if the title contains `needle_lower` case-insensitively.
    /// `needle_lower` must already be lowercased. Untitled books never match.
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        match &self.name {
            Some(name) => name.to_lowercase().contains(needle_lower),
            None => false,
        }
    }
}
