//! # Seed Data Provider
//!
//! Supplies the immutable seed collection the catalog starts from: either
//! the built-in list below, or a user-supplied JSON library file. The
//! catalog treats whatever this module returns as a read-only snapshot.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::core::book::Book;

#[derive(Debug)]
pub enum LibraryError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Io(e) => write!(f, "library I/O error: {e}"),
            LibraryError::Parse(e) => write!(f, "library parse error: {e}"),
        }
    }
}

impl std::error::Error for LibraryError {}

/// Load a seed collection from a JSON file: an array of book records.
/// `is_favorite` defaults to false for records that omit it.
pub fn load_library(path: &Path) -> Result<Vec<Book>, LibraryError> {
    let contents = fs::read_to_string(path).map_err(LibraryError::Io)?;
    let books: Vec<Book> = serde_json::from_str(&contents).map_err(LibraryError::Parse)?;
    info!("Loaded {} books from {}", books.len(), path.display());

    // Duplicate ids break toggle-by-id semantics; keep going but say so.
    let mut ids: Vec<u32> = books.iter().map(|b| b.id).collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != books.len() {
        warn!("Library {} contains duplicate book ids", path.display());
    }

    Ok(books)
}

/// The built-in catalog, used when no library file is configured.
pub fn builtin_seed() -> Vec<Book> {
    fn book(
        id: u32,
        name: &str,
        author: &str,
        publish_year: i32,
        price: f64,
        rating: u8,
        image: &str,
    ) -> Book {
        Book {
            id,
            name: Some(name.to_string()),
            author: author.to_string(),
            publish_year,
            price,
            rating,
            is_favorite: false,
            image: Some(image.to_string()),
        }
    }

    vec![
        book(1, "The Great Gatsby", "F. Scott Fitzgerald", 1925, 12.99, 4, "gatsby.png"),
        book(2, "To Kill a Mockingbird", "Harper Lee", 1960, 14.50, 5, "mockingbird.png"),
        book(3, "1984", "George Orwell", 1949, 11.25, 5, "1984.png"),
        book(4, "Pride and Prejudice", "Jane Austen", 1813, 9.99, 4, "pride.png"),
        book(5, "The Catcher in the Rye", "J. D. Salinger", 1951, 10.75, 3, "catcher.png"),
        book(6, "Brave New World", "Aldous Huxley", 1932, 13.40, 4, "brave.png"),
        book(7, "The Hobbit", "J. R. R. Tolkien", 1937, 16.00, 5, "hobbit.png"),
        book(8, "Fahrenheit 451", "Ray Bradbury", 1953, 10.20, 4, "fahrenheit.png"),
        book(9, "Jane Eyre", "Charlotte Brontë", 1847, 8.95, 4, "jane_eyre.png"),
        book(10, "The Grapes of Wrath", "John Steinbeck", 1939, 12.30, 3, "grapes.png"),
        book(11, "Moby-Dick", "Herman Melville", 1851, 15.10, 3, "moby_dick.png"),
        book(12, "Wuthering Heights", "Emily Brontë", 1847, 9.45, 4, "wuthering.png"),
    ]
}
