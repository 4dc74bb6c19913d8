//! # Catalog View-Model
//!
//! Owns the immutable seed list and the derived working view, and applies
//! the three user-driven transformations:
//!
//! ```text
//! seed ──search(term)──▶ view ──sort(option)──▶ view ──toggle_favorite(id)──▶ view
//! ```
//!
//! Contract (deliberately matching the page this replaces):
//! - `search` always recomputes from the **seed**, so it resets any prior
//!   sort order and drops favourite flags toggled on the previous view.
//! - `sort` stably reorders whatever view is current — it composes with a
//!   preceding search, and each call starts from the current order.
//! - `toggle_favorite` rebuilds the view with exactly one record flipped.
//!
//! None of the operations can fail: unknown ids and missing titles degrade
//! to no-ops and exclusions, and an empty view is a valid renderable state.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::book::Book;

/// One of the four supported orderings. "No sorting" is represented as
/// `Option<SortOption>::None` at the call sites, so anything that isn't a
/// recognised ordering leaves the view untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    NameAsc,
    NameDesc,
    YearAsc,
    YearDesc,
}

impl SortOption {
    /// Parse a config/CLI string like `"name_asc"`. Unknown strings map to
    /// `None`, which callers treat as "no sorting".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name_asc" => Some(SortOption::NameAsc),
            "name_desc" => Some(SortOption::NameDesc),
            "year_asc" => Some(SortOption::YearAsc),
            "year_desc" => Some(SortOption::YearDesc),
            _ => None,
        }
    }

    /// Human-readable label for the title bar and sort picker.
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "Name (A-Z)",
            SortOption::NameDesc => "Name (Z-A)",
            SortOption::YearAsc => "Year (oldest first)",
            SortOption::YearDesc => "Year (newest first)",
        }
    }
}

/// The catalog view-model: seed collection plus the derived working view.
///
/// Invariants: the seed is never mutated; every view record corresponds by
/// `id` to a seed record; the view never grows beyond the seed.
pub struct Catalog {
    seed: Vec<Book>,
    view: Vec<Book>,
}

impl Catalog {
    /// The view starts as the full seed collection in seed order.
    pub fn new(seed: Vec<Book>) -> Self {
        let view = seed.clone();
        Self { seed, view }
    }

    /// The current working view, in display order.
    pub fn view(&self) -> &[Book] {
        &self.view
    }

    pub fn seed_len(&self) -> usize {
        self.seed.len()
    }

    /// Recompute the view from the seed, keeping books whose title contains
    /// `term` case-insensitively. The empty term restores the full seed in
    /// its original order. Untitled books are excluded from non-empty
    /// searches rather than causing a failure.
    ///
    /// Note this starts from the seed, not the current view: a preceding
    /// sort or favourite toggle does not survive a new search.
    pub fn search(&mut self, term: &str) -> &[Book] {
        if term.is_empty() {
            self.view = self.seed.clone();
            return &self.view;
        }
        let needle = term.to_lowercase();
        self.view = self
            .seed
            .iter()
            .filter(|book| book.title_contains(&needle))
            .cloned()
            .collect();
        &self.view
    }

    /// Stably reorder the current view. `None` is a no-op. Name orderings
    /// compare lowercased titles; year orderings compare `publish_year`.
    /// Membership never changes, and ties keep their pre-call order.
    pub fn sort(&mut self, option: Option<SortOption>) -> &[Book] {
        let Some(option) = option else {
            return &self.view;
        };
        match option {
            SortOption::NameAsc => self.view.sort_by(compare_names),
            SortOption::NameDesc => self.view.sort_by(|a, b| compare_names(b, a)),
            SortOption::YearAsc => {
                self.view.sort_by(|a, b| a.publish_year.cmp(&b.publish_year))
            }
            SortOption::YearDesc => {
                self.view.sort_by(|a, b| b.publish_year.cmp(&a.publish_year))
            }
        }
        &self.view
    }

    /// Rebuild the view with the matching book's `is_favorite` inverted.
    /// Every record is a fresh value, so the presentation layer never sees
    /// a mutated original. An unknown id leaves the view unchanged.
    pub fn toggle_favorite(&mut self, id: u32) -> &[Book] {
        self.view = self
            .view
            .iter()
            .map(|book| {
                if book.id == id {
                    let mut flipped = book.clone();
                    flipped.is_favorite = !flipped.is_favorite;
                    flipped
                } else {
                    book.clone()
                }
            })
            .collect();
        &self.view
    }

    /// The current favourite state of the book with `id`, if it is in view.
    pub fn is_favorite(&self, id: u32) -> Option<bool> {
        self.view
            .iter()
            .find(|book| book.id == id)
            .map(|book| book.is_favorite)
    }
}

/// Case-insensitive title ordering. The page this replaces used the
/// locale-aware `localeCompare`; lowercased Unicode comparison matches it
/// for the catalog's titles. Untitled books sort after titled ones.
fn compare_names(a: &Book, b: &Book) -> Ordering {
    match (&a.name, &b.name) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn book(id: u32, name: Option<&str>, year: i32) -> Book {
        Book {
            id,
            name: name.map(String::from),
            author: format!("Author {id}"),
            publish_year: year,
            price: id as f64,
            rating: 3,
            is_favorite: false,
            image: None,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            book(1, Some("Zed"), 2000),
            book(2, Some("Ann"), 2010),
            book(3, Some("annotated zed"), 1995),
            book(4, None, 1980),
        ])
    }

    fn names(view: &[Book]) -> Vec<Option<&str>> {
        view.iter().map(|b| b.name.as_deref()).collect()
    }

    fn ids(view: &[Book]) -> Vec<u32> {
        view.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_initial_view_is_full_seed_in_order() {
        let catalog = sample_catalog();
        assert_eq!(ids(catalog.view()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut catalog = sample_catalog();
        catalog.search("AN");
        assert_eq!(names(catalog.view()), vec![Some("Ann"), Some("annotated zed")]);
    }

    #[test]
    fn test_search_empty_term_restores_full_seed() {
        let mut catalog = sample_catalog();
        catalog.search("zed");
        catalog.search("");
        assert_eq!(ids(catalog.view()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_excludes_untitled_books() {
        let mut catalog = sample_catalog();
        catalog.search("a");
        assert!(catalog.view().iter().all(|b| b.name.is_some()));
    }

    #[test]
    fn test_search_no_match_yields_empty_view() {
        let mut catalog = sample_catalog();
        catalog.search("xyz-nonexistent");
        assert_eq!(catalog.view().len(), 0);
    }

    #[test]
    fn test_search_preserves_seed_order_among_matches() {
        let mut catalog = sample_catalog();
        catalog.search("zed");
        assert_eq!(ids(catalog.view()), vec![1, 3]);
    }

    #[test]
    fn test_search_resets_prior_sort() {
        // Contract: search recomputes from the seed, not the current view.
        let mut catalog = sample_catalog();
        catalog.sort(Some(SortOption::NameAsc));
        catalog.search("an");
        assert_eq!(ids(catalog.view()), vec![2, 3]); // seed order, not sorted
    }

    #[test]
    fn test_sort_name_asc() {
        let mut catalog = sample_catalog();
        catalog.sort(Some(SortOption::NameAsc));
        assert_eq!(
            names(catalog.view()),
            vec![Some("Ann"), Some("annotated zed"), Some("Zed"), None]
        );
    }

    #[test]
    fn test_sort_name_desc() {
        let mut catalog = sample_catalog();
        catalog.sort(Some(SortOption::NameDesc));
        // Reversed comparator: untitled first, then titles Z→A.
        assert_eq!(
            names(catalog.view()),
            vec![None, Some("Zed"), Some("annotated zed"), Some("Ann")]
        );
    }

    #[test]
    fn test_sort_year_orderings() {
        let mut catalog = sample_catalog();
        catalog.sort(Some(SortOption::YearAsc));
        assert_eq!(ids(catalog.view()), vec![4, 3, 1, 2]);
        catalog.sort(Some(SortOption::YearDesc));
        assert_eq!(ids(catalog.view()), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_sort_none_is_a_no_op() {
        let mut catalog = sample_catalog();
        catalog.search("zed");
        let before = ids(catalog.view());
        catalog.sort(None);
        assert_eq!(ids(catalog.view()), before);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut catalog = Catalog::new(vec![
            book(1, Some("Dune"), 1965),
            book(2, Some("dune"), 1984),
            book(3, Some("DUNE"), 2021),
        ]);
        catalog.sort(Some(SortOption::NameAsc));
        // All three compare equal case-insensitively: seed order preserved.
        assert_eq!(ids(catalog.view()), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_never_changes_membership() {
        let mut catalog = sample_catalog();
        catalog.search("zed");
        let mut before = ids(catalog.view());
        catalog.sort(Some(SortOption::YearDesc));
        let mut after = ids(catalog.view());
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_composes_with_preceding_search() {
        let mut catalog = sample_catalog();
        catalog.search("an");
        catalog.sort(Some(SortOption::YearAsc));
        assert_eq!(ids(catalog.view()), vec![3, 2]);
    }

    #[test]
    fn test_toggle_favorite_flips_exactly_one_record() {
        let mut catalog = sample_catalog();
        catalog.toggle_favorite(2);
        let favorites: Vec<u32> = catalog
            .view()
            .iter()
            .filter(|b| b.is_favorite)
            .map(|b| b.id)
            .collect();
        assert_eq!(favorites, vec![2]);
    }

    #[test]
    fn test_toggle_favorite_twice_round_trips() {
        let mut catalog = sample_catalog();
        let before = catalog.view().to_vec();
        catalog.toggle_favorite(3);
        catalog.toggle_favorite(3);
        assert_eq!(catalog.view(), &before[..]);
    }

    #[test]
    fn test_toggle_favorite_unknown_id_is_a_no_op() {
        let mut catalog = sample_catalog();
        let before = catalog.view().to_vec();
        catalog.toggle_favorite(999);
        assert_eq!(catalog.view(), &before[..]);
    }

    #[test]
    fn test_toggle_favorite_preserves_order() {
        let mut catalog = sample_catalog();
        catalog.sort(Some(SortOption::NameAsc));
        let before = ids(catalog.view());
        catalog.toggle_favorite(1);
        assert_eq!(ids(catalog.view()), before);
    }

    #[test]
    fn test_toggle_does_not_touch_the_seed() {
        let mut catalog = sample_catalog();
        catalog.toggle_favorite(1);
        // A fresh search rebuilds from the seed, where nothing was flipped.
        catalog.search("");
        assert!(catalog.view().iter().all(|b| !b.is_favorite));
    }

    #[test]
    fn test_end_to_end_sort_then_search_runs_against_seed() {
        // Sort by name, then search "an": the result comes from the seed
        // regardless of the prior sort.
        let mut catalog = Catalog::new(vec![
            book(1, Some("Zed"), 2000),
            book(2, Some("Ann"), 2010),
        ]);
        catalog.sort(Some(SortOption::NameAsc));
        assert_eq!(names(catalog.view()), vec![Some("Ann"), Some("Zed")]);
        catalog.search("an");
        assert_eq!(ids(catalog.view()), vec![2]);
    }

    #[test]
    fn test_name_desc_reverses_name_asc_as_a_set() {
        let mut a = sample_catalog();
        let mut d = sample_catalog();
        a.sort(Some(SortOption::NameAsc));
        d.sort(Some(SortOption::NameDesc));
        let mut asc = ids(a.view());
        let mut desc = ids(d.view());
        asc.sort_unstable();
        desc.sort_unstable();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_option_parse() {
        assert_eq!(SortOption::parse("name_asc"), Some(SortOption::NameAsc));
        assert_eq!(SortOption::parse("name_desc"), Some(SortOption::NameDesc));
        assert_eq!(SortOption::parse("year_asc"), Some(SortOption::YearAsc));
        assert_eq!(SortOption::parse("year_desc"), Some(SortOption::YearDesc));
        assert_eq!(SortOption::parse("price_asc"), None);
        assert_eq!(SortOption::parse(""), None);
    }

    #[test]
    fn test_sort_option_serde_round_trip() {
        let toml_str = "order = \"year_desc\"\n";
        #[derive(serde::Deserialize)]
        struct Wrapper {
            order: SortOption,
        }
        let w: Wrapper = toml::from_str(toml_str).unwrap();
        assert_eq!(w.order, SortOption::YearDesc);
    }

    #[test]
    fn test_is_favorite_lookup() {
        let mut catalog = sample_catalog();
        assert_eq!(catalog.is_favorite(1), Some(false));
        catalog.toggle_favorite(1);
        assert_eq!(catalog.is_favorite(1), Some(true));
        assert_eq!(catalog.is_favorite(999), None);
    }
}
