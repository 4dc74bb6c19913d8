//! # Actions
//!
//! Everything that can happen in bookrack becomes an `Action`.
//! User types in the search box? That's `Action::SearchChanged`.
//! User picks an ordering? That's `Action::SortSelected`.
//!
//! The `update()` function takes the current state and an action, applies
//! the corresponding catalog operation, and reports any side effect the
//! caller must perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: apply an action, assert on the view.

use log::debug;

use crate::core::catalog::SortOption;
use crate::core::state::App;

/// A user-driven state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The search term changed; re-filter from the seed.
    SearchChanged(String),
    /// An ordering was picked (None = "no sorting", leaves order as-is).
    SortSelected(Option<SortOption>),
    /// Flip the favourite flag of the book with this id.
    ToggleFavorite(u32),
    /// Empty the search box and restore the full seed.
    ClearSearch,
    Quit,
}

/// What the caller must do after an update. The catalog itself is
/// synchronous and infallible, so the only effect is quitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SearchChanged(term) => {
            app.catalog.search(&term);
            app.status_message = if app.catalog.view().is_empty() && !term.is_empty() {
                format!("No matches for \"{term}\"")
            } else {
                String::new()
            };
            app.search_term = term;
            Effect::None
        }
        Action::SortSelected(option) => {
            app.sort = option;
            app.catalog.sort(option);
            app.status_message = match option {
                Some(option) => format!("Sorted by {}", option.label()),
                None => String::from("Sorting cleared"),
            };
            Effect::None
        }
        Action::ToggleFavorite(id) => {
            app.catalog.toggle_favorite(id);
            app.status_message = match app.catalog.is_favorite(id) {
                Some(true) => String::from("Added to favourites"),
                Some(false) => String::from("Removed from favourites"),
                None => String::new(), // unknown id: view untouched
            };
            Effect::None
        }
        Action::ClearSearch => {
            app.search_term.clear();
            app.catalog.search("");
            app.status_message = String::new();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_search_changed_filters_and_records_term() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SearchChanged("gatsby".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.search_term, "gatsby");
        assert_eq!(app.catalog.view().len(), 1);
    }

    #[test]
    fn test_search_with_no_matches_sets_status() {
        let mut app = test_app();
        update(&mut app, Action::SearchChanged("qqq".to_string()));
        assert!(app.catalog.view().is_empty());
        assert_eq!(app.status_message, "No matches for \"qqq\"");
    }

    #[test]
    fn test_sort_selected_records_option_and_reorders() {
        let mut app = test_app();
        update(&mut app, Action::SortSelected(Some(SortOption::YearDesc)));
        assert_eq!(app.sort, Some(SortOption::YearDesc));
        let years: Vec<i32> = app.catalog.view().iter().map(|b| b.publish_year).collect();
        let mut expected = years.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(years, expected);
        assert_eq!(app.status_message, "Sorted by Year (newest first)");
    }

    #[test]
    fn test_sort_selected_none_clears_recorded_option() {
        let mut app = test_app();
        update(&mut app, Action::SortSelected(Some(SortOption::NameAsc)));
        let order: Vec<u32> = app.catalog.view().iter().map(|b| b.id).collect();
        update(&mut app, Action::SortSelected(None));
        assert_eq!(app.sort, None);
        // "No sorting" leaves the current order untouched.
        let after: Vec<u32> = app.catalog.view().iter().map(|b| b.id).collect();
        assert_eq!(order, after);
    }

    #[test]
    fn test_toggle_favorite_updates_status_both_ways() {
        let mut app = test_app();
        let id = app.catalog.view()[0].id;
        update(&mut app, Action::ToggleFavorite(id));
        assert_eq!(app.status_message, "Added to favourites");
        update(&mut app, Action::ToggleFavorite(id));
        assert_eq!(app.status_message, "Removed from favourites");
    }

    #[test]
    fn test_toggle_favorite_unknown_id_leaves_view_alone() {
        let mut app = test_app();
        let before: Vec<_> = app.catalog.view().to_vec();
        update(&mut app, Action::ToggleFavorite(9999));
        assert_eq!(app.catalog.view(), &before[..]);
    }

    #[test]
    fn test_clear_search_restores_full_seed() {
        let mut app = test_app();
        update(&mut app, Action::SearchChanged("gatsby".to_string()));
        update(&mut app, Action::ClearSearch);
        assert_eq!(app.search_term, "");
        assert_eq!(app.catalog.view().len(), app.catalog.seed_len());
    }

    #[test]
    fn test_quit_yields_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
