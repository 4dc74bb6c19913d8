//! # TitleBar Component
//!
//! Top status line: app name, how much of the catalog is in view, the
//! applied ordering, and a transient status message.
//!
//! Purely presentational — all fields are props, no internal state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Books currently in the working view.
    pub shown: usize,
    /// Books in the seed collection.
    pub total: usize,
    /// Label of the applied ordering, if any.
    pub sort_label: Option<&'static str>,
    /// Transient status text (e.g. "Added to favourites").
    pub status_message: String,
}

impl TitleBar {
    pub fn new(
        shown: usize,
        total: usize,
        sort_label: Option<&'static str>,
        status_message: String,
    ) -> Self {
        Self {
            shown,
            total,
            sort_label,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title_text = format!("bookrack — {} of {} books", self.shown, self.total);
        if let Some(label) = self.sort_label {
            title_text.push_str(&format!(" | sorted by {label}"));
        }
        if !self.status_message.is_empty() {
            title_text.push_str(&format!(" | {}", self.status_message));
        }
        frame.render_widget(Span::raw(title_text), area);
    }
}
