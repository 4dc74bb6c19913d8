//! # BookGrid Component
//!
//! Scrollable, responsive grid of book cards — the main content area.
//!
//! Column count follows the terminal width (1–4 columns of at least
//! `MIN_CARD_WIDTH` cells), the way the page this replaces stepped its grid
//! across breakpoints. All cards share a fixed height, which keeps the
//! row/column arithmetic for selection and scrolling trivial.
//!
//! `BookGrid` is a transient component (created each frame) that wraps
//! `&'a mut BookGridState` (persistent state) and the current view (props).

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::book::Book;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::book_card::{BookCard, CARD_HEIGHT, MIN_CARD_WIDTH};
use crate::tui::event::TuiEvent;

/// Selection and scroll state for the grid.
/// Must be persisted in the parent TuiState.
pub struct BookGridState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Currently selected card index into the view (keyboard navigation)
    pub selected: Option<usize>,
    /// Column count from the last render (drives up/down navigation)
    pub columns: usize,
    /// Total content height from the last render (for scroll clamping)
    pub content_height: u16,
    /// Last known viewport height
    pub viewport_height: u16,
}

impl Default for BookGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookGridState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: None,
            columns: 1,
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Select the first card, if there is one.
    pub fn select_first(&mut self, len: usize) {
        self.selected = if len > 0 { Some(0) } else { None };
    }

    /// Keep the selection inside the view after the view shrinks.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
        } else if let Some(idx) = self.selected {
            if idx >= len {
                self.selected = Some(len - 1);
            }
        }
    }

    pub fn move_left(&mut self) {
        if let Some(idx) = self.selected {
            if idx > 0 {
                self.selected = Some(idx - 1);
            }
        }
    }

    pub fn move_right(&mut self, len: usize) {
        if let Some(idx) = self.selected {
            if idx + 1 < len {
                self.selected = Some(idx + 1);
            }
        }
    }

    pub fn move_up(&mut self) {
        if let Some(idx) = self.selected {
            if idx >= self.columns {
                self.selected = Some(idx - self.columns);
            }
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if let Some(idx) = self.selected {
            if idx + self.columns < len {
                self.selected = Some(idx + self.columns);
            }
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the selected card's row is fully visible.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        let row = (idx / self.columns.max(1)) as u16;
        let row_top = row * CARD_HEIGHT;
        let row_bottom = row_top + CARD_HEIGHT;
        let offset_y = self.scroll_state.offset().y;

        if row_top < offset_y {
            // Selected row is above the viewport — align its top edge.
            self.scroll_state.set_offset(Position { x: 0, y: row_top });
        } else if row_bottom > offset_y + self.viewport_height {
            // Selected row is below the viewport — align its bottom edge.
            let new_y = row_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset();
        let new_y = (current.y as i32 + delta).max(0) as u16;
        self.scroll_state.set_offset(Position {
            x: current.x,
            y: new_y,
        });
        self.clamp_scroll();
    }
}

impl EventHandler for BookGridState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let page = self.viewport_height.max(1) as i32;
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-1),
            TuiEvent::ScrollDown => self.scroll_by(1),
            TuiEvent::ScrollPageUp => self.scroll_by(-page),
            TuiEvent::ScrollPageDown => self.scroll_by(page),
            _ => return None,
        }
        Some(())
    }
}

/// Scrollable card grid. Created fresh each frame with references to
/// persistent state and the current view.
pub struct BookGrid<'a> {
    pub state: &'a mut BookGridState,
    pub books: &'a [Book],
    pub currency: &'a str,
}

impl<'a> BookGrid<'a> {
    pub fn new(state: &'a mut BookGridState, books: &'a [Book], currency: &'a str) -> Self {
        Self {
            state,
            books,
            currency,
        }
    }
}

/// Responsive column count for a given content width.
pub fn column_count(content_width: u16) -> usize {
    ((content_width / MIN_CARD_WIDTH).clamp(1, 4)) as usize
}

impl<'a> Component for BookGrid<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.books.is_empty() {
            // Valid state, not an error: the search just matched nothing.
            let empty = Paragraph::new("No books match your search.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            self.state.content_height = 0;
            self.state.viewport_height = area.height;
            self.state.clamp_selection(0);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let columns = column_count(content_width);
        let card_width = content_width / columns as u16;
        let rows = self.books.len().div_ceil(columns) as u16;
        let total_height = rows * CARD_HEIGHT;

        self.state.columns = columns;
        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_selection(self.books.len());
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, book) in self.books.iter().enumerate() {
            let col = (i % columns) as u16;
            let row = (i / columns) as u16;
            let card_rect = Rect::new(
                col * card_width,
                row * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            );
            let selected = self.state.selected == Some(i);
            let card = BookCard::new(book, self.currency, selected);
            scroll_view.render_widget(card.paragraph(card_width), card_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
