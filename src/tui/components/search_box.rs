//! # SearchBox Component
//!
//! Single-line text input for the search term. Every edit emits
//! `SearchEvent::Changed` so the catalog re-filters live, mirroring the
//! header search field of the page this app replaces.
//!
//! The buffer is internal state; `dimmed` is a prop from the current input
//! mode (dim while the user is browsing the grid instead of typing).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The search term changed; carries the full new term.
    Changed(String),
    /// The box was emptied (Ctrl+U).
    Cleared,
}

pub struct SearchBox {
    /// Current search term (internal state).
    pub buffer: String,
    /// Byte offset of the cursor within `buffer`.
    cursor: usize,
    /// Dim the box when focus is on the grid (prop).
    pub dimmed: bool,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            dimmed: false,
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut prev = pos - 1;
    while !s.is_char_boundary(prev) {
        prev -= 1;
    }
    prev
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut next = pos + 1;
    while next < s.len() && !s.is_char_boundary(next) {
        next += 1;
    }
    next
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title("Search");

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new("Type to filter by title")
                .style(style.add_modifier(Modifier::DIM))
                .block(block)
        } else {
            Paragraph::new(self.buffer.as_str()).style(style).block(block)
        };
        frame.render_widget(paragraph, area);

        if !self.dimmed {
            // Place the terminal cursor inside the border at the edit point.
            let prefix_width = self.buffer[..self.cursor].width() as u16;
            let cursor_x = (area.x + 1 + prefix_width).min(area.x + area.width.saturating_sub(2));
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                // Search terms are one line; strip any pasted newlines.
                let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(SearchEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::ClearSearch => {
                if self.buffer.is_empty() {
                    None
                } else {
                    self.buffer.clear();
                    self.cursor = 0;
                    Some(SearchEvent::Cleared)
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_emits_changed_with_full_term() {
        let mut search = SearchBox::new();
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('g')),
            Some(SearchEvent::Changed("g".to_string()))
        );
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('a')),
            Some(SearchEvent::Changed("ga".to_string()))
        );
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let mut search = SearchBox::new();
        search.handle_event(&TuiEvent::InputChar('a'));
        search.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("a".to_string()))
        );
        assert_eq!(search.handle_event(&TuiEvent::Backspace), Some(SearchEvent::Changed(String::new())));
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_cursor_movement_and_mid_buffer_insert() {
        let mut search = SearchBox::new();
        for c in "ac".chars() {
            search.handle_event(&TuiEvent::InputChar(c));
        }
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(search.buffer, "abc");
    }

    #[test]
    fn test_multibyte_editing_stays_on_char_boundaries() {
        let mut search = SearchBox::new();
        for c in "bé".chars() {
            search.handle_event(&TuiEvent::InputChar(c));
        }
        search.handle_event(&TuiEvent::Backspace);
        assert_eq!(search.buffer, "b");
    }

    #[test]
    fn test_clear_emits_cleared_once() {
        let mut search = SearchBox::new();
        search.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(search.handle_event(&TuiEvent::ClearSearch), Some(SearchEvent::Cleared));
        assert_eq!(search.handle_event(&TuiEvent::ClearSearch), None);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut search = SearchBox::new();
        let res = search.handle_event(&TuiEvent::Paste("ga\ntsby".to_string()));
        assert_eq!(res, Some(SearchEvent::Changed("gatsby".to_string())));
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search = SearchBox::new();

        terminal.draw(|f| search.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Type to filter by title"));
        assert!(text.contains("Search"));
    }
}
