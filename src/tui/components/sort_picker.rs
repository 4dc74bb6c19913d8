//! # Sort Picker Component
//!
//! Centered overlay for choosing the grid ordering. Opened with Ctrl+S or
//! `s` while browsing. The first entry is "No sorting", which maps to
//! `None` and leaves the current order untouched.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SortPickerState` lives in `TuiState` (as an `Option`: None = hidden)
//! - `SortPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::catalog::SortOption;
use crate::tui::event::TuiEvent;

/// All selectable entries, "No sorting" first.
const ENTRIES: [Option<SortOption>; 5] = [
    None,
    Some(SortOption::NameAsc),
    Some(SortOption::NameDesc),
    Some(SortOption::YearAsc),
    Some(SortOption::YearDesc),
];

/// Persistent state for the sort picker overlay.
pub struct SortPickerState {
    pub selected: usize,
    pub list_state: ListState,
}

impl SortPickerState {
    /// Open the picker with the currently applied ordering highlighted.
    pub fn new(current: Option<SortOption>) -> Self {
        let selected = ENTRIES.iter().position(|e| *e == current).unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            list_state,
        }
    }

    /// Handle a key event, returning a SortPickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<SortPickerEvent> {
        match event {
            TuiEvent::Escape => Some(SortPickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(ENTRIES.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(SortPickerEvent::Select(ENTRIES[self.selected])),
            _ => None,
        }
    }
}

/// Events emitted by the sort picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortPickerEvent {
    Select(Option<SortOption>),
    Dismiss,
}

/// Transient render wrapper for the sort picker overlay.
pub struct SortPicker<'a> {
    state: &'a mut SortPickerState,
    current: Option<SortOption>,
}

impl<'a> SortPicker<'a> {
    pub fn new(state: &'a mut SortPickerState, current: Option<SortOption>) -> Self {
        Self { state, current }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, 9, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Sort by ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = ENTRIES
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let label = match entry {
                    Some(option) => option.label(),
                    None => "No sorting",
                };
                let is_active = *entry == self.current;
                let marker = if is_active { " *" } else { "" };

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::styled(format!("{label}{marker}"), style))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect of fixed height and percentage width.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_opens_on_current_ordering() {
        let state = SortPickerState::new(Some(SortOption::YearAsc));
        assert_eq!(ENTRIES[state.selected], Some(SortOption::YearAsc));

        let state = SortPickerState::new(None);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut state = SortPickerState::new(None);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, ENTRIES.len() - 1);
    }

    #[test]
    fn test_submit_selects_highlighted_entry() {
        let mut state = SortPickerState::new(None);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SortPickerEvent::Select(Some(SortOption::NameAsc)))
        );
    }

    #[test]
    fn test_submit_on_first_entry_selects_no_sorting() {
        let mut state = SortPickerState::new(Some(SortOption::NameDesc));
        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorUp);
        }
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SortPickerEvent::Select(None))
        );
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = SortPickerState::new(None);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(SortPickerEvent::Dismiss)
        );
    }

    #[test]
    fn test_render_lists_all_orderings() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = SortPickerState::new(Some(SortOption::NameAsc));

        terminal
            .draw(|f| {
                let mut picker = SortPicker::new(&mut state, Some(SortOption::NameAsc));
                picker.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("No sorting"));
        assert!(text.contains("Name (A-Z)"));
        assert!(text.contains("Year (newest first)"));
    }
}
