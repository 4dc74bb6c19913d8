//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core catalog logic could be re-wrapped by a different adapter
//! without touching anything under `core`.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an input event:
//! poll with a long timeout, drain all pending events, then draw once.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::book::Book;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BookGridState, SearchBox, SearchEvent, SortPickerEvent, SortPickerState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing edits the search box and re-filters live. Esc/Enter → Browse.
    Search,
    /// Arrow keys move the card selection. Typing auto-switches to Search.
    Browse,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub search_box: SearchBox,
    pub grid: BookGridState,
    // Modal input mode
    pub input_mode: InputMode,
    // Sort picker overlay (None = hidden)
    pub sort_picker: Option<SortPickerState>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            grid: BookGridState::new(),
            input_mode: InputMode::Search, // User expects to type immediately
            sort_picker: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,     // Scroll wheel over the grid
            EnableBracketedPaste,   // Paste into the search box
            Show,                   // Show cursor for search editing
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig, seed: Vec<Book>) -> std::io::Result<()> {
    let mut app = App::from_config(seed, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        // Sync SearchBox props with the current mode
        tui.search_box.dimmed = tui.input_mode != InputMode::Search;

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Ctrl+S opens the sort picker in any mode
            if matches!(event, TuiEvent::OpenSortPicker) {
                tui.sort_picker = Some(SortPickerState::new(app.sort));
                continue;
            }

            // When the sort picker is open, route all events to it
            if let Some(ref mut picker) = tui.sort_picker {
                if let Some(picker_event) = picker.handle_event(&event) {
                    match picker_event {
                        SortPickerEvent::Select(option) => {
                            update(&mut app, Action::SortSelected(option));
                            tui.sort_picker = None;
                        }
                        SortPickerEvent::Dismiss => {
                            tui.sort_picker = None;
                        }
                    }
                }
                continue;
            }

            // Scroll events always go to the grid regardless of mode
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.grid.handle_event(&event);
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Search => match event {
                    // Esc or Enter hands focus to the grid
                    TuiEvent::Escape | TuiEvent::Submit => {
                        tui.input_mode = InputMode::Browse;
                        if tui.grid.selected.is_none() {
                            tui.grid.select_first(app.catalog.view().len());
                        }
                    }
                    _ => match tui.search_box.handle_event(&event) {
                        Some(SearchEvent::Changed(term)) => {
                            update(&mut app, Action::SearchChanged(term));
                            tui.grid.clamp_selection(app.catalog.view().len());
                        }
                        Some(SearchEvent::Cleared) => {
                            update(&mut app, Action::ClearSearch);
                        }
                        None => {}
                    },
                },
                InputMode::Browse => {
                    let len = app.catalog.view().len();
                    match event {
                        TuiEvent::InputChar('q') => {
                            if update(&mut app, Action::Quit) == Effect::Quit {
                                should_quit = true;
                            }
                        }
                        TuiEvent::InputChar('s') => {
                            tui.sort_picker = Some(SortPickerState::new(app.sort));
                        }
                        TuiEvent::InputChar('/') => {
                            tui.input_mode = InputMode::Search;
                        }
                        // Enter or 'f' toggles the selected book's favourite
                        TuiEvent::InputChar('f') | TuiEvent::Submit => {
                            if let Some(idx) = tui.grid.selected {
                                if let Some(book) = app.catalog.view().get(idx) {
                                    let id = book.id;
                                    update(&mut app, Action::ToggleFavorite(id));
                                }
                            }
                        }
                        TuiEvent::CursorLeft => {
                            tui.grid.move_left();
                            tui.grid.scroll_to_selected();
                        }
                        TuiEvent::CursorRight => {
                            tui.grid.move_right(len);
                            tui.grid.scroll_to_selected();
                        }
                        TuiEvent::CursorUp => {
                            tui.grid.move_up();
                            tui.grid.scroll_to_selected();
                        }
                        TuiEvent::CursorDown => {
                            tui.grid.move_down(len);
                            tui.grid.scroll_to_selected();
                        }
                        TuiEvent::CursorHome => {
                            tui.grid.select_first(len);
                            tui.grid.scroll_to_selected();
                        }
                        // Typing auto-switches to Search mode and forwards the event
                        TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                            tui.input_mode = InputMode::Search;
                            if let Some(SearchEvent::Changed(term)) =
                                tui.search_box.handle_event(&event)
                            {
                                update(&mut app, Action::SearchChanged(term));
                                tui.grid.clamp_selection(app.catalog.view().len());
                            }
                        }
                        // Esc in Browse mode is a no-op
                        TuiEvent::Escape => {}
                        _ => {}
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
