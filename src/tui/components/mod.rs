//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, mirroring how the rest of the TUI is built:
//!
//! - **Stateless (props-based)**: `TitleBar` and `BookCard` receive all
//!   their data as fields/parameters and just render it.
//! - **Stateful (event-driven)**: `SearchBox`, `BookGrid`, and `SortPicker`
//!   keep persistent state (`*State` structs living in `TuiState`) and emit
//!   high-level events the run loop turns into core `Action`s.
//!
//! Each component file is self-contained: state types, event types,
//! rendering, event handling, and tests live together.

pub mod book_card;
pub mod book_grid;
pub mod search_box;
pub mod sort_picker;
pub mod title_bar;

pub use book_grid::{BookGrid, BookGridState};
pub use search_box::{SearchBox, SearchEvent};
pub use sort_picker::{SortPicker, SortPickerEvent, SortPickerState};
pub use title_bar::TitleBar;
