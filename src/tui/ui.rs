use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{BookGrid, SortPicker, TitleBar};
use crate::tui::{InputMode, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title_area, search_area, grid_area, help_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.catalog.view().len(),
        app.catalog.seed_len(),
        app.sort.map(|s| s.label()),
        app.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    tui.search_box.render(frame, search_area);

    let mut grid = BookGrid::new(&mut tui.grid, app.catalog.view(), &app.currency);
    grid.render(frame, grid_area);

    let help = match tui.input_mode {
        InputMode::Search => " type: filter   Enter/Esc: browse   Ctrl+S: sort   Ctrl+U: clear   Ctrl+C: quit",
        InputMode::Browse => " ←↑↓→: move   Enter/f: favourite   s: sort   /: search   q: quit",
    };
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    // Overlay goes last so it draws on top of everything.
    if let Some(ref mut picker_state) = tui.sort_picker {
        let mut picker = SortPicker::new(picker_state, app.sort);
        picker.render(frame, frame.area());
    }
}
