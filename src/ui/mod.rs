pub mod header;
pub mod process_list;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let snapshot = &app.snapshot;
    header::render(
        frame,
        chunks[0],
        snapshot.cpu_usage,
        &snapshot.memory,
        &app.theme,
    );
    process_list::render(frame, chunks[1], &snapshot.processes, &app.theme);
    statusbar::render(
        frame,
        chunks[2],
        &app.quit_key_label(),
        snapshot.processes.len(),
        &app.theme,
    );
}
