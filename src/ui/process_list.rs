use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::format::truncate_unicode;
use crate::system::process::ProcessInfo;
use crate::ui::theme::Theme;

/// Kernel command names are at most 15 bytes, so this only bites on the
/// rare multi-byte or synthetic name.
pub const MAX_COMMAND_WIDTH: usize = 16;

pub fn render(frame: &mut Frame, area: Rect, processes: &[ProcessInfo], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " Processes ",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line> = if processes.is_empty() {
        vec![Line::from(Span::styled(
            "No processes",
            Style::default().fg(theme.text_secondary),
        ))]
    } else {
        processes.iter().map(|p| process_line(p, theme)).collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn process_line<'a>(process: &ProcessInfo, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("PID: {},", process.pid),
            Style::default().fg(theme.pid).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " Command: {}",
                truncate_unicode(&process.command, MAX_COMMAND_WIDTH)
            ),
            Style::default().fg(theme.text_primary),
        ),
    ])
}
