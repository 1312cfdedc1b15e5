use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

use crate::format::{format_memory, format_percent};
use crate::system::cpu::CpuUsage;
use crate::system::memory::MemorySnapshot;
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    cpu_usage: CpuUsage,
    memory: &MemorySnapshot,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_cpu(frame, chunks[0], cpu_usage, theme);
    render_memory(frame, chunks[1], memory, theme);
}

fn titled_block(title: &'static str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ))
}

fn render_cpu(frame: &mut Frame, area: Rect, cpu_usage: CpuUsage, theme: &Theme) {
    let percent = match cpu_usage {
        CpuUsage::Percent(p) => Some(p),
        CpuUsage::Unavailable => None,
    };
    let line = Line::from(vec![
        Span::styled("CPU Usage: ", Style::default().fg(theme.cpu)),
        Span::styled(
            format_percent(percent),
            Style::default().fg(theme.cpu).add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(titled_block(" CPU ", theme)),
        area,
    );
}

fn render_memory(frame: &mut Frame, area: Rect, memory: &MemorySnapshot, theme: &Theme) {
    let gauge = Gauge::default()
        .block(titled_block(" Memory ", theme))
        .gauge_style(Style::default().fg(theme.memory).bg(theme.gauge_unfilled))
        .ratio(memory.used_ratio())
        .label(format_memory(memory.used_mb(), memory.total_mb()));

    frame.render_widget(gauge, area);
}
