use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::renderer::Screen;

const FIELD_SEPARATOR: &str = "  ";

/// Renders the single status row under the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, screen: &Screen) {
    let fields = hud_fields(screen);
    let line = hud_line(&fields, usize::from(area.width));

    frame.render_widget(Paragraph::new(line), area);
}

fn hud_fields(screen: &Screen) -> [(&'static str, String); 4] {
    [
        ("Length", screen.board.segments.len().to_string()),
        ("Speed", format!("{}ms", screen.tick_interval_ms)),
        ("Score", screen.score.score.to_string()),
        ("Hi", screen.score.high_score.to_string()),
    ]
}

/// Right-aligns the fields, dropping the leftmost ones that do not fit.
fn hud_line(fields: &[(&'static str, String)], width: usize) -> Line<'static> {
    let mut start = 0;
    while start < fields.len() && fields_width(&fields[start..]) > width {
        start += 1;
    }

    let visible = &fields[start..];
    let padding = width.saturating_sub(fields_width(visible));

    let mut spans = vec![Span::raw(" ".repeat(padding))];
    for (index, (label, value)) in visible.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(FIELD_SEPARATOR));
        }
        spans.push(Span::styled(
            format!("{label} "),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            value.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

fn fields_width(fields: &[(&'static str, String)]) -> usize {
    let content: usize = fields
        .iter()
        .map(|(label, value)| label.width() + 1 + value.width())
        .sum();
    content + FIELD_SEPARATOR.width() * fields.len().saturating_sub(1)
}
