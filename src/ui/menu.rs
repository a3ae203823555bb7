use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::collision::Collision;
use crate::renderer::Screen;

/// Draws the idle screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, screen: &Screen) {
    let popup = centered_popup(area, 80, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("SNAKE").style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("High score: {}", screen.score.high_score)),
        Line::from(""),
        Line::from(format!("[Enter] {}", screen.control.text())),
        Line::from("[Q] Quit"),
        Line::from("Arrows/WASD to move").style(Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        popup,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 70, 35);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[Space]/[Enter] Resume"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, screen: &Screen) {
    let popup = centered_popup(area, 80, 50);
    frame.render_widget(Clear, popup);

    let score = screen.score.score;
    let is_new_high = score > screen.stored_high_score;
    let lines = vec![
        Line::from("GAME OVER").style(Style::default().fg(Color::Red)),
        Line::from(""),
        Line::from(format!("Final score: {score}")),
        Line::from(format!("High score: {}", screen.score.high_score)),
        Line::from(death_cause(screen.death_reason)),
        Line::from(if is_new_high { "New high score!" } else { "" }),
        Line::from(""),
        Line::from(format!("[Enter] {}", screen.control.text())),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn death_cause(reason: Option<Collision>) -> &'static str {
    match reason {
        Some(Collision::Wall) => "Cause: hit wall",
        Some(Collision::SelfBite) => "Cause: hit yourself",
        None => "Board cleared",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
