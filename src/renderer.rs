use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::collision::Collision;
use crate::game::{GameSession, GameStatus};
use crate::grid::{Cell, GridSize};
use crate::input::Direction;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};
use crate::view::{BoardView, ControlLabel, ScoreReport, SegmentKind};

/// Terminal columns per grid cell; keeps the board roughly square.
const CELL_WIDTH: u16 = 2;

const GLYPH_SNAKE_BODY: &str = "██";
const GLYPH_FOOD: &str = "()";
const GLYPH_SNAKE_HEAD_UP: &str = "▀▀";
const GLYPH_SNAKE_HEAD_DOWN: &str = "▄▄";
const GLYPH_SNAKE_HEAD_LEFT: &str = "◀█";
const GLYPH_SNAKE_HEAD_RIGHT: &str = "█▶";

/// Immutable snapshot of everything drawn in one frame.
#[derive(Debug, Clone)]
pub struct Screen {
    pub board: BoardView,
    pub score: ScoreReport,
    pub status: GameStatus,
    pub control: ControlLabel,
    pub death_reason: Option<Collision>,
    pub tick_interval_ms: u64,
    /// High score persisted before this game began.
    pub stored_high_score: u32,
}

impl Screen {
    #[must_use]
    pub fn capture(session: &GameSession, stored_high_score: u32) -> Self {
        Self {
            board: session.board(),
            score: session.score_report(),
            status: session.status(),
            control: session.control_label(),
            death_reason: session.death_reason(),
            tick_interval_ms: session.tick_interval_ms(),
            stored_high_score,
        }
    }
}

/// Renders the full game frame from a snapshot.
pub fn render(frame: &mut Frame<'_>, screen: &Screen) {
    let [board_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let play_area = board_rect(board_area, screen.board.grid);
    let block = Block::bordered().border_style(Style::new().fg(Color::White));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, &screen.board);
    render_snake(frame, inner, &screen.board);
    render_hud(frame, hud_area, screen);

    match screen.status {
        GameStatus::Idle => render_start_menu(frame, play_area, screen),
        GameStatus::Paused => render_pause_menu(frame, play_area),
        GameStatus::GameOver => render_game_over_menu(frame, play_area, screen),
        GameStatus::Running => {}
    }
}

fn board_rect(area: Rect, grid: GridSize) -> Rect {
    let width = grid.size.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = grid.size.saturating_add(2);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, board: &BoardView) {
    let Some(food) = board.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, board.grid, food) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::LightMagenta));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, board: &BoardView) {
    let buffer = frame.buffer_mut();

    for segment in &board.segments {
        let Some((x, y)) = logical_to_terminal(inner, board.grid, segment.cell) else {
            continue;
        };

        match segment.kind {
            SegmentKind::Head => buffer.set_string(
                x,
                y,
                head_glyph(board.heading),
                Style::new()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            SegmentKind::Body => {
                buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(Color::Green));
            }
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, grid: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !grid.is_inside(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x + CELL_WIDTH > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
