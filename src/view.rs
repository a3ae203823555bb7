//! Plain snapshots handed to the render and score collaborators.

use crate::game::GameStatus;
use crate::grid::{Cell, GridSize};
use crate::input::Direction;

/// Visual variant of one snake cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SegmentKind {
    Head,
    Body,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub cell: Cell,
    pub kind: SegmentKind,
}

/// Everything the renderer needs to draw the playing field.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardView {
    pub grid: GridSize,
    /// Head first.
    pub segments: Vec<Segment>,
    /// `None` only once the snake fills the grid.
    pub food: Option<Cell>,
    pub heading: Direction,
}

/// Current score and the best score seen so far, this session included.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScoreReport {
    pub score: u32,
    pub high_score: u32,
}

/// State of the start/restart control.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ControlLabel {
    /// A game is in progress (running or paused).
    Disabled,
    Start,
    Restart,
}

impl ControlLabel {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Disabled => "Playing...",
            Self::Start => "Start",
            Self::Restart => "Restart",
        }
    }
}

/// Maps a session status onto the control it should show.
#[must_use]
pub fn control_label(status: GameStatus) -> ControlLabel {
    match status {
        GameStatus::Running | GameStatus::Paused => ControlLabel::Disabled,
        GameStatus::Idle => ControlLabel::Start,
        GameStatus::GameOver => ControlLabel::Restart,
    }
}
