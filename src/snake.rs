use std::collections::VecDeque;

use crate::config::INITIAL_SNAKE_LENGTH;
use crate::grid::{Cell, GridSize};
use crate::input::{Direction, direction_change_is_valid};

/// Direction every fresh snake faces.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Snake body plus its applied and buffered directions.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    current: Direction,
    pending: Direction,
}

impl Snake {
    /// Creates the starting snake: three cells ending at the grid center,
    /// trailing to the left of the head.
    #[must_use]
    pub fn initial(grid: GridSize) -> Self {
        let head = grid.center();
        let trail = INITIAL_DIRECTION.opposite();

        let mut body = VecDeque::with_capacity(INITIAL_SNAKE_LENGTH);
        let mut cell = head;
        for _ in 0..INITIAL_SNAKE_LENGTH {
            body.push_back(cell);
            cell = cell.stepped(trail);
        }

        Self {
            body,
            current: INITIAL_DIRECTION,
            pending: INITIAL_DIRECTION,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty body.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
            current: direction,
            pending: direction,
        })
    }

    /// Restores the starting layout and direction.
    pub fn reset(&mut self, grid: GridSize) {
        *self = Self::initial(grid);
    }

    /// Buffers `direction` for the next tick.
    ///
    /// A reversal of the direction applied on the last tick is dropped. Any
    /// other input replaces the buffered one, so the most recent legal input
    /// before a tick wins. Returns whether the input was kept.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.current, direction) {
            return false;
        }

        self.pending = direction;
        true
    }

    /// Locks in the buffered direction and returns the cell the head would
    /// move to. The body is left untouched.
    pub fn steer(&mut self) -> Cell {
        self.current = self.pending;
        self.head().stepped(self.current)
    }

    /// Prepends `head` as the new front segment.
    pub fn push_head(&mut self, head: Cell) {
        self.body.push_front(head);
    }

    /// Steers and commits the new head without dropping the tail.
    pub fn advance(&mut self) -> Cell {
        let head = self.steer();
        self.push_head(head);
        head
    }

    /// Drops the last segment.
    pub fn shrink_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Direction applied on the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.current
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
