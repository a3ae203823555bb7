use crate::grid::{Cell, GridSize};
use crate::snake::Snake;

/// Why a candidate head is fatal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// Checks a candidate head against the walls, then against `body`.
///
/// `body` is the snake before the head is committed, tail included.
#[must_use]
pub fn check_collision(head: Cell, body: &Snake, grid: GridSize) -> Option<Collision> {
    if !grid.is_inside(head) {
        return Some(Collision::Wall);
    }

    if body.contains(head) {
        return Some(Collision::SelfBite);
    }

    None
}
