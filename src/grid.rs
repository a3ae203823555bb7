use crate::input::Direction;

/// Grid cell in logical coordinates.
///
/// Coordinates are signed so a candidate head may step one cell past an edge
/// before the collision check rejects it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square playing field, `size` cells per side.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub size: u16,
}

impl GridSize {
    #[must_use]
    pub const fn square(size: u16) -> Self {
        Self { size }
    }

    /// Returns true iff `0 <= x < size` and `0 <= y < size`.
    #[must_use]
    pub fn is_inside(self, cell: Cell) -> bool {
        let size = i32::from(self.size);
        (0..size).contains(&cell.x) && (0..size).contains(&cell.y)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }

    /// Middle cell, rounded towards the bottom-right on even sizes.
    #[must_use]
    pub fn center(self) -> Cell {
        let mid = i32::from(self.size / 2);
        Cell::new(mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, GridSize};
    use crate::input::Direction;

    #[test]
    fn inside_covers_exactly_the_square() {
        let grid = GridSize::square(20);

        assert!(grid.is_inside(Cell::new(0, 0)));
        assert!(grid.is_inside(Cell::new(19, 19)));
        assert!(!grid.is_inside(Cell::new(20, 0)));
        assert!(!grid.is_inside(Cell::new(0, 20)));
        assert!(!grid.is_inside(Cell::new(-1, 5)));
        assert!(!grid.is_inside(Cell::new(5, -1)));
    }

    #[test]
    fn stepping_applies_unit_delta() {
        let origin = Cell::new(4, 4);

        assert_eq!(origin.stepped(Direction::Up), Cell::new(4, 3));
        assert_eq!(origin.stepped(Direction::Down), Cell::new(4, 5));
        assert_eq!(origin.stepped(Direction::Left), Cell::new(3, 4));
        assert_eq!(origin.stepped(Direction::Right), Cell::new(5, 4));
    }

    #[test]
    fn center_of_default_grid() {
        assert_eq!(GridSize::square(20).center(), Cell::new(10, 10));
        assert_eq!(GridSize::square(20).total_cells(), 400);
    }
}
