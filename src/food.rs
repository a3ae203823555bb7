use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FOOD_REWARD;
use crate::grid::{Cell, GridSize};
use crate::snake::Snake;

/// Food currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    #[must_use]
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        FOOD_REWARD
    }
}

/// Draws uniformly random cells until one is not occupied by `snake`.
///
/// Never returns while the snake covers the whole grid; callers check for a
/// full board first.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Cell {
    debug_assert!(snake.len() < grid.total_cells());

    let size = i32::from(grid.size);
    loop {
        let candidate = Cell::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if !snake.contains(candidate) {
            return candidate;
        }
    }
}

/// Seedable source of food placements.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    /// Deterministic spawner for tests and replays.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Spawns food in an unoccupied cell.
    #[must_use]
    pub fn spawn(&mut self, grid: GridSize, snake: &Snake) -> Food {
        Food::new(spawn_position(&mut self.rng, grid, snake))
    }
}
