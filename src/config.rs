use crate::error::ConfigError;
use crate::grid::GridSize;

/// Cells per side of the default playing field.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest grid that fits the starting snake with room to turn.
pub const MIN_GRID_SIZE: u16 = 4;

/// Largest grid that still renders in a reasonable terminal.
pub const MAX_GRID_SIZE: u16 = 200;

/// Segments in a freshly reset snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Tick interval at the start of a session, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 150;

/// Tick interval reduction per food eaten, in milliseconds.
pub const TICK_INTERVAL_STEP_MS: u64 = 5;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 80;

/// Score granted per food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Tunables for one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub initial_tick_interval_ms: u64,
    pub tick_interval_step_ms: u64,
    pub min_tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::square(DEFAULT_GRID_SIZE),
            initial_tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
            tick_interval_step_ms: TICK_INTERVAL_STEP_MS,
            min_tick_interval_ms: MIN_TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Default tunables on a grid of `size` cells per side.
    #[must_use]
    pub fn with_grid_size(size: u16) -> Self {
        Self {
            grid: GridSize::square(size),
            ..Self::default()
        }
    }

    /// Rejects configurations the session cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.grid.size;
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(ConfigError::GridSize {
                size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }

        if self.min_tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickFloor);
        }

        if self.initial_tick_interval_ms < self.min_tick_interval_ms {
            return Err(ConfigError::TickIntervalBelowFloor {
                initial_ms: self.initial_tick_interval_ms,
                floor_ms: self.min_tick_interval_ms,
            });
        }

        Ok(())
    }

    /// Interval after one more food, given the current one.
    #[must_use]
    pub fn next_tick_interval_ms(&self, current_ms: u64) -> u64 {
        current_ms
            .saturating_sub(self.tick_interval_step_ms)
            .max(self.min_tick_interval_ms)
    }
}
