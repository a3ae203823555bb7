use std::time::Duration;

use log::{debug, info};

use crate::collision::{Collision, check_collision};
use crate::config::GameConfig;
use crate::food::{Food, FoodSpawner};
use crate::input::{Direction, GameInput};
use crate::snake::Snake;
use crate::view::{self, BoardView, ControlLabel, ScoreReport, Segment, SegmentKind};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Result of one `tick` call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed.
    Ignored,
    Moved,
    Ate { food: Food },
    Collided(Collision),
    /// The last free cell was eaten; the session is over.
    BoardFilled,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    snake: Snake,
    food: Option<Food>,
    spawner: FoodSpawner,
    status: GameStatus,
    score: u32,
    high_score: u32,
    tick_interval_ms: u64,
    tick_count: u64,
    has_played_before: bool,
    death_reason: Option<Collision>,
}

impl GameSession {
    /// Creates an idle session with a freshly placed snake and food.
    #[must_use]
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        Self::with_spawner(config, high_score, FoodSpawner::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, high_score: u32, seed: u64) -> Self {
        Self::with_spawner(config, high_score, FoodSpawner::from_seed(seed))
    }

    /// Creates an idle session around an explicit snake and food.
    ///
    /// `food` must not lie on `snake`. Later spawns draw from `seed`.
    #[must_use]
    pub fn from_parts(
        config: GameConfig,
        snake: Snake,
        food: Food,
        high_score: u32,
        seed: u64,
    ) -> Self {
        debug_assert!(!snake.contains(food.position));

        Self {
            config,
            snake,
            food: Some(food),
            spawner: FoodSpawner::from_seed(seed),
            status: GameStatus::Idle,
            score: 0,
            high_score,
            tick_interval_ms: config.initial_tick_interval_ms,
            tick_count: 0,
            has_played_before: false,
            death_reason: None,
        }
    }

    fn with_spawner(config: GameConfig, high_score: u32, mut spawner: FoodSpawner) -> Self {
        let snake = Snake::initial(config.grid);
        let food = spawner.spawn(config.grid, &snake);

        Self {
            config,
            snake,
            food: Some(food),
            spawner,
            status: GameStatus::Idle,
            score: 0,
            high_score,
            tick_interval_ms: config.initial_tick_interval_ms,
            tick_count: 0,
            has_played_before: false,
            death_reason: None,
        }
    }

    /// Idle -> Running. Returns whether the transition happened.
    ///
    /// Idle is only entered with a freshly laid out board, so the board is
    /// kept as is.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::Idle {
            return false;
        }

        self.score = 0;
        self.tick_interval_ms = self.config.initial_tick_interval_ms;
        self.has_played_before = true;
        self.status = GameStatus::Running;

        info!("game started on {0}x{0} grid", self.config.grid.size);
        true
    }

    /// Running -> Paused.
    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        self.status = GameStatus::Paused;
        info!("game paused at score {}", self.score);
        true
    }

    /// Paused -> Running.
    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }

        self.status = GameStatus::Running;
        info!("game resumed");
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::Idle | GameStatus::GameOver => false,
        }
    }

    /// Discards the current game and returns to Idle with a fresh board.
    ///
    /// Ignored while a game is in progress. The high score survives.
    pub fn restart(&mut self) -> bool {
        if matches!(self.status, GameStatus::Running | GameStatus::Paused) {
            return false;
        }

        self.reset_board();
        self.score = 0;
        self.tick_interval_ms = self.config.initial_tick_interval_ms;
        self.has_played_before = false;
        self.death_reason = None;
        self.status = GameStatus::Idle;

        info!("game reset");
        true
    }

    /// Buffers a direction for the next tick. Returns whether it was kept.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        match self.status {
            GameStatus::Running | GameStatus::Paused => self.snake.set_pending_direction(direction),
            GameStatus::Idle | GameStatus::GameOver => false,
        }
    }

    /// Applies one external input event. Returns whether it changed anything.
    pub fn apply_input(&mut self, input: GameInput) -> bool {
        match input {
            GameInput::Direction(direction) => self.set_direction(direction),
            GameInput::Pause => self.toggle_pause(),
            GameInput::Confirm => match self.status {
                GameStatus::Idle => self.start(),
                GameStatus::Paused => self.resume(),
                GameStatus::GameOver => self.restart(),
                GameStatus::Running => false,
            },
            GameInput::Quit => false,
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Ignored;
        }

        self.tick_count += 1;

        let grid = self.config.grid;
        let head = self.snake.steer();
        if let Some(collision) = check_collision(head, &self.snake, grid) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(collision);
            info!(
                "game over after {} ticks: {collision:?} at ({}, {}), score {}",
                self.tick_count, head.x, head.y, self.score
            );
            return TickOutcome::Collided(collision);
        }

        self.snake.push_head(head);

        let Some(food) = self.food.filter(|food| food.position == head) else {
            self.snake.shrink_tail();
            return TickOutcome::Moved;
        };

        self.score += food.points();
        self.high_score = self.high_score.max(self.score);
        self.tick_interval_ms = self.config.next_tick_interval_ms(self.tick_interval_ms);
        debug!(
            "ate food at ({}, {}); score {}, interval {}ms",
            head.x, head.y, self.score, self.tick_interval_ms
        );

        if self.snake.len() >= grid.total_cells() {
            self.food = None;
            self.status = GameStatus::GameOver;
            info!("board filled, final score {}", self.score);
            return TickOutcome::BoardFilled;
        }

        let next = self.spawner.spawn(grid, &self.snake);
        self.food = Some(next);
        TickOutcome::Ate { food: next }
    }

    fn reset_board(&mut self) {
        self.snake.reset(self.config.grid);
        self.food = Some(self.spawner.spawn(self.config.grid, &self.snake));
        self.tick_count = 0;
    }

    /// Snapshot for the render collaborator.
    #[must_use]
    pub fn board(&self) -> BoardView {
        let segments = self
            .snake
            .segments()
            .enumerate()
            .map(|(index, cell)| Segment {
                cell: *cell,
                kind: if index == 0 {
                    SegmentKind::Head
                } else {
                    SegmentKind::Body
                },
            })
            .collect();

        BoardView {
            grid: self.config.grid,
            segments,
            food: self.food.map(|food| food.position),
            heading: self.snake.direction(),
        }
    }

    #[must_use]
    pub fn score_report(&self) -> ScoreReport {
        ScoreReport {
            score: self.score,
            high_score: self.high_score,
        }
    }

    #[must_use]
    pub fn control_label(&self) -> ControlLabel {
        view::control_label(self.status)
    }

    /// Delay the scheduler should wait before the next tick.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn has_played_before(&self) -> bool {
        self.has_played_before
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<Collision> {
        self.death_reason
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Option<Food> {
        self.food
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use crate::collision::Collision;
    use crate::config::GameConfig;
    use crate::food::Food;
    use crate::grid::Cell;
    use crate::input::{Direction, GameInput};
    use crate::snake::Snake;
    use crate::view::{ControlLabel, SegmentKind};

    use super::{GameSession, GameStatus, TickOutcome};

    fn running(snake: Snake, food: Cell) -> GameSession {
        running_on(GameConfig::default(), snake, food)
    }

    fn running_on(config: GameConfig, snake: Snake, food: Cell) -> GameSession {
        let mut session = GameSession::from_parts(config, snake, Food::new(food), 0, 1);
        assert!(session.start());
        session
    }

    #[test]
    fn new_session_is_idle_and_ignores_ticks() {
        let mut session = GameSession::new_with_seed(GameConfig::default(), 0, 3);

        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.tick(), TickOutcome::Ignored);
        assert_eq!(session.tick_count(), 0);
        assert!(!session.has_played_before());
    }

    #[test]
    fn start_marks_session_as_played() {
        let mut session = GameSession::new_with_seed(GameConfig::default(), 0, 3);

        assert!(session.start());
        assert!(session.has_played_before());
        assert_eq!(session.control_label(), ControlLabel::Disabled);
        assert!(!session.start());
    }

    #[test]
    fn pause_and_resume_gate_ticks() {
        let mut session = running(Snake::initial(GameConfig::default().grid), Cell::new(0, 0));

        assert!(session.pause());
        assert_eq!(session.tick(), TickOutcome::Ignored);
        assert_eq!(session.snake().head(), Cell::new(10, 10));

        assert!(session.resume());
        assert_eq!(session.tick(), TickOutcome::Moved);
        assert_eq!(session.snake().head(), Cell::new(11, 10));
    }

    #[test]
    fn control_calls_in_wrong_state_are_ignored() {
        let mut session = GameSession::new_with_seed(GameConfig::default(), 0, 3);

        assert!(!session.pause());
        assert!(!session.resume());
        assert!(!session.toggle_pause());
        assert!(!session.set_direction(Direction::Up));
        assert_eq!(session.status(), GameStatus::Idle);

        session.start();
        assert!(!session.restart());
        assert_eq!(session.status(), GameStatus::Running);
    }

    #[test]
    fn direction_buffers_while_paused() {
        let mut session = running(Snake::initial(GameConfig::default().grid), Cell::new(0, 0));

        session.pause();
        assert!(session.set_direction(Direction::Down));
        session.resume();
        session.tick();

        assert_eq!(session.snake().head(), Cell::new(10, 11));
    }

    #[test]
    fn eating_grows_scores_and_speeds_up() {
        let mut session = running(Snake::initial(GameConfig::default().grid), Cell::new(11, 10));

        let outcome = session.tick();

        let TickOutcome::Ate { food } = outcome else {
            panic!("expected food to be eaten, got {outcome:?}");
        };
        assert_eq!(session.score(), 10);
        assert_eq!(session.high_score(), 10);
        assert_eq!(session.snake().len(), 4);
        assert_eq!(session.tick_interval_ms(), 145);
        assert!(!session.snake().contains(food.position));
        assert_eq!(session.food(), Some(food));
    }

    #[test]
    fn self_bite_keeps_pre_collision_body() {
        let body = vec![
            Cell::new(2, 2),
            Cell::new(1, 2),
            Cell::new(1, 3),
            Cell::new(2, 3),
            Cell::new(3, 3),
            Cell::new(3, 2),
        ];
        let mut session = running(
            Snake::from_segments(body.clone(), Direction::Right).expect("body is non-empty"),
            Cell::new(15, 15),
        );

        assert_eq!(session.tick(), TickOutcome::Collided(Collision::SelfBite));
        assert_eq!(session.status(), GameStatus::GameOver);
        assert_eq!(session.death_reason(), Some(Collision::SelfBite));
        assert_eq!(session.snake().segments().copied().collect::<Vec<_>>(), body);
    }

    #[test]
    fn interval_never_drops_below_floor() {
        let config = GameConfig::with_grid_size(40);
        let mut session = running_on(config, Snake::initial(config.grid), Cell::new(0, 0));

        let mut previous = session.tick_interval_ms();
        for _ in 0..18 {
            session.food = Some(Food::new(session.snake().head().stepped(Direction::Right)));
            assert!(matches!(session.tick(), TickOutcome::Ate { .. }));
            assert!(session.tick_interval_ms() <= previous);
            assert!(session.tick_interval_ms() >= config.min_tick_interval_ms);
            previous = session.tick_interval_ms();
        }

        assert_eq!(previous, 80);
        assert_eq!(session.score(), 180);
        assert_eq!(session.snake().len(), 21);
    }

    #[test]
    fn restart_keeps_high_score() {
        let mut session = running(Snake::initial(GameConfig::default().grid), Cell::new(11, 10));
        session.tick();
        while session.status() == GameStatus::Running {
            session.tick();
        }
        let best = session.high_score();
        assert!(best >= 10);

        assert!(session.restart());

        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), best);
        assert_eq!(session.tick_interval_ms(), 150);
        assert!(!session.has_played_before());
        assert_eq!(session.death_reason(), None);
        assert_eq!(session.control_label(), ControlLabel::Start);
    }

    #[test]
    fn stored_high_score_is_kept_until_beaten() {
        let config = GameConfig::default();
        let mut session = GameSession::from_parts(
            config,
            Snake::initial(config.grid),
            Food::new(Cell::new(11, 10)),
            15,
            4,
        );
        session.start();
        assert_eq!(session.score_report().high_score, 15);

        session.tick();
        assert_eq!(session.score(), 10);
        assert_eq!(session.high_score(), 15);

        session.food = Some(Food::new(Cell::new(12, 10)));
        session.tick();
        assert_eq!(session.score(), 20);
        assert_eq!(session.high_score(), 20);
    }

    #[test]
    fn start_keeps_the_board_laid_out_by_restart() {
        let mut session = running(Snake::initial(GameConfig::default().grid), Cell::new(0, 0));
        while session.status() == GameStatus::Running {
            session.tick();
        }
        session.restart();
        let food = session.food();
        let layout: Vec<Cell> = session.snake().segments().copied().collect();

        assert!(session.start());

        assert_eq!(session.food(), food);
        assert_eq!(session.snake().segments().copied().collect::<Vec<_>>(), layout);
        assert_eq!(session.tick_count(), 0);
    }

    #[test]
    fn apply_input_reports_changes() {
        let mut session = running(Snake::initial(GameConfig::default().grid), Cell::new(0, 0));

        assert!(session.apply_input(GameInput::Direction(Direction::Up)));
        // Still facing right, so left is a reversal.
        assert!(!session.apply_input(GameInput::Direction(Direction::Left)));
        assert!(!session.apply_input(GameInput::Confirm));
        assert!(!session.apply_input(GameInput::Quit));
        assert!(session.apply_input(GameInput::Pause));
        assert_eq!(session.status(), GameStatus::Paused);
    }

    #[test]
    fn filling_the_board_ends_without_spawning() {
        let config = GameConfig::with_grid_size(4);
        // Serpentine covering every cell but (0, 0), head next to it.
        let body = vec![
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(3, 0),
            Cell::new(3, 1),
            Cell::new(2, 1),
            Cell::new(1, 1),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
            Cell::new(2, 2),
            Cell::new(3, 2),
            Cell::new(3, 3),
            Cell::new(2, 3),
            Cell::new(1, 3),
            Cell::new(0, 3),
        ];
        let snake = Snake::from_segments(body, Direction::Left).expect("body is non-empty");
        let mut session = GameSession::from_parts(config, snake, Food::new(Cell::new(0, 0)), 0, 9);
        session.start();

        assert_eq!(session.tick(), TickOutcome::BoardFilled);
        assert_eq!(session.status(), GameStatus::GameOver);
        assert_eq!(session.food(), None);
        assert_eq!(session.death_reason(), None);
        assert_eq!(session.snake().len(), 16);
    }

    #[test]
    fn confirm_walks_through_lifecycle() {
        let mut session = running(Snake::initial(GameConfig::default().grid), Cell::new(0, 0));
        session.apply_input(GameInput::Pause);
        assert_eq!(session.status(), GameStatus::Paused);

        session.apply_input(GameInput::Confirm);
        assert_eq!(session.status(), GameStatus::Running);

        for _ in 0..20 {
            session.tick();
        }
        assert_eq!(session.status(), GameStatus::GameOver);

        session.apply_input(GameInput::Confirm);
        assert_eq!(session.status(), GameStatus::Idle);
        session.apply_input(GameInput::Confirm);
        assert_eq!(session.status(), GameStatus::Running);
    }

    #[test]
    fn board_view_tags_only_the_head() {
        let session = GameSession::new_with_seed(GameConfig::default(), 0, 8);
        let board = session.board();

        assert_eq!(board.segments.len(), 3);
        assert_eq!(board.segments[0].kind, SegmentKind::Head);
        assert!(
            board.segments[1..]
                .iter()
                .all(|segment| segment.kind == SegmentKind::Body)
        );
        assert_eq!(board.heading, Direction::Right);
        let food = board.food.expect("fresh board has food");
        assert!(board.segments.iter().all(|segment| segment.cell != food));
    }
}
