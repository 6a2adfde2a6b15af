use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{self, DeathReason};
use crate::config::{GridSize, START_POSITION};
use crate::food::spawn_position;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Heading of every fresh run.
pub const START_HEADING: Direction = Direction::Down;

/// Current high-level simulation state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What a single call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake translated by one cell.
    Moved,
    /// The head landed on the food; the snake grew and food respawned.
    Ate,
    /// The move was illegal and the run is now over.
    Collided(DeathReason),
    /// The run was already over; nothing changed.
    Halted,
}

/// Complete simulation state for one run.
///
/// Only [`GameState::tick`] and [`GameState::reset`] mutate it.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    food: Position,
    heading: Direction,
    score: u32,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    tick_count: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh run seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::fresh(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::fresh(bounds, StdRng::seed_from_u64(seed))
    }

    /// Creates a running state from explicit parts.
    ///
    /// `seed` drives every later food spawn.
    ///
    /// # Panics
    ///
    /// Panics when the food or any body cell lies outside `bounds`, or when
    /// two body cells coincide.
    #[must_use]
    pub fn from_parts(
        bounds: GridSize,
        snake: Snake,
        food: Position,
        heading: Direction,
        seed: u64,
    ) -> Self {
        assert!(
            food.is_within_bounds(bounds),
            "food {food:?} lies outside the grid"
        );
        let cells = snake.to_vec();
        for (index, cell) in cells.iter().enumerate() {
            assert!(
                cell.is_within_bounds(bounds),
                "snake cell {cell:?} lies outside the grid"
            );
            assert!(
                !cells[index + 1..].contains(cell),
                "snake cell {cell:?} appears twice"
            );
        }

        Self {
            snake,
            food,
            heading,
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            tick_count: 0,
            bounds,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn fresh(bounds: GridSize, mut rng: StdRng) -> Self {
        debug_assert!(START_POSITION.is_within_bounds(bounds));

        let food = spawn_position(&mut rng, bounds);
        debug!(
            "new run on {}x{} grid, food at {food:?}",
            bounds.width(),
            bounds.height()
        );

        Self {
            snake: Snake::new(START_POSITION),
            food,
            heading: START_HEADING,
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            tick_count: 0,
            bounds,
            rng,
        }
    }

    /// Replaces the whole run with a fresh one on the same grid.
    ///
    /// Valid at any time, including after game over. The random stream
    /// continues, so a seeded session stays reproducible across restarts.
    pub fn reset(&mut self) {
        info!(
            "reset after {} ticks with score {}",
            self.tick_count, self.score
        );
        let rng = self.rng.clone();
        *self = Self::fresh(self.bounds, rng);
    }

    /// Advances the simulation by one tick using `heading`.
    pub fn tick(&mut self, heading: Direction) -> TickOutcome {
        if self.status == GameStatus::GameOver {
            return TickOutcome::Halted;
        }

        let proposed = self.snake.head().step(heading);
        if let Err(reason) = collision::check(self.bounds, &self.snake, proposed) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(reason);
            info!(
                "game over at tick {}: {} (score {})",
                self.tick_count,
                reason.describe(),
                self.score
            );
            return TickOutcome::Collided(reason);
        }

        let ate = proposed == self.food;
        self.snake.advance(proposed, ate);
        self.heading = heading;
        self.tick_count += 1;

        if ate {
            self.score += 1;
            self.food = spawn_position(&mut self.rng, self.bounds);
            debug!(
                "food eaten at {proposed:?}, score {}, respawned at {:?}",
                self.score, self.food
            );
            return TickOutcome::Ate;
        }

        trace!("tick {} moved head to {proposed:?}", self.tick_count);
        TickOutcome::Moved
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Position {
        self.food
    }

    /// Heading applied by the most recent successful tick.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}
