use log::info;

use crate::config::GridSize;
use crate::game::{GameState, TickOutcome};
use crate::input::{ControlMode, GameInput, InputSource};

/// Host-side owner of one simulation and its input source.
///
/// The host loop calls [`Session::step`] once per tick interval. Each step
/// honors a pending restart, samples input, and applies exactly one tick.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    input: InputSource,
    restart_requested: bool,
    best_score: u32,
}

impl Session {
    #[must_use]
    pub fn new(state: GameState, mode: ControlMode) -> Self {
        Self {
            state,
            input: InputSource::new(mode),
            restart_requested: false,
            best_score: 0,
        }
    }

    /// Creates a session on `bounds`, seeded when `seed` is given.
    #[must_use]
    pub fn start(bounds: GridSize, seed: Option<u64>, mode: ControlMode) -> Self {
        let state = match seed {
            Some(seed) => GameState::new_with_seed(bounds, seed),
            None => GameState::new(bounds),
        };
        Self::new(state, mode)
    }

    /// Applies one external input event. `Quit` is left to the host.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.input.press(direction),
            GameInput::ToggleMode => {
                self.input.toggle_mode();
                info!("control mode switched to {:?}", self.input.mode());
            }
            GameInput::Restart => self.request_restart(),
            GameInput::Quit => {}
        }
    }

    /// Schedules a reset before the next step samples input.
    ///
    /// Presses made before the request belong to the old run and are
    /// dropped; presses made after it steer the fresh run.
    pub fn request_restart(&mut self) {
        self.input.clear_pending();
        self.restart_requested = true;
    }

    #[must_use]
    pub fn restart_pending(&self) -> bool {
        self.restart_requested
    }

    /// Runs one unit of work: restart if requested, sample, tick.
    ///
    /// Once the run is over, steps do nothing until a restart arrives.
    pub fn step(&mut self) -> TickOutcome {
        if self.restart_requested {
            self.restart_requested = false;
            self.state.reset();
        }

        if self.state.is_terminal() {
            return TickOutcome::Halted;
        }

        let heading = self.input.sample(&self.state);
        let outcome = self.state.tick(heading);
        self.best_score = self.best_score.max(self.state.score());
        outcome
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.input.mode()
    }

    /// Best score reached by any run of this session.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }
}
