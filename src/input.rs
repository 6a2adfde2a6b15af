use log::trace;

use crate::autopilot;
use crate::game::GameState;

/// Canonical movement directions, one per unit step vector.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the `(dx, dy)` step this direction applies to a cell.
    ///
    /// `y` grows downwards, so `Up` is `(0, -1)`.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Converts a raw step vector into a direction.
    ///
    /// Returns `None` for the zero vector, diagonals, and anything longer
    /// than one cell.
    #[must_use]
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Self::Up),
            (0, 1) => Some(Self::Down),
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            _ => None,
        }
    }

    /// Arrow glyph used by the HUD.
    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Left => "←",
            Self::Right => "→",
        }
    }
}

/// High-level input events consumed by the host loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    ToggleMode,
    Restart,
    Quit,
}

/// Which source decides the heading of the next tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum ControlMode {
    #[default]
    Manual,
    AutoPilot,
}

impl ControlMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Manual => Self::AutoPilot,
            Self::AutoPilot => Self::Manual,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::AutoPilot => "Auto",
        }
    }
}

/// Supplies one heading per tick, from the operator or from the autopilot.
///
/// A manual press overwrites whatever was pending; there is no queue and no
/// reversal filter. Every sample consumes the pending press, so nothing
/// carries over to a later tick.
#[derive(Debug, Clone, Default)]
pub struct InputSource {
    mode: ControlMode,
    pending: Option<Direction>,
}

impl InputSource {
    #[must_use]
    pub fn new(mode: ControlMode) -> Self {
        Self {
            mode,
            pending: None,
        }
    }

    /// Records a manual direction press; last press before a tick wins.
    pub fn press(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Drops any press that has not been sampled yet.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.pending = None;
    }

    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Returns the heading to apply on the next tick of `state`.
    ///
    /// Falls back to the previously applied heading when there is no manual
    /// press or when the autopilot has no direction to offer.
    pub fn sample(&mut self, state: &GameState) -> Direction {
        let pending = self.pending.take();
        let chosen = match self.mode {
            ControlMode::Manual => pending,
            ControlMode::AutoPilot => autopilot::decide(state),
        };

        let heading = chosen.unwrap_or_else(|| state.heading());
        trace!("sampled {heading:?} in {:?} mode", self.mode);
        heading
    }
}
