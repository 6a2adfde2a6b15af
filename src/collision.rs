use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Why a proposed move ended the run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

impl DeathReason {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::WallCollision => "hit wall",
            Self::SelfCollision => "hit yourself",
        }
    }
}

/// Checks a proposed head cell against the body as it is before the move.
///
/// The current tail counts as occupied even though a non-growing move would
/// vacate it. Bounds are checked first.
pub fn check(bounds: GridSize, snake: &Snake, proposed_head: Position) -> Result<(), DeathReason> {
    if !proposed_head.is_within_bounds(bounds) {
        return Err(DeathReason::WallCollision);
    }

    if snake.occupies(proposed_head) {
        return Err(DeathReason::SelfCollision);
    }

    Ok(())
}

/// Returns true when moving the head to `proposed_head` keeps the run alive.
#[must_use]
pub fn is_legal(bounds: GridSize, snake: &Snake, proposed_head: Position) -> bool {
    check(bounds, snake, proposed_head).is_ok()
}
