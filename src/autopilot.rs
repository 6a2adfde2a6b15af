//! Greedy food chaser.
//!
//! Looks only at the current offset between head and food. It has no
//! lookahead and will happily steer into a wall or into the body.

use crate::game::GameState;
use crate::input::Direction;
use crate::snake::Position;

/// Raw greedy step from `head` towards `food`.
///
/// Moves along the axis with the larger distance. Ties go to the vertical
/// axis. Returns `(0, 0)` when the head already sits on the food.
#[must_use]
pub fn greedy_step(head: Position, food: Position) -> (i32, i32) {
    let dx = food.x - head.x;
    let dy = food.y - head.y;

    if dx.abs() > dy.abs() {
        (dx.signum(), 0)
    } else {
        (0, dy.signum())
    }
}

/// Chooses the next heading for `state`, or `None` when the greedy step is
/// the zero vector.
#[must_use]
pub fn decide(state: &GameState) -> Option<Direction> {
    let (dx, dy) = greedy_step(state.snake().head(), state.food());
    Direction::from_delta(dx, dy)
}
