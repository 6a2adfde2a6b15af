use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Draws a food cell uniformly from the whole grid.
///
/// `x` and `y` are independent draws. The snake body is not excluded, so the
/// result may land on an occupied cell.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width())),
        y: rng.gen_range(0..i32::from(bounds.height())),
    }
}
