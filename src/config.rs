use std::time::Duration;

use crate::error::ConfigError;
use crate::snake::Position;

/// Logical grid dimensions passed through the simulation as a named type.
///
/// Only [`GridSize::try_new`] and `Default` build one, so every grid that
/// reaches the simulation has positive sides and contains the start cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    width: u16,
    height: u16,
}

impl GridSize {
    /// Builds a grid, rejecting zero dimensions and grids too small to hold
    /// the start cell.
    pub fn try_new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidGridSize { width, height });
        }

        let grid = Self { width, height };
        if !START_POSITION.is_within_bounds(grid) {
            return Err(ConfigError::StartOutOfBounds {
                x: START_POSITION.x,
                y: START_POSITION.y,
                width,
                height,
            });
        }

        Ok(grid)
    }

    /// Square grid with the default side length.
    #[must_use]
    pub const fn square_default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
        }
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::square_default()
    }
}

/// Side length of the default square grid.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Cell every fresh run starts from.
pub const START_POSITION: Position = Position { x: 5, y: 5 };

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Redraw cadence of the terminal front end, independent of tick pacing.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// RGB triple written for every snake cell.
pub const SNAKE_RGB: [u8; 3] = [0, 255, 0];

/// RGB triple written for the food cell.
pub const FOOD_RGB: [u8; 3] = [255, 0, 0];

/// Upper half-block glyph for compositing two grid rows per terminal row.
pub const GLYPH_HALF_UPPER: &str = "▀";

/// Separator between HUD fields.
pub const HUD_SEPARATOR: &str = "│";

/// Horizontal margin around the play area in terminal cells.
pub const PLAY_AREA_MARGIN_X: u16 = 1;

#[cfg(test)]
mod tests {
    use super::{GridSize, DEFAULT_GRID_SIZE};
    use crate::error::ConfigError;

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            GridSize::try_new(0, 10),
            Err(ConfigError::InvalidGridSize { width: 0, height: 10 })
        ));
        assert!(matches!(
            GridSize::try_new(10, 0),
            Err(ConfigError::InvalidGridSize { .. })
        ));
    }

    #[test]
    fn grid_must_contain_start_cell() {
        assert!(matches!(
            GridSize::try_new(5, 20),
            Err(ConfigError::StartOutOfBounds { .. })
        ));
        assert!(GridSize::try_new(6, 6).is_ok());
    }

    #[test]
    fn three_square_grid_cannot_be_built() {
        assert!(matches!(
            GridSize::try_new(3, 3),
            Err(ConfigError::StartOutOfBounds {
                x: 5,
                y: 5,
                width: 3,
                height: 3
            })
        ));
    }

    #[test]
    fn default_grid_is_twenty_square() {
        let grid = GridSize::default();
        assert_eq!(grid.width(), DEFAULT_GRID_SIZE);
        assert_eq!(grid.height(), DEFAULT_GRID_SIZE);
        assert_eq!(grid.total_cells(), 400);
    }
}
