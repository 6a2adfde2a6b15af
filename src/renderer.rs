use crate::config::{FOOD_RGB, GridSize, SNAKE_RGB};
use crate::game::GameState;
use crate::snake::Position;

/// Row-major `width × height × 3` RGB buffer, one pixel per grid cell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FrameBuffer {
    size: GridSize,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// Creates an all-black buffer.
    #[must_use]
    pub fn blank(size: GridSize) -> Self {
        Self {
            size,
            pixels: vec![0; size.total_cells() * 3],
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Raw channel bytes, ordered by row, then column, then channel.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the RGB value at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 3]> {
        let offset = self.offset(x, y)?;
        Some([
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ])
    }

    fn paint(&mut self, position: Position, rgb: [u8; 3]) {
        let (Ok(x), Ok(y)) = (u16::try_from(position.x), u16::try_from(position.y)) else {
            return;
        };
        if let Some(offset) = self.offset(x, y) {
            self.pixels[offset..offset + 3].copy_from_slice(&rgb);
        }
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.size.width() || y >= self.size.height() {
            return None;
        }
        Some((usize::from(y) * usize::from(self.size.width()) + usize::from(x)) * 3)
    }
}

/// Projects the simulation into a fresh color buffer.
///
/// Food is painted after the snake, so food sitting on a body cell stays
/// visible.
#[must_use]
pub fn render_frame(state: &GameState) -> FrameBuffer {
    let mut frame = FrameBuffer::blank(state.bounds());

    for segment in state.snake().segments() {
        frame.paint(*segment, SNAKE_RGB);
    }
    frame.paint(state.food(), FOOD_RGB);

    frame
}
