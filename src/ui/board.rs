use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::config::GLYPH_HALF_UPPER;
use crate::renderer::FrameBuffer;

/// Draws the color buffer inside a border, two grid rows per terminal row.
///
/// Returns the bordered area actually used, centered in `area`. Cells that do
/// not fit a too-small terminal are clipped.
pub fn render_board(frame: &mut Frame<'_>, area: Rect, pixels: &FrameBuffer) -> Rect {
    let size = pixels.size();
    let wanted_width = size.width().saturating_add(2);
    let wanted_height = size.height().div_ceil(2).saturating_add(2);
    let board_area = centered(area, wanted_width, wanted_height);

    let block = Block::bordered().border_style(Style::new().fg(Color::White));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let buffer = frame.buffer_mut();
    for row in 0..inner.height {
        let upper_y = row.saturating_mul(2);
        if upper_y >= size.height() {
            break;
        }

        for column in 0..inner.width.min(size.width()) {
            let upper = pixels.pixel(column, upper_y).map_or(Color::Reset, to_color);
            let lower = pixels
                .pixel(column, upper_y + 1)
                .map_or(Color::Reset, to_color);

            buffer.set_string(
                inner.x + column,
                inner.y + row,
                GLYPH_HALF_UPPER,
                Style::new().fg(upper).bg(lower),
            );
        }
    }

    board_area
}

fn to_color(rgb: [u8; 3]) -> Color {
    Color::Rgb(rgb[0], rgb[1], rgb[2])
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
