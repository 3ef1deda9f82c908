//! Paints the latest background frame behind everything else

use crate::render::Surface;
use ratatui::{layout::Rect, style::Color, Frame};

/// Copy `surface` into the frame's cell backgrounds.
///
/// Cells outside the surface (a resize not yet rendered) keep the terminal's
/// own background.
pub fn render_background(frame: &mut Frame, area: Rect, surface: &Surface) {
    let buf = frame.buffer_mut();
    for y in 0..area.height {
        for x in 0..area.width {
            let Some(color) = surface.get(x, y) else {
                continue;
            };
            let (r, g, b) = color.to_rgb8();
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_symbol(" ");
                cell.set_bg(Color::Rgb(r, g, b));
            }
        }
    }
}
