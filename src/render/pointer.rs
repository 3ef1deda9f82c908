//! Pointer tracking over the background surface

use super::surface::SurfaceSize;

/// Converts terminal mouse coordinates into the field's pointer space.
///
/// Only exists while pointer reactivity is on. Dropping it is what
/// "detaching the listener" means for the renderer.
#[derive(Debug, Clone, Copy)]
pub struct PointerListener {
    size: SurfaceSize,
}

impl PointerListener {
    pub fn attach(size: SurfaceSize) -> Self {
        PointerListener { size }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// Normalize a cell position to `[0, 1] x [0, 1]` with y pointing up
    pub fn normalize(&self, column: u16, row: u16) -> (f32, f32) {
        normalize_pointer(self.size, column, row)
    }
}

pub fn normalize_pointer(size: SurfaceSize, column: u16, row: u16) -> (f32, f32) {
    let w = size.width.max(1) as f32;
    let h = size.height.max(1) as f32;
    let x = ((column as f32 + 0.5) / w).clamp(0.0, 1.0);
    let y = (1.0 - (row as f32 + 0.5) / h).clamp(0.0, 1.0);
    (x, y)
}
