//! The cell grid the background is drawn into

use super::color::Rgb;
use super::errors::RendererError;

/// Surface dimensions in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u16,
    pub height: u16,
}

impl SurfaceSize {
    pub const fn new(width: u16, height: u16) -> Self {
        SurfaceSize { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Resolution in square units plus its aspect ratio.
    ///
    /// A terminal cell is roughly twice as tall as it is wide, so each row
    /// counts as two units.
    pub fn resolution(&self) -> [f32; 3] {
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32 * 2.0;
        [w, h, w / h]
    }
}

/// One rendered frame
#[derive(Debug, Clone)]
pub struct Surface {
    size: SurfaceSize,
    cells: Vec<Rgb>,
    frame: u64,
}

impl Surface {
    pub fn new(size: SurfaceSize) -> Result<Self, RendererError> {
        if size.is_empty() {
            return Err(RendererError::SurfaceUnavailable {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Surface {
            size,
            cells: vec![Rgb::BLACK; size.area()],
            frame: 0,
        })
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Sequence number of the frame, starting at 1 for the first drawn frame
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: u64) {
        self.frame = frame;
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.cells
            .get(y as usize * self.size.width as usize + x as usize)
            .copied()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = (u16, u16, &mut Rgb)> {
        let width = self.size.width as usize;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, c)| ((i % width) as u16, (i / width) as u16, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_area_is_unavailable() {
        assert!(matches!(
            Surface::new(SurfaceSize::new(0, 10)),
            Err(RendererError::SurfaceUnavailable { width: 0, height: 10 })
        ));
        assert!(Surface::new(SurfaceSize::new(10, 0)).is_err());
    }

    #[test]
    fn test_cell_addressing() {
        let mut s = Surface::new(SurfaceSize::new(3, 2)).unwrap();
        for (x, y, c) in s.cells_mut() {
            *c = Rgb::new(x as f32, y as f32, 0.0);
        }
        assert_eq!(s.get(2, 1), Some(Rgb::new(2.0, 1.0, 0.0)));
        assert_eq!(s.get(3, 0), None);
        assert_eq!(s.get(0, 2), None);
    }

    #[test]
    fn test_resolution_accounts_for_cell_shape() {
        let r = SurfaceSize::new(80, 20).resolution();
        assert_eq!(r, [80.0, 40.0, 2.0]);
    }
}
