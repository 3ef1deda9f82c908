//! Iridescent procedural field (cell-space).
//!
//! A smooth interference pattern driven by elapsed time, tinted by the
//! current color and nudged by the pointer. Pure: identical
//! [`FrameInputs`] always produce identical cells.

use super::color::Rgb;
use super::surface::Surface;

/// Pointer position used when pointer reactivity is off
pub const POINTER_CENTER: (f32, f32) = (0.5, 0.5);

/// Everything one frame of the field depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInputs {
    /// Seconds since the renderer was mounted
    pub time: f32,
    pub color: Rgb,
    /// `[width, height, width / height]`
    pub resolution: [f32; 3],
    /// Normalized, y pointing up
    pub pointer: (f32, f32),
    pub amplitude: f32,
    pub speed: f32,
}

/// Shade a single point; `u` and `v` are in `[0, 1]` with `v` pointing up.
pub fn shade(inputs: &FrameInputs, u: f32, v: f32) -> Rgb {
    let [rw, rh, _] = inputs.resolution;
    let mr = rw.min(rh).max(1.0);
    let mut x = (u * 2.0 - 1.0) * rw / mr;
    let mut y = (v * 2.0 - 1.0) * rh / mr;

    x += (inputs.pointer.0 - 0.5) * inputs.amplitude;
    y += (inputs.pointer.1 - 0.5) * inputs.amplitude;

    let phase = inputs.time * 0.5 * inputs.speed;
    let mut d = -phase;
    let mut a = 0.0f32;
    for i in 0..8 {
        let i = i as f32;
        a += (i - d - a * x).cos();
        d += (y * i + a).sin();
    }
    d += phase;

    let base = [
        (x * d).cos() * 0.6 + 0.4,
        (y * a).cos() * 0.6 + 0.4,
        (a + d).cos() * 0.5 + 0.5,
    ];
    let warp = [d.cos(), a.cos(), 2.5f32.cos()];
    let mut out = [0.0f32; 3];
    for i in 0..3 {
        out[i] = (base[i] * warp[i] * 0.5 + 0.5).cos();
    }
    Rgb::from_channels(out).tint(inputs.color)
}

/// Fill every cell of `surface` from `inputs`
pub fn render_surface(inputs: &FrameInputs, surface: &mut Surface) {
    let size = surface.size();
    let w = size.width.max(1) as f32;
    let h = size.height.max(1) as f32;
    for (cx, cy, cell) in surface.cells_mut() {
        let u = (cx as f32 + 0.5) / w;
        let v = 1.0 - (cy as f32 + 0.5) / h;
        *cell = shade(inputs, u, v);
    }
}
