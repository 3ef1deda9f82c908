//! Linear RGB colors and the smoothed color transition used by the background

/// An RGB triple with each channel in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }

    pub fn channels(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_channels(c: [f32; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }

    /// Component-wise product, used to tint the procedural field
    pub fn tint(self, other: Rgb) -> Self {
        Rgb::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    /// Quantize to 8-bit channels for the terminal
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        fn q(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        (q(self.r), q(self.g), q(self.b))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

/// Below this per-channel distance the transition snaps to the target
pub const TRANSITION_EPSILON: f32 = 0.001;

/// Fraction of the remaining distance covered per frame (~2.5 s at 60 fps)
pub const TRANSITION_RATE: f32 = 0.05;

/// Exponential-decay transition from a current color toward a single target.
///
/// Every frame each channel closes `rate` of its remaining distance, and
/// once a channel is within [`TRANSITION_EPSILON`] it lands exactly on the
/// target. A new target replaces the old one; targets are never queued.
#[derive(Debug, Clone)]
pub struct ColorTransition {
    current: [f32; 3],
    target: [f32; 3],
    rate: f32,
}

impl ColorTransition {
    pub fn new(start: Rgb) -> Self {
        Self::with_rate(start, TRANSITION_RATE)
    }

    pub fn with_rate(start: Rgb, rate: f32) -> Self {
        ColorTransition {
            current: start.channels(),
            target: start.channels(),
            rate: rate.clamp(f32::EPSILON, 1.0),
        }
    }

    pub fn current(&self) -> Rgb {
        Rgb::from_channels(self.current)
    }

    pub fn target(&self) -> Rgb {
        Rgb::from_channels(self.target)
    }

    pub fn retarget(&mut self, target: Rgb) {
        self.target = target.channels();
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance one frame. Returns true if any channel is still interpolating.
    pub fn step(&mut self) -> bool {
        let mut moving = false;
        for i in 0..3 {
            let delta = self.target[i] - self.current[i];
            if delta.abs() > TRANSITION_EPSILON {
                self.current[i] += delta * self.rate;
                moving = true;
            } else {
                self.current[i] = self.target[i];
            }
        }
        moving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Rgb; 6] = [
        Rgb::WHITE,
        Rgb::BLACK,
        Rgb::RED,
        Rgb::GREEN,
        Rgb::new(0.25, 0.5, 0.75),
        Rgb::new(0.999, 0.0005, 0.3),
    ];

    #[test]
    fn test_converges_monotonically_and_exactly() {
        for &from in &SAMPLES {
            for &to in &SAMPLES {
                let mut t = ColorTransition::new(from);
                t.retarget(to);

                let mut prev = t.current().channels();
                let mut frames = 0;
                while !t.is_settled() {
                    t.step();
                    let now = t.current().channels();
                    for i in 0..3 {
                        let before = (to.channels()[i] - prev[i]).abs();
                        let after = (to.channels()[i] - now[i]).abs();
                        assert!(after <= before, "channel {} moved away from target", i);
                    }
                    prev = now;
                    frames += 1;
                    assert!(frames < 1000, "{:?} -> {:?} never settled", from, to);
                }
                assert_eq!(t.current(), to);
            }
        }
    }

    #[test]
    fn test_full_swing_takes_a_couple_of_seconds() {
        let mut t = ColorTransition::new(Rgb::WHITE);
        t.retarget(Rgb::RED);
        let mut frames = 0;
        while t.step() {
            frames += 1;
        }
        // 60 fps
        assert!((100..200).contains(&frames), "took {} frames", frames);
    }

    #[test]
    fn test_small_delta_snaps() {
        let mut t = ColorTransition::new(Rgb::new(0.5, 0.5, 0.5));
        t.retarget(Rgb::new(0.5005, 0.5, 0.4992));
        assert!(!t.step());
        assert_eq!(t.current(), Rgb::new(0.5005, 0.5, 0.4992));
    }

    #[test]
    fn test_retarget_overwrites_pending_target() {
        let mut t = ColorTransition::new(Rgb::WHITE);
        t.retarget(Rgb::RED);
        t.step();
        t.retarget(Rgb::GREEN);
        assert_eq!(t.target(), Rgb::GREEN);
        while t.step() {}
        assert_eq!(t.current(), Rgb::GREEN);
    }

    #[test]
    fn test_rgb8_quantization() {
        assert_eq!(Rgb::WHITE.to_rgb8(), (255, 255, 255));
        assert_eq!(Rgb::new(-1.0, 0.5, 2.0).to_rgb8(), (0, 128, 255));
    }
}
