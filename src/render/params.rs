//! Renderer configuration and the sentiment-to-visual mapping

use super::color::{Rgb, TRANSITION_RATE};
use std::time::Duration;

/// Externally supplied parameters for the background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParameters {
    pub target_color: Rgb,
    pub mouse_reactive: bool,
    pub amplitude: f32,
    pub speed: f32,
}

impl RenderParameters {
    pub const DEFAULT_AMPLITUDE: f32 = 0.1;
    pub const DEFAULT_SPEED: f32 = 1.0;

    /// The calm white background shown before any successful analysis
    pub const fn idle() -> Self {
        RenderParameters {
            target_color: Rgb::WHITE,
            mouse_reactive: false,
            amplitude: Self::DEFAULT_AMPLITUDE,
            speed: Self::DEFAULT_SPEED,
        }
    }

    /// Map a sentiment label to background parameters.
    ///
    /// Case-insensitive. "positive" is green and pointer-reactive, "negative"
    /// is red and pointer-reactive, anything else falls back to [`idle`].
    ///
    /// [`idle`]: RenderParameters::idle
    pub fn for_sentiment(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("positive") {
            RenderParameters {
                target_color: Rgb::GREEN,
                mouse_reactive: true,
                ..Self::idle()
            }
        } else if label.eq_ignore_ascii_case("negative") {
            RenderParameters {
                target_color: Rgb::RED,
                mouse_reactive: true,
                ..Self::idle()
            }
        } else {
            Self::idle()
        }
    }
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self::idle()
    }
}

/// Construction-time configuration for a [`BackgroundRenderer`]
///
/// [`BackgroundRenderer`]: super::BackgroundRenderer
#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub color: Rgb,
    pub mouse_reactive: bool,
    pub amplitude: f32,
    pub speed: f32,
    pub frame_interval: Duration,
    pub transition_rate: f32,
}

impl RendererConfig {
    pub fn parameters(&self) -> RenderParameters {
        RenderParameters {
            target_color: self.color,
            mouse_reactive: self.mouse_reactive,
            amplitude: self.amplitude,
            speed: self.speed,
        }
    }

    pub fn with_parameters(mut self, params: RenderParameters) -> Self {
        self.color = params.target_color;
        self.mouse_reactive = params.mouse_reactive;
        self.amplitude = params.amplitude;
        self.speed = params.speed;
        self
    }

    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        RendererConfig {
            color: Rgb::WHITE,
            mouse_reactive: true,
            amplitude: RenderParameters::DEFAULT_AMPLITUDE,
            speed: RenderParameters::DEFAULT_SPEED,
            frame_interval: Duration::from_millis(16),
            transition_rate: TRANSITION_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_variants_are_green_and_reactive() {
        for label in ["positive", "Positive", "POSITIVE", " pOsItIvE "] {
            let p = RenderParameters::for_sentiment(label);
            assert_eq!(p.target_color, Rgb::GREEN, "{}", label);
            assert!(p.mouse_reactive);
            assert_eq!(p.amplitude, 0.1);
            assert_eq!(p.speed, 1.0);
        }
    }

    #[test]
    fn test_negative_variants_are_red_and_reactive() {
        for label in ["negative", "Negative", "NEGATIVE"] {
            let p = RenderParameters::for_sentiment(label);
            assert_eq!(p.target_color, Rgb::RED, "{}", label);
            assert!(p.mouse_reactive);
        }
    }

    #[test]
    fn test_everything_else_is_idle() {
        for label in ["neutral", "NEUTRAL", "mixed", "", "   ", "positively", "ポジティブ"] {
            assert_eq!(
                RenderParameters::for_sentiment(label),
                RenderParameters::idle(),
                "{:?}",
                label
            );
        }
        assert!(!RenderParameters::idle().mouse_reactive);
        assert_eq!(RenderParameters::idle().target_color, Rgb::WHITE);
    }

    #[test]
    fn test_config_defaults() {
        let c = RendererConfig::default();
        assert_eq!(c.color, Rgb::WHITE);
        assert!(c.mouse_reactive);
        assert_eq!(c.amplitude, 0.1);
        assert_eq!(c.speed, 1.0);
    }
}
