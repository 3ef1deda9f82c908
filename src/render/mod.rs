//! Animated iridescent background.
//!
//! - [`color`]: RGB values and the eased [`ColorTransition`]
//! - [`params`]: [`RenderParameters`] and the sentiment-to-visual mapping
//! - [`field`]: the procedural per-cell visual
//! - [`surface`]: the cell grid a frame is drawn into
//! - [`pointer`]: mouse position normalization
//! - [`renderer`]: the [`BackgroundRenderer`] handle and its render task

pub mod color;
pub mod errors;
pub mod field;
pub mod params;
pub mod pointer;
pub mod renderer;
pub mod surface;

pub use color::{ColorTransition, Rgb};
pub use errors::RendererError;
pub use params::{RenderParameters, RendererConfig};
pub use renderer::{BackgroundRenderer, RenderCommand, RendererPhase, RendererState};
pub use surface::{Surface, SurfaceSize};
