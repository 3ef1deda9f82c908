//! TUI pane rendering modules
//!
//! Stateless render functions for everything drawn on screen. Panes are
//! layered: the background fills the whole frame first, then the cards are
//! cleared and drawn on top of it.
//!
//! # Pane Modules
//!
//! - [`background`]: the animated iridescent backdrop
//! - [`form`]: analyzer card with the text area and submit button
//! - [`results`]: result card (badge, confidence, bars) or error banner
//! - [`status`]: status bar with keybindings and request state

pub mod background;
pub mod form;
pub mod results;
pub mod status;

pub use background::render_background;
pub use form::render_form_pane;
pub use results::{render_error_pane, render_results_pane, results_height};
pub use status::render_status_bar;
