//! # Introduction
//!
//! sentitty sends text to a remote sentiment-analysis service and shows the
//! verdict in a terminal UI drawn over an animated iridescent background.
//! The background eases toward a color picked from the latest sentiment:
//! green for positive, red for negative, white otherwise.
//!
//! ## Data flow
//!
//! ```text
//! Form → Orchestrator → SentimentService → AnalysisResult
//!                    ↘ RenderParameters → BackgroundRenderer → Surface → TUI
//! ```
//!
//! 1. [`ui`] — ratatui front end: input form, result card, status bar.
//! 2. [`orchestrator`] — submission state, request ids, and the mapping from
//!    results to [`render::RenderParameters`]. Late responses from superseded
//!    submissions are discarded.
//! 3. [`analysis`] — the [`analysis::SentimentService`] seam and its
//!    reqwest-backed HTTP client.
//! 4. [`render`] — the background: a tokio render task that owns the color
//!    transition and publishes one [`render::Surface`] per frame.
//! 5. [`config`] / [`logging`] — command line and tracing setup for the binary.

pub mod analysis;
pub mod config;
pub mod logging;
pub mod orchestrator;
pub mod render;
pub mod ui;
