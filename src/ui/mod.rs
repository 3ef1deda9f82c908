//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into layers:
//!
//! - **[`app`]** — application state and the async event loop (keyboard, mouse,
//!   resize, analysis completions, redraw ticks)
//! - **[`form`]** / **[`results`]** — state and presentation models for the two cards
//! - **[`panes`]** — stateless render functions for each visible pane
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`SentimentService`] and call [`App::run`] to start the event loop.
//!
//! [`SentimentService`]: crate::analysis::SentimentService
//! [`App::run`]: app::App::run

pub mod app;
pub mod form;
pub mod panes;
pub mod results;
pub mod theme;

pub use app::App;
