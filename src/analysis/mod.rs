//! Talking to the remote sentiment service
//!
//! - [`result`]: the decoded [`AnalysisResult`] and its per-class scores
//! - [`client`]: the [`SentimentService`] seam and its HTTP implementation
//! - [`errors`]: [`AnalysisError`] and the user-facing messages

pub mod client;
pub mod errors;
pub mod result;

pub use client::{HttpSentimentClient, SentimentService};
pub use errors::AnalysisError;
pub use result::{AnalysisResult, ScoreLabel, SentimentScore};
