//! Errors from submitting text for analysis
//!
//! Validation failures block a submission before anything is sent. Every
//! other failure is a transport problem and is shown to the user as the
//! same generic message.

use reqwest::StatusCode;
use thiserror::Error;

/// Shown for every failed request, whatever the cause
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to analyze. Please try again.";

/// Shown when the form is submitted blank
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Blank or whitespace-only input
    #[error("input is empty")]
    EmptyInput,

    /// The service answered with a non-success status
    #[error("analysis service responded with {0}")]
    Status(StatusCode),

    /// The request never completed
    #[error("request to analysis service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The body was not a valid analysis result
    #[error("malformed analysis response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInput => EMPTY_INPUT_MESSAGE,
            _ => TRANSPORT_FAILURE_MESSAGE,
        }
    }
}
