//! Submission → remote call → result → background parameters
//!
//! The [`Orchestrator`] is plain state. It never performs I/O itself: the UI
//! asks it to [`submit`](Orchestrator::submit), runs the returned
//! [`Submission`] through [`dispatch`], and feeds the outcome back through
//! [`complete`](Orchestrator::complete). Each submission gets a fresh
//! [`RequestId`]; completions for anything but the latest id are stale and
//! dropped, so a slow early response can never overwrite a later one.

use crate::analysis::{AnalysisError, AnalysisResult, SentimentService};
use crate::render::RenderParameters;

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Identifies one submission; later submissions compare greater
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Accepted text waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: RequestId,
    pub text: String,
}

/// Events delivered back to the UI loop
#[derive(Debug)]
pub enum AppEvent {
    AnalysisFinished {
        id: RequestId,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
}

/// What [`Orchestrator::complete`] did with an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed,
    Stale,
}

#[derive(Debug)]
pub struct Orchestrator {
    next_id: u64,
    latest: Option<RequestId>,
    loading: bool,
    result: Option<AnalysisResult>,
    error: Option<String>,
    render: RenderParameters,
}

impl Orchestrator {
    pub fn new() -> Self {
        Orchestrator {
            next_id: 0,
            latest: None,
            loading: false,
            result: None,
            error: None,
            render: RenderParameters::idle(),
        }
    }

    /// Accept `text` for analysis.
    ///
    /// Blank input is rejected with [`AnalysisError::EmptyInput`] and leaves
    /// the state untouched.
    pub fn submit(&mut self, text: &str) -> Result<Submission, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.latest = Some(id);
        self.loading = true;
        self.result = None;
        self.error = None;
        debug!(?id, "submission accepted");

        Ok(Submission {
            id,
            text: text.to_string(),
        })
    }

    /// Apply the outcome of request `id`.
    ///
    /// A failure clears the result and records one error message; the
    /// background keeps the parameters of the last success.
    pub fn complete(
        &mut self,
        id: RequestId,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> Completion {
        if self.latest != Some(id) {
            debug!(?id, latest = ?self.latest, "discarding stale analysis outcome");
            return Completion::Stale;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                info!(sentiment = %result.sentiment, "analysis succeeded");
                self.render = RenderParameters::for_sentiment(&result.sentiment);
                self.result = Some(result);
                self.error = None;
                Completion::Succeeded
            }
            Err(e) => {
                warn!("analysis failed: {}", e);
                self.result = None;
                self.error = Some(e.user_message().to_string());
                Completion::Failed
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn render_parameters(&self) -> RenderParameters {
        self.render
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `submission` against `service` on its own task and report back on `events`
pub fn dispatch(
    service: Arc<dyn SentimentService>,
    submission: Submission,
    events: mpsc::UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = service.analyze(&submission.text).await;
        let event = AppEvent::AnalysisFinished {
            id: submission.id,
            outcome,
        };
        if events.send(event).is_err() {
            debug!(id = ?submission.id, "UI gone before analysis finished");
        }
    })
}
