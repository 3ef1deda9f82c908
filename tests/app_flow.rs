// End-to-end flows through the application state with a fake sentiment service

use sentitty::analysis::errors::{EMPTY_INPUT_MESSAGE, TRANSPORT_FAILURE_MESSAGE};
use sentitty::analysis::{AnalysisError, AnalysisResult, SentimentScore, SentimentService};
use sentitty::orchestrator::{dispatch, AppEvent, Completion, Orchestrator};
use sentitty::render::{RenderParameters, RendererConfig, RendererPhase, Rgb, SurfaceSize};
use sentitty::ui::theme::DEFAULT_THEME;
use sentitty::ui::App;

use async_trait::async_trait;
use ratatui::{backend::TestBackend, Terminal};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// Replays canned outcomes in order and counts calls
#[derive(Default)]
struct ScriptedService {
    calls: AtomicUsize,
    outcomes: Mutex<VecDeque<Result<AnalysisResult, AnalysisError>>>,
}

impl ScriptedService {
    fn new(outcomes: Vec<Result<AnalysisResult, AnalysisError>>) -> Arc<Self> {
        Arc::new(ScriptedService {
            calls: AtomicUsize::new(0),
            outcomes: Mutex::new(outcomes.into()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentService for ScriptedService {
    async fn analyze(&self, _text: &str) -> Result<AnalysisResult, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(AnalysisError::Status(StatusCode::SERVICE_UNAVAILABLE)))
    }
}

/// Answers after a delay that depends on the text
struct DelayedService;

#[async_trait]
impl SentimentService for DelayedService {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let (delay, sentiment) = match text {
            "slow" => (80, "POSITIVE"),
            _ => (5, "NEGATIVE"),
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(result(sentiment))
    }
}

fn result(sentiment: &str) -> AnalysisResult {
    AnalysisResult {
        sentiment: sentiment.to_string(),
        score: SentimentScore {
            positive: Some(0.82),
            negative: Some(0.05),
            neutral: Some(0.10),
            mixed: Some(0.03),
        },
    }
}

fn app(service: Arc<dyn SentimentService>) -> App {
    App::new(
        service,
        RendererConfig::default().with_frame_interval(Duration::from_millis(5)),
    )
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Background color of the first cell of `label` on screen
fn label_bg(terminal: &Terminal<TestBackend>, label: &str) -> Option<ratatui::style::Color> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height).find_map(|y| {
        let row: String = (0..area.width).map(|x| buffer[(x, y)].symbol()).collect();
        row.find(label)
            .map(|i| row[..i].chars().count() as u16)
            .map(|x| buffer[(x, y)].bg)
    })
}

#[tokio::test]
async fn test_blank_submission_never_calls_service() {
    let service = ScriptedService::new(vec![]);
    let mut app = app(service.clone());

    assert!(app.submit_form().is_none());
    app.form_mut().insert_str("  \n\t  ");
    assert!(app.submit_form().is_none());

    tokio::task::yield_now().await;
    assert_eq!(service.calls(), 0);
    assert_eq!(app.status_message, EMPTY_INPUT_MESSAGE);
    assert!(!app.orchestrator().is_loading());
}

#[tokio::test]
async fn test_success_updates_result_and_background() {
    let service = ScriptedService::new(vec![Ok(result("Positive"))]);
    let mut app = app(service.clone());
    app.mount_background(SurfaceSize::new(20, 6));

    app.form_mut().insert_str("What a lovely day");
    let request = app.submit_form().expect("request dispatched");
    assert!(app.orchestrator().is_loading());
    request.await.unwrap();
    assert_eq!(app.drain_events(), 1);

    assert_eq!(service.calls(), 1);
    assert!(!app.orchestrator().is_loading());
    assert_eq!(app.orchestrator().result().unwrap().sentiment, "Positive");
    let params = app.renderer().parameters();
    assert_eq!(params.target_color, Rgb::GREEN);
    assert!(params.mouse_reactive);

    app.shutdown().await;
    assert_eq!(app.renderer().phase(), RendererPhase::TornDown);
}

#[tokio::test]
async fn test_failure_clears_result_and_keeps_background() {
    let service = ScriptedService::new(vec![
        Ok(result("NEGATIVE")),
        Err(AnalysisError::Status(StatusCode::BAD_GATEWAY)),
    ]);
    let mut app = app(service.clone());
    app.form_mut().insert_str("terrible");

    app.submit_form().unwrap().await.unwrap();
    app.drain_events();
    assert_eq!(app.renderer().parameters().target_color, Rgb::RED);

    app.submit_form().unwrap().await.unwrap();
    app.drain_events();

    assert!(app.orchestrator().result().is_none());
    assert_eq!(app.orchestrator().error(), Some(TRANSPORT_FAILURE_MESSAGE));
    assert_eq!(app.renderer().parameters().target_color, Rgb::RED);
    assert_ne!(app.renderer().parameters(), RenderParameters::idle());
}

#[tokio::test]
async fn test_resubmission_while_loading_is_refused() {
    let service = ScriptedService::new(vec![Ok(result("NEUTRAL"))]);
    let mut app = app(service.clone());
    app.form_mut().insert_str("hmm");

    let first = app.submit_form().unwrap();
    assert!(app.submit_form().is_none());
    first.await.unwrap();
    app.drain_events();
    assert_eq!(service.calls(), 1);
}

#[tokio::test]
async fn test_late_response_from_older_submission_is_ignored() {
    let service: Arc<dyn SentimentService> = Arc::new(DelayedService);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new();

    let slow = orchestrator.submit("slow").unwrap();
    let fast = orchestrator.submit("fast").unwrap();
    let slow_task = dispatch(service.clone(), slow, tx.clone());
    let fast_task = dispatch(service, fast, tx);
    fast_task.await.unwrap();
    slow_task.await.unwrap();

    let mut completions = Vec::new();
    while let Ok(AppEvent::AnalysisFinished { id, outcome }) = rx.try_recv() {
        completions.push(orchestrator.complete(id, outcome));
    }
    assert_eq!(completions, [Completion::Succeeded, Completion::Stale]);
    assert_eq!(orchestrator.result().unwrap().sentiment, "NEGATIVE");
    assert_eq!(orchestrator.render_parameters().target_color, Rgb::RED);
}

#[tokio::test]
async fn test_screen_shows_form_result_and_background() {
    let service = ScriptedService::new(vec![Ok(result("POSITIVE"))]);
    let mut app = app(service);
    app.mount_background(SurfaceSize::new(100, 40));
    let mut frames = app.renderer().frames().expect("renderer running");
    frames.changed().await.unwrap();

    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Sentiment Analyzer"));
    assert!(text.contains("Enter text to analyze sentiment..."));

    // corner is outside every card, so it shows the background
    let corner = terminal.backend().buffer()[(0, 0)].bg;
    assert!(matches!(corner, ratatui::style::Color::Rgb(..)), "{:?}", corner);

    app.form_mut().insert_str("Best purchase ever");
    app.submit_form().unwrap().await.unwrap();
    app.drain_events();

    terminal.draw(|f| app.draw(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Sentiment Analysis Result"));
    assert!(text.contains("POSITIVE"));
    assert!(text.contains("Confidence: 82.0%"));
    assert!(text.contains("Mixed:"));

    app.shutdown().await;
}

#[tokio::test]
async fn test_screen_shows_error_banner() {
    let service = ScriptedService::new(vec![Err(AnalysisError::Status(StatusCode::NOT_FOUND))]);
    let mut app = app(service);
    app.form_mut().insert_str("anything");
    app.submit_form().unwrap().await.unwrap();
    app.drain_events();

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    let text = screen_text(&terminal);
    assert_eq!(text.matches(TRANSPORT_FAILURE_MESSAGE).count(), 1);
    assert!(!text.contains("Sentiment Analysis Result"));
}

#[tokio::test]
async fn test_submit_button_is_dimmed_while_form_is_blank() {
    let mut app = app(ScriptedService::new(vec![]));
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let button = "Analyze Sentiment (Enter)";

    terminal.draw(|f| app.draw(f)).unwrap();
    assert_eq!(label_bg(&terminal, button), Some(DEFAULT_THEME.comment));

    app.form_mut().insert_str("   ");
    terminal.draw(|f| app.draw(f)).unwrap();
    assert_eq!(label_bg(&terminal, button), Some(DEFAULT_THEME.comment));

    app.form_mut().insert_str("great service");
    terminal.draw(|f| app.draw(f)).unwrap();
    assert_eq!(label_bg(&terminal, button), Some(DEFAULT_THEME.secondary));
}
