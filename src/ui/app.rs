//! Main TUI application state and logic

use crate::analysis::SentimentService;
use crate::orchestrator::{dispatch, AppEvent, Completion, Orchestrator};
use crate::render::{BackgroundRenderer, RendererConfig, Surface, SurfaceSize};
use crate::ui::form::{FormAction, InputForm};
use crate::ui::panes;
use crate::ui::results::ResultView;

use anyhow::Context;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use futures_util::StreamExt;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

/// Widest the cards get on large terminals
const CARD_WIDTH: u16 = 84;

/// Rows taken by the analyzer card
const FORM_HEIGHT: u16 = 12;

/// The main application state
pub struct App {
    /// Submission and result state
    orchestrator: Orchestrator,

    /// Text being typed
    form: InputForm,

    /// Where submissions go
    service: Arc<dyn SentimentService>,

    /// Animated backdrop and its latest frame
    renderer: BackgroundRenderer,
    frames: Option<watch::Receiver<Arc<Surface>>>,

    /// Completions from in-flight requests
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: Option<mpsc::UnboundedReceiver<AppEvent>>,

    /// Redraw cadence
    draw_interval: Duration,

    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(service: Arc<dyn SentimentService>, renderer_config: RendererConfig) -> Self {
        let orchestrator = Orchestrator::new();
        let draw_interval = renderer_config.frame_interval;
        let renderer =
            BackgroundRenderer::new(renderer_config.with_parameters(orchestrator.render_parameters()));
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        App {
            orchestrator,
            form: InputForm::new(),
            service,
            renderer,
            frames: None,
            events_tx,
            events_rx: Some(events_rx),
            draw_interval,
            status_message: String::from("Ready!"),
            should_quit: false,
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.form
    }

    pub fn renderer(&self) -> &BackgroundRenderer {
        &self.renderer
    }

    /// Start the background. Failure leaves the app running without one.
    pub fn mount_background(&mut self, size: SurfaceSize) {
        match self.renderer.mount(size) {
            Ok(frames) => self.frames = Some(frames),
            Err(e) => warn!("running without background: {}", e),
        }
    }

    /// Run the TUI application
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let size = terminal.size()?;
        self.mount_background(SurfaceSize::new(size.width, size.height));

        let mut events_rx = self
            .events_rx
            .take()
            .context("application event loop is already running")?;
        let mut input = EventStream::new();
        let mut ticker = tokio::time::interval(self.draw_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("event loop started");
        let result = loop {
            if self.should_quit {
                break Ok(());
            }

            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = terminal.draw(|f| self.draw(f)) {
                        break Err(e.into());
                    }
                }
                Some(event) = events_rx.recv() => self.handle_app_event(event),
                maybe_event = input.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => break Err(e.into()),
                    None => break Ok(()),
                },
            }
        };

        self.events_rx = Some(events_rx);
        self.shutdown().await;
        result
    }

    /// Tear down the background; no frame is produced afterwards
    pub async fn shutdown(&mut self) {
        self.frames = None;
        self.renderer.unmount().await;
    }

    /// Apply every completion that has already arrived. Returns how many.
    pub fn drain_events(&mut self) -> usize {
        let mut drained = Vec::new();
        if let Some(rx) = self.events_rx.as_mut() {
            while let Ok(event) = rx.try_recv() {
                drained.push(event);
            }
        }
        let count = drained.len();
        for event in drained {
            self.handle_app_event(event);
        }
        count
    }

    /// Render the UI
    pub fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        if let Some(frames) = &self.frames {
            let surface = frames.borrow().clone();
            panes::render_background(frame, size, &surface);
        }

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let column = centered_column(main_chunks[0], CARD_WIDTH);

        let view = self.orchestrator.result().map(ResultView::new);
        let error = self.orchestrator.error();
        let results_height = panes::results_height(view.as_ref(), error.is_some());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(results_height),
                Constraint::Min(0),
            ])
            .split(column);

        panes::render_form_pane(frame, rows[1], &self.form, self.orchestrator.is_loading());

        if let Some(message) = error {
            panes::render_error_pane(frame, rows[3], message);
        } else if let Some(view) = &view {
            panes::render_results_pane(frame, rows[3], view);
        }

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.orchestrator.is_loading(),
            error.is_some(),
            self.renderer.parameters().mouse_reactive,
        );
    }

    pub fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(width, height) => {
                self.renderer.resize(SurfaceSize::new(width, height));
            }
            Event::Paste(text) => self.form.insert_str(&text),
            _ => {}
        }
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AnalysisFinished { id, outcome } => {
                match self.orchestrator.complete(id, outcome) {
                    Completion::Succeeded => {
                        self.renderer
                            .set_parameters(self.orchestrator.render_parameters());
                        self.status_message = "Analysis complete".to_string();
                    }
                    Completion::Failed => {
                        self.status_message = "Analysis failed".to_string();
                    }
                    Completion::Stale => {}
                }
            }
        }
    }

    /// Send the form's text for analysis.
    ///
    /// Returns the request task, or `None` when nothing was sent (blank
    /// input, or a request is already in flight).
    pub fn submit_form(&mut self) -> Option<JoinHandle<()>> {
        if self.orchestrator.is_loading() {
            self.status_message = "Still analyzing...".to_string();
            return None;
        }
        match self.orchestrator.submit(self.form.text()) {
            Ok(submission) => {
                self.status_message = "Analyzing...".to_string();
                Some(dispatch(
                    Arc::clone(&self.service),
                    submission,
                    self.events_tx.clone(),
                ))
            }
            Err(e) => {
                self.status_message = e.user_message().to_string();
                None
            }
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        if self.form.handle_key(key) == FormAction::Submit {
            self.submit_form();
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Moved | MouseEventKind::Drag(_) = mouse.kind {
            self.renderer.pointer_moved(mouse.column, mouse.row);
        }
    }
}

/// Horizontally centered slice of `area` at most `width` wide, with a margin
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4)).max(area.width.min(20));
    let x = area.x + area.width.saturating_sub(width) / 2;
    Rect::new(x, area.y, width.min(area.width), area.height)
}
