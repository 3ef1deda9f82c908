//! Background renderer lifecycle and render loop.
//!
//! [`BackgroundRenderer`] is the handle owned by the UI. Mounting it spawns a
//! render task that owns all animation state ([`RendererState`]) and ticks
//! once per frame until its cancellation token fires. The handle never
//! touches that state directly: parameter, pointer and resize updates travel
//! as [`RenderCommand`] messages and are applied at the start of the next
//! frame, in the order they were sent.

use super::color::ColorTransition;
use super::errors::RendererError;
use super::field::{self, FrameInputs, POINTER_CENTER};
use super::params::{RenderParameters, RendererConfig};
use super::pointer::PointerListener;
use super::surface::{Surface, SurfaceSize};

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Messages from the handle to the render task
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    SetParameters(RenderParameters),
    /// Already normalized, y pointing up
    PointerMoved { x: f32, y: f32 },
    Resize(SurfaceSize),
}

/// Animation state owned exclusively by the render task
#[derive(Debug, Clone)]
pub struct RendererState {
    transition: ColorTransition,
    time: f32,
    pointer: (f32, f32),
    mouse_reactive: bool,
    amplitude: f32,
    speed: f32,
    size: SurfaceSize,
}

impl RendererState {
    pub fn new(config: &RendererConfig, size: SurfaceSize) -> Self {
        RendererState {
            transition: ColorTransition::with_rate(config.color, config.transition_rate),
            time: 0.0,
            pointer: POINTER_CENTER,
            mouse_reactive: config.mouse_reactive,
            amplitude: config.amplitude,
            speed: config.speed,
            size,
        }
    }

    pub fn apply(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::SetParameters(params) => {
                self.transition.retarget(params.target_color);
                self.amplitude = params.amplitude;
                self.speed = params.speed;
                if self.mouse_reactive && !params.mouse_reactive {
                    self.pointer = POINTER_CENTER;
                }
                self.mouse_reactive = params.mouse_reactive;
            }
            RenderCommand::PointerMoved { x, y } => {
                if self.mouse_reactive {
                    self.pointer = (x, y);
                }
            }
            RenderCommand::Resize(size) => {
                self.size = size;
            }
        }
    }

    /// Move to `elapsed` since mount and step the color by one frame
    pub fn advance(&mut self, elapsed: Duration) -> FrameInputs {
        self.time = elapsed.as_secs_f32();
        self.transition.step();
        self.frame_inputs()
    }

    pub fn frame_inputs(&self) -> FrameInputs {
        FrameInputs {
            time: self.time,
            color: self.transition.current(),
            resolution: self.size.resolution(),
            pointer: if self.mouse_reactive {
                self.pointer
            } else {
                POINTER_CENTER
            },
            amplitude: self.amplitude,
            speed: self.speed,
        }
    }

    pub fn transition(&self) -> &ColorTransition {
        &self.transition
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }
}

/// Observable lifecycle phase of a [`BackgroundRenderer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererPhase {
    Uninitialized,
    Running,
    TornDown,
}

enum Phase {
    Uninitialized,
    Running(Running),
    TornDown,
}

struct Running {
    commands: mpsc::UnboundedSender<RenderCommand>,
    frames: watch::Receiver<Arc<Surface>>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
    /// Last non-empty size handed to the render task
    size: SurfaceSize,
    pointer: Option<PointerListener>,
}

/// Handle to the animated background
pub struct BackgroundRenderer {
    config: RendererConfig,
    params: RenderParameters,
    phase: Phase,
}

impl BackgroundRenderer {
    pub fn new(config: RendererConfig) -> Self {
        let params = config.parameters();
        BackgroundRenderer {
            config,
            params,
            phase: Phase::Uninitialized,
        }
    }

    pub fn phase(&self) -> RendererPhase {
        match self.phase {
            Phase::Uninitialized => RendererPhase::Uninitialized,
            Phase::Running(_) => RendererPhase::Running,
            Phase::TornDown => RendererPhase::TornDown,
        }
    }

    /// Latest parameters handed to the renderer
    pub fn parameters(&self) -> RenderParameters {
        self.params
    }

    /// Start the render loop on a surface of `size`.
    ///
    /// Must be called from within a tokio runtime. Calling it again while
    /// running is a no-op that hands back the same frame stream.
    pub fn mount(
        &mut self,
        size: SurfaceSize,
    ) -> Result<watch::Receiver<Arc<Surface>>, RendererError> {
        match &self.phase {
            Phase::Running(running) => {
                debug!("background renderer already running; mount ignored");
                return Ok(running.frames.clone());
            }
            Phase::TornDown => return Err(RendererError::TornDown),
            Phase::Uninitialized => {}
        }

        let blank = Surface::new(size)?;
        let state = RendererState::new(&self.config.clone().with_parameters(self.params), size);
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (frame_tx, frames) = watch::channel(Arc::new(blank));
        let cancel = CancellationToken::new();

        let task = tokio::spawn(render_loop(
            state,
            command_rx,
            frame_tx,
            cancel.clone(),
            self.config.frame_interval,
        ));

        let pointer = self
            .params
            .mouse_reactive
            .then(|| PointerListener::attach(size));

        info!(
            width = size.width,
            height = size.height,
            "background renderer mounted"
        );

        self.phase = Phase::Running(Running {
            commands,
            frames: frames.clone(),
            cancel,
            task,
            size,
            pointer,
        });
        Ok(frames)
    }

    /// Stream of rendered frames, if running
    pub fn frames(&self) -> Option<watch::Receiver<Arc<Surface>>> {
        match &self.phase {
            Phase::Running(running) => Some(running.frames.clone()),
            _ => None,
        }
    }

    /// Hand new parameters to the render loop.
    ///
    /// Color eases toward the new target; amplitude and speed apply on the
    /// next frame. Toggling reactivity attaches or detaches the pointer
    /// listener without restarting the loop.
    pub fn set_parameters(&mut self, params: RenderParameters) {
        self.params = params;
        let Phase::Running(running) = &mut self.phase else {
            return;
        };

        match (params.mouse_reactive, running.pointer.is_some()) {
            (true, false) => {
                debug!("pointer listener attached");
                running.pointer = Some(PointerListener::attach(running.size));
            }
            (false, true) => {
                debug!("pointer listener detached");
                running.pointer = None;
            }
            _ => {}
        }

        send(&running.commands, RenderCommand::SetParameters(params));
    }

    /// Feed a mouse position in surface cells; ignored while non-reactive
    pub fn pointer_moved(&self, column: u16, row: u16) {
        let Phase::Running(running) = &self.phase else {
            return;
        };
        if let Some(listener) = &running.pointer {
            let (x, y) = listener.normalize(column, row);
            send(&running.commands, RenderCommand::PointerMoved { x, y });
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        let Phase::Running(running) = &mut self.phase else {
            return;
        };
        if size.is_empty() {
            warn!(
                width = size.width,
                height = size.height,
                "ignoring resize to an empty surface"
            );
            return;
        }
        running.size = size;
        if let Some(listener) = &mut running.pointer {
            listener.resize(size);
        }
        send(&running.commands, RenderCommand::Resize(size));
    }

    /// Stop the render loop and release the surface.
    ///
    /// Once this returns no further frame is produced. The instance cannot
    /// be mounted again.
    pub async fn unmount(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::TornDown) {
            Phase::Running(running) => {
                running.cancel.cancel();
                if let Err(e) = running.task.await {
                    warn!("render task ended abnormally: {}", e);
                }
                info!("background renderer torn down");
            }
            Phase::Uninitialized | Phase::TornDown => {}
        }
    }
}

/// Dropping a running renderer cancels and aborts its task without waiting
/// for it. A frame already being rendered may still be published; call
/// [`BackgroundRenderer::unmount`] when no frame may follow teardown.
impl Drop for BackgroundRenderer {
    fn drop(&mut self) {
        if let Phase::Running(running) = &self.phase {
            running.cancel.cancel();
            running.task.abort();
        }
    }
}

fn send(commands: &mpsc::UnboundedSender<RenderCommand>, command: RenderCommand) {
    if commands.send(command).is_err() {
        warn!("render loop is gone; dropping {:?}", command);
    }
}

async fn render_loop(
    mut state: RendererState,
    mut commands: mpsc::UnboundedReceiver<RenderCommand>,
    frames: watch::Sender<Arc<Surface>>,
    cancel: CancellationToken,
    frame_interval: Duration,
) {
    let started = Instant::now();
    let mut ticker = tokio::time::interval(frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut frame: u64 = 0;

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                loop {
                    match commands.try_recv() {
                        Ok(command) => state.apply(command),
                        Err(mpsc::error::TryRecvError::Empty) => break,
                        Err(mpsc::error::TryRecvError::Disconnected) => return,
                    }
                }

                let was_settled = state.transition().is_settled();
                let inputs = state.advance(started.elapsed());
                if !was_settled && state.transition().is_settled() {
                    debug!(frame, "background color settled on {:?}", inputs.color);
                }
                let mut surface = match Surface::new(state.size()) {
                    Ok(surface) => surface,
                    Err(e) => {
                        warn!("skipping frame: {}", e);
                        continue;
                    }
                };
                field::render_surface(&inputs, &mut surface);
                frame += 1;
                surface.set_frame(frame);

                if cancel.is_cancelled() {
                    break;
                }
                frames.send_replace(Arc::new(surface));
            }
        }
    }
    debug!(frames = frame, "render loop stopped");
}
