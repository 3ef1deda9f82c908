use thiserror::Error;

/// Errors raised while bringing up or driving the background renderer.
///
/// These are environment problems. The host logs them and carries on
/// without a background.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RendererError {
    #[error("cannot create a {width}x{height} rendering surface")]
    SurfaceUnavailable { width: u16, height: u16 },

    #[error("renderer has been torn down; create a new instance to remount")]
    TornDown,
}
