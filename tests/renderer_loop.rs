// Render task behavior: convergence, parameter delivery and teardown

use sentitty::render::{
    BackgroundRenderer, RenderParameters, RendererConfig, RendererPhase, Rgb, Surface, SurfaceSize,
};

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::timeout;

fn fast_renderer() -> BackgroundRenderer {
    BackgroundRenderer::new(
        RendererConfig::default()
            .with_parameters(RenderParameters::idle())
            .with_frame_interval(Duration::from_millis(1)),
    )
}

fn all_cells(surface: &Surface, pred: impl Fn(Rgb) -> bool) -> bool {
    let size = surface.size();
    (0..size.height).all(|y| (0..size.width).all(|x| surface.get(x, y).is_some_and(&pred)))
}

async fn wait_for_frame(
    frames: &mut watch::Receiver<Arc<Surface>>,
    pred: impl Fn(&Surface) -> bool,
) -> Arc<Surface> {
    timeout(Duration::from_secs(10), async {
        loop {
            frames.changed().await.expect("render loop alive");
            let surface = frames.borrow_and_update().clone();
            if pred(&surface) {
                return surface;
            }
        }
    })
    .await
    .expect("frame condition reached in time")
}

#[tokio::test]
async fn test_background_eases_to_new_target() {
    let mut renderer = fast_renderer();
    let mut frames = renderer.mount(SurfaceSize::new(12, 4)).unwrap();

    let first = wait_for_frame(&mut frames, |_| true).await;
    assert!(first.frame() >= 1);
    assert!(!all_cells(&first, |c| c.g == 0.0));

    renderer.set_parameters(RenderParameters::for_sentiment("negative"));
    let red = wait_for_frame(&mut frames, |s| all_cells(s, |c| c.g == 0.0 && c.b == 0.0)).await;
    assert!(red.frame() > first.frame());
    assert!(!all_cells(&red, |c| c.r == 0.0));

    renderer.unmount().await;
}

#[tokio::test]
async fn test_no_frames_after_unmount() {
    let mut renderer = fast_renderer();
    let mut frames = renderer.mount(SurfaceSize::new(6, 3)).unwrap();
    wait_for_frame(&mut frames, |s| s.frame() >= 3).await;

    renderer.unmount().await;
    assert_eq!(renderer.phase(), RendererPhase::TornDown);
    let last = frames.borrow_and_update().frame();

    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(frames.has_changed().is_err(), "sender should be gone");
    assert_eq!(frames.borrow().frame(), last);
}

#[tokio::test]
async fn test_toggling_reactivity_keeps_the_same_loop() {
    let mut renderer = fast_renderer();
    let mut frames = renderer.mount(SurfaceSize::new(8, 4)).unwrap();
    let before = wait_for_frame(&mut frames, |_| true).await.frame();

    renderer.set_parameters(RenderParameters::for_sentiment("positive"));
    renderer.pointer_moved(1, 1);
    renderer.set_parameters(RenderParameters::idle());
    renderer.pointer_moved(7, 3);

    let after = wait_for_frame(&mut frames, |s| s.frame() > before + 5).await;
    assert!(after.frame() > before);
    assert!(renderer.frames().unwrap().same_channel(&frames));

    renderer.unmount().await;
}

#[tokio::test]
async fn test_resize_reallocates_surface() {
    let mut renderer = fast_renderer();
    let mut frames = renderer.mount(SurfaceSize::new(8, 4)).unwrap();
    renderer.resize(SurfaceSize::new(20, 10));
    let resized = wait_for_frame(&mut frames, |s| s.size() == SurfaceSize::new(20, 10)).await;
    assert!(resized.get(19, 9).is_some());

    // empty sizes are ignored, the loop keeps the last good surface
    renderer.resize(SurfaceSize::new(0, 10));
    let later = wait_for_frame(&mut frames, |s| s.frame() > resized.frame() + 3).await;
    assert_eq!(later.size(), SurfaceSize::new(20, 10));

    renderer.unmount().await;
}

#[tokio::test]
async fn test_dropping_a_mounted_renderer_stops_the_loop() {
    let mut renderer = fast_renderer();
    let mut frames = renderer.mount(SurfaceSize::new(6, 3)).unwrap();
    wait_for_frame(&mut frames, |s| s.frame() >= 2).await;

    drop(renderer);
    timeout(Duration::from_secs(5), async {
        while frames.changed().await.is_ok() {}
    })
    .await
    .expect("render task released the frame stream");

    let last = frames.borrow().frame();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(frames.borrow().frame(), last);
}
