//! Interactive viewer for hullview overlays
//!
//! Projects the overlay scene with an orbit camera and paints it in an
//! eframe window (wgpu backend) next to a checkbox panel, one checkbox per
//! layer.

pub mod app;
pub mod camera;
pub mod config;
pub mod logging;
pub mod projection;

pub use app::ViewerApp;
pub use camera::*;
pub use config::ViewerConfig;
pub use projection::*;

use hullview_core::Error;
use hullview_overlay::View;
use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;
use thiserror::Error as ThisError;
use tracing::info;

/// Viewer failures
#[derive(ThisError, Debug)]
pub enum ViewerError {
    #[error("Window error: {0}")]
    Window(String),
    #[error(transparent)]
    Layer(#[from] Error),
}

/// Open a window on `view` and block until it is closed.
///
/// A layer error raised while handling a checkbox closes the window and is
/// returned as [`ViewerError::Layer`].
pub fn run(view: View, config: ViewerConfig) -> Result<(), ViewerError> {
    let failure = Rc::new(RefCell::new(None));
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    info!(layers = view.registry().len(), "opening viewer window");
    let title = config.title.clone();
    let slot = failure.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(view, config, slot)))),
    )
    .map_err(|e| ViewerError::Window(e.to_string()))?;

    take_failure(&failure)
}

/// Turn whatever the app left in its failure slot into the result of [`run`]
fn take_failure(slot: &app::FailureSlot) -> Result<(), ViewerError> {
    let failure = slot.borrow_mut().take();
    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// One line per layer: label, kind, visibility and primitive count
pub fn summary(view: &View) -> String {
    let mut out = String::new();
    for layer in view.layers() {
        let renderable = layer.renderable();
        let _ = writeln!(
            out,
            "{:<14} {:<12} {:<8} {} primitives",
            layer.label(),
            renderable.kind(),
            if layer.is_visible() { "visible" } else { "hidden" },
            renderable.primitive_count()
        );
    }
    if let Some(limits) = view.scene().axis_limits() {
        let _ = writeln!(out, "axis limits: [{}, {}]", limits.min, limits.max);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hullview_core::{HullData, Point3f, PointCloud};
    use hullview_overlay::ViewBuilder;

    #[test]
    fn test_summary_lists_layers_in_order() {
        let cloud = PointCloud::from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(2.0, 0.0, 0.0),
            Point3f::new(0.0, 2.0, 0.0),
        ]);
        let hull = HullData::new(cloud, vec![[0, 1, 2]]).unwrap();
        let mut view = ViewBuilder::new().hull(hull).build().unwrap();
        view.toggle("points").unwrap();

        let text = summary(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("points"));
        assert!(lines[0].contains("hidden"));
        assert!(lines[1].starts_with("hull"));
        assert!(lines[1].contains("1 primitives"));
        assert_eq!(lines[2], "axis limits: [0, 2]");
    }

    #[test]
    fn test_failure_slot_becomes_layer_error() {
        let slot: app::FailureSlot = Rc::new(RefCell::new(None));
        assert!(take_failure(&slot).is_ok());

        *slot.borrow_mut() = Some(Error::UnknownLabel("hull".into()));
        match take_failure(&slot) {
            Err(ViewerError::Layer(Error::UnknownLabel(label))) => assert_eq!(label, "hull"),
            other => panic!("unexpected result {:?}", other),
        };
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn test_summary_of_empty_view() {
        let view = ViewBuilder::new().build().unwrap();
        assert!(summary(&view).is_empty());
    }
}
