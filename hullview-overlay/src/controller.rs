//! Bridge from UI toggle events to the layer registry
//!
//! The UI only knows layer labels. Each click sends a [`ToggleEvent`] through
//! a [`ToggleSender`]; the [`ToggleController`] is the single consumer and
//! applies events one at a time on the thread that owns the scene.

use crate::registry::LayerRegistry;
use crate::scene::Scene;
use hullview_core::Result;
use tracing::{error, trace};

/// A request to flip the visibility of the layer with this label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleEvent {
    pub label: String,
}

/// Cloneable sending half handed to UI code
#[derive(Debug, Clone)]
pub struct ToggleSender {
    tx: flume::Sender<ToggleEvent>,
}

impl ToggleSender {
    /// Queue a toggle for `label`. Returns `false` if the controller is gone.
    pub fn send(&self, label: impl Into<String>) -> bool {
        self.tx
            .send(ToggleEvent {
                label: label.into(),
            })
            .is_ok()
    }
}

/// Receives label events and applies them to a [`LayerRegistry`]
#[derive(Debug)]
pub struct ToggleController {
    tx: flume::Sender<ToggleEvent>,
    rx: flume::Receiver<ToggleEvent>,
}

impl Default for ToggleController {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleController {
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self { tx, rx }
    }

    /// A new sending handle for UI code
    pub fn sender(&self) -> ToggleSender {
        ToggleSender {
            tx: self.tx.clone(),
        }
    }

    /// Number of events waiting to be handled
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Toggle `label` and request a redraw.
    ///
    /// Unknown labels are returned as [`hullview_core::Error::UnknownLabel`]:
    /// a label the registry does not know means the UI is wired wrong.
    pub fn handle(
        &self,
        registry: &mut LayerRegistry,
        scene: &mut dyn Scene,
        label: &str,
    ) -> Result<bool> {
        let visible = registry.toggle(scene, label).inspect_err(|err| {
            error!(label, %err, "toggle event rejected");
        })?;
        scene.request_redraw();
        Ok(visible)
    }

    /// Handle every queued event in arrival order.
    ///
    /// Stops at the first failing event and returns its error; events queued
    /// after it stay in the channel. Returns the number of events handled.
    pub fn drain(&self, registry: &mut LayerRegistry, scene: &mut dyn Scene) -> Result<usize> {
        let mut handled = 0;
        while let Ok(event) = self.rx.try_recv() {
            trace!(label = %event.label, "handling toggle event");
            self.handle(registry, scene, &event.label)?;
            handled += 1;
        }
        Ok(handled)
    }
}
