//! Layer registry: the overlay manager proper
//!
//! The registry is the only caller of [`Renderable::add`] and
//! [`Renderable::remove`]. Each entry's presence in the scene always matches
//! its `visible` flag.

use crate::renderable::Renderable;
use crate::scene::Scene;
use hullview_core::{Error, Result};
use std::collections::HashMap;
use tracing::info;

/// A registered layer
#[derive(Debug)]
pub struct LayerEntry {
    label: String,
    visible: bool,
    renderable: Renderable,
}

impl LayerEntry {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn renderable(&self) -> &Renderable {
        &self.renderable
    }
}

/// Label-keyed layers in registration order
#[derive(Debug, Default)]
pub struct LayerRegistry {
    entries: Vec<LayerEntry>,
    index: HashMap<String, usize>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a layer under `label` and add it to the scene as visible.
    ///
    /// Fails with [`Error::DuplicateLabel`] if the label is taken; nothing is
    /// added to the scene in that case.
    pub fn register(
        &mut self,
        scene: &mut dyn Scene,
        label: impl Into<String>,
        renderable: impl Into<Renderable>,
    ) -> Result<()> {
        let label = label.into();
        if self.index.contains_key(&label) {
            return Err(Error::DuplicateLabel(label));
        }

        let mut renderable = renderable.into();
        renderable.add(scene)?;
        info!(
            label = %label,
            kind = renderable.kind(),
            primitives = renderable.primitive_count(),
            "registered layer"
        );

        self.index.insert(label.clone(), self.entries.len());
        self.entries.push(LayerEntry {
            label,
            visible: true,
            renderable,
        });
        Ok(())
    }

    /// Flip a layer's visibility, adding it to or removing it from the scene.
    ///
    /// Returns the new visibility. Fails with [`Error::UnknownLabel`] if no
    /// layer has this label; no entry changes in that case.
    pub fn toggle(&mut self, scene: &mut dyn Scene, label: &str) -> Result<bool> {
        let entry = self.entry_mut(label)?;
        let visible = !entry.visible;
        if visible {
            entry.renderable.add(scene)?;
        } else {
            entry.renderable.remove(scene)?;
        }
        entry.visible = visible;
        info!(label, visible, "toggled layer");
        Ok(visible)
    }

    /// Bring a layer to the requested visibility, toggling only if needed
    pub fn set_visible(&mut self, scene: &mut dyn Scene, label: &str, visible: bool) -> Result<()> {
        if self.entry_mut(label)?.visible != visible {
            self.toggle(scene, label)?;
        }
        Ok(())
    }

    /// Registered labels, in registration order
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Visibility of a layer, or `None` if the label is unknown
    pub fn is_visible(&self, label: &str) -> Option<bool> {
        self.get(label).map(LayerEntry::is_visible)
    }

    pub fn get(&self, label: &str) -> Option<&LayerEntry> {
        self.index.get(label).map(|&i| &self.entries[i])
    }

    /// Entries in registration order
    pub fn entries(&self) -> impl Iterator<Item = &LayerEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, label: &str) -> Result<&mut LayerEntry> {
        match self.index.get(label) {
            Some(&i) => Ok(&mut self.entries[i]),
            None => Err(Error::UnknownLabel(label.to_string())),
        }
    }
}
