//! Immutable snapshot of the physical panel arrangement.
//!
//! A `Layout` is validated once when it is built and never changes afterwards;
//! the driver only ever reads it.

use fnv::FnvHashSet;
use glam::Vec2;
use thiserror::Error;

/// One addressable light panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Panel {
    pub id: u32,
    pub centroid: Vec2,
}

impl Panel {
    pub fn new(id: u32, x: f32, y: f32) -> Self {
        Self {
            id,
            centroid: Vec2::new(x, y),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("panel id {0} appears more than once in the layout")]
    DuplicatePanelId(u32),
    #[error("panel {id} has a non-finite centroid")]
    NonFiniteCentroid { id: u32 },
}

/// Ordered set of panels with unique ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    panels: Vec<Panel>,
}

impl Layout {
    pub fn new(panels: Vec<Panel>) -> Result<Self, LayoutError> {
        let mut seen = FnvHashSet::default();
        for p in &panels {
            if !p.centroid.is_finite() {
                return Err(LayoutError::NonFiniteCentroid { id: p.id });
            }
            if !seen.insert(p.id) {
                return Err(LayoutError::DuplicatePanelId(p.id));
            }
        }
        Ok(Self { panels })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }
}
