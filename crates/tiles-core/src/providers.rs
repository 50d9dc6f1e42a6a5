//! Narrow interfaces to the collaborators the engine consumes.
//!
//! Layout, palette, spectrum, tempo and randomness all come from the host.
//! Plain data types implement the provider traits directly so tests and
//! simple hosts can hand values straight to the driver.

use crate::color::Rgb;
use crate::layout::Layout;
use rand::{Rng, RngCore};

/// Source of the immutable panel layout, read once at init.
pub trait LayoutProvider {
    fn layout(&self) -> Layout;
}

impl LayoutProvider for Layout {
    fn layout(&self) -> Layout {
        self.clone()
    }
}

/// Source of the active color palette, read once at init.
pub trait PaletteProvider {
    fn colors(&self) -> &[Rgb];
}

impl PaletteProvider for [Rgb] {
    fn colors(&self) -> &[Rgb] {
        self
    }
}

impl PaletteProvider for Vec<Rgb> {
    fn colors(&self) -> &[Rgb] {
        self
    }
}

/// Per-band power feed, one value per band per tick.
pub trait SpectralProvider {
    /// Called once at init with the number of bands the engine will read.
    fn enable_bands(&mut self, count: usize);
    fn band_powers(&self) -> &[u32];
}

impl SpectralProvider for Vec<u32> {
    fn enable_bands(&mut self, count: usize) {
        self.resize(count, 0);
    }

    fn band_powers(&self) -> &[u32] {
        self
    }
}

/// Current tempo estimate; only read when tempo weighting is enabled.
pub trait TempoProvider {
    fn tempo(&self) -> f32;
}

impl TempoProvider for f32 {
    fn tempo(&self) -> f32 {
        *self
    }
}

/// Tempo provider for hosts without tempo tracking.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTempo;

impl TempoProvider for NoTempo {
    fn tempo(&self) -> f32 {
        0.0
    }
}

/// Chooses the panel a new source spawns on.
pub trait PanelPicker {
    /// Index in `0..panel_count`; `panel_count` is always at least 2.
    fn pick(&mut self, panel_count: usize) -> usize;
}

impl<R: RngCore> PanelPicker for R {
    fn pick(&mut self, panel_count: usize) -> usize {
        self.gen_range(0..panel_count)
    }
}

/// Replays a fixed sequence of panel indices, wrapping at the end.
#[derive(Clone, Debug)]
pub struct ScriptedPicker {
    indices: Vec<usize>,
    next: usize,
}

impl ScriptedPicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, next: 0 }
    }
}

impl PanelPicker for ScriptedPicker {
    fn pick(&mut self, panel_count: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let i = self.indices[self.next % self.indices.len()];
        self.next += 1;
        i % panel_count
    }
}
