use crate::beat::BandTracker;
use crate::color::{clamp_palette, max_palette_len, Rgb};
use crate::compositor::Compositor;
use crate::layout::Layout;
use crate::params::{EngineParams, ParamsError};
use crate::providers::{
    LayoutProvider, PaletteProvider, PanelPicker, SpectralProvider, TempoProvider,
};
use crate::sources::SourcePool;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One panel's output for a tick, ready for the frame sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameRecord {
    pub panel_id: u32,
    pub color: Rgb,
    pub transition_time: u16,
}

/// Owns all engine state and advances it one tick at a time.
///
/// Each tick runs Warm-up, Sense, Spawn, Render and Age in that order. All
/// buffers are sized in `init`; `tick` does not allocate.
///
/// Typical usage:
/// - `FrameDriver::init(&layout, &palette, &mut spectrum, params, picker)`
/// - call `tick(&spectrum, &tempo, &mut frames)` at the host's frame cadence
/// - `shutdown()` once when done
pub struct FrameDriver<R: PanelPicker = StdRng> {
    layout: Layout,
    palette: Vec<Rgb>,
    bands: Vec<BandTracker>,
    beats: Vec<u64>,
    pool: SourcePool,
    compositor: Compositor,
    params: EngineParams,
    picker: R,
    ticks: u64,
}

impl FrameDriver<StdRng> {
    /// `init` with a seeded `StdRng` choosing spawn panels.
    pub fn with_seed<L, P, S>(
        layout: &L,
        palette: &P,
        spectrum: &mut S,
        params: EngineParams,
        seed: u64,
    ) -> Result<Self, ParamsError>
    where
        L: LayoutProvider + ?Sized,
        P: PaletteProvider + ?Sized,
        S: SpectralProvider + ?Sized,
    {
        Self::init(layout, palette, spectrum, params, StdRng::seed_from_u64(seed))
    }
}

impl<R: PanelPicker> FrameDriver<R> {
    /// Read the collaborators once and size every buffer.
    ///
    /// The palette is cut to `panel_count - 2` colors, one band tracker per
    /// remaining color, and the spectrum is asked for exactly that many bands.
    pub fn init<L, P, S>(
        layout: &L,
        palette: &P,
        spectrum: &mut S,
        params: EngineParams,
        picker: R,
    ) -> Result<Self, ParamsError>
    where
        L: LayoutProvider + ?Sized,
        P: PaletteProvider + ?Sized,
        S: SpectralProvider + ?Sized,
    {
        params.validate()?;
        let layout = layout.layout();
        let colors = palette.colors();
        log::info!("[init] palette has {} colors", colors.len());

        let (usable, truncated) = clamp_palette(colors, layout.len());
        if truncated {
            log::info!(
                "[init] too many colors in the palette, using only the first {}",
                max_palette_len(layout.len())
            );
        }
        for c in usable {
            log::info!("[init]    {} {} {}", c.r, c.g, c.b);
        }

        let capacity = params.max_sources(layout.len());
        log::info!("[init] max sources: {}", capacity);
        log::info!("[init] layout has {} panels", layout.len());
        for p in layout.panels() {
            log::info!(
                "[init]    id: {}   x, y: {:.2}, {:.2}",
                p.id,
                p.centroid.x,
                p.centroid.y
            );
        }

        let palette = usable.to_vec();
        let bands = palette
            .iter()
            .map(|_| BandTracker::new(params.trigger_threshold))
            .collect::<Vec<_>>();
        spectrum.enable_bands(bands.len());

        Ok(Self {
            beats: vec![0; bands.len()],
            bands,
            palette,
            pool: SourcePool::new(capacity, params.lifespan),
            compositor: Compositor::new(&params),
            layout,
            params,
            picker,
            ticks: 0,
        })
    }

    /// Advance one tick and write this tick's frame records.
    ///
    /// Returns how many records were written: 0 during warm-up, otherwise one
    /// per panel (capped by `frames.len()`). Bands beyond the end of the
    /// spectrum slice are left untouched for the tick.
    pub fn tick<S, T>(&mut self, spectrum: &S, tempo: &T, frames: &mut [FrameRecord]) -> usize
    where
        S: SpectralProvider + ?Sized,
        T: TempoProvider + ?Sized,
    {
        if self.ticks < self.params.warmup_ticks as u64 {
            self.ticks += 1;
            return 0;
        }
        self.ticks += 1;

        self.sense_and_spawn(spectrum.band_powers());
        let written = self.render(tempo, frames);
        self.pool.age_and_expire();
        written
    }

    fn sense_and_spawn(&mut self, powers: &[u32]) {
        for (i, (band, &power)) in self.bands.iter_mut().zip(powers).enumerate() {
            if !band.observe(power) {
                continue;
            }
            band.record_trigger();
            self.beats[i] += 1;

            // Need at least two panels for spawning to mean anything.
            let panel_count = self.layout.len();
            if panel_count < 2 {
                continue;
            }
            let intensity = band.spawn_intensity(self.params.min_intensity);
            for _ in 0..self.params.spawn_amount {
                let idx = self.picker.pick(panel_count) % panel_count;
                let centroid = self.layout.panels()[idx].centroid;
                self.pool.spawn(self.palette[i], intensity, centroid);
            }
        }
    }

    fn render<T: TempoProvider + ?Sized>(&self, tempo: &T, frames: &mut [FrameRecord]) -> usize {
        let multiplier = if self.compositor.tempo_weighted() {
            let t = tempo.tempo();
            let m = self.compositor.multiplier(t);
            log::debug!("[tempo] tempo: {:.2} multiplier: {:.3}", t, m);
            m
        } else {
            self.compositor.multiplier(0.0)
        };

        let mut written = 0;
        for (frame, panel) in frames.iter_mut().zip(self.layout.panels()) {
            *frame = FrameRecord {
                panel_id: panel.id,
                color: self.compositor.render(panel.centroid, &self.pool, multiplier),
                transition_time: self.params.transition_time,
            };
            written += 1;
        }
        if !self.pool.is_empty() {
            log::debug!("[sources] live: {}", self.pool.count());
        }
        written
    }

    /// Tear down the driver, logging a short run summary.
    pub fn shutdown(self) {
        let rendered = self.ticks.saturating_sub(self.params.warmup_ticks as u64);
        log::info!(
            "[shutdown] ticks: {} rendered: {} beats per band: {:?}",
            self.ticks,
            rendered,
            self.beats
        );
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Palette after clamping; entry `i` colors band `i`.
    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    pub fn bands(&self) -> &[BandTracker] {
        &self.bands
    }

    /// Beats detected per band since init.
    pub fn beat_counts(&self) -> &[u64] {
        &self.beats
    }

    pub fn sources(&self) -> &SourcePool {
        &self.pool
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn is_warming_up(&self) -> bool {
        self.ticks < self.params.warmup_ticks as u64
    }
}
