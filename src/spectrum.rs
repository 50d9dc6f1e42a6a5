//! Synthetic per-band power feed standing in for a real FFT pipeline.
//!
//! Each band has a quiet noise floor and bursts on its own rhythmic grid
//! (every beat, every other beat, on off-beats, once a bar) derived from the
//! configured tempo. Bursts decay geometrically over the following ticks.

use rand::prelude::*;
use tiles_core::SpectralProvider;

// Noise floor and burst shaping, in FFT-bin units (0..=255)
pub const NOISE_FLOOR_MAX: u32 = 12;
pub const BURST_BASE: f32 = 170.0;
pub const BURST_JITTER: f32 = 70.0;
pub const BURST_DECAY_PER_TICK: f32 = 0.55;
pub const POWER_MAX: u32 = 255;

// Burst period and phase offset per band, in beats, cycling for extra bands
const BAND_PERIOD_BEATS: [f64; 4] = [1.0, 2.0, 1.0, 4.0];
const BAND_OFFSET_BEATS: [f64; 4] = [0.0, 0.0, 0.5, 0.25];

pub struct SyntheticSpectrum {
    bpm: f32,
    tick_secs: f32,
    rng: StdRng,
    elapsed_beats: f64,
    levels: Vec<f32>,
    last_cycle: Vec<i64>,
    powers: Vec<u32>,
}

impl SyntheticSpectrum {
    pub fn new(bpm: f32, tick_secs: f32, seed: u64) -> Self {
        Self {
            bpm,
            tick_secs,
            rng: StdRng::seed_from_u64(seed),
            elapsed_beats: 0.0,
            levels: Vec::new(),
            last_cycle: Vec::new(),
            powers: Vec::new(),
        }
    }

    pub fn bpm(&self) -> f32 {
        self.bpm
    }

    /// Step the feed forward by one tick.
    pub fn advance(&mut self) {
        self.elapsed_beats += self.tick_secs as f64 * self.bpm as f64 / 60.0;
        for band in 0..self.powers.len() {
            let period = BAND_PERIOD_BEATS[band % BAND_PERIOD_BEATS.len()];
            let offset = BAND_OFFSET_BEATS[band % BAND_OFFSET_BEATS.len()];
            let cycle = ((self.elapsed_beats - offset) / period).floor() as i64;

            let level = &mut self.levels[band];
            if cycle > self.last_cycle[band] {
                self.last_cycle[band] = cycle;
                *level = BURST_BASE + self.rng.gen::<f32>() * BURST_JITTER;
            } else {
                *level *= BURST_DECAY_PER_TICK;
            }
            let noise = self.rng.gen_range(0..=NOISE_FLOOR_MAX);
            self.powers[band] = (noise + *level as u32).min(POWER_MAX);
        }
    }
}

impl SpectralProvider for SyntheticSpectrum {
    fn enable_bands(&mut self, count: usize) {
        log::info!("[spectrum] enabled {} bands at {:.0} bpm", count, self.bpm);
        self.levels = vec![0.0; count];
        // Start at the current cycle so nothing bursts on the first tick.
        self.last_cycle = (0..count)
            .map(|band| {
                let period = BAND_PERIOD_BEATS[band % BAND_PERIOD_BEATS.len()];
                let offset = BAND_OFFSET_BEATS[band % BAND_OFFSET_BEATS.len()];
                ((self.elapsed_beats - offset) / period).floor() as i64
            })
            .collect();
        self.powers = vec![0; count];
    }

    fn band_powers(&self) -> &[u32] {
        &self.powers
    }
}
