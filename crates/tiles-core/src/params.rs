use crate::color::Rgb;
use crate::constants::*;
use thiserror::Error;

/// Tuning knobs for the whole engine, fixed at init.
///
/// - `base_color`: background every panel blends away from
/// - `adjacent_panel_distance`: centroid distance that counts as "one panel away"
/// - `transition_time`: fade hint copied into every frame record (100 ms units)
/// - `min_intensity`: floor of the log-scaled spawn brightness
/// - `trigger_threshold`: fraction of a band's running max a sample must exceed
///   (on top of the tracked floor) to count as a beat
/// - `spawn_amount`: sources spawned per beat
/// - `lifespan`: ticks a source survives; also scales the pool capacity
/// - `tempo_weighted`: when set, the falloff multiplier becomes
///   `ln(tempo + 1) + min_multiplier`
/// - `min_multiplier`: falloff multiplier (or its floor when tempo weighted)
/// - `warmup_ticks`: leading ticks that produce no frame
#[derive(Clone, Debug, PartialEq)]
pub struct EngineParams {
    pub base_color: Rgb,
    pub adjacent_panel_distance: f32,
    pub transition_time: u16,
    pub min_intensity: f32,
    pub trigger_threshold: f32,
    pub spawn_amount: usize,
    pub lifespan: u32,
    pub tempo_weighted: bool,
    pub min_multiplier: f32,
    pub warmup_ticks: u32,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            base_color: BASE_COLOR,
            adjacent_panel_distance: ADJACENT_PANEL_DISTANCE,
            transition_time: TRANSITION_TIME,
            min_intensity: MIN_INTENSITY,
            trigger_threshold: TRIGGER_THRESHOLD,
            spawn_amount: SPAWN_AMOUNT,
            lifespan: LIFESPAN,
            tempo_weighted: TEMPO_WEIGHTED,
            min_multiplier: MIN_MULTIPLIER,
            warmup_ticks: WARMUP_TICKS,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("lifespan must be at least one tick")]
    ZeroLifespan,
    #[error("spawn amount must be at least one source per beat")]
    ZeroSpawnAmount,
    #[error("adjacent panel distance must be a positive finite number, got {0}")]
    PanelDistance(f32),
    #[error("minimum intensity must lie in [0, 1], got {0}")]
    MinIntensity(f32),
    #[error("trigger threshold must be a non-negative finite number, got {0}")]
    TriggerThreshold(f32),
    #[error("falloff multiplier must be a non-negative finite number, got {0}")]
    Multiplier(f32),
}

impl EngineParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.lifespan == 0 {
            return Err(ParamsError::ZeroLifespan);
        }
        if self.spawn_amount == 0 {
            return Err(ParamsError::ZeroSpawnAmount);
        }
        let d = self.adjacent_panel_distance;
        if !d.is_finite() || d <= 0.0 {
            return Err(ParamsError::PanelDistance(d));
        }
        if !(0.0..=1.0).contains(&self.min_intensity) {
            return Err(ParamsError::MinIntensity(self.min_intensity));
        }
        if !self.trigger_threshold.is_finite() || self.trigger_threshold < 0.0 {
            return Err(ParamsError::TriggerThreshold(self.trigger_threshold));
        }
        if !self.min_multiplier.is_finite() || self.min_multiplier < 0.0 {
            return Err(ParamsError::Multiplier(self.min_multiplier));
        }
        Ok(())
    }

    /// Pool capacity for a layout of `panel_count` panels.
    pub fn max_sources(&self, panel_count: usize) -> usize {
        panel_count * self.lifespan as usize
    }
}
