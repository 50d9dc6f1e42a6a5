use tiles_core::TempoProvider;

/// Constant tempo, in beats per minute, for hosts without tempo tracking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedTempo(pub f32);

impl FixedTempo {
    pub fn from_bpm(bpm: f32) -> Self {
        Self(bpm.max(0.0))
    }
}

impl TempoProvider for FixedTempo {
    fn tempo(&self) -> f32 {
        self.0
    }
}
