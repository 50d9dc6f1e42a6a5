//! Adaptive per-band onset detection.
//!
//! Each band tracks a leaky noise floor (`latest_minimum`) and a slowly
//! adapting ceiling (`running_max`) independently. A beat fires when a new
//! sample jumps well clear of the floor, by a fixed fraction of the ceiling.
//! This catches strong instrumental entries as well as drum hits.

use crate::constants::{INITIAL_MAX_TRIGGER, INITIAL_RUNNING_MAX, RUNNING_MAX_TRAIL};

/// Fold `value` into `running_max` as an asymmetric moving estimate.
///
/// `effective_trail` approximates how many past values the estimate spans.
/// Values above the current max are absorbed with half the trail, so loud
/// peaks pull the ceiling up quickly while quiet ones let it decay slowly.
pub fn add_to_running_max(running_max: u32, value: u32, effective_trail: u32) -> u32 {
    let effective_trail = effective_trail.max(1);
    let trail = if value > running_max && effective_trail > 1 {
        effective_trail / 2
    } else {
        effective_trail
    };
    let rm = running_max as f32;
    (rm - rm / effective_trail as f32 + value as f32 / trail as f32) as u32
}

/// Rolling state for one frequency band.
#[derive(Clone, Debug, PartialEq)]
pub struct BandTracker {
    latest_minimum: u32,
    sound_power: u32,
    running_max: u32,
    max_trigger: u32,
    previous_power: u32,
    second_previous_power: u32,
    threshold: f32,
}

impl BandTracker {
    pub fn new(threshold: f32) -> Self {
        Self::with_running_max(threshold, INITIAL_RUNNING_MAX)
    }

    pub fn with_running_max(threshold: f32, running_max: u32) -> Self {
        Self {
            latest_minimum: 0,
            sound_power: 0,
            running_max,
            max_trigger: INITIAL_MAX_TRIGGER,
            previous_power: 0,
            second_previous_power: 0,
            threshold,
        }
    }

    /// Feed the newest sample for this band; returns true on a beat.
    pub fn observe(&mut self, power: u32) -> bool {
        self.sound_power = power;

        // A local peak was just passed and the signal has since dropped well
        // below it: fold that peak into the ceiling.
        let dropped = self.sound_power.saturating_add(self.running_max / 4) < self.previous_power;
        if dropped && self.previous_power > self.second_previous_power {
            self.running_max =
                add_to_running_max(self.running_max, self.previous_power, RUNNING_MAX_TRAIL);
        }

        if self.sound_power < self.latest_minimum {
            self.latest_minimum = self.sound_power;
        } else {
            self.latest_minimum = self.latest_minimum.saturating_sub(1);
        }

        let trigger_level = self.latest_minimum as f32 + self.running_max as f32 * self.threshold;
        let beat = self.sound_power as f32 > trigger_level;
        if beat {
            // Raise the floor to the hit so the next tick can't re-trigger on it.
            self.latest_minimum = self.sound_power;
        }

        self.second_previous_power = self.previous_power;
        self.previous_power = self.sound_power;
        beat
    }

    /// Raise the max-trigger high-water mark to the current sample.
    pub fn record_trigger(&mut self) {
        self.max_trigger = self.max_trigger.max(self.sound_power);
    }

    /// Brightness for a source spawned from the current sample.
    ///
    /// Log-scales the sample against the running max into
    /// `[min_intensity, 1]`. Samples or ceilings of 1 or less would make the
    /// logarithm degenerate and map to full brightness instead.
    pub fn spawn_intensity(&self, min_intensity: f32) -> f32 {
        if self.sound_power <= 1 || self.running_max <= 1 {
            return 1.0;
        }
        let ratio = (self.sound_power as f32).ln() / (self.running_max as f32).ln();
        (ratio * (1.0 - min_intensity) + min_intensity).min(1.0)
    }

    pub fn latest_minimum(&self) -> u32 {
        self.latest_minimum
    }

    pub fn sound_power(&self) -> u32 {
        self.sound_power
    }

    pub fn running_max(&self) -> u32 {
        self.running_max
    }

    pub fn max_trigger(&self) -> u32 {
        self.max_trigger
    }

    pub fn previous_power(&self) -> u32 {
        self.previous_power
    }

    pub fn second_previous_power(&self) -> u32 {
        self.second_previous_power
    }
}
