//! Distance-weighted blending of light sources onto panels.
//!
//! A panel starts from the base color and lerps toward each source in pool
//! order (oldest first) by a falloff factor in (0, 1]. Because each step
//! blends into the running result, this is an order-dependent weighted lerp
//! rather than a true weighted average: at equal distance the newest source
//! has the strongest hold on the final color.

use crate::color::Rgb;
use crate::geometry::distance;
use crate::params::EngineParams;
use crate::sources::SourcePool;
use glam::{Vec2, Vec3};

/// Blend weight for a source at `normalized_distance` panel spacings away.
///
/// Not physically based; `1 / (d² · multiplier + 1)` just looks right on
/// real panels. 1 at the source, tending to 0 far away.
#[inline]
pub fn falloff(normalized_distance: f32, multiplier: f32) -> f32 {
    let d2 = normalized_distance * normalized_distance;
    1.0 / (d2 * multiplier + 1.0)
}

#[derive(Clone, Debug)]
pub struct Compositor {
    base: Rgb,
    panel_spacing: f32,
    min_multiplier: f32,
    tempo_weighted: bool,
}

impl Compositor {
    pub fn new(params: &EngineParams) -> Self {
        Self {
            base: params.base_color,
            panel_spacing: params.adjacent_panel_distance,
            min_multiplier: params.min_multiplier,
            tempo_weighted: params.tempo_weighted,
        }
    }

    pub fn base_color(&self) -> Rgb {
        self.base
    }

    pub fn tempo_weighted(&self) -> bool {
        self.tempo_weighted
    }

    /// Falloff multiplier for this tick. Faster tempos tighten the glow.
    ///
    /// Negative tempo readings are treated as zero.
    pub fn multiplier(&self, tempo: f32) -> f32 {
        if self.tempo_weighted {
            (tempo.max(0.0) + 1.0).ln() + self.min_multiplier
        } else {
            self.min_multiplier
        }
    }

    /// Color of the panel whose centroid is `centroid`.
    pub fn render(&self, centroid: Vec2, sources: &SourcePool, multiplier: f32) -> Rgb {
        let mut acc = Vec3::new(self.base.r as f32, self.base.g as f32, self.base.b as f32);
        for s in sources.iter() {
            let d = distance(centroid, s.position) / self.panel_spacing;
            let factor = falloff(d, multiplier);
            let src = Vec3::new(s.color.r as f32, s.color.g as f32, s.color.b as f32);
            acc = acc * (1.0 - factor) + src * factor;
        }
        Rgb::new(acc.x as u8, acc.y as u8, acc.z as u8)
    }
}
