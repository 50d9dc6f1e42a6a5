use crate::color::Rgb;
use glam::Vec2;
use std::collections::VecDeque;

/// A transient colored point that lights nearby panels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    pub position: Vec2,
    pub color: Rgb,
    pub age: u32,
}

/// Bounded, oldest-first collection of live light sources.
///
/// Storage is reserved up front and the pool never grows past `capacity`, so
/// spawning and aging don't allocate. Index 0 is always the oldest survivor.
#[derive(Clone, Debug)]
pub struct SourcePool {
    sources: VecDeque<LightSource>,
    capacity: usize,
    lifespan: u32,
}

impl SourcePool {
    pub fn new(capacity: usize, lifespan: u32) -> Self {
        Self {
            sources: VecDeque::with_capacity(capacity),
            capacity,
            lifespan,
        }
    }

    /// Append a source of `color` scaled by `intensity` at `position`.
    ///
    /// A full pool first drops its oldest source, which is returned. A pool
    /// with zero capacity ignores the call.
    pub fn spawn(&mut self, color: Rgb, intensity: f32, position: Vec2) -> Option<LightSource> {
        if self.capacity == 0 {
            return None;
        }
        let evicted = if self.sources.len() >= self.capacity {
            self.sources.pop_front()
        } else {
            None
        };
        self.sources.push_back(LightSource {
            position,
            color: color.scaled(intensity),
            age: 0,
        });
        evicted
    }

    /// Remove every source that has reached its lifespan and age the rest.
    ///
    /// Survivors keep their relative order. Returns how many were removed.
    pub fn age_and_expire(&mut self) -> usize {
        let before = self.sources.len();
        let lifespan = self.lifespan;
        self.sources.retain_mut(|s| {
            if s.age >= lifespan {
                false
            } else {
                s.age += 1;
                true
            }
        });
        before - self.sources.len()
    }

    pub fn count(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn at(&self, index: usize) -> Option<&LightSource> {
        self.sources.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LightSource> + '_ {
        self.sources.iter()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn lifespan(&self) -> u32 {
        self.lifespan
    }
}
