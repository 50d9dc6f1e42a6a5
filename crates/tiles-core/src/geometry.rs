use glam::Vec2;

/// Euclidean distance between two centroids.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
