//! Snap-point selection for released drags.

/// Fraction of the release velocity projected onto the resting position.
pub const VELOCITY_PROJECTION: f32 = 0.2;

/// Pick the point in `points` nearest to `value` projected forward by
/// `velocity`. Ties resolve to the earliest point; `None` if `points` is
/// empty or the projection is NaN.
#[must_use]
pub fn snap_point(value: f32, velocity: f32, points: &[f32]) -> Option<f32> {
    let projected = value + VELOCITY_PROJECTION * velocity;
    if projected.is_nan() {
        return None;
    }
    points.iter().copied().fold(None, |best: Option<f32>, p| match best {
        Some(b) if (projected - b).abs() <= (projected - p).abs() => Some(b),
        _ => Some(p),
    })
}
