//! Leaf 2D vector helpers on top of [`glam::Vec2`].
//!
//! `glam` already covers addition, scaling, length, distance, dot product
//! and normalization, so this module only carries the handful of helpers
//! the simulation needs beyond that: midpoints, segments between points,
//! a direction-agreement measure and furthest-of-set selection.
//!
//! All functions are pure; none hold state.

use glam::Vec2;

/// Returns the point halfway between `a` and `b`.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use ionflare_core::vec2::midpoint;
///
/// let m = midpoint(Vec2::ZERO, Vec2::new(4.0, 6.0));
/// assert_eq!(m, Vec2::new(2.0, 3.0));
/// ```
#[must_use]
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Returns the segment vector from `a` to `b` (`b - a`).
#[must_use]
pub fn segment(a: Vec2, b: Vec2) -> Vec2 {
    b - a
}

/// Returns the cosine of the angle between `a` and `b`.
///
/// Degenerate inputs (either vector of zero length) return `1.0`, i.e.
/// zero-length vectors are treated as agreeing with everything. Callers
/// that need to distinguish the degenerate case should test for zero
/// length themselves.
#[must_use]
pub fn normalized_dot(a: Vec2, b: Vec2) -> f32 {
    let lengths = a.length() * b.length();
    if lengths == 0.0 {
        return 1.0;
    }
    a.dot(b) / lengths
}

/// Returns the candidate furthest from `target`, or `None` if
/// `candidates` is empty.
///
/// Distances are compared squared. Ties keep the earliest candidate, so
/// selection is deterministic for a fixed input order.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use ionflare_core::vec2::furthest;
///
/// let points = [Vec2::new(1.0, 0.0), Vec2::new(5.0, 0.0), Vec2::new(-2.0, 0.0)];
/// assert_eq!(furthest(Vec2::ZERO, &points), Some(Vec2::new(5.0, 0.0)));
/// assert_eq!(furthest(Vec2::ZERO, &[]), None);
/// ```
#[must_use]
pub fn furthest(target: Vec2, candidates: &[Vec2]) -> Option<Vec2> {
    let mut best: Option<(f32, Vec2)> = None;
    for &candidate in candidates {
        let dist = candidate.distance_squared(target);
        match best {
            Some((best_dist, _)) if dist <= best_dist => {}
            _ => best = Some((dist, candidate)),
        }
    }
    best.map(|(_, candidate)| candidate)
}
