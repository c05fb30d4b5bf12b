//! Circular arc sampling shared by corner rounding and end caps.
//!
//! Arcs are described by `center`, `radius`, `start_angle` and a signed
//! `sweep` (positive = counter-clockwise).
use std::f64::consts::TAU;

use super::vector_2d::unit_at;
use super::Point2;

/// Fractional step at which the first and last interior samples sit,
/// measured from the arc ends.
pub const SAMPLE_OFFSET: f64 = 1.0 / 3.0;

/// Number of interior samples for an arc sweeping `sweep` radians when a
/// full circle is approximated by `points_per_circle` points.
///
/// Proportional to the sweep, rounded half up, never below 2.
#[must_use]
pub fn arc_point_count(points_per_circle: u32, sweep: f64) -> usize {
    let n = (0.5 + f64::from(points_per_circle) * sweep.abs() / TAU).floor();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = n.max(0.0) as usize;
    n.max(2)
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    center + unit_at(start_angle + sweep * t) * radius
}

/// Samples the interior of an arc with `npts` points.
///
/// The end points are not included: callers emit the exact tangent points
/// themselves. Sample `i` sits at angle `sweep * (i + f0) / nn` with
/// `f0 = SAMPLE_OFFSET` and `nn = npts - 1 + 2 * f0`, on the radius
/// `radius / cos(f0 * |sweep| / nn)`. The enlarged radius makes the first
/// and last chords run exactly along the end tangents and keeps the length
/// of the sampled polyline close to the true arc length.
#[must_use]
pub fn arc_interior_points(
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    npts: usize,
) -> Vec<Point2> {
    #[allow(clippy::cast_precision_loss)]
    let nn = npts as f64 - 1.0 + 2.0 * SAMPLE_OFFSET;
    let outer = radius / (SAMPLE_OFFSET * sweep.abs() / nn).cos();

    (0..npts)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = (i as f64 + SAMPLE_OFFSET) / nn;
            arc_point_at(center, outer, start_angle, sweep, t)
        })
        .collect()
}
