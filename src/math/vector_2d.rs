use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Returns the z component of the cross product `a × b`.
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Signed area spanned by the triangle corner `(a, b, c)`, doubled.
///
/// Zero exactly when the three points are collinear (or coincident).
#[must_use]
pub fn corner_cross(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    cross(&(b - a), &(c - b))
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    normalize(&(b - a))
}

/// Normalizes `v`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` has (near) zero length.
pub fn normalize(v: &Vector2) -> Result<Vector2> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Returns the left-pointing normal `(-y, x)` of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Unit vector at polar angle `angle`.
#[must_use]
pub fn unit_at(angle: f64) -> Vector2 {
    Vector2::new(angle.cos(), angle.sin())
}

/// Polar angle of `v`.
#[must_use]
pub fn angle_of(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}
