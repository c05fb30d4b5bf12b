mod path_hull;

pub use path_hull::PathHull;

use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// A closed outline. The last point connects back to the first; the first
/// point is not repeated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    /// The ordered boundary vertices.
    pub points: Vec<Point2>,
}

impl Polygon {
    /// Returns the number of boundary vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed enclosed area, positive for counter-clockwise outlines.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Unsigned enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}
