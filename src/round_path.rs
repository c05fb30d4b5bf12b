use tracing::debug;

use crate::geometry::{CapStyle, Path};
use crate::math::{Point2, DEFAULT_MERGE_DISTANCE};
use crate::operations::{RoundCorners, SimplifyPath};
use crate::tessellation::{PathHull, Polygon};

/// Parameters controlling corner rounding and outline generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundPathParams {
    /// Requested corner radius; the sign is ignored.
    pub radius: f64,
    /// Number of points approximating a full circle. Values below 3 are
    /// raised to 3.
    pub points_per_circle: i32,
    /// Consecutive points closer than this are merged.
    pub merge_distance: f64,
    /// Cap style for the two path ends.
    pub cap: CapStyle,
}

impl Default for RoundPathParams {
    fn default() -> Self {
        Self {
            radius: 0.0,
            points_per_circle: 64,
            merge_distance: DEFAULT_MERGE_DISTANCE,
            cap: CapStyle::Round,
        }
    }
}

impl RoundPathParams {
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_points_per_circle(mut self, points_per_circle: i32) -> Self {
        self.points_per_circle = points_per_circle;
        self
    }

    #[must_use]
    pub fn with_merge_distance(mut self, merge_distance: f64) -> Self {
        self.merge_distance = merge_distance;
        self
    }

    #[must_use]
    pub fn with_cap(mut self, cap: CapStyle) -> Self {
        self.cap = cap;
        self
    }
}

/// Turns a centerline into the outline of its rounded, stroked version.
///
/// Runs the three stages in order: collinear point removal, corner
/// rounding, hull generation. Never fails; degenerate input degrades to an
/// empty or zero-area outline.
#[derive(Debug)]
pub struct RoundPath<'a> {
    points: &'a [Point2],
    width: f64,
    params: RoundPathParams,
}

impl<'a> RoundPath<'a> {
    /// Creates a new rounding pipeline.
    #[must_use]
    pub fn new(points: &'a [Point2], width: f64, params: RoundPathParams) -> Self {
        Self {
            points,
            width,
            params,
        }
    }

    /// Creates a pipeline for `path`. The path's cap style overrides the
    /// one in `params`.
    #[must_use]
    pub fn from_path(path: &'a Path, params: RoundPathParams) -> Self {
        Self::new(&path.points, path.width(), params.with_cap(path.cap))
    }

    /// Returns the simplified and rounded centerline without stroking it.
    #[must_use]
    pub fn centerline(&self) -> Vec<Point2> {
        let simplified = SimplifyPath::new(self.points)
            .with_merge_distance(self.params.merge_distance)
            .execute();
        if simplified.len() < 2 {
            return simplified;
        }
        RoundCorners::new(&simplified, self.params.radius, self.params.points_per_circle)
            .with_merge_distance(self.params.merge_distance)
            .execute()
    }

    /// Executes the pipeline.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        debug!(
            points = self.points.len(),
            width = self.width,
            radius = self.params.radius,
            points_per_circle = self.params.points_per_circle,
            "rounding path"
        );
        let centerline = self.centerline();
        PathHull::new(&centerline, self.width, self.params.points_per_circle)
            .with_cap(self.params.cap)
            .execute()
    }
}

/// Rounds the corners of `points` with `radius` and returns the outline of
/// the result stroked with `width`, using default parameters otherwise.
#[must_use]
pub fn round_path(points: &[Point2], width: f64, radius: f64, points_per_circle: i32) -> Polygon {
    let params = RoundPathParams::default()
        .with_radius(radius)
        .with_points_per_circle(points_per_circle);
    RoundPath::new(points, width, params).execute()
}
