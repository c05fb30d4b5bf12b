use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::error::Result;
use crate::math::arc_2d::{arc_interior_points, arc_point_at, arc_point_count};
use crate::math::vector_2d::{angle_of, cross, left_normal, segment_direction};
use crate::math::window::{triples, Triple};
use crate::math::{Point2, Vector2, DEFAULT_MERGE_DISTANCE, TOLERANCE};

/// Minimum number of points per full circle.
pub const MIN_POINTS_PER_CIRCLE: u32 = 3;

/// Local geometry at one interior vertex.
#[derive(Debug, Clone, Copy)]
pub struct Turn {
    /// Unit vector from the vertex towards its predecessor.
    pub s1: Vector2,
    /// Unit vector from the vertex towards its successor.
    pub s2: Vector2,
    /// Signed angle from `s1` to `s2`, in `(-π, π]`.
    pub angle: f64,
    /// Tangent length available on the incoming segment.
    pub d1: f64,
    /// Tangent length available on the outgoing segment.
    pub d2: f64,
}

impl Turn {
    /// Measures the turn at `w.cur`.
    ///
    /// Each side may use half its segment, or the whole segment when it
    /// ends at a path end point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if either adjacent segment has
    /// zero length.
    pub fn new(w: &Triple<'_, Point2>) -> Result<Self> {
        let s1 = segment_direction(w.cur, w.prev)?;
        let s2 = segment_direction(w.cur, w.next)?;
        let share = |at_end: bool| if at_end { 1.0 } else { 0.5 };
        Ok(Self {
            s1,
            s2,
            angle: cross(&s1, &s2).atan2(s1.dot(&s2)),
            d1: share(w.prev_is_first()) * (w.prev - w.cur).norm(),
            d2: share(w.next_is_last()) * (w.next - w.cur).norm(),
        })
    }

    /// `tan(angle / 2)`: ratio between a fillet radius and its tangent length.
    ///
    /// Carries the turn direction in its sign.
    #[must_use]
    pub fn half_angle_factor(&self) -> f64 {
        let half = self.angle * 0.5;
        half.sin() / half.cos()
    }

    /// Largest signed radius whose tangent points stay within `d1` and `d2`.
    #[must_use]
    pub fn max_radius(&self) -> f64 {
        self.d1.min(self.d2) * self.half_angle_factor()
    }

    /// Sweep of the fillet arc, `π - |angle|`.
    #[must_use]
    pub fn arc_sweep(&self) -> f64 {
        PI - self.angle.abs()
    }
}

/// A fillet arc replacing one vertex.
#[derive(Debug, Clone)]
pub struct CornerArc {
    pub center: Point2,
    /// Unsigned arc radius.
    pub radius: f64,
    /// Tangent point on the incoming segment.
    pub entry: Point2,
    /// Tangent point on the outgoing segment.
    pub exit: Point2,
    pub start_angle: f64,
    /// Signed sweep from `entry` to `exit` (positive = counter-clockwise).
    pub sweep: f64,
    /// Number of samples between `entry` and `exit`.
    pub npts: usize,
}

impl CornerArc {
    /// Samples strictly between the two tangent points.
    #[must_use]
    pub fn interior_points(&self) -> Vec<Point2> {
        arc_interior_points(&self.center, self.radius, self.start_angle, self.sweep, self.npts)
    }
}

/// Outcome of rounding a single vertex.
#[derive(Debug, Clone)]
pub enum Corner {
    /// The vertex is kept as is.
    Sharp(Point2),
    /// The vertex is replaced by an arc.
    Arc(CornerArc),
}

/// Replaces every interior vertex of a simplified centerline by a circular
/// arc tangent to both adjacent segments.
///
/// The radius at each vertex is clamped so that the tangent points never
/// pass the middle of an adjacent segment (or its far end, for segments
/// touching a path end). Vertices whose clamped radius is below the merge
/// distance stay sharp. End points pass through unchanged.
#[derive(Debug)]
pub struct RoundCorners<'a> {
    points: &'a [Point2],
    radius: f64,
    points_per_circle: u32,
    merge_distance: f64,
}

impl<'a> RoundCorners<'a> {
    /// Creates a new corner rounding operation.
    ///
    /// The radius sign is ignored; `points_per_circle` is raised to
    /// [`MIN_POINTS_PER_CIRCLE`] when smaller.
    #[must_use]
    pub fn new(points: &'a [Point2], radius: f64, points_per_circle: i32) -> Self {
        Self {
            points,
            radius: radius.abs(),
            points_per_circle: u32::try_from(points_per_circle)
                .unwrap_or(0)
                .max(MIN_POINTS_PER_CIRCLE),
            merge_distance: DEFAULT_MERGE_DISTANCE,
        }
    }

    /// Sets the distance below which consecutive points are merged.
    #[must_use]
    pub fn with_merge_distance(mut self, merge_distance: f64) -> Self {
        self.merge_distance = merge_distance.abs();
        self
    }

    /// Returns the effective number of points per full circle.
    #[must_use]
    pub fn points_per_circle(&self) -> u32 {
        self.points_per_circle
    }

    /// Computes the rounding of the vertex `w.cur`.
    #[must_use]
    pub fn corner(&self, w: &Triple<'_, Point2>) -> Corner {
        let Ok(turn) = Turn::new(w) else {
            trace!(index = w.index, "zero-length segment, corner left sharp");
            return Corner::Sharp(*w.cur);
        };

        let r_min = turn.max_radius();
        let r_act = if self.radius < r_min.abs() {
            self.radius.copysign(r_min)
        } else {
            r_min
        };

        if r_act.abs() < self.merge_distance.max(TOLERANCE) {
            trace!(index = w.index, r_act, "corner left sharp");
            return Corner::Sharp(*w.cur);
        }

        let tangent_length = r_act / turn.half_angle_factor();
        let entry = w.cur + turn.s1 * tangent_length;
        let center = entry + left_normal(&turn.s1) * r_act;
        let start_angle = angle_of(&(entry - center));
        let sweep = -r_act.signum() * turn.arc_sweep();
        let radius = r_act.abs();
        let npts = arc_point_count(self.points_per_circle, sweep);

        trace!(index = w.index, radius, sweep, npts, "rounded corner");
        Corner::Arc(CornerArc {
            center,
            radius,
            entry,
            exit: arc_point_at(&center, radius, start_angle, sweep, 1.0),
            start_angle,
            sweep,
            npts,
        })
    }

    /// Executes the rounding, returning the new centerline.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let (first, last) = match self.points {
            [] | [_] => return self.points.to_vec(),
            [first, .., last] => (*first, *last),
        };

        let mut out = Emitter::new(first, self.merge_distance);
        let mut arcs = 0usize;
        for w in triples(self.points) {
            match self.corner(&w) {
                Corner::Sharp(p) => out.push(p),
                Corner::Arc(arc) => {
                    arcs += 1;
                    out.push(arc.entry);
                    for p in arc.interior_points() {
                        out.push(p);
                    }
                    out.push(arc.exit);
                }
            }
        }
        out.finish(last);

        debug!(
            input = self.points.len(),
            output = out.points.len(),
            arcs,
            "rounded centerline"
        );
        out.points
    }
}

/// Point accumulator that drops points closer than the merge distance to
/// the previously accepted one.
struct Emitter {
    points: Vec<Point2>,
    merge_distance: f64,
}

impl Emitter {
    fn new(first: Point2, merge_distance: f64) -> Self {
        Self {
            points: vec![first],
            merge_distance,
        }
    }

    fn push(&mut self, p: Point2) {
        if self
            .points
            .last()
            .is_some_and(|back| (p - back).norm() > self.merge_distance)
        {
            self.points.push(p);
        }
    }

    /// Appends the path end point, replacing a near-coincident last sample
    /// so the end point is kept exactly.
    fn finish(&mut self, last: Point2) {
        if self.points.len() > 1 {
            if let Some(back) = self.points.last_mut() {
                if (last - *back).norm() <= self.merge_distance {
                    *back = last;
                    return;
                }
            }
        }
        self.push(last);
    }
}
