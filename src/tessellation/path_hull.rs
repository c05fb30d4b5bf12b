use std::f64::consts::PI;

use tracing::debug;

use crate::geometry::{CapStyle, Path};
use crate::math::arc_2d::{arc_interior_points, arc_point_count};
use crate::math::vector_2d::{angle_of, cross, left_normal, segment_direction};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::operations::MIN_POINTS_PER_CIRCLE;

use super::Polygon;

/// When the miter scale exceeds this limit, the outside of the bend is
/// rounded and the inside is notched through the vertex.
const MITER_LIMIT: f64 = 2.0;

/// Generates the outline swept by a centerline stroked with a given width.
///
/// The outline runs along the left rail, around the end cap, back along
/// the right rail and around the start cap, which makes it clockwise for
/// non-degenerate input. A zero width yields the centerline traversed
/// forward and back (a zero-area outline).
#[derive(Debug)]
pub struct PathHull<'a> {
    points: &'a [Point2],
    width: f64,
    cap: CapStyle,
    points_per_circle: u32,
}

impl<'a> PathHull<'a> {
    /// Creates a new hull operation with round caps.
    #[must_use]
    pub fn new(points: &'a [Point2], width: f64, points_per_circle: i32) -> Self {
        Self {
            points,
            width: width.max(0.0),
            cap: CapStyle::default(),
            points_per_circle: u32::try_from(points_per_circle)
                .unwrap_or(0)
                .max(MIN_POINTS_PER_CIRCLE),
        }
    }

    /// Creates a hull operation for `path`, taking its width and cap style.
    #[must_use]
    pub fn from_path(path: &'a Path, points_per_circle: i32) -> Self {
        Self::new(&path.points, path.width(), points_per_circle).with_cap(path.cap)
    }

    /// Sets the cap style.
    #[must_use]
    pub fn with_cap(mut self, cap: CapStyle) -> Self {
        self.cap = cap;
        self
    }

    /// Executes the outline generation.
    ///
    /// Returns an empty polygon when fewer than two distinct points remain.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        let (points, dirs) = distinct_with_directions(self.points);
        if dirs.is_empty() {
            return Polygon::default();
        }

        let half_w = self.width * 0.5;
        let outline = if half_w < TOLERANCE {
            let mut outline = points.clone();
            outline.extend(points[1..points.len() - 1].iter().rev());
            outline
        } else {
            self.stroke_outline(&points, &dirs, half_w)
        };

        debug!(
            centerline = points.len(),
            outline = outline.len(),
            width = self.width,
            "generated hull"
        );
        Polygon { points: outline }
    }

    fn stroke_outline(&self, points: &[Point2], dirs: &[Vector2], half_w: f64) -> Vec<Point2> {
        let left = rail(points, dirs, half_w, self.points_per_circle);
        let right = rail(points, dirs, -half_w, self.points_per_circle);

        let mut outline = Vec::with_capacity(left.len() + right.len() + 2 * self.cap_points());
        outline.extend_from_slice(&left);

        let (last, last_dir) = (points[points.len() - 1], dirs[dirs.len() - 1]);
        self.push_cap(&mut outline, last, last_dir, half_w);

        outline.extend(right.iter().rev());

        let (first, first_dir) = (points[0], dirs[0]);
        self.push_cap(&mut outline, first, -first_dir, half_w);

        outline
    }

    /// Appends the cap at `end`, running from the rail on the left of
    /// `outward` to the rail on its right. The rail end points themselves
    /// are already part of the outline.
    fn push_cap(&self, outline: &mut Vec<Point2>, end: Point2, outward: Vector2, half_w: f64) {
        let normal = left_normal(&outward);
        match self.cap {
            CapStyle::Flat => {}
            CapStyle::Square => {
                let ext = outward * half_w;
                outline.push(end + normal * half_w + ext);
                outline.push(end - normal * half_w + ext);
            }
            CapStyle::Round => {
                outline.extend(arc_interior_points(
                    &end,
                    half_w,
                    angle_of(&normal),
                    -PI,
                    self.cap_points(),
                ));
            }
        }
    }

    fn cap_points(&self) -> usize {
        match self.cap {
            CapStyle::Flat => 0,
            CapStyle::Square => 2,
            CapStyle::Round => arc_point_count(self.points_per_circle, PI),
        }
    }
}

/// Drops zero-length segments and returns the remaining points with the
/// unit direction of each segment.
fn distinct_with_directions(points: &[Point2]) -> (Vec<Point2>, Vec<Vector2>) {
    let Some((first, rest)) = points.split_first() else {
        return (Vec::new(), Vec::new());
    };
    let mut kept = vec![*first];
    let mut dirs = Vec::with_capacity(rest.len());
    for p in rest {
        if let Ok(dir) = segment_direction(&kept[kept.len() - 1], p) {
            kept.push(*p);
            dirs.push(dir);
        }
    }
    (kept, dirs)
}

/// Offsets the centerline by `offset` (positive = left).
///
/// Interior vertices get a miter point while the miter scale stays within
/// [`MITER_LIMIT`]. Past it, the outside of the bend gets a round join
/// and the inside a notch through the vertex, so both rails keep enclosing
/// every point within `|offset|` of the centerline. An inside miter point
/// that would fall beyond either adjacent segment is notched as well.
fn rail(
    points: &[Point2],
    dirs: &[Vector2],
    offset: f64,
    points_per_circle: u32,
) -> Vec<Point2> {
    let n = points.len();
    let mut out = Vec::with_capacity(n + 4);
    out.push(points[0] + left_normal(&dirs[0]) * offset);

    for i in 1..n - 1 {
        let p = points[i];
        let (d_in, d_out) = (dirs[i - 1], dirs[i]);
        let (n_in, n_out) = (left_normal(&d_in), left_normal(&d_out));
        let bisector = left_normal(&average_direction(d_in, d_out));

        let dot = d_in.dot(&d_out);
        let turn = cross(&d_in, &d_out);
        let cos_half = f64::midpoint(1.0, dot).max(0.0).sqrt();
        let miter_scale = if cos_half > f64::EPSILON {
            1.0 / cos_half
        } else {
            f64::MAX
        };
        // A full reversal has no turn sign; its tip is rounded on the left.
        let inside = if turn.abs() > f64::EPSILON {
            turn * offset > 0.0
        } else {
            offset < 0.0
        };

        if inside {
            let shortest = (p - points[i - 1]).norm().min((points[i + 1] - p).norm());
            let reach = if 1.0 + dot > f64::EPSILON {
                offset.abs() * turn.abs() / (1.0 + dot)
            } else {
                f64::MAX
            };
            if miter_scale <= MITER_LIMIT && reach <= shortest {
                out.push(p + bisector * offset * miter_scale);
            } else {
                out.push(p + n_in * offset);
                out.push(p);
                out.push(p + n_out * offset);
            }
        } else if miter_scale <= MITER_LIMIT {
            out.push(p + bisector * offset * miter_scale);
        } else {
            let sweep = -offset.signum() * turn.abs().atan2(dot);
            out.push(p + n_in * offset);
            out.extend(arc_interior_points(
                &p,
                offset.abs(),
                angle_of(&(n_in * offset)),
                sweep,
                arc_point_count(points_per_circle, sweep),
            ));
            out.push(p + n_out * offset);
        }
    }

    out.push(points[n - 1] + left_normal(&dirs[n - 2]) * offset);
    out
}

/// Returns the normalized average of two direction vectors.
fn average_direction(a: Vector2, b: Vector2) -> Vector2 {
    let avg = a + b;
    let len = avg.norm();
    if len < f64::EPSILON {
        // Opposite directions: fall back to the first direction.
        a
    } else {
        avg / len
    }
}
