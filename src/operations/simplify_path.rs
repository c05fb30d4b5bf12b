use tracing::debug;

use crate::math::vector_2d::corner_cross;
use crate::math::{Point2, DEFAULT_MERGE_DISTANCE};

/// Removes collinear interior points and near-duplicate points from a
/// centerline.
///
/// The first point is always kept. Every later point is skipped when it
/// lies within the merge distance of the last kept point. Otherwise kept
/// points that become exactly collinear between their kept predecessor and
/// the new point are removed before it is appended, so collinearity is
/// only ever judged against distinct neighbours. The last input point is
/// appended when it lies farther than the merge distance from the last
/// kept point; it is never removed for collinearity.
#[derive(Debug)]
pub struct SimplifyPath<'a> {
    points: &'a [Point2],
    merge_distance: f64,
}

impl<'a> SimplifyPath<'a> {
    /// Creates a new simplification using [`DEFAULT_MERGE_DISTANCE`].
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            merge_distance: DEFAULT_MERGE_DISTANCE,
        }
    }

    /// Sets the distance below which consecutive points are merged.
    #[must_use]
    pub fn with_merge_distance(mut self, merge_distance: f64) -> Self {
        self.merge_distance = merge_distance.abs();
        self
    }

    /// Executes the simplification.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        if self.points.len() < 2 {
            return self.points.to_vec();
        }

        let mut out: Vec<Point2> = Vec::with_capacity(self.points.len());
        for p in self.points {
            self.push_kept(&mut out, *p);
        }

        debug!(
            input = self.points.len(),
            output = out.len(),
            "simplified centerline"
        );
        out
    }

    fn push_kept(&self, out: &mut Vec<Point2>, p: Point2) {
        let is_near = |kept: &[Point2]| {
            kept.last()
                .is_some_and(|back| (p - back).norm() <= self.merge_distance)
        };

        if is_near(out.as_slice()) {
            return;
        }
        while let [.., a, b] = out[..] {
            if corner_cross(&a, &b, &p) != 0.0 {
                break;
            }
            out.pop();
        }
        if !is_near(out.as_slice()) {
            out.push(p);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn empty_and_single_point_unchanged() {
        assert!(SimplifyPath::new(&[]).execute().is_empty());
        let one = pts(&[(5.0, 5.0)]);
        assert_eq!(SimplifyPath::new(&one).execute(), one);
    }

    #[test]
    fn two_distinct_points_kept() {
        let two = pts(&[(0.0, 0.0), (10.0, 0.0)]);
        assert_eq!(SimplifyPath::new(&two).execute(), two);
    }

    #[test]
    fn two_close_points_merge() {
        let two = pts(&[(0.0, 0.0), (0.3, 0.0)]);
        assert_eq!(SimplifyPath::new(&two).execute(), pts(&[(0.0, 0.0)]));
    }

    #[test]
    fn collinear_interior_removed() {
        let line = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (7.0, 0.0)]);
        assert_eq!(
            SimplifyPath::new(&line).execute(),
            pts(&[(0.0, 0.0), (7.0, 0.0)])
        );
    }

    #[test]
    fn corner_points_kept() {
        let l = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert_eq!(
            SimplifyPath::new(&l).execute(),
            pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])
        );
    }

    #[test]
    fn exact_duplicates_removed() {
        let dup = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert_eq!(
            SimplifyPath::new(&dup).execute(),
            pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])
        );
    }

    #[test]
    fn near_duplicate_corner_merged() {
        let jitter = pts(&[(0.0, 0.0), (10.0, 0.0), (10.2, 0.1), (10.0, 10.0)]);
        let out = SimplifyPath::new(&jitter).execute();
        assert_eq!(out.len(), 3);
        assert_eq!(out[1], Point2::new(10.0, 0.0));
    }

    #[test]
    fn duplicate_corner_before_short_jog_survives() {
        let dup = pts(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 0.0),
            (10.0, 0.0),
            (10.0, 3.0),
            (20.0, 3.0),
        ]);
        assert_eq!(
            SimplifyPath::new(&dup).execute(),
            pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 3.0), (20.0, 3.0)])
        );
    }

    #[test]
    fn merged_jitter_does_not_leave_collinear_triple() {
        let jitter = pts(&[(0.0, 0.0), (10.0, 0.0), (10.2, 0.1), (20.0, 0.0)]);
        assert_eq!(
            SimplifyPath::new(&jitter).execute(),
            pts(&[(0.0, 0.0), (20.0, 0.0)])
        );
    }

    #[test]
    fn reversal_keeps_turnaround_end() {
        let back = pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 0.0)]);
        assert_eq!(
            SimplifyPath::new(&back).execute(),
            pts(&[(0.0, 0.0), (5.0, 0.0)])
        );
    }

    #[test]
    fn trailing_point_close_to_last_corner_dropped() {
        let tail = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (10.3, 10.0)]);
        let out = SimplifyPath::new(&tail).execute();
        assert_eq!(out, pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]));
    }

    #[test]
    fn merge_distance_is_configurable() {
        let fine = pts(&[(0.0, 0.0), (0.01, 0.0), (0.01, 0.01)]);
        assert_eq!(SimplifyPath::new(&fine).execute().len(), 1);
        assert_eq!(
            SimplifyPath::new(&fine).with_merge_distance(1e-4).execute(),
            fine
        );
    }

    proptest! {
        #[test]
        fn all_collinear_keeps_first_and_last(
            steps in prop::collection::vec(1u32..50, 1..20),
            dir in (-3i32..=3, -3i32..=3).prop_filter("non-zero direction", |d| *d != (0, 0)),
        ) {
            // Integer-valued coordinates keep the cross products exact.
            let mut t = 0.0;
            let mut line = vec![Point2::origin()];
            for s in steps {
                t += f64::from(s);
                line.push(Point2::new(f64::from(dir.0) * t, f64::from(dir.1) * t));
            }
            let out = SimplifyPath::new(&line).execute();
            prop_assert_eq!(out, vec![line[0], *line.last().unwrap()]);
        }

        #[test]
        fn output_has_no_close_pairs_and_keeps_first(
            raw in prop::collection::vec((-20i32..20, -20i32..20), 0..30),
        ) {
            let input: Vec<Point2> = raw
                .iter()
                .map(|&(x, y)| Point2::new(f64::from(x), f64::from(y)))
                .collect();
            let out = SimplifyPath::new(&input).execute();
            for w in out.windows(2) {
                prop_assert!((w[1] - w[0]).norm() > DEFAULT_MERGE_DISTANCE);
            }
            prop_assert!(out.len() <= input.len());
            if let (Some(a), Some(b)) = (input.first(), out.first()) {
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn output_has_no_collinear_triples(
            raw in prop::collection::vec((-20i32..20, -20i32..20), 0..30),
            merge in 0.0f64..3.0,
        ) {
            let input: Vec<Point2> = raw
                .iter()
                .map(|&(x, y)| Point2::new(f64::from(x), f64::from(y)))
                .collect();
            let out = SimplifyPath::new(&input).with_merge_distance(merge).execute();
            for w in out.windows(3) {
                prop_assert!(corner_cross(&w[0], &w[1], &w[2]) != 0.0, "collinear {:?}", w);
            }
            for w in out.windows(2) {
                prop_assert!((w[1] - w[0]).norm() > merge);
            }
        }
    }
}
