use crate::math::Point2;

/// How the outline is closed at the two open ends of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapStyle {
    /// Rails stop at the end point.
    Flat,
    /// Rails extend half the width past the end point.
    Square,
    /// Semicircle around the end point.
    #[default]
    Round,
}

/// A centerline path: ordered points stroked with a fixed width.
///
/// Point order defines the stroke direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub points: Vec<Point2>,
    width: f64,
    pub cap: CapStyle,
}

impl Path {
    /// Creates a path with round caps. Negative widths are clamped to zero.
    #[must_use]
    pub fn new(points: Vec<Point2>, width: f64) -> Self {
        Self {
            points,
            width: width.max(0.0),
            cap: CapStyle::default(),
        }
    }

    /// Returns a copy with the given cap style.
    #[must_use]
    pub fn with_cap(mut self, cap: CapStyle) -> Self {
        self.cap = cap;
        self
    }

    /// Returns the path width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns a path with every coordinate and the width multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| Point2::from(p.coords * factor)).collect(),
            width: (self.width * factor).abs(),
            cap: self.cap,
        }
    }
}
