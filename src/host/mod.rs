//! Adapter between an integer-grid layout database and the geometry core.
//!
//! The host stores geometry on a grid whose step is the database unit
//! (`dbu`, in micrometers). Parameters are kept in micrometers; `produce`
//! converts them to grid units, runs the core and snaps the outline back
//! onto the grid.

use tracing::debug;

use crate::error::{ParameterError, Result};
use crate::geometry::Path;
use crate::math::{Point2, DEFAULT_MERGE_DISTANCE};
use crate::round_path::{RoundPath, RoundPathParams};
use crate::tessellation::Polygon;

/// A point on the database grid.
pub type GridPoint = nalgebra::Point2<i64>;

/// A path stored on the database grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPath {
    pub points: Vec<GridPoint>,
    pub width: i64,
}

/// A closed outline stored on the database grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridPolygon {
    pub points: Vec<GridPoint>,
}

impl GridPolygon {
    /// Snaps `polygon` onto the grid, dropping points that collapse onto
    /// their predecessor.
    #[must_use]
    pub fn from_polygon(polygon: &Polygon) -> Self {
        let mut points: Vec<GridPoint> = polygon.points.iter().map(snap).collect();
        points.dedup();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Self { points }
    }
}

/// Receives the outlines produced for the host.
pub trait PolygonSink {
    fn insert(&mut self, polygon: GridPolygon);
}

impl PolygonSink for Vec<GridPolygon> {
    fn insert(&mut self, polygon: GridPolygon) {
        self.push(polygon);
    }
}

/// Parameters of a rounded path cell, in micrometers.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundPathCell {
    pub radius: f64,
    pub path: Path,
    pub points_per_circle: i32,
}

impl Default for RoundPathCell {
    fn default() -> Self {
        Self {
            radius: 0.1,
            path: Path::new(
                vec![Point2::new(0.0, 0.0), Point2::new(0.2, 0.0), Point2::new(0.2, 0.2)],
                0.1,
            ),
            points_per_circle: 64,
        }
    }
}

impl RoundPathCell {
    /// Builds parameters from a path stored on the grid.
    ///
    /// The radius starts at a tenth of the smaller bounding box dimension.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::InvalidDatabaseUnit` if `dbu` is not
    /// positive and finite.
    pub fn from_grid_path(path: &GridPath, dbu: f64) -> Result<Self> {
        check_dbu(dbu)?;
        let points: Vec<Point2> = path
            .points
            .iter()
            .map(|p| Point2::new(grid_to_f64(p.x) * dbu, grid_to_f64(p.y) * dbu))
            .collect();
        let min_extent = grid_extent(&path.points).map_or(0, |(w, h)| w.min(h));
        Ok(Self {
            radius: dbu * grid_to_f64(min_extent / 10),
            path: Path::new(points, grid_to_f64(path.width) * dbu),
            ..Self::default()
        })
    }

    /// Human readable name, e.g. `ROUND_PATH(r=0.10000)`. The radius is
    /// printed in microns with five decimals.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("ROUND_PATH(r={:.5})", self.radius)
    }

    /// Generates the rounded outline and hands it to `sink`.
    ///
    /// Nothing is inserted when the outline degenerates to fewer than
    /// three grid points.
    ///
    /// # Errors
    ///
    /// Returns a `ParameterError` if `dbu` is not positive and finite or
    /// if the radius, width or any path coordinate is not finite.
    pub fn produce(&self, dbu: f64, sink: &mut impl PolygonSink) -> Result<()> {
        check_dbu(dbu)?;
        check_finite("radius", self.radius)?;
        check_finite("width", self.path.width())?;
        for p in &self.path.points {
            check_finite("x", p.x)?;
            check_finite("y", p.y)?;
        }

        let grid_path = self.path.scaled(1.0 / dbu);
        let params = RoundPathParams::default()
            .with_radius((self.radius / dbu).max(0.0))
            .with_points_per_circle(self.points_per_circle.max(3))
            .with_merge_distance(DEFAULT_MERGE_DISTANCE);
        let outline = GridPolygon::from_polygon(&RoundPath::from_path(&grid_path, params).execute());

        if outline.points.len() < 3 {
            debug!(points = outline.points.len(), "degenerate outline not inserted");
            return Ok(());
        }
        debug!(points = outline.points.len(), "inserting rounded path outline");
        sink.insert(outline);
        Ok(())
    }
}

fn check_dbu(dbu: f64) -> Result<()> {
    if dbu.is_finite() && dbu > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidDatabaseUnit(dbu).into())
    }
}

fn check_finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite { parameter, value }.into())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn snap(p: &Point2) -> GridPoint {
    GridPoint::new(p.x.round() as i64, p.y.round() as i64)
}

#[allow(clippy::cast_precision_loss)]
fn grid_to_f64(v: i64) -> f64 {
    v as f64
}

/// Width and height of the bounding box of grid points.
fn grid_extent(points: &[GridPoint]) -> Option<(i64, i64)> {
    let xs = points.iter().map(|p| p.x);
    let ys = points.iter().map(|p| p.y);
    Some((
        xs.clone().max()? - xs.min()?,
        ys.clone().max()? - ys.min()?,
    ))
}
