pub mod arc_2d;
pub mod polygon_2d;
pub mod vector_2d;
pub mod window;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default proximity below which consecutive points are merged.
///
/// Half a grid step when the caller works in integer database units.
pub const DEFAULT_MERGE_DISTANCE: f64 = 0.5;
