//! Rounded-corner outlines for stroked centerline paths.
//!
//! A centerline is simplified, its interior vertices are replaced by
//! tangent circular arcs, and the result is stroked into a closed polygon.

pub mod error;
pub mod geometry;
pub mod host;
pub mod math;
pub mod operations;
pub mod round_path;
pub mod tessellation;

pub use error::{RoundPathError, Result};
pub use geometry::{CapStyle, Path};
pub use round_path::{round_path, RoundPath, RoundPathParams};
pub use tessellation::Polygon;
