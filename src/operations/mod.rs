mod round_corners;
mod simplify_path;

pub use round_corners::{Corner, CornerArc, RoundCorners, Turn, MIN_POINTS_PER_CIRCLE};
pub use simplify_path::SimplifyPath;
