pub mod path;

pub use path::{CapStyle, Path};
