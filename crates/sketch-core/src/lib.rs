pub mod error;
pub mod model;
pub mod path;
pub mod style;

pub use error::SketchError;
pub use model::*;
pub use path::{PathCmd, RenderedPath, build_path_commands, to_svg_path_data};
pub use style::{Appearance, BRUSH_SIZES, PALETTE, Treatment};
