pub mod paint;

pub use paint::{paint_paths, stroke_style, to_bez_path};
