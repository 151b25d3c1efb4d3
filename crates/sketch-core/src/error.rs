use thiserror::Error;

/// Errors raised when host-provided style values cross into the model.
///
/// Recording itself never fails; these only come from parsing colors,
/// pencil names, and brush sizes, or from validating a board config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    /// The string is not a `#RGB`, `#RGBA`, `#RRGGBB`, or `#RRGGBBAA` color.
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),

    /// Pencil name outside `normal`, `marker`, `brush`.
    #[error("unknown pencil type: {0:?}")]
    UnknownPencil(String),

    /// Brush sizes are positive integers.
    #[error("invalid brush size: {0}")]
    InvalidBrushSize(u32),

    #[error("color {0} is not in the palette")]
    ColorNotInPalette(String),

    #[error("brush size {0} is not offered")]
    BrushSizeNotOffered(u32),

    /// The board configuration is malformed or inconsistent.
    #[error("invalid board config: {0}")]
    Config(String),
}
