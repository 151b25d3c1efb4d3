//! Drawing board configuration.
//!
//! The host may pass this as JSON; every field falls back to the stock
//! picker values.

use serde::{Deserialize, Serialize};
use sketch_core::style::brush_sizes;
use sketch_core::{BrushSize, Color, PALETTE, PencilType, SketchError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Colors the user may pick, in display order.
    pub palette: Vec<Color>,
    /// Brush sizes the user may pick, ascending.
    pub brush_sizes: Vec<BrushSize>,
    pub default_color: Color,
    pub default_brush_size: BrushSize,
    pub default_pencil: PencilType,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            palette: PALETTE.to_vec(),
            brush_sizes: brush_sizes().collect(),
            default_color: Color::BLACK,
            default_brush_size: BrushSize::default(),
            default_pencil: PencilType::Normal,
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, SketchError> {
        let mut config: Self =
            serde_json::from_str(json).map_err(|e| SketchError::Config(e.to_string()))?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Sort brush sizes ascending and drop duplicates.
    pub fn normalize(&mut self) {
        self.brush_sizes.sort_unstable();
        self.brush_sizes.dedup();
    }

    pub fn validate(&self) -> Result<(), SketchError> {
        if self.palette.is_empty() {
            return Err(SketchError::Config("palette is empty".into()));
        }
        if self.brush_sizes.is_empty() {
            return Err(SketchError::Config("no brush sizes".into()));
        }
        if !self.palette.contains(&self.default_color) {
            return Err(SketchError::ColorNotInPalette(self.default_color.to_hex()));
        }
        if !self.brush_sizes.contains(&self.default_brush_size) {
            return Err(SketchError::BrushSizeNotOffered(
                self.default_brush_size.get(),
            ));
        }
        Ok(())
    }
}
