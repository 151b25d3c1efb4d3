//! Pencil treatments and resolved stroke appearance.
//!
//! Every pencil type maps to a fixed rendering treatment: opacity, dash
//! pattern, and an optional width scale. The mapping is a total match over
//! [`PencilType`] with no state.

use crate::model::{BrushSize, Color, PencilType, StrokeStyle};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Colors offered by the picker, in display order.
pub const PALETTE: [Color; 5] = [
    Color::BLACK,
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
];

/// Brush sizes offered by the picker, ascending.
pub const BRUSH_SIZES: [u32; 4] = [3, 5, 8, 12];

/// Fixed rendering treatment of a pencil type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Treatment {
    pub opacity: f32,
    /// Alternating dash/gap lengths; empty for a solid line.
    pub dash: &'static [f32],
    /// Multiplier applied to the stored stroke width, if any.
    pub width_scale: Option<f32>,
}

impl PencilType {
    pub const fn treatment(self) -> Treatment {
        match self {
            // Hosts clamp opacity to 1.0; a plain pencil is fully opaque.
            PencilType::Normal => Treatment {
                opacity: 1.0,
                dash: &[],
                width_scale: None,
            },
            // Drawn at half the selected size. The stored width is already
            // doubled at stroke start, so scale it by a quarter.
            PencilType::Marker => Treatment {
                opacity: 0.6,
                dash: &[],
                width_scale: Some(0.25),
            },
            PencilType::Brush => Treatment {
                opacity: 0.5,
                dash: &[2.0, 2.0],
                width_scale: None,
            },
        }
    }
}

/// Everything a renderer needs to stroke one path.
///
/// Caps and joins are always round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub color: Color,
    pub width: f32,
    pub opacity: f32,
    pub dash: SmallVec<[f32; 2]>,
}

impl Appearance {
    pub fn for_style(style: &StrokeStyle) -> Self {
        let treatment = style.pencil.treatment();
        let base = style.brush_size.get() as f32;
        Self {
            color: style.color,
            width: treatment.width_scale.map_or(base, |scale| base * scale),
            opacity: treatment.opacity,
            dash: SmallVec::from_slice(treatment.dash),
        }
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }

    /// Color with the treatment opacity folded into alpha.
    pub fn effective_color(&self) -> Color {
        Color::rgba(
            self.color.r,
            self.color.g,
            self.color.b,
            (self.color.a * self.opacity).clamp(0.0, 1.0),
        )
    }
}

/// The palette as strongly typed sizes.
pub fn brush_sizes() -> impl Iterator<Item = BrushSize> {
    BRUSH_SIZES.into_iter().filter_map(|s| BrushSize::new(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn style(pencil: PencilType, size: u32) -> StrokeStyle {
        StrokeStyle::new(Color::BLUE, BrushSize::new(size).unwrap(), pencil)
    }

    #[test]
    fn normal_is_solid_and_opaque() {
        let a = Appearance::for_style(&style(PencilType::Normal, 5));
        assert_eq!(a.width, 5.0);
        assert_eq!(a.opacity, 1.0);
        assert!(!a.is_dashed());
    }

    #[test]
    fn marker_draws_at_half_selected_width() {
        let selected = BrushSize::new(8).unwrap();
        let stored = StrokeStyle::effective(Color::YELLOW, selected, PencilType::Marker);
        let a = Appearance::for_style(&stored);
        assert_eq!(stored.brush_size.get(), 16);
        assert_eq!(a.width, 4.0);
        assert_eq!(a.opacity, 0.6);
        assert!(!a.is_dashed());
    }

    #[test]
    fn brush_is_dashed() {
        let a = Appearance::for_style(&style(PencilType::Brush, 12));
        assert_eq!(a.width, 12.0);
        assert_eq!(a.opacity, 0.5);
        assert_eq!(a.dash.as_slice(), &[2.0, 2.0]);
    }

    #[test]
    fn effective_color_folds_opacity() {
        let a = Appearance::for_style(&style(PencilType::Brush, 3));
        assert_eq!(a.effective_color(), Color::rgba(0.0, 0.0, 1.0, 0.5));
    }

    #[test]
    fn offered_sizes_are_all_valid() {
        let sizes: Vec<u32> = brush_sizes().map(BrushSize::get).collect();
        assert_eq!(sizes, BRUSH_SIZES.to_vec());
    }
}
