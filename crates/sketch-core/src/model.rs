//! Core drawing data model.
//!
//! A drawing is a list of strokes. Each stroke is an ordered run of points
//! captured from one pointer gesture, plus the style that was selected when
//! the gesture began. Coordinates are canvas-local; nothing here knows about
//! the screen the canvas sits in.

use crate::error::SketchError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
        let short = |i: usize| channel(hex[i..i + 1].repeat(2).as_str());
        let long = |i: usize| channel(&hex[i * 2..i * 2 + 2]);
        match hex.len() {
            3 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, 1.0)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgba(long(0)?, long(1)?, long(2)?, 1.0)),
            8 => Some(Self::rgba(long(0)?, long(1)?, long(2)?, long(3)?)),
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim()).ok_or_else(|| SketchError::InvalidColor(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Points ──────────────────────────────────────────────────────────────

/// A sampled pointer position in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ─── Brush size ──────────────────────────────────────────────────────────

/// Stroke width in canvas units. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BrushSize(u32);

impl BrushSize {
    pub fn new(size: u32) -> Result<Self, SketchError> {
        if size == 0 {
            return Err(SketchError::InvalidBrushSize(size));
        }
        Ok(Self(size))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Twice this size, saturating.
    pub const fn doubled(self) -> Self {
        Self(self.0.saturating_mul(2))
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u32> for BrushSize {
    type Error = SketchError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BrushSize> for u32 {
    fn from(size: BrushSize) -> Self {
        size.0
    }
}

impl fmt::Display for BrushSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Pencil type ─────────────────────────────────────────────────────────

/// The closed set of rendering treatments a user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PencilType {
    #[default]
    Normal,
    Marker,
    Brush,
}

impl PencilType {
    pub const ALL: [PencilType; 3] = [PencilType::Normal, PencilType::Marker, PencilType::Brush];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Marker => "marker",
            Self::Brush => "brush",
        }
    }
}

impl fmt::Display for PencilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PencilType {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "marker" => Ok(Self::Marker),
            "brush" => Ok(Self::Brush),
            _ => Err(SketchError::UnknownPencil(s.to_string())),
        }
    }
}

// ─── Strokes ─────────────────────────────────────────────────────────────

/// Style captured when a stroke begins.
///
/// `brush_size` is the stored stroke width. Use [`StrokeStyle::effective`]
/// to build one from the user's selection; it doubles the width for markers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub brush_size: BrushSize,
    pub pencil: PencilType,
}

impl StrokeStyle {
    pub const fn new(color: Color, brush_size: BrushSize, pencil: PencilType) -> Self {
        Self {
            color,
            brush_size,
            pencil,
        }
    }

    /// Resolve the user's current selection into the style a new stroke stores.
    pub fn effective(color: Color, selected: BrushSize, pencil: PencilType) -> Self {
        let brush_size = match pencil {
            PencilType::Marker => selected.doubled(),
            PencilType::Normal | PencilType::Brush => selected,
        };
        Self::new(color, brush_size, pencil)
    }
}

/// One continuous freehand path with a single fixed style.
///
/// Always holds at least one point. Points keep the order the gesture
/// produced them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
    style: StrokeStyle,
}

impl Stroke {
    /// Start a stroke at `origin`.
    pub fn new(origin: Point, style: StrokeStyle) -> Self {
        Self {
            points: vec![origin],
            style,
        }
    }

    /// Build a stroke from already-sampled points. `None` if `points` is empty.
    pub fn from_points(points: Vec<Point>, style: StrokeStyle) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points, style })
    }

    /// Append the next sampled point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Strokes are never empty; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
