//! Stroke → polyline path descriptors.

use crate::model::{Point, Stroke};
use crate::style::Appearance;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCmd {
    MoveTo(f32, f32),
    LineTo(f32, f32),
}

/// A drawable path: polyline commands plus how to stroke them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPath {
    pub commands: Vec<PathCmd>,
    pub appearance: Appearance,
}

impl RenderedPath {
    pub fn from_stroke(stroke: &Stroke) -> Self {
        Self {
            commands: build_path_commands(stroke.points()),
            appearance: Appearance::for_style(stroke.style()),
        }
    }

    pub fn svg_data(&self) -> String {
        to_svg_path_data(&self.commands)
    }
}

/// Build path commands from a sequence of points.
/// Uses `MoveTo` for the first point and `LineTo` for every later one.
/// No smoothing and no filtering: fidelity follows the input sampling.
pub fn build_path_commands(points: &[Point]) -> Vec<PathCmd> {
    let Some((first, rest)) = points.split_first() else {
        return vec![];
    };
    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCmd::MoveTo(first.x, first.y));
    commands.extend(rest.iter().map(|p| PathCmd::LineTo(p.x, p.y)));
    commands
}

/// SVG `d` attribute for a polyline: `M x,y L x,y ...`.
pub fn to_svg_path_data(commands: &[PathCmd]) -> String {
    let mut out = String::new();
    for cmd in commands {
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = match *cmd {
            PathCmd::MoveTo(x, y) => write!(out, "M {x},{y}"),
            PathCmd::LineTo(x, y) => write!(out, "L {x},{y}"),
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BrushSize, Color, PencilType, StrokeStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn first_point_moves_rest_line() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 2.0),
        ];
        assert_eq!(
            build_path_commands(&points),
            vec![
                PathCmd::MoveTo(0.0, 0.0),
                PathCmd::LineTo(5.0, 5.0),
                PathCmd::LineTo(10.0, 2.0),
            ]
        );
    }

    #[test]
    fn close_points_are_kept() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.5),
            Point::new(0.5, 0.5),
        ];
        assert_eq!(build_path_commands(&points).len(), 3);
        assert!(build_path_commands(&[]).is_empty());
    }

    #[test]
    fn svg_data_format() {
        let cmds = [PathCmd::MoveTo(1.0, 2.5), PathCmd::LineTo(3.0, 4.0)];
        assert_eq!(to_svg_path_data(&cmds), "M 1,2.5 L 3,4");
        assert_eq!(to_svg_path_data(&[]), "");
    }

    #[test]
    fn single_point_stroke_is_a_lone_move() {
        let style = StrokeStyle::new(Color::RED, BrushSize::new(3).unwrap(), PencilType::Normal);
        let path = RenderedPath::from_stroke(&Stroke::new(Point::new(7.0, 8.0), style));
        assert_eq!(path.commands, vec![PathCmd::MoveTo(7.0, 8.0)]);
        assert_eq!(path.svg_data(), "M 7,8");
        assert_eq!(path.appearance.width, 3.0);
    }
}
