//! SVG export of rendered paths.

use sketch_core::RenderedPath;
use std::fmt::Write;

/// Render paths into a standalone SVG document of the given size.
pub fn render_svg<'a>(
    paths: impl IntoIterator<Item = &'a RenderedPath>,
    width: f64,
    height: f64,
) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    for path in paths {
        if path.commands.is_empty() {
            continue;
        }
        write_path(&mut svg, path);
    }
    svg.push_str("</svg>");
    svg
}

fn write_path(out: &mut String, path: &RenderedPath) {
    let a = &path.appearance;
    let dash = if a.is_dashed() {
        a.dash
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",")
    } else {
        "none".to_string()
    };
    let _ = writeln!(
        out,
        "  <path d=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\" stroke-dasharray=\"{dash}\" stroke-linecap=\"round\" stroke-linejoin=\"round\" fill=\"transparent\"/>",
        path.svg_data(),
        a.color.to_hex(),
        a.width,
        a.opacity,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sketch_core::{BrushSize, Color, PencilType, Point, Stroke, StrokeStyle};

    fn path(pencil: PencilType, points: &[(f32, f32)]) -> RenderedPath {
        let style = StrokeStyle::new(Color::RED, BrushSize::new(4).unwrap(), pencil);
        let points = points.iter().map(|p| Point::from(*p)).collect();
        RenderedPath::from_stroke(&Stroke::from_points(points, style).unwrap())
    }

    #[test]
    fn empty_drawing_is_bare_svg() {
        let svg = render_svg(std::iter::empty(), 100.0, 50.0);
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"50\" viewBox=\"0 0 100 50\">\n</svg>"
        );
    }

    #[test]
    fn brush_path_attributes() {
        let p = path(PencilType::Brush, &[(0.0, 0.0), (10.0, 5.5)]);
        let svg = render_svg([&p], 100.0, 100.0);
        assert!(svg.contains("d=\"M 0,0 L 10,5.5\""));
        assert!(svg.contains("stroke=\"#FF0000\""));
        assert!(svg.contains("stroke-width=\"4\""));
        assert!(svg.contains("stroke-opacity=\"0.5\""));
        assert!(svg.contains("stroke-dasharray=\"2,2\""));
        assert!(svg.contains("fill=\"transparent\""));
    }

    #[test]
    fn one_path_element_per_stroke() {
        let a = path(PencilType::Normal, &[(0.0, 0.0)]);
        let b = path(PencilType::Marker, &[(1.0, 1.0), (2.0, 2.0)]);
        let svg = render_svg([&a, &b], 10.0, 10.0);
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains("stroke-dasharray=\"none\""));
        // Marker stored at 4 draws at a quarter of that.
        assert!(svg.contains("stroke-width=\"1\""));
    }
}
