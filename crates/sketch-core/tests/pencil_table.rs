//! Integration tests: pencil treatments applied to recorded strokes.

use pretty_assertions::assert_eq;
use sketch_core::*;

fn stroke_with(pencil: PencilType, selected: u32) -> Stroke {
    let style = StrokeStyle::effective(Color::GREEN, BrushSize::new(selected).unwrap(), pencil);
    Stroke::from_points(vec![Point::new(1.0, 1.0), Point::new(4.0, 5.0)], style).unwrap()
}

#[test]
fn rendered_width_follows_selected_size() {
    for pencil in PencilType::ALL {
        let expected = |size: u32| match pencil {
            PencilType::Marker => size as f32 / 2.0,
            PencilType::Normal | PencilType::Brush => size as f32,
        };
        for size in BRUSH_SIZES {
            let path = RenderedPath::from_stroke(&stroke_with(pencil, size));
            assert_eq!(path.appearance.width, expected(size), "{pencil} at {size}");
        }
    }
}

#[test]
fn treatment_table() {
    let rows: Vec<(PencilType, f32, usize)> = PencilType::ALL
        .iter()
        .map(|p| (*p, p.treatment().opacity, p.treatment().dash.len()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (PencilType::Normal, 1.0, 0),
            (PencilType::Marker, 0.6, 0),
            (PencilType::Brush, 0.5, 2),
        ]
    );
}

#[test]
fn rendered_path_serializes_for_hosts() {
    let path = RenderedPath::from_stroke(&stroke_with(PencilType::Brush, 3));
    let json = serde_json::to_value(&path).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "commands": [{"MoveTo": [1.0, 1.0]}, {"LineTo": [4.0, 5.0]}],
            "appearance": {
                "color": "#00FF00",
                "width": 3.0,
                "opacity": 0.5,
                "dash": [2.0, 2.0]
            }
        })
    );
    assert_eq!(path.svg_data(), "M 1,1 L 4,5");
}
