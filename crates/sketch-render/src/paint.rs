//! Rendered paths → Vello drawing commands.
//!
//! Each path becomes one `kurbo::BezPath` stroked with round caps and joins,
//! the pencil's dash pattern, and its opacity folded into the brush alpha.

use kurbo::{Affine, BezPath, Cap, Join, Stroke as KurboStroke};
use peniko::Color;
use sketch_core::{Appearance, PathCmd, RenderedPath};
use vello::Scene;

/// Paint every path into a Vello scene, in order.
///
/// Call once per frame with a freshly-cleared `Scene`.
/// The caller presents the scene via wgpu.
pub fn paint_paths<'a>(scene: &mut Scene, paths: impl IntoIterator<Item = &'a RenderedPath>) {
    for path in paths {
        if path.commands.is_empty() {
            continue;
        }
        log::trace!(
            "PAINT path ({} cmds) width={} opacity={}",
            path.commands.len(),
            path.appearance.width,
            path.appearance.opacity
        );
        let bez = to_bez_path(&path.commands);
        let stroke = stroke_style(&path.appearance);
        scene.stroke(
            &stroke,
            Affine::IDENTITY,
            to_color(&path.appearance),
            None,
            &bez,
        );
    }
}

pub fn to_bez_path(commands: &[PathCmd]) -> BezPath {
    let mut bez = BezPath::new();
    for cmd in commands {
        match *cmd {
            PathCmd::MoveTo(x, y) => bez.move_to((x as f64, y as f64)),
            PathCmd::LineTo(x, y) => bez.line_to((x as f64, y as f64)),
        }
    }
    bez
}

pub fn stroke_style(appearance: &Appearance) -> KurboStroke {
    let stroke = KurboStroke::new(appearance.width as f64)
        .with_caps(Cap::Round)
        .with_join(Join::Round);
    if appearance.is_dashed() {
        stroke.with_dashes(0.0, appearance.dash.iter().map(|d| *d as f64))
    } else {
        stroke
    }
}

fn to_color(appearance: &Appearance) -> Color {
    let [r, g, b, a] = appearance.effective_color().to_rgba8();
    Color::from_rgba8(r, g, b, a)
}
