//! Canvas2D software renderer.
//!
//! Draws rendered paths to an HTML `<canvas>` via `CanvasRenderingContext2d`.

use sketch_core::{PathCmd, RenderedPath};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Canvas background.
pub const BACKGROUND: &str = "#FFFFFF";

/// Clear the canvas and draw every path in order.
pub fn render_paths<'a>(
    ctx: &CanvasRenderingContext2d,
    paths: impl IntoIterator<Item = &'a RenderedPath>,
    canvas_width: f64,
    canvas_height: f64,
) {
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    for path in paths {
        draw_path(ctx, path);
    }
}

fn draw_path(ctx: &CanvasRenderingContext2d, path: &RenderedPath) {
    if path.commands.is_empty() {
        return;
    }
    let a = &path.appearance;

    ctx.save();
    ctx.set_global_alpha(a.opacity.clamp(0.0, 1.0) as f64);
    ctx.set_stroke_style_str(&a.color.to_hex());
    ctx.set_line_width(a.width as f64);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    let dash = js_sys::Array::new();
    for d in &a.dash {
        dash.push(&JsValue::from_f64(*d as f64));
    }
    if let Err(e) = ctx.set_line_dash(&dash) {
        log::warn!("set_line_dash rejected {:?}: {e:?}", a.dash);
    }

    ctx.begin_path();
    for cmd in &path.commands {
        match *cmd {
            PathCmd::MoveTo(x, y) => ctx.move_to(x as f64, y as f64),
            PathCmd::LineTo(x, y) => ctx.line_to(x as f64, y as f64),
        }
    }
    ctx.stroke();
    ctx.restore();
}
