//! WASM bridge for the note drawing canvas.
//!
//! Compiled via `wasm-pack build --target web` and loaded by the notes app.
//! Pointer callbacks from the host feed the drawing board; the board's
//! paths come back as Canvas2D draws, SVG, or JSON.

mod render2d;
pub mod svg;

use serde::Serialize;
use sketch_core::{BrushSize, Color, PencilType, RenderedPath};
use sketch_editor::input::InputEvent;
use sketch_editor::shortcuts::{ShortcutAction, ShortcutMap};
use sketch_editor::{BoardConfig, DrawingBoard};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
///
/// All interaction from the host goes through this struct.
#[wasm_bindgen]
pub struct SketchCanvas {
    board: DrawingBoard,
    width: f64,
    height: f64,
}

/// Current style selection, as reported to the toolbar.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Selection {
    color: Color,
    brush_size: BrushSize,
    pencil: PencilType,
    can_undo: bool,
    can_redo: bool,
}

#[wasm_bindgen]
impl SketchCanvas {
    /// Create a canvas controller with the stock palette and brush sizes.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        Self {
            board: DrawingBoard::default(),
            width,
            height,
        }
    }

    /// Create a canvas controller from a JSON `BoardConfig`.
    pub fn with_config(width: f64, height: f64, config_json: &str) -> Result<SketchCanvas, JsValue> {
        console_error_panic_hook_setup();
        let board = BoardConfig::from_json(config_json)
            .and_then(DrawingBoard::new)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            board,
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Render the drawing to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let paths: Vec<RenderedPath> = self.board.render().collect();
        render2d::render_paths(ctx, &paths, self.width, self.height);
    }

    // ─── Pointer API ─────────────────────────────────────────────────────

    /// Handle pointer down (gesture start). Returns true if the drawing changed.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.board.handle(&InputEvent::from_pointer_down(x, y))
    }

    /// Handle pointer move. Returns true if the drawing changed.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.board.handle(&InputEvent::from_pointer_move(x, y))
    }

    /// Handle pointer up (gesture end). Returns true if a stroke was committed.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.board.handle(&InputEvent::from_pointer_up(x, y))
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>"}`
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> String {
        let Some(action) = ShortcutMap::resolve(key, ctrl, shift, alt, meta) else {
            return r#"{"changed":false,"action":"none"}"#.to_string();
        };
        let changed = self.board.apply(action);
        let action_name = action_to_name(action);
        format!(r#"{{"changed":{changed},"action":"{action_name}"}}"#)
    }

    // ─── Toolbar API ─────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        self.board.apply(ShortcutAction::Undo)
    }

    pub fn redo(&mut self) -> bool {
        self.board.apply(ShortcutAction::Redo)
    }

    pub fn clear(&mut self) -> bool {
        self.board.apply(ShortcutAction::Clear)
    }

    pub fn can_undo(&self) -> bool {
        self.board.recorder().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.board.recorder().can_redo()
    }

    /// Select a palette color by hex. Returns `false` if rejected.
    pub fn set_color(&mut self, hex: &str) -> bool {
        let result = hex
            .parse::<Color>()
            .and_then(|color| self.board.set_color(color));
        if let Err(e) = &result {
            log::warn!("set_color({hex:?}): {e}");
        }
        result.is_ok()
    }

    /// Select an offered brush size. Returns `false` if rejected.
    pub fn set_brush_size(&mut self, size: u32) -> bool {
        let result = BrushSize::new(size).and_then(|size| self.board.set_brush_size(size));
        if let Err(e) = &result {
            log::warn!("set_brush_size({size}): {e}");
        }
        result.is_ok()
    }

    /// Select `normal`, `marker`, or `brush`. Returns `false` if unknown.
    pub fn set_pencil(&mut self, name: &str) -> bool {
        match name.parse::<PencilType>() {
            Ok(pencil) => {
                self.board.set_pencil(pencil);
                true
            }
            Err(e) => {
                log::warn!("set_pencil: {e}");
                false
            }
        }
    }

    /// Current selection and history flags as JSON.
    pub fn get_selection(&self) -> String {
        let selection = Selection {
            color: self.board.color(),
            brush_size: self.board.brush_size(),
            pencil: self.board.pencil(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        };
        serde_json::to_string(&selection).unwrap_or_else(|_| "{}".to_string())
    }

    // ─── Export ──────────────────────────────────────────────────────────

    /// All drawable paths as a JSON array.
    pub fn paths_json(&self) -> String {
        let paths: Vec<RenderedPath> = self.board.render().collect();
        serde_json::to_string(&paths).unwrap_or_else(|_| "[]".to_string())
    }

    /// The drawing as a standalone SVG document.
    pub fn export_svg(&self) -> String {
        let paths: Vec<RenderedPath> = self.board.render().collect();
        svg::render_svg(&paths, self.width, self.height)
    }
}

fn action_to_name(action: ShortcutAction) -> &'static str {
    match action {
        ShortcutAction::Undo => "undo",
        ShortcutAction::Redo => "redo",
        ShortcutAction::Clear => "clear",
        ShortcutAction::Pencil(PencilType::Normal) => "pencilNormal",
        ShortcutAction::Pencil(PencilType::Marker) => "pencilMarker",
        ShortcutAction::Pencil(PencilType::Brush) => "pencilBrush",
        ShortcutAction::BrushSmaller => "brushSmaller",
        ShortcutAction::BrushLarger => "brushLarger",
        ShortcutAction::NextColor => "nextColor",
    }
}

/// Set up a panic hook that logs to console.error.
fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Sketch WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
