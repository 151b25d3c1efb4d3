//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to drawing-board actions. Lives in Rust so
//! every host (web, native) shares one table.

use sketch_core::PencilType;

/// Actions that keyboard shortcuts (and toolbar buttons) can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Edit ──
    Undo,
    Redo,
    /// Wipe the canvas and its redo history.
    Clear,

    // ── Pencil ──
    Pencil(PencilType),

    // ── Brush ──
    BrushSmaller,
    BrushLarger,
    NextColor,
}

/// Resolves key events into shortcut actions.
///
/// On macOS `meta` is ⌘; elsewhere `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        // ── Modifier combos first (most specific) ──
        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "Delete" | "Backspace" => Some(ShortcutAction::Clear),
                _ => None,
            };
        }

        if shift {
            return None;
        }

        // ── Single keys (no modifiers) ──
        match key {
            "1" | "n" | "N" => Some(ShortcutAction::Pencil(PencilType::Normal)),
            "2" | "m" | "M" => Some(ShortcutAction::Pencil(PencilType::Marker)),
            "3" | "b" | "B" => Some(ShortcutAction::Pencil(PencilType::Brush)),
            "[" => Some(ShortcutAction::BrushSmaller),
            "]" => Some(ShortcutAction::BrushLarger),
            "c" | "C" => Some(ShortcutAction::NextColor),
            _ => None,
        }
    }
}
