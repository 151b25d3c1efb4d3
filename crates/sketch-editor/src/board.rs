//! Drawing board: the stroke recorder plus the user's style selection.
//!
//! Routes `InputEvent`s into recorder operations and toolbar/shortcut
//! actions into selection changes. A selection change only affects strokes
//! started afterwards.

use crate::config::BoardConfig;
use crate::input::InputEvent;
use crate::recorder::{Paths, StrokeRecorder};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use sketch_core::{BrushSize, Color, PencilType, SketchError, StrokeStyle};

pub struct DrawingBoard {
    recorder: StrokeRecorder,
    config: BoardConfig,
    color: Color,
    brush_size: BrushSize,
    pencil: PencilType,
}

impl Default for DrawingBoard {
    fn default() -> Self {
        Self::with_valid_config(BoardConfig::default())
    }
}

impl DrawingBoard {
    pub fn new(mut config: BoardConfig) -> Result<Self, SketchError> {
        config.normalize();
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: BoardConfig) -> Self {
        Self {
            recorder: StrokeRecorder::new(),
            color: config.default_color,
            brush_size: config.default_brush_size,
            pencil: config.default_pencil,
            config,
        }
    }

    /// Handle an input event. Returns `true` if the board changed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => {
                let style = self.stroke_style();
                self.recorder.begin_stroke((*x, *y).into(), style);
                true
            }
            InputEvent::PointerMove { x, y } => {
                if !self.recorder.is_drawing() {
                    return false;
                }
                self.recorder.extend_stroke((*x, *y).into());
                true
            }
            InputEvent::PointerUp { .. } => self.recorder.end_stroke(),
            InputEvent::Key {
                key,
                ctrl,
                shift,
                alt,
                meta,
            } => match ShortcutMap::resolve(key, *ctrl, *shift, *alt, *meta) {
                Some(action) => self.apply(action),
                None => false,
            },
        }
    }

    /// Apply a toolbar or shortcut action. Returns `true` if the board changed.
    pub fn apply(&mut self, action: ShortcutAction) -> bool {
        log::debug!("apply {action:?}");
        match action {
            ShortcutAction::Undo => self.recorder.undo().is_some(),
            ShortcutAction::Redo => self.recorder.redo(),
            ShortcutAction::Clear => {
                let had_content = !self.recorder.is_empty();
                self.recorder.clear();
                had_content
            }
            ShortcutAction::Pencil(pencil) => self.set_pencil(pencil),
            ShortcutAction::BrushSmaller => self.step_brush_size(false),
            ShortcutAction::BrushLarger => self.step_brush_size(true),
            ShortcutAction::NextColor => self.next_color(),
        }
    }

    /// Style a stroke begun now would get.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::effective(self.color, self.brush_size, self.pencil)
    }

    /// Select a palette color.
    pub fn set_color(&mut self, color: Color) -> Result<(), SketchError> {
        if !self.config.palette.contains(&color) {
            log::warn!("rejected color {color}: not in palette");
            return Err(SketchError::ColorNotInPalette(color.to_hex()));
        }
        self.color = color;
        Ok(())
    }

    /// Select one of the offered brush sizes.
    pub fn set_brush_size(&mut self, size: BrushSize) -> Result<(), SketchError> {
        if !self.config.brush_sizes.contains(&size) {
            log::warn!("rejected brush size {size}: not offered");
            return Err(SketchError::BrushSizeNotOffered(size.get()));
        }
        self.brush_size = size;
        Ok(())
    }

    /// Returns `true` if the pencil changed.
    pub fn set_pencil(&mut self, pencil: PencilType) -> bool {
        let changed = self.pencil != pencil;
        self.pencil = pencil;
        changed
    }

    /// Move to the next smaller or larger offered size, stopping at the ends.
    fn step_brush_size(&mut self, larger: bool) -> bool {
        let sizes = &self.config.brush_sizes;
        let next = if larger {
            sizes.iter().find(|s| **s > self.brush_size)
        } else {
            sizes.iter().rev().find(|s| **s < self.brush_size)
        };
        match next {
            Some(size) => {
                self.brush_size = *size;
                true
            }
            None => false,
        }
    }

    /// Cycle to the next palette color, wrapping around.
    fn next_color(&mut self) -> bool {
        let palette = &self.config.palette;
        let next = palette
            .iter()
            .position(|c| *c == self.color)
            .map_or(0, |i| (i + 1) % palette.len());
        let changed = palette[next] != self.color;
        self.color = palette[next];
        changed
    }

    pub fn render(&self) -> Paths<'_> {
        self.recorder.render()
    }

    pub fn recorder(&self) -> &StrokeRecorder {
        &self.recorder
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    pub fn pencil(&self) -> PencilType {
        self.pencil
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sketch_core::Point;

    fn size(n: u32) -> BrushSize {
        BrushSize::new(n).unwrap()
    }

    #[test]
    fn pointer_gesture_records_stroke() {
        let mut board = DrawingBoard::default();
        assert!(board.handle(&InputEvent::from_pointer_down(1.0, 2.0)));
        assert!(board.handle(&InputEvent::from_pointer_move(3.0, 4.0)));
        assert!(board.handle(&InputEvent::from_pointer_up(3.0, 4.0)));

        let committed = board.recorder().committed();
        assert_eq!(committed.len(), 1);
        assert_eq!(
            committed[0].points(),
            &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
        );
        assert_eq!(*committed[0].style(), board.stroke_style());
    }

    #[test]
    fn stray_move_reports_no_change() {
        let mut board = DrawingBoard::default();
        assert!(!board.handle(&InputEvent::from_pointer_move(3.0, 4.0)));
        assert!(!board.handle(&InputEvent::from_pointer_up(3.0, 4.0)));
        assert!(board.recorder().is_empty());
    }

    #[test]
    fn marker_selection_draws_at_half_size() {
        let mut board = DrawingBoard::default();
        board.set_brush_size(size(8)).unwrap();
        board.apply(ShortcutAction::Pencil(PencilType::Marker));
        board.handle(&InputEvent::from_pointer_down(0.0, 0.0));
        board.handle(&InputEvent::from_pointer_up(0.0, 0.0));

        let style = board.recorder().committed()[0].style();
        assert_eq!(style.brush_size.get(), 16);
        assert_eq!(board.render().next().unwrap().appearance.width, 4.0);
    }

    #[test]
    fn selection_change_does_not_restyle_recorded_strokes() {
        let mut board = DrawingBoard::default();
        board.handle(&InputEvent::from_pointer_down(0.0, 0.0));
        board.handle(&InputEvent::from_pointer_up(0.0, 0.0));
        board.set_color(Color::RED).unwrap();
        board.set_pencil(PencilType::Brush);

        let style = board.recorder().committed()[0].style();
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.pencil, PencilType::Normal);
    }

    #[test]
    fn rejects_values_outside_config() {
        let mut board = DrawingBoard::default();
        assert_eq!(
            board.set_color(Color::rgb(0.5, 0.5, 0.5)),
            Err(SketchError::ColorNotInPalette("#808080".into()))
        );
        assert_eq!(
            board.set_brush_size(size(4)),
            Err(SketchError::BrushSizeNotOffered(4))
        );
        assert_eq!(board.color(), Color::BLACK);
        assert_eq!(board.brush_size(), size(5));
    }

    #[test]
    fn brush_steps_stop_at_ends() {
        let mut board = DrawingBoard::default();
        assert!(board.apply(ShortcutAction::BrushLarger));
        assert_eq!(board.brush_size(), size(8));
        assert!(board.apply(ShortcutAction::BrushLarger));
        assert!(!board.apply(ShortcutAction::BrushLarger));
        assert_eq!(board.brush_size(), size(12));

        board.set_brush_size(size(3)).unwrap();
        assert!(!board.apply(ShortcutAction::BrushSmaller));
    }

    #[test]
    fn brush_steps_follow_size_order_for_unsorted_config() {
        let config = BoardConfig {
            brush_sizes: vec![size(12), size(5), size(8), size(5)],
            ..BoardConfig::default()
        };
        let mut board = DrawingBoard::new(config).unwrap();
        assert_eq!(board.config().brush_sizes, vec![size(5), size(8), size(12)]);

        assert!(board.apply(ShortcutAction::BrushLarger));
        assert_eq!(board.brush_size(), size(8));
        assert!(board.apply(ShortcutAction::BrushSmaller));
        assert_eq!(board.brush_size(), size(5));
        assert!(!board.apply(ShortcutAction::BrushSmaller));
    }

    #[test]
    fn color_cycles_through_palette() {
        let mut board = DrawingBoard::default();
        let mut seen = vec![board.color()];
        for _ in 0..4 {
            board.apply(ShortcutAction::NextColor);
            seen.push(board.color());
        }
        assert_eq!(seen, sketch_core::PALETTE.to_vec());
        board.apply(ShortcutAction::NextColor);
        assert_eq!(board.color(), Color::BLACK);
    }

    #[test]
    fn keyboard_undo_redo_clear() {
        let mut board = DrawingBoard::default();
        board.handle(&InputEvent::from_pointer_down(0.0, 0.0));
        board.handle(&InputEvent::from_pointer_up(0.0, 0.0));

        let undo = InputEvent::Key {
            key: "z".into(),
            ctrl: true,
            shift: false,
            alt: false,
            meta: false,
        };
        assert!(board.handle(&undo));
        assert!(board.recorder().committed().is_empty());
        assert!(board.recorder().can_redo());

        assert!(board.apply(ShortcutAction::Redo));
        assert_eq!(board.recorder().committed().len(), 1);

        assert!(board.apply(ShortcutAction::Clear));
        assert!(!board.apply(ShortcutAction::Clear));
        assert!(!board.handle(&InputEvent::key("q")));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = BoardConfig {
            palette: vec![],
            ..BoardConfig::default()
        };
        assert!(DrawingBoard::new(config).is_err());
    }
}
