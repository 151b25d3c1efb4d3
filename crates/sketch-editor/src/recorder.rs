//! Freehand stroke recorder with linear undo/redo.
//!
//! Gesture callbacks drive three operations: `begin_stroke`, `extend_stroke`,
//! and `end_stroke`. Finished strokes land on the committed stack; undo moves
//! them whole onto the undone stack and redo moves them back. Committing a
//! new stroke always clears the undone stack.

use sketch_core::{Point, RenderedPath, Stroke, StrokeStyle};
use std::iter::{Chain, FusedIterator};
use std::{option, slice};

/// What an `undo()` call removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoEffect {
    /// The in-progress stroke was thrown away. Not redoable.
    DiscardedInProgress,
    /// The last committed stroke moved to the undone stack.
    Uncommitted,
}

/// Canvas state: committed strokes, undone strokes, and the active gesture.
#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
    committed: Vec<Stroke>,
    undone: Vec<Stroke>,
    in_progress: Option<Stroke>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at `point`.
    ///
    /// A stroke still in progress (its end event never arrived) is committed
    /// first.
    pub fn begin_stroke(&mut self, point: Point, style: StrokeStyle) {
        if self.in_progress.is_some() {
            log::debug!("begin_stroke: flushing interrupted stroke");
            self.commit_in_progress();
        }
        log::trace!("begin_stroke at ({}, {}) {:?}", point.x, point.y, style.pencil);
        self.in_progress = Some(Stroke::new(point, style));
    }

    /// Append `point` to the active stroke. Ignored when no stroke is active.
    pub fn extend_stroke(&mut self, point: Point) {
        match self.in_progress.as_mut() {
            Some(stroke) => stroke.push(point),
            None => log::trace!("extend_stroke: no active stroke, dropped"),
        }
    }

    /// Commit the active stroke. Returns `true` if a stroke was committed.
    pub fn end_stroke(&mut self) -> bool {
        self.commit_in_progress()
    }

    /// Undo the most recent action.
    ///
    /// An active stroke is discarded outright and takes priority over
    /// committed history.
    pub fn undo(&mut self) -> Option<UndoEffect> {
        if self.in_progress.take().is_some() {
            log::debug!("undo: discarded in-progress stroke");
            return Some(UndoEffect::DiscardedInProgress);
        }
        let stroke = self.committed.pop()?;
        self.undone.push(stroke);
        log::debug!(
            "undo: {} committed, {} undone",
            self.committed.len(),
            self.undone.len()
        );
        Some(UndoEffect::Uncommitted)
    }

    /// Restore the most recently undone stroke. Returns `true` on success.
    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.undone.pop() else {
            return false;
        };
        self.committed.push(stroke);
        log::debug!(
            "redo: {} committed, {} undone",
            self.committed.len(),
            self.undone.len()
        );
        true
    }

    /// Drop everything. Not undoable.
    pub fn clear(&mut self) {
        log::debug!(
            "clear: dropping {} committed, {} undone, in-progress={}",
            self.committed.len(),
            self.undone.len(),
            self.in_progress.is_some()
        );
        self.committed.clear();
        self.undone.clear();
        self.in_progress = None;
    }

    /// Drawable paths: committed strokes in order, then the active stroke.
    ///
    /// The iterator borrows the recorder, is lazy, and can be cloned to
    /// walk the same paths again.
    pub fn render(&self) -> Paths<'_> {
        Paths {
            inner: self.committed.iter().chain(self.in_progress.iter()),
        }
    }

    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    pub fn undone(&self) -> &[Stroke] {
        &self.undone
    }

    pub fn in_progress(&self) -> Option<&Stroke> {
        self.in_progress.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.in_progress.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.in_progress.is_some() || !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Nothing visible and nothing to redo.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.undone.is_empty() && self.in_progress.is_none()
    }

    fn commit_in_progress(&mut self) -> bool {
        let Some(stroke) = self.in_progress.take() else {
            return false;
        };
        log::debug!(
            "commit stroke: {} points, {} discarded from redo",
            stroke.len(),
            self.undone.len()
        );
        self.committed.push(stroke);
        self.undone.clear();
        true
    }
}

/// Iterator returned by [`StrokeRecorder::render`].
#[derive(Debug, Clone)]
pub struct Paths<'a> {
    inner: Chain<slice::Iter<'a, Stroke>, option::Iter<'a, Stroke>>,
}

impl Iterator for Paths<'_> {
    type Item = RenderedPath;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(RenderedPath::from_stroke)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Paths<'_> {}
