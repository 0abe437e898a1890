#![forbid(unsafe_code)]

//! The editing primitives: splice text in, cut a range out.
//!
//! [`EditorState`] is an immutable `(buffer, selection)` snapshot. Every
//! operation returns a fresh state and recomputes the selection through the
//! relocation functions in [`crate::selection`]; nothing is mutated in
//! place and no operation notifies anyone — change detection belongs to
//! the session layer.
//!
//! # Example
//! ```
//! use jot_text::editor::EditorState;
//!
//! let state = EditorState::from_text("hello");
//! let state = state.insert_text(state.selection(), "> ");
//! assert_eq!(state.plain_text(), "> hello");
//! assert_eq!(state.selection().start(), 2);
//! ```

use crate::buffer::{LineId, TextBuffer, grapheme_count};
use crate::selection::{self, Selection};

/// An immutable editor snapshot: one buffer, one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    buffer: TextBuffer,
    selection: Selection,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl EditorState {
    /// Build a state from plain text, with a collapsed unfocused selection
    /// at the start of the first line.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            selection: Selection::caret(LineId::new(0), 0),
        }
    }

    /// The underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The same buffer under a different selection.
    ///
    /// # Panics
    /// If `selection` does not fit the buffer (bad line, or an offset past
    /// the end of that line).
    #[must_use]
    pub fn with_selection(&self, selection: Selection) -> Self {
        let Some(len) = self.buffer.grapheme_len(selection.line()) else {
            panic!("selection line {} out of bounds", selection.line().index());
        };
        assert!(
            selection.end() <= len,
            "selection offset {} past end of line {}",
            selection.end(),
            selection.line().index()
        );
        Self {
            buffer: self.buffer.clone(),
            selection,
        }
    }

    /// Flattened plain text, lines joined by `'\n'`.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.buffer.to_plain_text()
    }

    /// Whether the buffer holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of lines in the buffer.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Text of a line, or `None` if `id` is out of bounds.
    #[must_use]
    pub fn line_text(&self, id: LineId) -> Option<&str> {
        self.buffer.line(id)
    }

    /// A collapsed unfocused selection at the very end of the buffer.
    #[must_use]
    pub fn document_end(&self) -> Selection {
        let line = self.buffer.last_line();
        Selection::caret(line, self.buffer.grapheme_len(line).unwrap_or(0))
    }

    /// Splice `text` into the buffer at a collapsed selection.
    ///
    /// The resulting selection is a caret advanced past the inserted text.
    ///
    /// # Panics
    /// If `at` is not collapsed, does not fit the buffer, or `text`
    /// contains the line separator.
    #[must_use]
    pub fn insert_text(&self, at: Selection, text: &str) -> Self {
        assert!(at.is_collapsed(), "insertion requires a collapsed selection");
        let buffer = self.buffer.insert_in_line(at.line(), at.start(), text);
        let selection = selection::after_insert(at, grapheme_count(text));
        Self { buffer, selection }
    }

    /// Delete the grapheme range `[start, end)` covered by `range` from its
    /// line.
    ///
    /// The resulting selection is a caret collapsed at the range start.
    /// Single-line by construction: [`Selection`] cannot span two lines.
    ///
    /// # Panics
    /// If `range` does not fit the buffer.
    #[must_use]
    pub fn remove_range(&self, range: Selection) -> Self {
        let span = range.start()..range.end();
        let buffer = self.buffer.remove_in_line(range.line(), span.clone());
        let selection = selection::after_remove(range, span);
        Self { buffer, selection }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_starts_at_origin() {
        let state = EditorState::from_text("hello\nworld");
        assert_eq!(state.line_count(), 2);
        assert_eq!(state.selection(), Selection::caret(LineId::new(0), 0));
        assert!(!state.selection().has_focus());
    }

    #[test]
    fn insert_at_caret() {
        let state = EditorState::from_text("heo");
        let at = Selection::caret(LineId::new(0), 2);
        let state = state.insert_text(at, "ll");
        assert_eq!(state.plain_text(), "hello");
        assert_eq!(state.selection(), Selection::caret(LineId::new(0), 4));
    }

    #[test]
    fn insert_on_second_line_leaves_first_alone() {
        let state = EditorState::from_text("one\ntwo");
        let at = Selection::caret(LineId::new(1), 3);
        let state = state.insert_text(at, "!");
        assert_eq!(state.plain_text(), "one\ntwo!");
    }

    #[test]
    fn remove_collapses_at_range_start() {
        let state = EditorState::from_text("hello");
        let range = Selection::range(LineId::new(0), 1, 4);
        let state = state.remove_range(range);
        assert_eq!(state.plain_text(), "ho");
        assert_eq!(state.selection(), Selection::caret(LineId::new(0), 1));
    }

    #[test]
    fn remove_of_collapsed_range_changes_nothing() {
        let state = EditorState::from_text("abc");
        let range = Selection::caret(LineId::new(0), 1);
        let state = state.remove_range(range);
        assert_eq!(state.plain_text(), "abc");
        assert_eq!(state.selection().start(), 1);
    }

    #[test]
    fn operations_preserve_focus_flag() {
        let state = EditorState::from_text("ab");
        let at = Selection::caret(LineId::new(0), 0).with_focus(true);
        let state = state.insert_text(at, "x");
        assert!(state.selection().has_focus());
    }

    #[test]
    fn document_end_points_past_last_grapheme() {
        let state = EditorState::from_text("ab\ncde");
        let end = state.document_end();
        assert_eq!(end.line(), LineId::new(1));
        assert_eq!(end.start(), 3);
        assert!(end.is_collapsed());
    }

    #[test]
    fn document_end_of_empty_buffer() {
        let state = EditorState::default();
        assert_eq!(state.document_end(), Selection::caret(LineId::new(0), 0));
    }

    #[test]
    fn states_are_snapshots() {
        let first = EditorState::from_text("a");
        let second = first.insert_text(first.selection(), "b");
        assert_eq!(first.plain_text(), "a");
        assert_eq!(second.plain_text(), "ba");
    }

    #[test]
    #[should_panic(expected = "collapsed")]
    fn insert_rejects_range_selection() {
        let state = EditorState::from_text("abc");
        let _ = state.insert_text(Selection::range(LineId::new(0), 0, 2), "x");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn with_selection_rejects_bad_line() {
        let state = EditorState::from_text("abc");
        let _ = state.with_selection(Selection::caret(LineId::new(9), 0));
    }

    #[test]
    #[should_panic(expected = "past end of line")]
    fn with_selection_rejects_bad_offset() {
        let state = EditorState::from_text("abc");
        let _ = state.with_selection(Selection::caret(LineId::new(0), 4));
    }
}
