#![forbid(unsafe_code)]

//! What the tab key does.
//!
//! One keypress, one decision: insert an indent, remove one, or decline.
//! Forward tab inserts [`INDENT`] at the caret, except on a bare bullet
//! line (`-` or `*` with nothing after it) where it indents the marker
//! itself at column 0. Shift-tab is conservative: it removes exactly one
//! preceding [`INDENT`] grapheme and never anything else, so an outdent at
//! an unexpected column can't eat content.

use crate::editor::EditorState;
use crate::selection::Selection;

/// The indent unit: a single tab character.
pub const INDENT: &str = "\t";

/// Apply the tab-key policy to `state`.
///
/// Returns the new state, or `None` when the policy declines: the
/// selection is a range, shift-tab found no tab to remove, or the caret
/// sits at column 0 of an ordinary line. Consuming the key event is the
/// host's business either way.
#[must_use]
pub fn handle_tab(state: &EditorState, shift: bool) -> Option<EditorState> {
    let selection = state.selection();
    if !selection.is_collapsed() {
        return None;
    }
    let line = state.line_text(selection.line())?;
    let bullet = is_bullet_start(line);

    if shift {
        outdent(state, selection, bullet)
    } else {
        Some(indent(state, selection, bullet))
    }
}

/// A line whose trimmed content is exactly a bare list marker.
fn is_bullet_start(line: &str) -> bool {
    matches!(line.trim(), "-" | "*")
}

fn indent(state: &EditorState, selection: Selection, bullet: bool) -> EditorState {
    // On a bare bullet line the indent goes in front of the marker, not at
    // the arbitrary caret position after it.
    let offset = if bullet { 0 } else { selection.start() };
    state.insert_text(selection.collapsed_at(offset), INDENT)
}

fn outdent(state: &EditorState, selection: Selection, bullet: bool) -> Option<EditorState> {
    let caret = selection.start();
    let span = if bullet {
        0..1
    } else {
        if caret == 0 {
            return None;
        }
        caret - 1..caret
    };
    let candidate = state.buffer().grapheme_at(selection.line(), span.start)?;
    if candidate != INDENT {
        return None;
    }
    Some(state.remove_range(selection.spanning(span)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::LineId;

    fn state_with_caret(text: &str, line: usize, offset: usize) -> EditorState {
        let state = EditorState::from_text(text);
        state.with_selection(Selection::caret(LineId::new(line), offset))
    }

    #[test]
    fn tab_inserts_at_caret() {
        let state = state_with_caret("hello", 0, 2);
        let state = handle_tab(&state, false).unwrap();
        assert_eq!(state.plain_text(), "he\tllo");
        assert_eq!(state.selection().start(), 3);
    }

    #[test]
    fn tab_on_bullet_line_indents_the_marker() {
        let state = state_with_caret("- ", 0, 2);
        let state = handle_tab(&state, false).unwrap();
        assert_eq!(state.plain_text(), "\t- ");
        assert_eq!(state.selection().start(), 1);
    }

    #[test]
    fn tab_on_star_bullet_indents_the_marker() {
        let state = state_with_caret("*", 0, 1);
        let state = handle_tab(&state, false).unwrap();
        assert_eq!(state.plain_text(), "\t*");
    }

    #[test]
    fn bullet_with_content_is_not_special() {
        let state = state_with_caret("- item", 0, 6);
        let state = handle_tab(&state, false).unwrap();
        assert_eq!(state.plain_text(), "- item\t");
    }

    #[test]
    fn tab_only_touches_the_caret_line() {
        let state = state_with_caret("one\ntwo", 1, 0);
        let state = handle_tab(&state, false).unwrap();
        assert_eq!(state.plain_text(), "one\n\ttwo");
    }

    #[test]
    fn range_selection_declines() {
        let state = EditorState::from_text("hello");
        let state = state.with_selection(Selection::range(LineId::new(0), 1, 3));
        assert!(handle_tab(&state, false).is_none());
        assert!(handle_tab(&state, true).is_none());
    }

    #[test]
    fn outdent_removes_preceding_tab() {
        let state = state_with_caret("\tabc", 0, 1);
        let state = handle_tab(&state, true).unwrap();
        assert_eq!(state.plain_text(), "abc");
        assert_eq!(state.selection().start(), 0);
    }

    #[test]
    fn outdent_never_removes_other_characters() {
        let state = state_with_caret("  abc", 0, 3);
        assert!(handle_tab(&state, true).is_none());
    }

    #[test]
    fn outdent_at_column_zero_declines() {
        let state = state_with_caret("abc", 0, 0);
        assert!(handle_tab(&state, true).is_none());
    }

    #[test]
    fn outdent_on_bullet_line_strips_leading_tab() {
        let state = state_with_caret("\t-", 0, 2);
        let state = handle_tab(&state, true).unwrap();
        assert_eq!(state.plain_text(), "-");
        assert_eq!(state.selection().start(), 0);
    }

    #[test]
    fn outdent_on_unindented_bullet_declines() {
        let state = state_with_caret("- ", 0, 2);
        assert!(handle_tab(&state, true).is_none());
    }

    #[test]
    fn outdent_on_empty_line_declines() {
        let state = state_with_caret("", 0, 0);
        assert!(handle_tab(&state, true).is_none());
    }

    #[test]
    fn tab_then_outdent_round_trips() {
        let original = state_with_caret("note", 0, 2);
        let indented = handle_tab(&original, false).unwrap();
        let restored = handle_tab(&indented, true).unwrap();
        assert_eq!(restored.plain_text(), original.plain_text());
        assert_eq!(restored.selection(), original.selection());
    }
}
