#![forbid(unsafe_code)]

//! Selections and the arithmetic that relocates them around edits.
//!
//! A [`Selection`] is an anchor/focus pair of grapheme offsets confined to
//! a single line. Cross-line selections are unrepresentable: there is one
//! line field. [`after_insert`] and [`after_remove`] are the two relocation
//! entry points; both are pure functions over offsets and both funnel
//! through the same collapse path, so insertion and removal can never
//! drift apart.

use core::ops::Range;

use crate::buffer::LineId;

/// A caret or single-line range within a buffer.
///
/// `anchor` is the fixed end, `focus` the moving end; either order is
/// valid. The selection is collapsed (a caret) when they are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    line: LineId,
    anchor: usize,
    focus: usize,
    has_focus: bool,
}

impl Selection {
    /// A collapsed, unfocused selection at `offset` on `line`.
    #[must_use]
    pub const fn caret(line: LineId, offset: usize) -> Self {
        Self {
            line,
            anchor: offset,
            focus: offset,
            has_focus: false,
        }
    }

    /// An unfocused range selection on a single line.
    #[must_use]
    pub const fn range(line: LineId, anchor: usize, focus: usize) -> Self {
        Self {
            line,
            anchor,
            focus,
            has_focus: false,
        }
    }

    /// The same selection with input focus set or cleared.
    #[must_use]
    pub const fn with_focus(mut self, has_focus: bool) -> Self {
        self.has_focus = has_focus;
        self
    }

    /// The line both offsets index into.
    #[must_use]
    pub const fn line(self) -> LineId {
        self.line
    }

    /// The fixed end of the selection.
    #[must_use]
    pub const fn anchor(self) -> usize {
        self.anchor
    }

    /// The moving end of the selection.
    #[must_use]
    pub const fn focus(self) -> usize {
        self.focus
    }

    /// Whether the owning editor holds input focus.
    #[must_use]
    pub const fn has_focus(self) -> bool {
        self.has_focus
    }

    /// The lesser of anchor and focus.
    #[must_use]
    pub fn start(self) -> usize {
        self.anchor.min(self.focus)
    }

    /// The greater of anchor and focus.
    #[must_use]
    pub fn end(self) -> usize {
        self.anchor.max(self.focus)
    }

    /// Grapheme length of the selected range (0 for a caret).
    #[must_use]
    pub fn len(self) -> usize {
        self.end() - self.start()
    }

    /// Whether anchor and focus coincide.
    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self.anchor == self.focus
    }

    /// Collapse to a caret at `offset`, keeping line and focus flag.
    ///
    /// The single relocation path shared by [`after_insert`] and
    /// [`after_remove`].
    #[must_use]
    pub const fn collapsed_at(self, offset: usize) -> Self {
        Self {
            line: self.line,
            anchor: offset,
            focus: offset,
            has_focus: self.has_focus,
        }
    }

    /// Re-span over a grapheme range, keeping line and focus flag.
    #[must_use]
    pub fn spanning(self, span: Range<usize>) -> Self {
        Self {
            anchor: span.start,
            focus: span.end,
            ..self
        }
    }
}

/// Selection after `inserted` graphemes were spliced in at a collapsed
/// caret: the caret advances past the inserted text.
///
/// # Panics
/// If `selection` is not collapsed. Multi-grapheme insertion at a range
/// selection is not an operation this engine performs.
#[must_use]
pub fn after_insert(selection: Selection, inserted: usize) -> Selection {
    assert!(
        selection.is_collapsed(),
        "insertion requires a collapsed selection"
    );
    selection.collapsed_at(selection.start() + inserted)
}

/// Selection after the grapheme range `removed` was deleted from the line:
/// a caret collapsed at the start of the removed range.
///
/// # Panics
/// If `removed` is inverted.
#[must_use]
pub fn after_remove(selection: Selection, removed: Range<usize>) -> Selection {
    assert!(removed.start <= removed.end, "removal range is inverted");
    selection.collapsed_at(removed.start)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn insert_then_remove_is_identity(offset in 0usize..100, len in 0usize..20) {
            let sel = Selection::caret(LineId::new(0), offset);
            let inserted = after_insert(sel, len);
            let restored = after_remove(inserted, offset..offset + len);
            prop_assert_eq!(restored, sel);
        }

        #[test]
        fn relocation_never_changes_line_or_focus(
            line in 0usize..10,
            offset in 0usize..100,
            len in 0usize..20,
            focused in any::<bool>(),
        ) {
            let sel = Selection::caret(LineId::new(line), offset).with_focus(focused);
            let moved = after_insert(sel, len);
            prop_assert_eq!(moved.line(), sel.line());
            prop_assert_eq!(moved.has_focus(), sel.has_focus());
        }
    }
}
