#![forbid(unsafe_code)]

//! Immutable line-segmented text storage.
//!
//! [`TextBuffer`] holds the document as a sequence of lines, conceptually
//! joined by [`LINE_SEPARATOR`]. Every edit returns a new buffer; existing
//! buffers are never mutated. Offsets into a line are *grapheme* offsets,
//! converted to byte indices internally.
//!
//! # Example
//! ```
//! use jot_text::buffer::{LineId, TextBuffer};
//!
//! let buf = TextBuffer::from_text("alpha\nbeta");
//! assert_eq!(buf.line_count(), 2);
//! assert_eq!(buf.line(LineId::new(1)), Some("beta"));
//!
//! let buf = buf.insert_in_line(LineId::new(0), 5, "!");
//! assert_eq!(buf.to_plain_text(), "alpha!\nbeta");
//! ```

use core::ops::Range;

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// The character that separates lines in flattened plain text.
pub const LINE_SEPARATOR: char = '\n';

/// Identity of a line within a [`TextBuffer`].
///
/// Compared by value; holding a `LineId` across an edit that did not touch
/// line structure keeps it valid (no engine operation splits or merges
/// lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(usize);

impl LineId {
    /// Identity of the line at `index` (zero-based, top to bottom).
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The underlying line index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Number of graphemes in `text`.
#[must_use]
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Immutable text buffer segmented into lines.
///
/// Invariants: there is always at least one line (possibly empty), and no
/// line ever contains [`LINE_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    // Single-line content is the dominant case for note fields.
    lines: SmallVec<[String; 1]>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl TextBuffer {
    /// Build a buffer from plain text, splitting on [`LINE_SEPARATOR`].
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split(LINE_SEPARATOR).map(String::from).collect(),
        }
    }

    /// Number of lines. Always at least 1.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the buffer holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// The text of a line, or `None` if `id` is out of bounds.
    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&str> {
        self.lines.get(id.index()).map(String::as_str)
    }

    /// Identity of the last line.
    #[must_use]
    pub fn last_line(&self) -> LineId {
        LineId::new(self.lines.len() - 1)
    }

    /// Grapheme length of a line, or `None` if `id` is out of bounds.
    #[must_use]
    pub fn grapheme_len(&self, id: LineId) -> Option<usize> {
        self.line(id).map(grapheme_count)
    }

    /// The single grapheme at `offset` within a line, if any.
    #[must_use]
    pub fn grapheme_at(&self, id: LineId, offset: usize) -> Option<&str> {
        self.line(id)?.graphemes(true).nth(offset)
    }

    /// Flatten to a single string with lines joined by [`LINE_SEPARATOR`].
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Return a new buffer with `text` spliced into one line at a grapheme
    /// offset.
    ///
    /// # Panics
    /// If `text` contains [`LINE_SEPARATOR`], `id` is out of bounds, or
    /// `offset` is past the end of the line.
    #[must_use]
    pub fn insert_in_line(&self, id: LineId, offset: usize, text: &str) -> Self {
        assert!(
            !text.contains(LINE_SEPARATOR),
            "inserted text may not contain the line separator"
        );
        let Some(line) = self.line(id) else {
            panic!("line {} out of bounds", id.index());
        };
        let Some(byte) = byte_offset(line, offset) else {
            panic!("grapheme offset {offset} past end of line {}", id.index());
        };
        let mut edited = String::with_capacity(line.len() + text.len());
        edited.push_str(&line[..byte]);
        edited.push_str(text);
        edited.push_str(&line[byte..]);
        self.replace_line(id, edited)
    }

    /// Return a new buffer with the grapheme range `span` removed from one
    /// line.
    ///
    /// # Panics
    /// If `id` is out of bounds, `span` is inverted, or `span.end` is past
    /// the end of the line.
    #[must_use]
    pub fn remove_in_line(&self, id: LineId, span: Range<usize>) -> Self {
        assert!(span.start <= span.end, "removal range is inverted");
        let Some(line) = self.line(id) else {
            panic!("line {} out of bounds", id.index());
        };
        let Some(start) = byte_offset(line, span.start) else {
            panic!("grapheme offset {} past end of line {}", span.start, id.index());
        };
        let Some(end) = byte_offset(line, span.end) else {
            panic!("grapheme offset {} past end of line {}", span.end, id.index());
        };
        let mut edited = String::with_capacity(line.len() - (end - start));
        edited.push_str(&line[..start]);
        edited.push_str(&line[end..]);
        self.replace_line(id, edited)
    }

    fn replace_line(&self, id: LineId, text: String) -> Self {
        let mut lines = self.lines.clone();
        lines[id.index()] = text;
        Self { lines }
    }
}

/// Byte index of the grapheme at `offset`, or `Some(line.len())` for the
/// one-past-the-end offset. `None` when `offset` exceeds the grapheme count.
fn byte_offset(line: &str, offset: usize) -> Option<usize> {
    let mut count = 0usize;
    for (byte, _) in line.grapheme_indices(true) {
        if count == offset {
            return Some(byte);
        }
        count += 1;
    }
    (offset == count).then_some(line.len())
}
