#![forbid(unsafe_code)]

//! Cursor-aware plain-text editing for jot.
//!
//! This crate is the editing engine: it owns no widget, renders nothing,
//! and talks to no host. It provides:
//! - [`TextBuffer`] - immutable line-segmented text storage
//! - [`Selection`] - a caret or single-line range, with the pure
//!   relocation functions [`after_insert`] and [`after_remove`]
//! - [`EditorState`] - an immutable `(buffer, selection)` snapshot with
//!   the two editing primitives, `insert_text` and `remove_range`
//! - [`handle_tab`] - the tab-key policy (indent, bullet-aware indent,
//!   conservative outdent)
//!
//! Offsets are grapheme offsets within a line. Selections never span two
//! lines; the [`Selection`] type cannot express one that does.
//!
//! # Example
//! ```
//! use jot_text::{EditorState, handle_tab};
//!
//! // A freshly typed bullet marker; caret after the space.
//! let state = EditorState::from_text("- ");
//! let state = state.with_selection(state.selection().collapsed_at(2));
//!
//! // Tab indents the marker itself, not the caret position.
//! let indented = handle_tab(&state, false).expect("policy acts");
//! assert_eq!(indented.plain_text(), "\t- ");
//!
//! // Shift-tab takes the indent back out.
//! let restored = handle_tab(&indented, true).expect("tab found");
//! assert_eq!(restored.plain_text(), "- ");
//! ```

pub mod buffer;
pub mod editor;
pub mod selection;
pub mod tab;

pub use buffer::{LINE_SEPARATOR, LineId, TextBuffer, grapheme_count};
pub use editor::EditorState;
pub use selection::{Selection, after_insert, after_remove};
pub use tab::{INDENT, handle_tab};
