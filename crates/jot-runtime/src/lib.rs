#![forbid(unsafe_code)]

//! Host boundary for the jot editing engine.
//!
//! The engine in `jot-text` is pure: it computes new states and tells no
//! one. This crate is where states get adopted and the outside world gets
//! told. [`EditorSession`] owns the current state, runs the tab policy on
//! key events, fires [`ChangeSink`] exactly when the flattened plain text
//! changed, and reconciles external content updates so the engine's own
//! notifications echoed back by the host are never mistaken for edits.
//!
//! # Example
//! ```
//! use jot_runtime::EditorSession;
//!
//! let mut session = EditorSession::new("- ", |_text: &str| {});
//! session.set_focus(true);
//! session.sync_external("- milk");
//! assert_eq!(session.text(), "- milk");
//! // Focused editor: caret relocated to the end after the overwrite.
//! assert_eq!(session.state().selection().start(), 6);
//! ```

pub mod session;

pub use session::{ChangeSink, EditorSession, FocusTarget};
