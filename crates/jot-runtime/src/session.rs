#![forbid(unsafe_code)]

//! The host-facing session around one editor.
//!
//! [`EditorSession`] owns the current [`EditorState`] and everything the
//! host boundary needs: it runs the tab policy on key events, fires the
//! [`ChangeSink`] exactly when flattened plain text changed, reconciles
//! external content updates without feedback loops, and carries the focus
//! capability as an explicitly mounted [`FocusTarget`] rather than ambient
//! state.
//!
//! Single-threaded by contract: one event is fully processed before the
//! next, and intermediate states are never observable.

use jot_text::{EditorState, handle_tab};

/// Outbound notification target for content changes.
///
/// Called with the flattened plain text exactly when an edit changed it;
/// never redundantly.
pub trait ChangeSink {
    fn content_changed(&mut self, plain_text: &str);
}

impl<F: FnMut(&str)> ChangeSink for F {
    fn content_changed(&mut self, plain_text: &str) {
        self(plain_text);
    }
}

/// The focus primitive of whatever text widget is currently mounted.
pub trait FocusTarget {
    fn focus(&mut self);
}

/// Owns one [`EditorState`] and the host boundary around it.
pub struct EditorSession<S> {
    state: EditorState,
    /// Most recent externally supplied content, for the echo guard.
    last_external: String,
    sink: S,
    focus_target: Option<Box<dyn FocusTarget>>,
}

impl<S: ChangeSink> EditorSession<S> {
    /// Start a session from host-supplied content. No notification fires
    /// for the initial state.
    pub fn new(initial: &str, sink: S) -> Self {
        Self {
            state: EditorState::from_text(initial),
            last_external: initial.to_string(),
            sink,
            focus_target: None,
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Flattened plain text of the current buffer.
    #[must_use]
    pub fn text(&self) -> String {
        self.state.plain_text()
    }

    /// Process a tab keypress.
    ///
    /// Runs the tab policy and adopts its result; the sink fires iff the
    /// flattened text changed. Returns whether it did. The host consumes
    /// the key event regardless of the return value.
    pub fn handle_tab(&mut self, shift: bool) -> bool {
        let Some(next) = handle_tab(&self.state, shift) else {
            tracing::trace!(shift, "tab policy declined");
            return false;
        };
        self.adopt(next)
    }

    /// Reconcile an external content update.
    ///
    /// Ordered precedence, first match wins: identical to the previous
    /// external value, ignore; identical to the current rendered text,
    /// ignore (this is our own notification echoed back); otherwise
    /// rebuild the buffer, and move the caret to the end iff the previous
    /// selection held input focus. A rebuild never fires the sink: the
    /// content came from the host.
    pub fn sync_external(&mut self, content: &str) {
        if content == self.last_external {
            tracing::debug!("external content ignored: matches previous external value");
            return;
        }
        if content == self.state.plain_text() {
            tracing::debug!("external content ignored: matches rendered text");
            self.last_external = content.to_string();
            return;
        }

        let had_focus = self.state.selection().has_focus();
        let mut next = EditorState::from_text(content);
        if had_focus {
            next = next.with_selection(next.document_end().with_focus(true));
        }
        tracing::debug!(
            len = content.len(),
            focused = had_focus,
            "external content adopted, buffer rebuilt"
        );
        self.last_external = content.to_string();
        self.state = next;
    }

    /// Record that the editor gained or lost input focus. Caret-only:
    /// never fires the sink.
    pub fn set_focus(&mut self, focused: bool) {
        let selection = self.state.selection().with_focus(focused);
        self.state = self.state.with_selection(selection);
    }

    /// Mount the focus primitive of the currently shown text widget.
    pub fn mount_focus_target(&mut self, target: Box<dyn FocusTarget>) {
        self.focus_target = Some(target);
    }

    /// Unmount the focus primitive, e.g. when the widget is torn down.
    pub fn unmount_focus_target(&mut self) {
        self.focus_target = None;
    }

    /// Ask the mounted widget for input focus. No-op when nothing is
    /// mounted.
    pub fn request_focus(&mut self) {
        if let Some(target) = self.focus_target.as_mut() {
            target.focus();
        }
    }

    /// Adopt a new state, firing the sink iff flattened text changed.
    fn adopt(&mut self, next: EditorState) -> bool {
        let changed = next.plain_text() != self.state.plain_text();
        self.state = next;
        if changed {
            let text = self.state.plain_text();
            tracing::debug!(len = text.len(), "content changed");
            self.sink.content_changed(&text);
        }
        changed
    }
}
