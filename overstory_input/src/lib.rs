// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_input --heading-base-level=0

//! Overstory Input: editing state for a single-line text field.
//!
//! [`InputWidget`] tracks what a text field holds and how it is being edited:
//! the text, a character cursor, insert or overwrite mode, an optional
//! length limit, and whether the contents are sensitive (masked on display).
//! Layout, glyph rendering and keyboard mapping belong to the host.
//!
//! Editing happens inside a session: [`InputWidget::begin`] remembers the
//! current text, and [`InputWidget::end`] either accepts the edits or
//! restores what was there before.
//!
//! ```rust
//! use overstory_input::{InputAction, InputMode, InputWidget};
//!
//! let mut input = InputWidget::new(8);
//! input.set_text("hello");
//! input.begin();
//! input.insert_char('!');
//! assert_eq!(input.text(), "hello!");
//!
//! input.set_mode(InputMode::Overwrite);
//! input.set_cursor(0);
//! input.insert_char('j');
//! assert_eq!(input.end(true), Some(InputAction::Accepted("jello!".into())));
//!
//! input.begin();
//! input.delete_backward();
//! assert_eq!(input.end(false), Some(InputAction::Cancelled));
//! assert_eq!(input.text(), "jello!");
//! ```

use std::borrow::Cow;

/// How typed characters interact with existing text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Characters are inserted at the cursor.
    #[default]
    Insert,
    /// Characters replace the character under the cursor.
    Overwrite,
}

/// Outcome of ending an editing session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// The edits were kept; carries the final text.
    Accepted(String),
    /// The edits were discarded and the previous text restored.
    Cancelled,
}

/// Editing state of a single-line text field.
///
/// Lengths and the cursor count `char`s, not bytes. A `max_len` of zero
/// means unlimited.
#[derive(Clone, Debug, Default)]
pub struct InputWidget {
    text: String,
    max_len: usize,
    mode: InputMode,
    sensitive: bool,
    cursor: usize,
    editing: bool,
    old_text: String,
}

impl InputWidget {
    /// Mask character shown in place of each character of sensitive text.
    pub const MASK: char = '\u{2022}';

    /// Creates an empty field holding at most `max_len` characters (zero for unlimited).
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            ..Self::default()
        }
    }

    /// The current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position as a character index in `0..=len()`.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The editing mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Maximum length in characters, zero for unlimited.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Whether the text is masked on display.
    #[must_use]
    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Whether an editing session is active.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Masks (or unmasks) the text on display.
    pub fn set_sensitive(&mut self, sensitive: bool) {
        self.sensitive = sensitive;
    }

    /// Sets the editing mode.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Sets the maximum length, truncating the text if it is now too long.
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len;
        self.truncate();
    }

    /// Replaces the text, truncated to the maximum length.
    ///
    /// The cursor is clamped to the new text.
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.truncate();
    }

    /// Moves the cursor, clamped to `0..=len()`.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.len());
    }

    /// Starts an editing session with the cursor at the end of the text.
    ///
    /// Does nothing if a session is already active.
    pub fn begin(&mut self) {
        if self.editing {
            return;
        }
        self.editing = true;
        self.old_text.clone_from(&self.text);
        self.cursor = self.len();
        log::debug!("input editing started");
    }

    /// Ends the editing session.
    ///
    /// With `accept` the edits are kept; otherwise the text from
    /// [`InputWidget::begin`] is restored. Returns `None` when no session
    /// was active.
    pub fn end(&mut self, accept: bool) -> Option<InputAction> {
        if !self.editing {
            return None;
        }
        self.editing = false;
        let old = std::mem::take(&mut self.old_text);
        let action = if accept {
            InputAction::Accepted(self.text.clone())
        } else {
            self.text = old;
            self.set_cursor(self.cursor);
            InputAction::Cancelled
        };
        log::debug!("input editing ended: {action:?}");
        Some(action)
    }

    /// Types `c` at the cursor according to the mode.
    ///
    /// Returns `false` if nothing changed: outside an editing session, or
    /// when inserting would exceed the maximum length.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.editing {
            return false;
        }
        let len = self.len();
        let at = self.byte_offset(self.cursor);
        match self.mode {
            InputMode::Overwrite if self.cursor < len => {
                let next = self.byte_offset(self.cursor + 1);
                let mut buf = [0; 4];
                self.text.replace_range(at..next, c.encode_utf8(&mut buf));
            }
            _ => {
                if self.max_len > 0 && len >= self.max_len {
                    return false;
                }
                self.text.insert(at, c);
            }
        }
        self.cursor += 1;
        true
    }

    /// Deletes the character before the cursor.
    ///
    /// Returns `false` if nothing changed.
    pub fn delete_backward(&mut self) -> bool {
        if !self.editing || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// Deletes the character under the cursor.
    ///
    /// Returns `false` if nothing changed.
    pub fn delete_forward(&mut self) -> bool {
        if !self.editing || self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// The text as it should be shown: masked when sensitive.
    #[must_use]
    pub fn display_text(&self) -> Cow<'_, str> {
        if self.sensitive {
            Cow::Owned(std::iter::repeat_n(Self::MASK, self.len()).collect())
        } else {
            Cow::Borrowed(&self.text)
        }
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn truncate(&mut self) {
        if self.max_len > 0 {
            let end = self.byte_offset(self.max_len);
            self.text.truncate(end);
        }
        self.set_cursor(self.cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(text: &str) -> InputWidget {
        let mut input = InputWidget::new(0);
        input.set_text(text);
        input.begin();
        input
    }

    #[test]
    fn edits_require_a_session() {
        let mut input = InputWidget::new(0);
        input.set_text("abc");
        assert!(!input.insert_char('x'));
        assert!(!input.delete_backward());
        assert_eq!(input.end(true), None);
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn begin_puts_cursor_at_end() {
        let input = editing("héllo");
        assert_eq!(input.cursor(), 5);
        assert!(input.is_editing());
    }

    #[test]
    fn insert_respects_max_len() {
        let mut input = InputWidget::new(3);
        input.begin();
        for c in "abcd".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn overwrite_replaces_and_then_appends() {
        let mut input = editing("añb");
        input.set_mode(InputMode::Overwrite);
        input.set_cursor(1);
        assert!(input.insert_char('x'));
        assert!(input.insert_char('y'));
        assert!(input.insert_char('z'));
        assert_eq!(input.text(), "axyz");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn overwrite_at_limit_still_replaces() {
        let mut input = InputWidget::new(2);
        input.set_text("ab");
        input.begin();
        input.set_mode(InputMode::Overwrite);
        input.set_cursor(0);
        assert!(input.insert_char('c'));
        assert!(input.insert_char('d'));
        assert!(!input.insert_char('e'));
        assert_eq!(input.text(), "cd");
    }

    #[test]
    fn deleting_handles_multibyte_chars() {
        let mut input = editing("aé€");
        assert!(input.delete_backward());
        assert_eq!(input.text(), "aé");
        input.set_cursor(0);
        assert!(input.delete_forward());
        assert_eq!(input.text(), "é");
        assert!(!input.delete_backward());
    }

    #[test]
    fn cancel_restores_previous_text() {
        let mut input = editing("keep");
        input.delete_backward();
        input.insert_char('!');
        assert_eq!(input.end(false), Some(InputAction::Cancelled));
        assert_eq!(input.text(), "keep");
        assert!(input.cursor() <= input.len());
        assert!(!input.is_editing());
    }

    #[test]
    fn accept_returns_text() {
        let mut input = editing("ok");
        input.insert_char('!');
        assert_eq!(input.end(true), Some(InputAction::Accepted("ok!".into())));
    }

    #[test]
    fn limits_truncate_and_clamp() {
        let mut input = InputWidget::new(0);
        input.set_text("abcdef");
        input.set_cursor(99);
        assert_eq!(input.cursor(), 6);
        input.set_max_len(3);
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 3);
        input.set_text("wxyz");
        assert_eq!(input.text(), "wxy");
    }

    #[test]
    fn sensitive_text_is_masked() {
        let mut input = InputWidget::new(0);
        input.set_text("pässword");
        assert_eq!(input.display_text(), "pässword");
        input.set_sensitive(true);
        assert_eq!(input.display_text(), "••••••••");
        assert_eq!(input.text(), "pässword");
    }
}
