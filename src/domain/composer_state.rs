//! State for the message composition field: text editing, mention
//! suggestions, the reply/edit mode, and the pending attachment buffer.

use super::directory::{suggestions, DirectoryEntry};
use super::message::{Attachment, QuotedMessage};

/// Maximum allowed input length in characters.
const MAX_INPUT_LENGTH: usize = 4096;

/// What submitting the composer will do.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ComposerMode {
    /// Compose a fresh message.
    #[default]
    New,
    /// Replace the content of an existing message.
    Editing { message_id: String },
    /// Compose a fresh message carrying a quoted snapshot.
    Replying { quote: QuotedMessage },
}

/// An active mention query: the char index of the `@` and the text between it
/// and the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionQuery {
    pub start: usize,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposerState {
    text: String,
    /// Cursor position as a character index, not a byte index.
    cursor_position: usize,
    mode: ComposerMode,
    pending_attachments: Vec<Attachment>,
    mention_index: usize,
    mention_dismissed: bool,
}

impl ComposerState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn mode(&self) -> &ComposerMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ComposerMode::Editing { .. })
    }

    pub fn pending_attachments(&self) -> &[Attachment] {
        &self.pending_attachments
    }

    /// Inserts a character at the cursor. Returns false when the input is at
    /// its maximum length.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_INPUT_LENGTH {
            return false;
        }
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text.insert(byte_idx, ch);
        self.cursor_position += 1;
        self.on_text_changed();
        true
    }

    /// Deletes the character before the cursor (backspace).
    pub fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor_position);
            let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
            self.text.drain(byte_idx..next_byte_idx);
            self.on_text_changed();
        }
    }

    /// Deletes the character at the cursor (delete key).
    pub fn delete_char_at(&mut self) {
        let char_count = self.text.chars().count();
        if self.cursor_position < char_count {
            let byte_idx = self.char_to_byte_index(self.cursor_position);
            let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
            self.text.drain(byte_idx..next_byte_idx);
            self.on_text_changed();
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.text.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.text.chars().count();
    }

    /// Enters edit mode for an existing message, preloading its content.
    /// Any pending reply quote is discarded.
    pub fn start_edit(&mut self, message_id: String, content: &str) {
        self.text = content.to_owned();
        self.cursor_position = self.text.chars().count();
        self.mode = ComposerMode::Editing { message_id };
        self.mention_dismissed = false;
        self.mention_index = 0;
    }

    /// Arms a reply: the snapshot is captured now and attached on submit.
    /// Ignored while editing.
    pub fn start_reply(&mut self, quote: QuotedMessage) {
        if !self.is_editing() {
            self.mode = ComposerMode::Replying { quote };
        }
    }

    /// Leaves edit/reply mode. Canceling an edit drops the preloaded text;
    /// canceling a reply keeps whatever was typed.
    pub fn cancel_mode(&mut self) {
        if self.is_editing() {
            self.text.clear();
            self.cursor_position = 0;
        }
        self.mode = ComposerMode::New;
    }

    pub fn push_attachments(&mut self, attachments: Vec<Attachment>) {
        self.pending_attachments.extend(attachments);
    }

    pub fn remove_last_attachment(&mut self) {
        self.pending_attachments.pop();
    }

    /// Consumes the composition: returns the text, mode, and pending
    /// attachments, and resets the composer for the next message.
    pub fn take_submission(&mut self) -> (String, ComposerMode, Vec<Attachment>) {
        let text = std::mem::take(&mut self.text);
        let mode = std::mem::take(&mut self.mode);
        let attachments = std::mem::take(&mut self.pending_attachments);
        self.cursor_position = 0;
        self.mention_index = 0;
        self.mention_dismissed = false;
        (text, mode, attachments)
    }

    // --- mention suggestions -------------------------------------------------

    /// The active mention query: the last `@` before the cursor with the text
    /// between them. None when dismissed or when no `@` precedes the cursor.
    pub fn mention_query(&self) -> Option<MentionQuery> {
        if self.mention_dismissed {
            return None;
        }
        let before_cursor: Vec<char> = self.text.chars().take(self.cursor_position).collect();
        let start = before_cursor.iter().rposition(|&ch| ch == '@')?;
        let query: String = before_cursor[start + 1..].iter().collect();
        Some(MentionQuery { start, query })
    }

    /// Directory entries matching the active mention query. Empty when no
    /// query is active.
    pub fn mention_suggestions(&self) -> Vec<DirectoryEntry> {
        match self.mention_query() {
            Some(query) => suggestions(&query.query),
            None => Vec::new(),
        }
    }

    /// True when the suggestion popup should be shown.
    pub fn mentions_open(&self) -> bool {
        !self.mention_suggestions().is_empty()
    }

    /// Index of the highlighted suggestion, clamped to the current list.
    pub fn mention_index(&self) -> usize {
        let len = self.mention_suggestions().len();
        if len == 0 {
            0
        } else {
            self.mention_index % len
        }
    }

    pub fn select_next_suggestion(&mut self) {
        let len = self.mention_suggestions().len();
        if len > 0 {
            self.mention_index = (self.mention_index() + 1) % len;
        }
    }

    pub fn select_previous_suggestion(&mut self) {
        let len = self.mention_suggestions().len();
        if len > 0 {
            self.mention_index = (self.mention_index() + len - 1) % len;
        }
    }

    /// Hides the popup until the text changes again.
    pub fn dismiss_mentions(&mut self) {
        self.mention_dismissed = true;
    }

    /// Replaces the active `@query` with `@Name ` and moves the cursor after
    /// the inserted mention.
    pub fn insert_mention(&mut self, name: &str) {
        let Some(query) = self.mention_query() else {
            return;
        };
        let start_byte = self.char_to_byte_index(query.start);
        let cursor_byte = self.char_to_byte_index(self.cursor_position);
        let mention = format!("@{} ", name);
        self.text.replace_range(start_byte..cursor_byte, &mention);
        self.cursor_position = query.start + mention.chars().count();
        self.mention_index = 0;
    }

    fn on_text_changed(&mut self) {
        self.mention_dismissed = false;
        self.mention_index = 0;
    }

    /// Converts a character index to a byte index.
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::Sender;

    fn type_str(state: &mut ComposerState, text: &str) {
        for ch in text.chars() {
            state.insert_char(ch);
        }
    }

    fn quote() -> QuotedMessage {
        QuotedMessage {
            id: "m1".to_owned(),
            content: "Original".to_owned(),
            sender: Sender {
                name: "Sarah Miller".to_owned(),
                avatar: None,
                is_ai: false,
            },
        }
    }

    #[test]
    fn new_composer_is_empty_in_new_mode() {
        let state = ComposerState::default();

        assert!(state.is_empty());
        assert_eq!(state.mode(), &ComposerMode::New);
        assert!(state.pending_attachments().is_empty());
        assert!(state.mention_query().is_none());
    }

    #[test]
    fn insert_and_delete_track_cursor() {
        let mut state = ComposerState::default();
        type_str(&mut state, "Hi!");

        assert_eq!(state.text(), "Hi!");
        assert_eq!(state.cursor_position(), 3);

        state.delete_char_before();
        assert_eq!(state.text(), "Hi");

        state.move_cursor_home();
        state.delete_char_at();
        assert_eq!(state.text(), "i");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut state = ComposerState::default();
        type_str(&mut state, "Привет 👍");

        assert_eq!(state.cursor_position(), 8);

        state.delete_char_before();
        assert_eq!(state.text(), "Привет ");
    }

    #[test]
    fn insert_respects_max_length() {
        let mut state = ComposerState::default();
        for _ in 0..MAX_INPUT_LENGTH {
            assert!(state.insert_char('x'));
        }

        assert!(!state.insert_char('y'));
        assert_eq!(state.text().chars().count(), MAX_INPUT_LENGTH);
    }

    #[test]
    fn at_sign_opens_mention_query() {
        let mut state = ComposerState::default();
        type_str(&mut state, "hey @Sa");

        let query = state.mention_query().expect("query should be active");
        assert_eq!(query.start, 4);
        assert_eq!(query.query, "Sa");
        assert!(state.mentions_open());
        assert_eq!(state.mention_suggestions()[0].name(), "Sarah Miller");
    }

    #[test]
    fn mention_query_can_span_spaces() {
        let mut state = ComposerState::default();
        type_str(&mut state, "@Sarah Mil");

        let query = state.mention_query().expect("query should be active");
        assert_eq!(query.query, "Sarah Mil");
        assert_eq!(state.mention_suggestions().len(), 1);
    }

    #[test]
    fn popup_hidden_when_nothing_matches() {
        let mut state = ComposerState::default();
        type_str(&mut state, "@zzz");

        assert!(state.mention_query().is_some());
        assert!(!state.mentions_open());
    }

    #[test]
    fn suggestion_selection_wraps_both_ways() {
        let mut state = ComposerState::default();
        type_str(&mut state, "@");
        let len = state.mention_suggestions().len();
        assert_eq!(len, 5);

        state.select_previous_suggestion();
        assert_eq!(state.mention_index(), len - 1);

        state.select_next_suggestion();
        assert_eq!(state.mention_index(), 0);
    }

    #[test]
    fn insert_mention_replaces_query_and_appends_space() {
        let mut state = ComposerState::default();
        type_str(&mut state, "ping @Sa");

        state.insert_mention("Sarah Miller");

        assert_eq!(state.text(), "ping @Sarah Miller ");
        assert_eq!(state.cursor_position(), state.text().chars().count());
        assert!(!state.mentions_open());
    }

    #[test]
    fn insert_mention_preserves_text_after_cursor() {
        let mut state = ComposerState::default();
        type_str(&mut state, "ping @Ja later");
        for _ in 0..6 {
            state.move_cursor_left();
        }

        state.insert_mention("James Wilson");

        assert_eq!(state.text(), "ping @James Wilson  later");
    }

    #[test]
    fn dismiss_hides_popup_until_text_changes() {
        let mut state = ComposerState::default();
        type_str(&mut state, "@Sa");

        state.dismiss_mentions();
        assert!(!state.mentions_open());

        state.insert_char('r');
        assert!(state.mentions_open());
    }

    #[test]
    fn start_edit_preloads_content_and_mode() {
        let mut state = ComposerState::default();

        state.start_edit("m1".to_owned(), "old text");

        assert_eq!(state.text(), "old text");
        assert_eq!(state.cursor_position(), 8);
        assert!(state.is_editing());
    }

    #[test]
    fn start_reply_is_ignored_while_editing() {
        let mut state = ComposerState::default();
        state.start_edit("m1".to_owned(), "old");

        state.start_reply(quote());

        assert!(state.is_editing());
    }

    #[test]
    fn cancel_edit_drops_preloaded_text() {
        let mut state = ComposerState::default();
        state.start_edit("m1".to_owned(), "old");

        state.cancel_mode();

        assert!(state.is_empty());
        assert_eq!(state.mode(), &ComposerMode::New);
    }

    #[test]
    fn cancel_reply_keeps_typed_text() {
        let mut state = ComposerState::default();
        state.start_reply(quote());
        type_str(&mut state, "draft");

        state.cancel_mode();

        assert_eq!(state.text(), "draft");
        assert_eq!(state.mode(), &ComposerMode::New);
    }

    #[test]
    fn take_submission_resets_everything() {
        let mut state = ComposerState::default();
        state.start_reply(quote());
        type_str(&mut state, "answer");
        state.push_attachments(vec![Attachment::image("data:x".to_owned(), None, None)]);

        let (text, mode, attachments) = state.take_submission();

        assert_eq!(text, "answer");
        assert!(matches!(mode, ComposerMode::Replying { .. }));
        assert_eq!(attachments.len(), 1);
        assert!(state.is_empty());
        assert_eq!(state.mode(), &ComposerMode::New);
        assert!(state.pending_attachments().is_empty());
    }

    #[test]
    fn remove_last_attachment_pops_in_order() {
        let mut state = ComposerState::default();
        state.push_attachments(vec![
            Attachment::image("a".to_owned(), None, None),
            Attachment::image("b".to_owned(), None, None),
        ]);

        state.remove_last_attachment();

        assert_eq!(state.pending_attachments().len(), 1);
        assert_eq!(state.pending_attachments()[0].url, "a");
    }
}
