//! Top-level UI state: the owned message store plus per-pane widget state.

use super::chat_view_state::ChatViewState;
use super::composer_state::ComposerState;
use super::message_store::MessageStore;

/// Which surface currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Messages,
    Composer,
    ReactionPicker,
    AttachPrompt,
}

/// The quick-reaction palette, in display order.
pub const QUICK_EMOJIS: [&str; 18] = [
    "👍", "👎", "❤️", "😊", "😂", "🎉", "👏", "🙌", "✨", "🔥", "💯", "✅", "❌", "❓", "💡",
    "💪", "🤝", "🚀",
];

/// Selection state of the reaction picker popup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReactionPickerState {
    target_id: Option<String>,
    selected: usize,
}

impl ReactionPickerState {
    pub fn open(&mut self, target_id: String) {
        self.target_id = Some(target_id);
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.target_id = None;
        self.selected = 0;
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_emoji(&self) -> &'static str {
        QUICK_EMOJIS[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % QUICK_EMOJIS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + QUICK_EMOJIS.len() - 1) % QUICK_EMOJIS.len();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    active_pane: ActivePane,
    store: MessageStore,
    chat_view: ChatViewState,
    composer: ComposerState,
    reaction_picker: ReactionPickerState,
    /// Attach-prompt input: space-separated file paths.
    attach_input: String,
    /// One-line transient status message.
    notice: Option<String>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::with_store(MessageStore::new())
    }
}

impl ShellState {
    pub fn with_store(store: MessageStore) -> Self {
        let mut chat_view = ChatViewState::default();
        chat_view.select_last(store.len());
        Self {
            running: true,
            active_pane: ActivePane::Messages,
            store,
            chat_view,
            composer: ComposerState::default(),
            reaction_picker: ReactionPickerState::default(),
            attach_input: String::new(),
            notice: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MessageStore {
        &mut self.store
    }

    pub fn chat_view(&self) -> &ChatViewState {
        &self.chat_view
    }

    pub fn chat_view_mut(&mut self) -> &mut ChatViewState {
        &mut self.chat_view
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ComposerState {
        &mut self.composer
    }

    pub fn reaction_picker(&self) -> &ReactionPickerState {
        &self.reaction_picker
    }

    pub fn reaction_picker_mut(&mut self) -> &mut ReactionPickerState {
        &mut self.reaction_picker
    }

    pub fn attach_input(&self) -> &str {
        &self.attach_input
    }

    pub fn attach_input_mut(&mut self) -> &mut String {
        &mut self.attach_input
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// The message currently under the cursor.
    pub fn selected_message_id(&self) -> Option<String> {
        let index = self.chat_view.selected_index()?;
        self.store.messages().get(index).map(|m| m.id.clone())
    }
}
