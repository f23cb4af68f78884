//! Event orchestration: translates app events into store mutations and
//! widget-state transitions.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::{
    domain::{
        composer_state::ComposerMode,
        directory::{current_user, TeamMember},
        events::{AppEvent, KeyInput},
        message::Message,
        message_store::MessageStore,
        shell_state::{ActivePane, ShellState},
    },
    infra::config::ChatConfig,
    usecases::{
        contracts::{ReplyScheduler, ShellOrchestrator},
        ingest_attachments::{ingest_attachments, ImageSource},
        send_message::{assistant_reply_text, assistant_should_reply, compose_outgoing},
    },
};

pub struct DefaultShellOrchestrator<R, I>
where
    R: ReplyScheduler,
    I: ImageSource + Sync,
{
    state: ShellState,
    scheduler: R,
    images: I,
    local_user: TeamMember,
    reply_delay: Duration,
}

impl<R, I> DefaultShellOrchestrator<R, I>
where
    R: ReplyScheduler,
    I: ImageSource + Sync,
{
    pub fn new(scheduler: R, images: I, config: &ChatConfig) -> Self {
        let store = if config.seed_history {
            MessageStore::seeded()
        } else {
            MessageStore::new()
        };
        Self {
            state: ShellState::with_store(store),
            scheduler,
            images,
            local_user: current_user(),
            reply_delay: Duration::from_millis(config.assistant_reply_delay_ms),
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        self.state.clear_notice();
        match self.state.active_pane() {
            ActivePane::Messages => self.handle_messages_key(key),
            ActivePane::Composer => self.handle_composer_key(key),
            ActivePane::ReactionPicker => self.handle_picker_key(key),
            ActivePane::AttachPrompt => self.handle_attach_key(key),
        }
    }

    fn handle_messages_key(&mut self, key: KeyInput) {
        let message_count = self.state.store().len();
        match key.key.as_str() {
            "j" | "down" => self.state.chat_view_mut().select_next(message_count),
            "k" | "up" => self.state.chat_view_mut().select_previous(message_count),
            "i" => self.state.set_active_pane(ActivePane::Composer),
            "o" => self.start_reply(),
            "e" => self.start_edit(),
            "d" => self.delete_selected(),
            "r" => self.open_reaction_picker(),
            "q" => self.state.stop(),
            _ => {}
        }
    }

    fn start_reply(&mut self) {
        let Some(id) = self.state.selected_message_id() else {
            return;
        };
        if let Some(quote) = self.state.store().get(&id).map(Message::as_quote) {
            self.state.composer_mut().start_reply(quote);
            self.state.set_active_pane(ActivePane::Composer);
        }
    }

    fn start_edit(&mut self) {
        let Some(id) = self.state.selected_message_id() else {
            return;
        };
        let Some((own, content)) = self
            .state
            .store()
            .get(&id)
            .map(|m| (m.is_current_user, m.content.clone()))
        else {
            return;
        };
        if !own {
            self.state.set_notice("You can only edit your own messages");
            return;
        }
        self.state.composer_mut().start_edit(id, &content);
        self.state.set_active_pane(ActivePane::Composer);
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.state.selected_message_id() else {
            return;
        };
        let Some(message) = self.state.store().get(&id) else {
            return;
        };
        if !message.is_current_user {
            self.state.set_notice("You can only delete your own messages");
            return;
        }
        self.state.store_mut().delete(&id);
        let remaining = self.state.store().len();
        self.state.chat_view_mut().clamp_selection(remaining);
        tracing::debug!(message_id = %id, "message deleted");
    }

    fn open_reaction_picker(&mut self) {
        if let Some(id) = self.state.selected_message_id() {
            self.state.reaction_picker_mut().open(id);
            self.state.set_active_pane(ActivePane::ReactionPicker);
        }
    }

    fn handle_picker_key(&mut self, key: KeyInput) {
        match key.key.as_str() {
            "l" | "right" | "j" | "down" => self.state.reaction_picker_mut().select_next(),
            "h" | "left" | "k" | "up" => self.state.reaction_picker_mut().select_previous(),
            "enter" => {
                self.toggle_selected_reaction();
                self.state.reaction_picker_mut().close();
                self.state.set_active_pane(ActivePane::Messages);
            }
            "esc" => {
                self.state.reaction_picker_mut().close();
                self.state.set_active_pane(ActivePane::Messages);
            }
            _ => {}
        }
    }

    /// Applies the highlighted emoji to the picker's target message. Picking
    /// an emoji the local user already applied withdraws it instead.
    fn toggle_selected_reaction(&mut self) {
        let Some(id) = self.state.reaction_picker().target_id().map(str::to_owned) else {
            return;
        };
        let emoji = self.state.reaction_picker().selected_emoji();
        let user = self.local_user.name.clone();
        let already_reacted = self
            .state
            .store()
            .get(&id)
            .and_then(|m| m.reaction(emoji))
            .is_some_and(|r| r.users.iter().any(|u| *u == user));
        if already_reacted {
            self.state.store_mut().remove_reaction(&id, emoji, &user);
        } else {
            self.state.store_mut().add_reaction(&id, emoji, &user);
        }
    }

    fn handle_composer_key(&mut self, key: KeyInput) {
        if key.ctrl {
            match key.key.as_str() {
                "a" => {
                    self.state.attach_input_mut().clear();
                    self.state.set_active_pane(ActivePane::AttachPrompt);
                }
                "x" => self.state.composer_mut().remove_last_attachment(),
                _ => {}
            }
            return;
        }

        match key.key.as_str() {
            "enter" => {
                if self.state.composer().mentions_open() {
                    self.accept_mention();
                } else {
                    self.submit_composer();
                }
            }
            "tab" => {
                if self.state.composer().mentions_open() {
                    self.accept_mention();
                }
            }
            "esc" => {
                if self.state.composer().mentions_open() {
                    self.state.composer_mut().dismiss_mentions();
                } else if self.state.composer().mode() != &ComposerMode::New {
                    self.state.composer_mut().cancel_mode();
                } else {
                    self.state.set_active_pane(ActivePane::Messages);
                }
            }
            "up" => {
                if self.state.composer().mentions_open() {
                    self.state.composer_mut().select_previous_suggestion();
                }
            }
            "down" => {
                if self.state.composer().mentions_open() {
                    self.state.composer_mut().select_next_suggestion();
                }
            }
            "left" => self.state.composer_mut().move_cursor_left(),
            "right" => self.state.composer_mut().move_cursor_right(),
            "home" => self.state.composer_mut().move_cursor_home(),
            "end" => self.state.composer_mut().move_cursor_end(),
            "backspace" => self.state.composer_mut().delete_char_before(),
            "delete" => self.state.composer_mut().delete_char_at(),
            _ => {
                if let Some(ch) = key.as_char() {
                    if !self.state.composer_mut().insert_char(ch) {
                        self.state.set_notice("Message is too long");
                    }
                }
            }
        }
    }

    fn accept_mention(&mut self) {
        let composer = self.state.composer_mut();
        let suggestions = composer.mention_suggestions();
        if let Some(entry) = suggestions.get(composer.mention_index()) {
            let name = entry.name().to_owned();
            composer.insert_mention(&name);
        }
    }

    fn submit_composer(&mut self) {
        let composer = self.state.composer();
        let text_empty = composer.text().trim().is_empty();
        let has_attachments = !composer.pending_attachments().is_empty();
        if text_empty && (composer.is_editing() || !has_attachments) {
            self.state.set_notice("Cannot send an empty message");
            return;
        }

        let (text, mode, attachments) = self.state.composer_mut().take_submission();
        match mode {
            ComposerMode::Editing { message_id } => {
                self.state.store_mut().edit(&message_id, text.trim());
                // An edit rewrites text only; a pending attachment batch
                // stays queued for the next outgoing message.
                self.state.composer_mut().push_attachments(attachments);
                self.state.set_active_pane(ActivePane::Messages);
            }
            ComposerMode::New | ComposerMode::Replying { .. } => {
                let quote = match mode {
                    ComposerMode::Replying { quote } => Some(quote),
                    _ => None,
                };
                match compose_outgoing(&text, quote, attachments, &self.local_user) {
                    Ok(message) => {
                        let content = message.content.clone();
                        self.state.store_mut().append(message);
                        let count = self.state.store().len();
                        self.state.chat_view_mut().select_last(count);
                        if assistant_should_reply(&content) {
                            self.scheduler
                                .schedule(self.reply_delay, assistant_reply_text(&self.local_user.name));
                        }
                    }
                    Err(error) => {
                        tracing::debug!(?error, "outgoing message rejected");
                        self.state.set_notice("Cannot send an empty message");
                    }
                }
            }
        }
    }

    fn handle_attach_key(&mut self, key: KeyInput) {
        match key.key.as_str() {
            "esc" => {
                self.state.attach_input_mut().clear();
                self.state.set_active_pane(ActivePane::Composer);
            }
            "backspace" => {
                self.state.attach_input_mut().pop();
            }
            "enter" => self.run_attach_batch(),
            _ => {
                if let Some(ch) = key.as_char() {
                    self.state.attach_input_mut().push(ch);
                }
            }
        }
    }

    fn run_attach_batch(&mut self) {
        let paths: Vec<PathBuf> = self
            .state
            .attach_input()
            .split_whitespace()
            .map(PathBuf::from)
            .collect();
        self.state.attach_input_mut().clear();
        self.state.set_active_pane(ActivePane::Composer);
        if paths.is_empty() {
            return;
        }

        let outcome = ingest_attachments(&self.images, &paths);
        let added = outcome.attachments.len();
        let failed = outcome.failures.len();
        self.state.composer_mut().push_attachments(outcome.attachments);
        if failed > 0 {
            self.state
                .set_notice(format!("Attached {added} image(s), {failed} failed"));
        }
    }
}

impl<R, I> ShellOrchestrator for DefaultShellOrchestrator<R, I>
where
    R: ReplyScheduler,
    I: ImageSource + Sync,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::AssistantReply(content) => {
                self.state.store_mut().append(Message::assistant(content, None));
                let count = self.state.store().len();
                self.state.chat_view_mut().select_last(count);
            }
        }
        Ok(())
    }
}
