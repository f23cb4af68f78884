//! In-memory ordered message collection for one conversation.
//!
//! The store exclusively owns all message records. Mutations referencing an
//! unknown id are silent no-ops: with a single local writer there is nothing
//! useful to report, and the presentation layer never holds stale handles for
//! longer than one event.

use chrono::{Days, Local};

use super::directory::team_roster;
use super::message::{Message, Reaction};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with the demo conversation spanning the
    /// last three calendar days.
    pub fn seeded() -> Self {
        let roster = team_roster();
        let now = Local::now();
        let yesterday = now.checked_sub_days(Days::new(1)).unwrap_or(now);
        let two_days_ago = now.checked_sub_days(Days::new(2)).unwrap_or(now);

        let mut store = Self::new();
        store.append(Message::assistant(
            "Hello! I'm ChatGPT, your AI assistant. How can I help you today?",
            Some(two_days_ago),
        ));
        store.append(Message::team(
            "Hi team! I've just pushed some updates to the main branch. @Sarah Miller could you review the changes?",
            &roster[2],
            Some(two_days_ago),
        ));
        store.append(Message::team(
            "I'll take a look at it right away @James Wilson. Have you updated the documentation as well?",
            &roster[1],
            Some(two_days_ago),
        ));
        store.append(Message::team(
            "@ChatGPT can you help me understand the recent performance metrics?",
            &roster[3],
            Some(yesterday),
        ));
        store.append(Message::assistant(
            "@Michael Thompson Based on the latest data, the application's response time has improved by 23% after the recent optimizations. Would you like me to generate a detailed report?",
            Some(yesterday),
        ));
        store.append(Message::user(
            "Great progress everyone! @Sarah Miller @James Wilson let's schedule a quick review meeting tomorrow.",
            &roster[0],
            Some(yesterday),
        ));
        store.append(Message::team(
            "Sounds good @Alex Chen! I've also noticed some potential improvements in the API endpoints.",
            &roster[1],
            Some(now),
        ));
        store.append(Message::team(
            "I'll prepare a detailed overview of the changes for tomorrow's meeting.",
            &roster[2],
            Some(now),
        ));
        store.append(Message::team(
            "@Alex Chen @ChatGPT I need help with the deployment process for the new features.",
            &roster[3],
            Some(now),
        ));
        store.append(Message::assistant(
            "@Michael Thompson I'll guide you through the deployment steps. First, let's verify your configuration and ensure all dependencies are up to date.",
            Some(now),
        ));
        store.append(Message::user(
            "Thanks @ChatGPT! @Michael Thompson I'll join the deployment discussion as well. We should document this process for future reference.",
            &roster[0],
            Some(now),
        ));
        store.append(Message::team(
            "I've created a draft of the deployment documentation. @Alex Chen could you review it when you have a moment?",
            &roster[1],
            Some(now),
        ));
        store
    }

    /// Current sequence in append (chronological) order. This is the only
    /// supported read path.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Adds a message to the end of the sequence. Duplicate ids are a
    /// programmer error.
    pub fn append(&mut self, message: Message) {
        debug_assert!(
            self.get(&message.id).is_none(),
            "duplicate message id {}",
            message.id
        );
        self.messages.push(message);
    }

    /// Removes the message with the given id. No-op if absent.
    pub fn delete(&mut self, id: &str) {
        self.messages.retain(|m| m.id != id);
    }

    /// Replaces the content of the message and marks it edited. Timestamp,
    /// reactions, and attachments are untouched. No-op if absent.
    pub fn edit(&mut self, id: &str, new_content: impl Into<String>) {
        if let Some(message) = self.get_mut(id) {
            message.content = new_content.into();
            message.is_edited = true;
        }
    }

    /// Records `user_name` reacting with `emoji`. Idempotent per user and
    /// emoji. No-op if the message is absent.
    pub fn add_reaction(&mut self, id: &str, emoji: &str, user_name: &str) {
        let Some(message) = self.get_mut(id) else {
            return;
        };
        match message.reactions.iter_mut().find(|r| r.emoji == emoji) {
            Some(reaction) => {
                if !reaction.users.iter().any(|u| u == user_name) {
                    reaction.users.push(user_name.to_owned());
                }
            }
            None => message.reactions.push(Reaction {
                emoji: emoji.to_owned(),
                users: vec![user_name.to_owned()],
            }),
        }
    }

    /// Withdraws `user_name`'s reaction with `emoji`. Removing the last user
    /// removes the reaction entry entirely. No-op if the message, emoji, or
    /// user is absent.
    pub fn remove_reaction(&mut self, id: &str, emoji: &str, user_name: &str) {
        let Some(message) = self.get_mut(id) else {
            return;
        };
        if let Some(reaction) = message.reactions.iter_mut().find(|r| r.emoji == emoji) {
            reaction.users.retain(|u| u != user_name);
        }
        message.reactions.retain(|r| !r.users.is_empty());
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }
}
