//! Message entity and its construction helpers.

use chrono::{DateTime, Local};
use uuid::Uuid;

use super::directory::{TeamMember, ASSISTANT_NAME};
use super::time_format::format_timestamp;

/// Authorship of a message. Senders are compared by name; the mock directory
/// has no stable numeric identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub name: String,
    pub avatar: Option<String>,
    pub is_ai: bool,
}

/// An emoji tag plus the ordered list of participants who applied it.
/// A reaction only exists while its user list is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub emoji: String,
    pub users: Vec<String>,
}

/// Kind of attachment. Only images are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentKind {
    #[default]
    Image,
}

/// A fully-resolved attachment. `url` is displayable (typically a data URL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Attachment {
    pub fn image(url: String, width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            kind: AttachmentKind::Image,
            url,
            thumbnail_url: None,
            width,
            height,
        }
    }
}

/// Snapshot of another message taken at reply time. It is a copy, not a live
/// reference: editing or deleting the original does not touch the quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Opaque unique handle, generated at creation, immutable.
    pub id: String,
    /// Plain text body. May contain inline `@Name` mention tokens.
    pub content: String,
    pub sender: Sender,
    /// Display time (hour:minute) frozen at creation. Never recomputed.
    pub timestamp: String,
    /// Full creation instant, used for ordering and date separators.
    pub date: DateTime<Local>,
    pub is_current_user: bool,
    /// Keyed by emoji, kept in insertion order for stable rendering.
    pub reactions: Vec<Reaction>,
    pub quoted_message: Option<QuotedMessage>,
    /// Set the first time the content is modified; never reset.
    pub is_edited: bool,
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Builds a message authored by the local user.
    pub fn user(
        content: impl Into<String>,
        author: &TeamMember,
        date: Option<DateTime<Local>>,
    ) -> Self {
        let sender = Sender {
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            is_ai: false,
        };
        Self::build(content.into(), sender, true, date)
    }

    /// Builds a message authored by a team member other than the local user.
    pub fn team(
        content: impl Into<String>,
        member: &TeamMember,
        date: Option<DateTime<Local>>,
    ) -> Self {
        let sender = Sender {
            name: member.name.clone(),
            avatar: member.avatar.clone(),
            is_ai: false,
        };
        Self::build(content.into(), sender, false, date)
    }

    /// Builds a message from the fixed assistant identity.
    pub fn assistant(content: impl Into<String>, date: Option<DateTime<Local>>) -> Self {
        let sender = Sender {
            name: ASSISTANT_NAME.to_owned(),
            avatar: None,
            is_ai: true,
        };
        Self::build(content.into(), sender, false, date)
    }

    fn build(
        content: String,
        sender: Sender,
        is_current_user: bool,
        date: Option<DateTime<Local>>,
    ) -> Self {
        let date = date.unwrap_or_else(Local::now);
        Self {
            id: generate_message_id(),
            content,
            sender,
            timestamp: format_timestamp(&date),
            date,
            is_current_user,
            reactions: Vec::new(),
            quoted_message: None,
            is_edited: false,
            attachments: Vec::new(),
        }
    }

    pub fn with_quote(mut self, quote: Option<QuotedMessage>) -> Self {
        self.quoted_message = quote;
        self
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    /// Captures the reply snapshot for this message.
    pub fn as_quote(&self) -> QuotedMessage {
        QuotedMessage {
            id: self.id.clone(),
            content: self.content.clone(),
            sender: self.sender.clone(),
        }
    }

    pub fn reaction(&self, emoji: &str) -> Option<&Reaction> {
        self.reactions.iter().find(|r| r.emoji == emoji)
    }
}

/// Generates an opaque message id with negligible collision probability.
fn generate_message_id() -> String {
    Uuid::new_v4().to_string()
}
