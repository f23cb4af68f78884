//! Use case for composing an outgoing user message.

use crate::domain::{
    directory::TeamMember,
    message::{Attachment, Message, QuotedMessage},
};

/// Domain-level errors for message composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// Message text is empty after trimming and there are no attachments.
    EmptyMessage,
}

/// Builds the outgoing message for the local user.
///
/// The text is trimmed; a message with neither text nor attachments is
/// rejected. The quote snapshot and attachments are carried as-is.
pub fn compose_outgoing(
    text: &str,
    quote: Option<QuotedMessage>,
    attachments: Vec<Attachment>,
    author: &TeamMember,
) -> Result<Message, ComposeError> {
    let text = text.trim();
    if text.is_empty() && attachments.is_empty() {
        return Err(ComposeError::EmptyMessage);
    }

    Ok(Message::user(text, author, None)
        .with_quote(quote)
        .with_attachments(attachments))
}

/// Whether an outgoing message should trigger the simulated assistant reply:
/// it asks for help or poses a question.
pub fn assistant_should_reply(content: &str) -> bool {
    let lowered = content.to_lowercase();
    lowered.contains("help") || lowered.contains('?')
}

/// The canned assistant auto-reply, addressed back at the author.
pub fn assistant_reply_text(author_name: &str) -> String {
    format!(
        "@{} I'll help you with that. Could you provide more specific details?",
        author_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{directory::team_roster, message::Sender};

    fn author() -> TeamMember {
        team_roster().remove(0)
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
    fn rejects_empty_text_without_attachments() {
        let result = compose_outgoing("", None, Vec::new(), &author());

        assert_eq!(result, Err(ComposeError::EmptyMessage));
    }

    #[test]
    fn rejects_whitespace_only_text() {
        let result = compose_outgoing("  \n\t ", None, Vec::new(), &author());

        assert_eq!(result, Err(ComposeError::EmptyMessage));
    }

    #[test]
    fn accepts_attachments_without_text() {
        let attachments = vec![Attachment::image("data:x".to_owned(), None, None)];

        let message = compose_outgoing("", None, attachments, &author()).expect("must compose");

        assert!(message.content.is_empty());
        assert_eq!(message.attachments.len(), 1);
    }

    #[test]
    fn trims_text_before_sending() {
        let message =
            compose_outgoing("  hello world  ", None, Vec::new(), &author()).expect("must compose");

        assert_eq!(message.content, "hello world");
    }

    #[test]
    fn carries_the_quote_snapshot() {
        let message =
            compose_outgoing("reply", Some(quote()), Vec::new(), &author()).expect("must compose");

        assert_eq!(message.quoted_message, Some(quote()));
    }

    #[test]
    fn marks_the_author_as_current_user() {
        let message = compose_outgoing("hi", None, Vec::new(), &author()).expect("must compose");

        assert!(message.is_current_user);
        assert_eq!(message.sender.name, author().name);
    }

    #[test]
    fn help_requests_trigger_the_assistant() {
        assert!(assistant_should_reply("I need HELP with this"));
        assert!(assistant_should_reply("does this work?"));
    }

    #[test]
    fn plain_statements_do_not_trigger_the_assistant() {
        assert!(!assistant_should_reply("all done, shipping it"));
    }

    #[test]
    fn reply_text_mentions_the_author() {
        let text = assistant_reply_text("Alex Chen");

        assert!(text.starts_with("@Alex Chen "));
    }
}
