//! Message list rendering logic.
//!
//! Handles visual formatting of messages including:
//! - Header line (time, sender, AI badge, edited marker)
//! - Quoted-message line above replies
//! - Inline @Name mention highlighting
//! - Attachment indicators and reaction chips
//! - Date separators between messages from different days

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::ListItem,
};

use crate::domain::{
    mentions::{parse_segments, ContentSegment},
    message::Message,
    time_format::{format_display_date, should_insert_date_separator},
};

use super::styles;

const CONTENT_INDENT: &str = "      "; // aligns with the time column
const QUOTE_PREVIEW_MAX: usize = 60;

/// Represents a visual element in the messages list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageListElement {
    /// Date separator line (e.g., "——— Today ———").
    DateSeparator(String),
    /// Index of a message in the store's sequence.
    Message(usize),
}

/// Builds the visual element list: every message in order, with a date
/// separator in front of the first message of each calendar day.
pub fn build_message_list_elements(messages: &[Message]) -> Vec<MessageListElement> {
    let mut elements = Vec::new();
    let mut prev_date = None;

    for (index, message) in messages.iter().enumerate() {
        if should_insert_date_separator(&message.date, prev_date) {
            elements.push(MessageListElement::DateSeparator(format_display_date(
                &message.date,
            )));
        }
        elements.push(MessageListElement::Message(index));
        prev_date = Some(&message.date);
    }

    elements
}

/// Converts a message index to the corresponding element index in the list.
///
/// Returns `None` if the message index is out of range.
pub fn message_index_to_element_index(
    elements: &[MessageListElement],
    message_index: usize,
) -> Option<usize> {
    elements
        .iter()
        .position(|element| matches!(element, MessageListElement::Message(idx) if *idx == message_index))
}

/// Converts a list element to a ListItem for ratatui rendering.
pub fn element_to_list_item(
    element: &MessageListElement,
    messages: &[Message],
    local_user: &str,
) -> ListItem<'static> {
    match element {
        MessageListElement::DateSeparator(date) => date_separator_item(date),
        MessageListElement::Message(index) => match messages.get(*index) {
            Some(message) => message_item(message, local_user),
            None => ListItem::new(Line::default()),
        },
    }
}

fn date_separator_item(date: &str) -> ListItem<'static> {
    let separator = format!("——— {} ———", date);
    let line = Line::from(vec![Span::styled(
        separator,
        styles::date_separator_style(),
    )])
    .alignment(Alignment::Center);
    ListItem::new(vec![Line::default(), line, Line::default()])
}

fn message_item(message: &Message, local_user: &str) -> ListItem<'static> {
    let mut lines = vec![header_line(message)];

    if let Some(quote) = &message.quoted_message {
        lines.push(quote_line(&quote.sender.name, &quote.content));
    }

    for text_line in message.content.lines() {
        let mut spans = vec![Span::raw(CONTENT_INDENT.to_owned())];
        spans.extend(content_line_spans(text_line));
        lines.push(Line::from(spans));
    }

    if !message.attachments.is_empty() {
        lines.push(attachments_line(message));
    }

    if !message.reactions.is_empty() {
        lines.push(reactions_line(message, local_user));
    }

    ListItem::new(lines)
}

fn header_line(message: &Message) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{:>5} ", message.timestamp),
            styles::message_time_style(),
        ),
        Span::styled(
            message.sender.name.clone(),
            styles::message_sender_style(),
        ),
    ];

    if message.sender.is_ai {
        spans.push(Span::styled(" [AI]".to_owned(), styles::ai_badge_style()));
    }

    if message.is_edited {
        spans.push(Span::styled(
            " (edited)".to_owned(),
            styles::edited_marker_style(),
        ));
    }

    Line::from(spans)
}

fn quote_line(sender: &str, content: &str) -> Line<'static> {
    let preview = quote_preview(content);
    Line::from(vec![
        Span::raw(CONTENT_INDENT.to_owned()),
        Span::styled(format!("│ {}: {}", sender, preview), styles::quote_style()),
    ])
}

fn quote_preview(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("");
    let chars: Vec<char> = first_line.chars().collect();
    if chars.len() <= QUOTE_PREVIEW_MAX {
        first_line.to_owned()
    } else {
        let truncated: String = chars.into_iter().take(QUOTE_PREVIEW_MAX).collect();
        format!("{}...", truncated)
    }
}

/// Builds styled spans for one content line, highlighting resolved mentions.
fn content_line_spans(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, segment) in parse_segments(text).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".to_owned()));
        }
        match segment {
            ContentSegment::Text(word) => {
                spans.push(Span::styled(word, styles::message_text_style()));
            }
            ContentSegment::Mention { token, resolved } => {
                let style = if resolved.is_some() {
                    styles::mention_style()
                } else {
                    styles::message_text_style()
                };
                spans.push(Span::styled(format!("@{}", token), style));
            }
        }
    }

    spans
}

fn attachments_line(message: &Message) -> Line<'static> {
    let mut spans = vec![Span::raw(CONTENT_INDENT.to_owned())];

    for (i, attachment) in message.attachments.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".to_owned()));
        }
        let label = match (attachment.width, attachment.height) {
            (Some(w), Some(h)) => format!("[Image {}x{}]", w, h),
            _ => "[Image]".to_owned(),
        };
        spans.push(Span::styled(label, styles::attachment_style()));
    }

    Line::from(spans)
}

fn reactions_line(message: &Message, local_user: &str) -> Line<'static> {
    let mut spans = vec![Span::raw(CONTENT_INDENT.to_owned())];

    for (i, reaction) in message.reactions.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  ".to_owned()));
        }
        let own = reaction.users.iter().any(|u| u == local_user);
        let style = if own {
            styles::own_reaction_style()
        } else {
            styles::reaction_style()
        };
        spans.push(Span::styled(
            format!("{} {}", reaction.emoji, reaction.users.len()),
            style,
        ));
    }

    Line::from(spans)
}
