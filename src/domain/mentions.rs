//! Mention token recovery from message content.
//!
//! Mentions are stored inline as literal `@Name` substrings; there is no
//! separate mention index. The content is re-parsed on render, which is fine
//! at this scale.

use super::directory::resolve_prefix;

/// One displayable piece of message content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSegment {
    /// A plain word.
    Text(String),
    /// A word starting with `@`. `resolved` carries the full directory name
    /// when the token prefix-matches an entry.
    Mention {
        token: String,
        resolved: Option<String>,
    },
}

/// Splits content into whitespace-delimited segments, tagging `@`-prefixed
/// words as mentions.
pub fn parse_segments(content: &str) -> Vec<ContentSegment> {
    content
        .split(' ')
        .map(|word| match word.strip_prefix('@') {
            Some(token) if !token.is_empty() => ContentSegment::Mention {
                resolved: resolve_prefix(token),
                token: token.to_owned(),
            },
            _ => ContentSegment::Text(word.to_owned()),
        })
        .collect()
}
