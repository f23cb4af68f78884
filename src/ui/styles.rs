//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Message list styles
// =============================================================================

/// Style for message sender name (white, bold).
pub fn message_sender_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the [AI] badge next to the assistant's name.
pub fn ai_badge_style() -> Style {
    Style::default().fg(Color::Magenta)
}

/// Style for the (edited) marker.
pub fn edited_marker_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for message time in the messages panel.
pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for message text content.
pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for resolved @Name mention tokens.
pub fn mention_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for the quoted-message line above a reply.
pub fn quote_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for attachment indicators like [Image 800x600].
pub fn attachment_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Style for reaction chips on other people's behalf.
pub fn reaction_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Style for reaction chips the local user participates in.
pub fn own_reaction_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Style for date separator line.
pub fn date_separator_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Composer styles
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for a mention suggestion row.
pub fn suggestion_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for the highlighted mention suggestion.
pub fn selected_suggestion_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::REVERSED)
}

/// Style for the transient status notice.
pub fn notice_style() -> Style {
    Style::default().fg(Color::Yellow)
}
