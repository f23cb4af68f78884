//! Composer input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{
    composer_state::{ComposerMode, ComposerState},
    shell_state::ActivePane,
};

use super::styles;

/// Placeholder text shown when the input is not focused and empty.
const PLACEHOLDER_TEXT: &str = "Press 'i' to type a message...";

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

/// Renders the composer input field.
pub fn render_composer(
    frame: &mut Frame<'_>,
    area: Rect,
    composer: &ComposerState,
    active_pane: ActivePane,
) {
    let is_focused = active_pane == ActivePane::Composer;

    let border_style = if is_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let line = build_input_line(composer, is_focused);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(composer_title(composer))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);

    if is_focused {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(composer.cursor_position().min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Builds the block title: composer mode plus the pending attachment count.
fn composer_title(composer: &ComposerState) -> String {
    let mode = match composer.mode() {
        ComposerMode::New => "Message".to_owned(),
        ComposerMode::Editing { .. } => "Editing message".to_owned(),
        ComposerMode::Replying { quote } => format!("Replying to {}", quote.sender.name),
    };

    let attachment_count = composer.pending_attachments().len();
    if attachment_count > 0 {
        format!("{} ({} attached)", mode, attachment_count)
    } else {
        mode
    }
}

fn build_input_line(composer: &ComposerState, is_focused: bool) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if !is_focused && composer.is_empty() {
        return Line::from(vec![
            prompt,
            Span::styled(
                PLACEHOLDER_TEXT.to_owned(),
                styles::input_placeholder_style(),
            ),
        ]);
    }

    Line::from(vec![
        prompt,
        Span::styled(composer.text().to_owned(), styles::input_text_style()),
    ])
}
