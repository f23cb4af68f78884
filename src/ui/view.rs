use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::{
    directory::current_user,
    shell_state::{ActivePane, ShellState, QUICK_EMOJIS},
};

use super::composer_input::render_composer;
use super::message_rendering::{
    build_message_list_elements, element_to_list_item, message_index_to_element_index,
};
use super::styles;

pub fn render(frame: &mut Frame<'_>, state: &mut ShellState) {
    let [messages_area, input_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let active_pane = state.active_pane();
    render_messages_panel(frame, messages_area, state, active_pane);
    render_composer(frame, input_area, state.composer(), active_pane);

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);

    match active_pane {
        ActivePane::Composer if state.composer().mentions_open() => {
            render_mention_popup(frame, input_area, state);
        }
        ActivePane::ReactionPicker => render_reaction_picker(frame, messages_area, state),
        ActivePane::AttachPrompt => render_attach_prompt(frame, messages_area, state),
        _ => {}
    }
}

fn render_messages_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &mut ShellState,
    active_pane: ActivePane,
) {
    let is_active = active_pane == ActivePane::Messages;
    let border_style = if is_active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let block = Block::default()
        .title(format!("Team Chat ({})", state.store().len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if state.store().is_empty() {
        let panel =
            Paragraph::new("No messages yet. Press 'i' to start the conversation.").block(block);
        frame.render_widget(panel, area);
        return;
    }

    let local_user = current_user().name;
    let messages = state.store().messages();
    let elements = build_message_list_elements(messages);
    let items: Vec<ListItem<'static>> = elements
        .iter()
        .map(|element| element_to_list_item(element, messages, &local_user))
        .collect();

    // Viewport height is the area minus the borders.
    let viewport_height = area.height.saturating_sub(2) as usize;

    let element_index = state
        .chat_view()
        .selected_index()
        .and_then(|msg_idx| message_index_to_element_index(&elements, msg_idx));

    if let Some(idx) = element_index {
        state
            .chat_view_mut()
            .update_scroll_offset(idx, viewport_height);
    }
    let scroll_offset = state.chat_view().scroll_offset();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD));

    let mut list_state = ListState::default();
    list_state.select(element_index);
    *list_state.offset_mut() = scroll_offset;
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_mention_popup(frame: &mut Frame<'_>, input_area: Rect, state: &ShellState) {
    let suggestions = state.composer().mention_suggestions();
    if suggestions.is_empty() {
        return;
    }

    let height = (suggestions.len() as u16).min(6).saturating_add(2);
    let width = 30u16.min(input_area.width);
    let popup = Rect {
        x: input_area.x,
        y: input_area.y.saturating_sub(height),
        width,
        height,
    };

    let items: Vec<ListItem<'static>> = suggestions
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry.name().to_owned(),
                styles::suggestion_style(),
            )))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Mention")
                .borders(Borders::ALL)
                .border_style(styles::active_panel_border_style()),
        )
        .highlight_style(styles::selected_suggestion_style());

    let mut list_state = ListState::default();
    list_state.select(Some(state.composer().mention_index()));

    frame.render_widget(Clear, popup);
    frame.render_stateful_widget(list, popup, &mut list_state);
}

fn render_reaction_picker(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let popup = centered_rect(area, 58, 3);

    let selected = state.reaction_picker().selected();
    let mut spans = Vec::new();
    for (i, emoji) in QUICK_EMOJIS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if i == selected {
            styles::selected_suggestion_style()
        } else {
            Style::default()
        };
        spans.push(Span::styled(*emoji, style));
    }

    let picker = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("React")
            .borders(Borders::ALL)
            .border_style(styles::active_panel_border_style()),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(picker, popup);
}

fn render_attach_prompt(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let popup = centered_rect(area, 60, 3);

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled("> ", styles::input_prompt_style()),
        Span::styled(state.attach_input().to_owned(), styles::input_text_style()),
    ]))
    .block(
        Block::default()
            .title("Attach images (space-separated paths)")
            .borders(Borders::ALL)
            .border_style(styles::active_panel_border_style()),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(prompt, popup);

    let cursor_x = popup
        .x
        .saturating_add(3)
        .saturating_add(state.attach_input().chars().count().min(u16::MAX as usize) as u16);
    frame.set_cursor_position((cursor_x, popup.y.saturating_add(1)));
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn status_line(state: &ShellState) -> String {
    if let Some(notice) = state.notice() {
        return notice.to_owned();
    }

    match state.active_pane() {
        ActivePane::Messages => {
            "j/k: navigate | i: compose | o: reply | e: edit | d: delete | r: react | q: quit"
                .to_owned()
        }
        ActivePane::Composer => {
            "Enter: send | Esc: cancel | Ctrl+A: attach | Ctrl+X: drop attachment".to_owned()
        }
        ActivePane::ReactionPicker => "h/l: choose | Enter: toggle | Esc: close".to_owned(),
        ActivePane::AttachPrompt => "Enter: attach | Esc: cancel".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{directory::team_roster, message::Message, message_store::MessageStore};

    #[test]
    fn status_line_lists_message_pane_bindings() {
        let state = ShellState::default();

        let line = status_line(&state);

        assert!(line.contains("i: compose"));
        assert!(line.contains("r: react"));
    }

    #[test]
    fn status_line_lists_composer_bindings() {
        let mut state = ShellState::default();
        state.set_active_pane(ActivePane::Composer);

        let line = status_line(&state);

        assert!(line.contains("Ctrl+A: attach"));
    }

    #[test]
    fn notice_overrides_key_hints() {
        let mut state = ShellState::default();
        state.set_notice("Cannot send an empty message");

        assert_eq!(status_line(&state), "Cannot send an empty message");
    }

    #[test]
    fn centered_rect_fits_inside_the_area() {
        let area = Rect::new(0, 0, 80, 24);

        let popup = centered_rect(area, 60, 3);

        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 3);
        assert!(popup.x + popup.width <= area.width);
        assert!(popup.y + popup.height <= area.height);
    }

    #[test]
    fn centered_rect_clamps_to_small_areas() {
        let area = Rect::new(0, 0, 20, 2);

        let popup = centered_rect(area, 60, 3);

        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn selected_message_maps_to_a_list_row() {
        let roster = team_roster();
        let mut store = MessageStore::new();
        store.append(Message::team("a", &roster[1], None));
        store.append(Message::team("b", &roster[1], None));
        let state = ShellState::with_store(store);

        let elements = build_message_list_elements(state.store().messages());
        let element_index = state
            .chat_view()
            .selected_index()
            .and_then(|idx| message_index_to_element_index(&elements, idx));

        // One shared "Today" separator in front, so message 1 sits at row 2.
        assert_eq!(element_index, Some(2));
    }
}
