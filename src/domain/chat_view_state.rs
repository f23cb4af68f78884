//! Selection and scroll state for the message list.

/// Scroll margin - number of items to keep visible above/below cursor before scrolling.
const SCROLL_MARGIN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatViewState {
    selected_index: Option<usize>,
    scroll_offset: usize,
}

impl ChatViewState {
    /// Returns the selected message index for scroll positioning.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Returns the current scroll offset for the messages list.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Moves the selection to the last message, the usual resting point after
    /// something was appended.
    pub fn select_last(&mut self, message_count: usize) {
        self.selected_index = message_count.checked_sub(1);
    }

    /// Selects the next message (moves down in the list).
    pub fn select_next(&mut self, message_count: usize) {
        if message_count == 0 {
            return;
        }
        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(idx) if idx + 1 < message_count => Some(idx + 1),
            Some(idx) => Some(idx),
        };
    }

    /// Selects the previous message (moves up in the list).
    pub fn select_previous(&mut self, message_count: usize) {
        if message_count == 0 {
            return;
        }
        self.selected_index = match self.selected_index {
            None => Some(message_count - 1),
            Some(0) => Some(0),
            Some(idx) => Some(idx - 1),
        };
    }

    /// Re-clamps the selection after the list shrank (e.g. a delete).
    pub fn clamp_selection(&mut self, message_count: usize) {
        self.selected_index = match (self.selected_index, message_count) {
            (_, 0) => None,
            (Some(idx), count) if idx >= count => Some(count - 1),
            (selected, _) => selected,
        };
    }

    /// Updates the scroll offset so the cursor stays visible with
    /// SCROLL_MARGIN items above/below.
    ///
    /// `element_index` is the visual index in the list (accounting for date
    /// separators). `viewport_height` is the number of visible rows.
    pub fn update_scroll_offset(&mut self, element_index: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        let effective_margin = SCROLL_MARGIN.min(viewport_height / 2);

        if element_index < self.scroll_offset + effective_margin {
            self.scroll_offset = element_index.saturating_sub(effective_margin);
        }

        let visible_bottom = self.scroll_offset + viewport_height;
        if element_index + effective_margin >= visible_bottom {
            self.scroll_offset =
                (element_index + effective_margin + 1).saturating_sub(viewport_height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_selection() {
        let state = ChatViewState::default();

        assert_eq!(state.selected_index(), None);
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn select_last_targets_final_message() {
        let mut state = ChatViewState::default();

        state.select_last(3);
        assert_eq!(state.selected_index(), Some(2));

        state.select_last(0);
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn select_next_stops_at_the_end() {
        let mut state = ChatViewState::default();
        state.select_last(3);

        state.select_next(3);

        assert_eq!(state.selected_index(), Some(2));
    }

    #[test]
    fn select_previous_stops_at_the_start() {
        let mut state = ChatViewState::default();
        state.select_last(2);

        state.select_previous(2);
        state.select_previous(2);
        state.select_previous(2);

        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn selection_moves_both_ways() {
        let mut state = ChatViewState::default();
        state.select_last(3);

        state.select_previous(3);
        assert_eq!(state.selected_index(), Some(1));

        state.select_next(3);
        assert_eq!(state.selected_index(), Some(2));
    }

    #[test]
    fn empty_list_never_selects() {
        let mut state = ChatViewState::default();

        state.select_next(0);
        state.select_previous(0);

        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn clamp_pulls_selection_back_after_delete() {
        let mut state = ChatViewState::default();
        state.select_last(3);

        state.clamp_selection(2);
        assert_eq!(state.selected_index(), Some(1));

        state.clamp_selection(0);
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn scroll_offset_moves_down_when_cursor_near_bottom() {
        let mut state = ChatViewState::default();

        state.update_scroll_offset(18, 20);

        assert!(state.scroll_offset() > 0);
    }

    #[test]
    fn scroll_offset_moves_up_when_cursor_near_top() {
        let mut state = ChatViewState::default();
        state.scroll_offset = 10;

        state.update_scroll_offset(12, 20);

        assert!(state.scroll_offset() < 10);
    }

    #[test]
    fn scroll_offset_untouched_in_safe_zone() {
        let mut state = ChatViewState::default();
        state.scroll_offset = 5;

        state.update_scroll_offset(10, 20);

        assert_eq!(state.scroll_offset(), 5);
    }

    #[test]
    fn zero_viewport_changes_nothing() {
        let mut state = ChatViewState::default();
        state.scroll_offset = 5;

        state.update_scroll_offset(10, 0);

        assert_eq!(state.scroll_offset(), 5);
    }
}
