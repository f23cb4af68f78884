use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Translates terminal key presses into app events. Quit shortcuts are the
/// only keys interpreted here; everything else is forwarded as raw input so
/// the orchestrator can dispatch per pane.
#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            if key.code == KeyCode::Char('c') && ctrl {
                return Ok(Some(AppEvent::QuitRequested));
            }

            return Ok(key_name(key.code)
                .map(|name| AppEvent::InputKey(KeyInput::new(name, ctrl))));
        }

        Ok(None)
    }
}

fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(ch) => Some(ch.to_string()),
        KeyCode::Enter => Some("enter".to_owned()),
        KeyCode::Esc => Some("esc".to_owned()),
        KeyCode::Backspace => Some("backspace".to_owned()),
        KeyCode::Delete => Some("delete".to_owned()),
        KeyCode::Left => Some("left".to_owned()),
        KeyCode::Right => Some("right".to_owned()),
        KeyCode::Up => Some("up".to_owned()),
        KeyCode::Down => Some("down".to_owned()),
        KeyCode::Home => Some("home".to_owned()),
        KeyCode::End => Some("end".to_owned()),
        KeyCode::Tab => Some("tab".to_owned()),
        _ => None,
    }
}

/// Drains app events produced off-thread (the assistant reply timer).
pub struct ChannelEventSource {
    receiver: Receiver<AppEvent>,
}

impl ChannelEventSource {
    pub fn new(receiver: Receiver<AppEvent>) -> Self {
        Self { receiver }
    }
}

impl AppEventSource for ChannelEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        match self.receiver.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => Ok(None),
        }
    }
}

/// Merges channel-delivered events with terminal input. Channel events win so
/// a due assistant reply is never starved by key repeat.
pub struct CompositeEventSource<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> CompositeEventSource<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: AppEventSource, B: AppEventSource> AppEventSource for CompositeEventSource<A, B> {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Some(event) = self.primary.next_event()? {
            return Ok(Some(event));
        }
        self.secondary.next_event()
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}
