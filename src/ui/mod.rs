//! UI layer: terminal rendering and interaction entry points.

mod composer_input;
mod event_source;
mod message_rendering;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub(crate) use event_source::{ChannelEventSource, CompositeEventSource, CrosstermEventSource};
