//! Domain layer: core entities and business rules.

pub mod chat_view_state;
pub mod composer_state;
pub mod directory;
pub mod events;
pub mod mentions;
pub mod message;
pub mod message_store;
pub mod shell_state;
pub mod time_format;
