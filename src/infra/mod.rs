//! Infrastructure layer: adapters for config, logging, and OS integrations.

pub mod attachments;
pub mod config;
pub mod contracts;
pub mod error;
pub mod logging;
pub mod scheduler;
