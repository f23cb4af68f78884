use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatConfig {
    /// Delay before the simulated assistant answers, in milliseconds.
    pub assistant_reply_delay_ms: u64,
    /// Start with the demo conversation instead of an empty room.
    pub seed_history: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            assistant_reply_delay_ms: 1_000,
            seed_history: true,
        }
    }
}
