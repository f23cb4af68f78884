#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    /// A scheduled assistant auto-reply came due.
    AssistantReply(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// Single character for printable keys, or a lowercase name such as
    /// "enter", "esc", "backspace", "delete", "left", "right", "up", "down",
    /// "home", "end", "tab".
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// The typed character, when this is a plain printable key.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !self.ctrl => Some(ch),
            _ => None,
        }
    }
}
