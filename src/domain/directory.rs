//! Fixed directory: the team roster plus the single assistant identity.
//!
//! The directory is a read-only lookup. There is no resolution against any
//! external service.

/// Display name of the assistant identity.
pub const ASSISTANT_NAME: &str = "ChatGPT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub role: String,
}

/// A directory entry usable as a mention target: either a human team member
/// or the assistant. Both expose a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEntry {
    Human(TeamMember),
    Assistant,
}

impl DirectoryEntry {
    pub fn name(&self) -> &str {
        match self {
            DirectoryEntry::Human(member) => &member.name,
            DirectoryEntry::Assistant => ASSISTANT_NAME,
        }
    }
}

/// Returns the fixed team roster. The first member is the local user.
pub fn team_roster() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "alex".to_owned(),
            name: "Alex Chen".to_owned(),
            avatar: Some(
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300"
                    .to_owned(),
            ),
            role: "Product Manager".to_owned(),
        },
        TeamMember {
            id: "sarah".to_owned(),
            name: "Sarah Miller".to_owned(),
            avatar: Some(
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=300&h=300"
                    .to_owned(),
            ),
            role: "UX Designer".to_owned(),
        },
        TeamMember {
            id: "james".to_owned(),
            name: "James Wilson".to_owned(),
            avatar: Some(
                "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=300&h=300"
                    .to_owned(),
            ),
            role: "Developer".to_owned(),
        },
        TeamMember {
            id: "michael".to_owned(),
            name: "Michael Thompson".to_owned(),
            avatar: None,
            role: "Project Coordinator".to_owned(),
        },
    ]
}

/// The local user is the roster head.
pub fn current_user() -> TeamMember {
    team_roster().remove(0)
}

/// All mention targets: team members first, the assistant last.
pub fn directory_entries() -> Vec<DirectoryEntry> {
    let mut entries: Vec<DirectoryEntry> =
        team_roster().into_iter().map(DirectoryEntry::Human).collect();
    entries.push(DirectoryEntry::Assistant);
    entries
}

/// Mention suggestions for a search query: case-insensitive substring match
/// on the display name, preserving directory order.
pub fn suggestions(query: &str) -> Vec<DirectoryEntry> {
    let needle = query.to_lowercase();
    directory_entries()
        .into_iter()
        .filter(|entry| entry.name().to_lowercase().contains(&needle))
        .collect()
}

/// Resolves a mention token by name prefix match, e.g. `Sarah` resolves to
/// "Sarah Miller". Returns the full display name.
pub fn resolve_prefix(token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }
    directory_entries()
        .into_iter()
        .find(|entry| entry.name().starts_with(token))
        .map(|entry| entry.name().to_owned())
}
