//! Contact data model.

use serde::{Deserialize, Serialize};

/// Whether a chat is with one person or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Individual,
    Group,
}

impl std::fmt::Display for ContactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::Group => write!(f, "group"),
        }
    }
}

/// Per-contact override of the global warning policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    /// No override; global settings decide.
    #[default]
    Unset,
    /// Always confirm before sending.
    Guarded,
    /// Never confirm before sending.
    Unguarded,
}

impl GuardState {
    /// The forced decision, if the guard is set.
    pub fn as_override(&self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Guarded => Some(true),
            Self::Unguarded => Some(false),
        }
    }

    /// Next state when the user taps the guard toggle.
    ///
    /// There is no way back to `Unset` from the toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Unset | Self::Unguarded => Self::Guarded,
            Self::Guarded => Self::Unguarded,
        }
    }
}

impl From<Option<bool>> for GuardState {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Unset,
            Some(true) => Self::Guarded,
            Some(false) => Self::Unguarded,
        }
    }
}

/// A chat partner in the contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub kind: ContactKind,
    /// No message has been exchanged with this contact yet.
    pub is_new: bool,
    #[serde(default)]
    pub guard: GuardState,
    /// Preview line shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
}

impl Contact {
    /// Create an individual contact with no guard override.
    pub fn individual(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, ContactKind::Individual)
    }

    /// Create a group contact with no guard override.
    pub fn group(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, ContactKind::Group)
    }

    fn new(id: impl Into<String>, name: impl Into<String>, kind: ContactKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            is_new: false,
            guard: GuardState::Unset,
            last_message: None,
        }
    }

    /// Mark the contact as new.
    pub fn new_contact(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Set the guard override.
    pub fn with_guard(mut self, guard: GuardState) -> Self {
        self.guard = guard;
        self
    }

    /// Set the last-message preview.
    pub fn with_last_message(mut self, preview: impl Into<String>) -> Self {
        self.last_message = Some(preview.into());
        self
    }

    pub fn is_group(&self) -> bool {
        self.kind == ContactKind::Group
    }

    /// Avatar initial, uppercased.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().and_then(|c| c.to_uppercase().next())
    }
}

/// The contact list the demo starts with.
pub fn demo_contacts() -> Vec<Contact> {
    vec![
        Contact::group("1", "Office Team")
            .with_last_message("Meeting at 3 PM")
            .with_guard(GuardState::Guarded),
        Contact::group("2", "Office Friends").with_last_message("Let's grab lunch"),
        Contact::individual("3", "Mom")
            .with_last_message("Love you!")
            .with_guard(GuardState::Unguarded),
        Contact::individual("4", "New Client").new_contact(),
        Contact::group("5", "Project Team A"),
        Contact::individual("6", "Dad").with_last_message("On my way"),
    ]
}
