//! Events the store broadcasts to the UI shell.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::Message;
use super::pending::PendingMessage;
use crate::config::GuardSettings;
use crate::contacts::GuardState;

/// Store state changes, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A message was staged; show the confirmation dialog.
    AwaitingConfirmation { pending: PendingMessage },
    /// A message was appended to history.
    MessageCommitted { message: Message },
    /// The pending message is gone, either sent or discarded.
    PendingCleared { request_id: Uuid, confirmed: bool },
    /// A contact's guard override changed.
    GuardChanged { contact_id: String, guard: GuardState },
    /// Global settings were edited.
    SettingsChanged { settings: GuardSettings },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = StoreEvent::GuardChanged {
            contact_id: "3".into(),
            guard: GuardState::Guarded,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "guard_changed");
        assert_eq!(json["contact_id"], "3");
        assert_eq!(json["guard"], "guarded");
    }

    #[test]
    fn pending_cleared_roundtrip() {
        let event = StoreEvent::PendingCleared {
            request_id: Uuid::new_v4(),
            confirmed: false,
        };
        let json = serde_json::to_string(&event).unwrap();
        let parsed: StoreEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
