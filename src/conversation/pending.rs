//! Pending messages and send outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::{Message, MessageDraft};
use crate::policy::{WarningNotice, WarningReason};

/// A message staged until the user confirms or cancels it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMessage {
    /// Identifies this confirmation request.
    pub request_id: Uuid,
    pub contact_id: String,
    pub draft: MessageDraft,
    /// Rule that required the confirmation.
    pub reason: WarningReason,
    /// Lines for the confirmation dialog.
    pub notices: Vec<WarningNotice>,
    pub staged_at: DateTime<Utc>,
}

impl PendingMessage {
    pub fn new(
        contact_id: impl Into<String>,
        draft: MessageDraft,
        reason: WarningReason,
        notices: Vec<WarningNotice>,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            contact_id: contact_id.into(),
            draft,
            reason,
            notices,
            staged_at: Utc::now(),
        }
    }

    /// Turn the staged draft into a history entry stamped now.
    pub fn into_message(self) -> Message {
        Message::outgoing(self.contact_id, self.draft)
    }
}

/// Why a send did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    NoContactSelected,
    EmptyMessage,
    /// Another message is still awaiting confirmation.
    AlreadyPending,
}

/// Result of pressing send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Committed to history immediately.
    Sent(Message),
    /// Staged; the UI shell should show the confirmation dialog.
    AwaitingConfirmation(PendingMessage),
    /// Nothing happened.
    Ignored(IgnoreReason),
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }

    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Self::AwaitingConfirmation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Sender;

    #[test]
    fn into_message_keeps_target_and_text() {
        let pending = PendingMessage::new(
            "2",
            MessageDraft::text("lunch?"),
            WarningReason::GroupAudience,
            vec![WarningNotice::MultipleRecipients],
        );
        let staged_at = pending.staged_at;
        let msg = pending.into_message();
        assert_eq!(msg.contact_id, "2");
        assert_eq!(msg.text, "lunch?");
        assert_eq!(msg.sender, Sender::Me);
        assert!(msg.timestamp >= staged_at);
    }

    #[test]
    fn request_ids_are_unique() {
        let a = PendingMessage::new("1", MessageDraft::text("a"), WarningReason::ModeAlways, vec![]);
        let b = PendingMessage::new("1", MessageDraft::text("a"), WarningReason::ModeAlways, vec![]);
        assert_ne!(a.request_id, b.request_id);
    }

    #[test]
    fn outcome_predicates() {
        assert!(!SendOutcome::Ignored(IgnoreReason::EmptyMessage).is_sent());
        let pending = PendingMessage::new("1", MessageDraft::text("a"), WarningReason::ModeAlways, vec![]);
        assert!(SendOutcome::AwaitingConfirmation(pending).needs_confirmation());
    }
}
