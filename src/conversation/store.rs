//! Conversation store: in-memory contacts, history and the single pending message.

use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::events::StoreEvent;
use super::message::{Message, MessageDraft};
use super::pending::{IgnoreReason, PendingMessage, SendOutcome};
use crate::config::GuardSettings;
use crate::contacts::{Contact, GuardState, demo_contacts};
use crate::error::ConversationError;
use crate::policy;

/// Default broadcast channel capacity.
const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Session state for one chat window. Mutated only by the UI thread.
pub struct ConversationStore {
    contacts: Vec<Contact>,
    settings: GuardSettings,
    selected: Option<String>,
    history: Vec<Message>,
    pending: Option<PendingMessage>,
    tx: broadcast::Sender<StoreEvent>,
}

impl ConversationStore {
    /// Create a store over the given contacts.
    pub fn new(contacts: Vec<Contact>, settings: GuardSettings) -> Self {
        let (tx, _rx) = broadcast::channel(DEFAULT_EVENT_CAPACITY);
        Self {
            contacts,
            settings,
            selected: None,
            history: Vec::new(),
            pending: None,
            tx,
        }
    }

    /// Create a store seeded with the demo contact list.
    pub fn with_demo_contacts(settings: GuardSettings) -> Self {
        Self::new(demo_contacts(), settings)
    }

    /// Demo store with settings read from `CHAT_GUARD_*` variables.
    pub fn from_env() -> crate::error::Result<Self> {
        let settings = GuardSettings::from_env()?;
        info!(mode = %settings.warning_mode, "Loaded warning settings from environment");
        Ok(Self::with_demo_contacts(settings))
    }

    /// Subscribe to store events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact(&self, contact_id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == contact_id)
    }

    pub fn settings(&self) -> &GuardSettings {
        &self.settings
    }

    /// Edit the global settings in place and notify subscribers.
    pub fn update_settings<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut GuardSettings),
    {
        edit(&mut self.settings);
        info!(
            enabled = self.settings.warnings_enabled,
            mode = %self.settings.warning_mode,
            "Warning settings updated"
        );
        self.emit(StoreEvent::SettingsChanged {
            settings: self.settings.clone(),
        });
    }

    /// The contact whose thread is open, if any.
    pub fn selected(&self) -> Option<&Contact> {
        self.selected.as_deref().and_then(|id| self.contact(id))
    }

    /// Open a contact's thread.
    pub fn select(&mut self, contact_id: &str) -> Result<&Contact, ConversationError> {
        let idx = self.index_of(contact_id)?;
        self.selected = Some(contact_id.to_string());
        debug!(contact_id = contact_id, "Contact selected");
        Ok(&self.contacts[idx])
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Every committed message, oldest first.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Committed messages for one contact, oldest first.
    pub fn thread<'a>(&'a self, contact_id: &'a str) -> impl Iterator<Item = &'a Message> + 'a {
        self.history.iter().filter(move |m| m.contact_id == contact_id)
    }

    /// The message awaiting confirmation, if any.
    pub fn pending(&self) -> Option<&PendingMessage> {
        self.pending.as_ref()
    }

    /// Send a draft to the selected contact.
    pub fn send(&mut self, draft: MessageDraft) -> SendOutcome {
        let Some(contact_id) = self.selected.clone() else {
            debug!("Send ignored: no contact selected");
            return SendOutcome::Ignored(IgnoreReason::NoContactSelected);
        };
        match self.send_to(&contact_id, draft) {
            Ok(outcome) => outcome,
            // The selection always names a known contact.
            Err(_) => SendOutcome::Ignored(IgnoreReason::NoContactSelected),
        }
    }

    /// Send a draft to a specific contact.
    ///
    /// Commits immediately unless the policy asks for confirmation, in which
    /// case the message is staged and `AwaitingConfirmation` is broadcast.
    pub fn send_to(
        &mut self,
        contact_id: &str,
        draft: MessageDraft,
    ) -> Result<SendOutcome, ConversationError> {
        let idx = self.index_of(contact_id)?;

        if draft.is_empty() {
            debug!(contact_id = contact_id, "Send ignored: empty message");
            return Ok(SendOutcome::Ignored(IgnoreReason::EmptyMessage));
        }

        if let Some(ref pending) = self.pending {
            warn!(
                contact_id = contact_id,
                request_id = %pending.request_id,
                "Send ignored: a message is already awaiting confirmation"
            );
            return Ok(SendOutcome::Ignored(IgnoreReason::AlreadyPending));
        }

        let contact = &self.contacts[idx];
        let decision = policy::evaluate(contact, &self.settings, &draft);

        if decision.warn {
            let pending = PendingMessage::new(
                contact_id,
                draft,
                decision.reason,
                policy::notices_for(contact),
            );
            info!(
                contact_id = contact_id,
                request_id = %pending.request_id,
                reason = ?decision.reason,
                "Message staged for confirmation"
            );
            self.pending = Some(pending.clone());
            self.emit(StoreEvent::AwaitingConfirmation {
                pending: pending.clone(),
            });
            return Ok(SendOutcome::AwaitingConfirmation(pending));
        }

        let message = self.commit(Message::outgoing(contact_id, draft));
        Ok(SendOutcome::Sent(message))
    }

    /// Commit the staged message. No-op when nothing is pending.
    pub fn confirm(&mut self) -> Option<Message> {
        let pending = self.pending.take()?;
        let request_id = pending.request_id;
        info!(request_id = %request_id, contact_id = %pending.contact_id, "Pending message confirmed");

        let message = self.commit(pending.into_message());
        self.emit(StoreEvent::PendingCleared {
            request_id,
            confirmed: true,
        });
        Some(message)
    }

    /// Commit the staged message only if it is the one the dialog was opened for.
    pub fn confirm_request(&mut self, request_id: Uuid) -> Result<Message, ConversationError> {
        let expected = self
            .pending
            .as_ref()
            .map(|p| p.request_id)
            .ok_or(ConversationError::NothingPending)?;

        if expected != request_id {
            warn!(expected = %expected, got = %request_id, "Confirmation for a stale request");
            return Err(ConversationError::RequestMismatch {
                expected,
                got: request_id,
            });
        }

        self.confirm().ok_or(ConversationError::NothingPending)
    }

    /// Discard the staged message. No-op when nothing is pending.
    pub fn cancel(&mut self) -> Option<PendingMessage> {
        let pending = self.pending.take()?;
        info!(request_id = %pending.request_id, contact_id = %pending.contact_id, "Pending message cancelled");
        self.emit(StoreEvent::PendingCleared {
            request_id: pending.request_id,
            confirmed: false,
        });
        Some(pending)
    }

    /// Cycle a contact's guard: unset → guarded → unguarded → guarded.
    pub fn toggle_guard(&mut self, contact_id: &str) -> Result<GuardState, ConversationError> {
        let idx = self.index_of(contact_id)?;
        let contact = &mut self.contacts[idx];
        let previous = contact.guard;
        contact.guard = previous.toggled();
        let guard = contact.guard;

        info!(contact_id = contact_id, from = ?previous, to = ?guard, "Contact guard toggled");
        self.emit(StoreEvent::GuardChanged {
            contact_id: contact_id.to_string(),
            guard,
        });
        Ok(guard)
    }

    /// Record a message from the other side of a chat.
    pub fn receive(
        &mut self,
        contact_id: &str,
        draft: MessageDraft,
    ) -> Result<Message, ConversationError> {
        self.index_of(contact_id)?;
        if draft.is_empty() {
            debug!(contact_id = contact_id, "Incoming message dropped: empty");
            return Err(ConversationError::EmptyMessage {
                contact_id: contact_id.to_string(),
            });
        }
        Ok(self.commit(Message::incoming(contact_id, draft)))
    }

    fn commit(&mut self, message: Message) -> Message {
        debug!(
            message_id = %message.id,
            contact_id = %message.contact_id,
            sender = ?message.sender,
            "Message committed"
        );
        self.history.push(message.clone());
        self.emit(StoreEvent::MessageCommitted {
            message: message.clone(),
        });
        message
    }

    fn index_of(&self, contact_id: &str) -> Result<usize, ConversationError> {
        self.contacts
            .iter()
            .position(|c| c.id == contact_id)
            .ok_or_else(|| ConversationError::ContactNotFound {
                id: contact_id.to_string(),
            })
    }

    fn emit(&self, event: StoreEvent) {
        // Ok if no UI shell is listening
        let _ = self.tx.send(event);
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::with_demo_contacts(GuardSettings::default())
    }
}
