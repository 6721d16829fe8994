//! Conversation state: messages, the pending confirmation, and the store.

pub mod events;
pub mod message;
pub mod pending;
pub mod store;

pub use events::StoreEvent;
pub use message::{Attachment, AttachmentKind, Message, MessageDraft, Sender};
pub use pending::{IgnoreReason, PendingMessage, SendOutcome};
pub use store::ConversationStore;
