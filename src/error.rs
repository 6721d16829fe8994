//! Error types for chat-guard.

use uuid::Uuid;

/// Top-level error type for the crate.
///
/// Returned by entry points that span areas, such as
/// `ConversationStore::from_env`. Single-area operations return their own enum.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Conversation error: {0}")]
    Conversation(#[from] ConversationError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Conversation store errors.
///
/// Sending with nothing selected or an empty draft is reported through
/// `SendOutcome`, not here. Recording an empty incoming message is an error.
#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    #[error("Contact not found: {id}")]
    ContactNotFound { id: String },

    #[error("Pending request mismatch: expected {expected}, got {got}")]
    RequestMismatch { expected: Uuid, got: Uuid },

    #[error("No message is awaiting confirmation")]
    NothingPending,

    #[error("Message from {contact_id} is empty")]
    EmptyMessage { contact_id: String },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
