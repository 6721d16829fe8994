//! Chat Guard: confirm-before-send policy for a messaging client.

pub mod config;
pub mod contacts;
pub mod conversation;
pub mod error;
pub mod policy;
