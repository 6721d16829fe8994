//! Contacts and their guard overrides.

pub mod model;

pub use model::{Contact, ContactKind, GuardState, demo_contacts};
