//! Warning-policy evaluator.
//!
//! Decides whether an outgoing message needs confirmation. Precedence,
//! first match wins:
//! - contact guard set → that value, settings ignored
//! - warnings disabled → no warning
//! - warning mode: `always`, `smart`, `custom`, `never`

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GuardSettings;
use crate::contacts::Contact;
use crate::conversation::MessageDraft;
use crate::policy::WarningMode;

/// Which rule produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningReason {
    /// Contact guard forces a warning.
    ContactGuarded,
    /// Contact guard suppresses warnings.
    ContactUnguarded,
    /// Master switch is off.
    WarningsDisabled,
    ModeNever,
    ModeAlways,
    /// Smart or custom mode matched a new contact.
    NewContact,
    /// Smart or custom mode matched a group chat.
    GroupAudience,
    /// Smart or custom mode found nothing to warn about.
    NoConditionMatched,
}

/// Outcome of evaluating the policy for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningDecision {
    pub warn: bool,
    pub reason: WarningReason,
}

impl WarningDecision {
    fn warn(reason: WarningReason) -> Self {
        Self { warn: true, reason }
    }

    fn allow(reason: WarningReason) -> Self {
        Self {
            warn: false,
            reason,
        }
    }
}

/// Evaluate the policy and report which rule decided.
///
/// The message is not consulted yet.
pub fn evaluate(
    contact: &Contact,
    settings: &GuardSettings,
    _message: &MessageDraft,
) -> WarningDecision {
    let decision = decide(contact, settings);
    debug!(
        contact_id = %contact.id,
        mode = %settings.warning_mode,
        warn = decision.warn,
        reason = ?decision.reason,
        "Warning policy evaluated"
    );
    decision
}

/// Whether the message must be confirmed before it is committed.
pub fn should_warn(contact: &Contact, settings: &GuardSettings, message: &MessageDraft) -> bool {
    evaluate(contact, settings, message).warn
}

fn decide(contact: &Contact, settings: &GuardSettings) -> WarningDecision {
    if let Some(forced) = contact.guard.as_override() {
        return if forced {
            WarningDecision::warn(WarningReason::ContactGuarded)
        } else {
            WarningDecision::allow(WarningReason::ContactUnguarded)
        };
    }

    if !settings.warnings_enabled {
        return WarningDecision::allow(WarningReason::WarningsDisabled);
    }

    match settings.warning_mode {
        WarningMode::Always => WarningDecision::warn(WarningReason::ModeAlways),
        WarningMode::Smart => match_conditions(contact, true, true),
        WarningMode::Custom => match_conditions(
            contact,
            settings.new_contact_warning,
            settings.group_warning,
        ),
        WarningMode::Never => WarningDecision::allow(WarningReason::ModeNever),
    }
}

fn match_conditions(contact: &Contact, on_new: bool, on_group: bool) -> WarningDecision {
    if on_new && contact.is_new {
        WarningDecision::warn(WarningReason::NewContact)
    } else if on_group && contact.is_group() {
        WarningDecision::warn(WarningReason::GroupAudience)
    } else {
        WarningDecision::allow(WarningReason::NoConditionMatched)
    }
}
