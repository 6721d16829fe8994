//! Notices shown in the confirmation dialog.

use serde::{Deserialize, Serialize};

use crate::contacts::Contact;

/// One explanatory line in the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningNotice {
    /// First message to this contact.
    FirstMessage,
    /// The message reaches several people.
    MultipleRecipients,
}

impl WarningNotice {
    /// Text the dialog displays for this notice.
    pub fn text(&self) -> &'static str {
        match self {
            Self::FirstMessage => "This is your first message to this contact.",
            Self::MultipleRecipients => "This message will be sent to multiple people.",
        }
    }
}

impl std::fmt::Display for WarningNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Notices for a contact, independent of why the dialog opened.
pub fn notices_for(contact: &Contact) -> Vec<WarningNotice> {
    let mut notices = Vec::new();
    if contact.is_new {
        notices.push(WarningNotice::FirstMessage);
    }
    if contact.is_group() {
        notices.push(WarningNotice::MultipleRecipients);
    }
    notices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_group_gets_both_in_order() {
        let contact = Contact::group("g", "Fresh Group").new_contact();
        assert_eq!(
            notices_for(&contact),
            vec![WarningNotice::FirstMessage, WarningNotice::MultipleRecipients]
        );
    }

    #[test]
    fn known_individual_gets_none() {
        assert!(notices_for(&Contact::individual("6", "Dad")).is_empty());
    }

    #[test]
    fn display_uses_dialog_text() {
        assert_eq!(
            WarningNotice::MultipleRecipients.to_string(),
            "This message will be sent to multiple people."
        );
    }
}
