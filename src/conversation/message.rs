//! Message data model: drafts from the composer and committed history entries.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The local user.
    Me,
    /// The other side of the chat.
    Them,
}

/// How an attachment is rendered in a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Image,
    Video,
    Document,
}

impl AttachmentKind {
    /// Classify a MIME type. Anything that is not an image or video is a document.
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("video/") {
            Self::Video
        } else {
            Self::Document
        }
    }
}

/// A file picked in the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    /// Handle the UI shell uses to display the file (object URL, path, ...).
    pub url: String,
    pub kind: AttachmentKind,
}

impl Attachment {
    /// Build an attachment, classifying it by MIME type.
    pub fn new(file_name: impl Into<String>, url: impl Into<String>, mime: &str) -> Self {
        Self {
            file_name: file_name.into(),
            url: url.into(),
            kind: AttachmentKind::from_mime(mime),
        }
    }
}

/// What the composer hands over when the user presses send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl MessageDraft {
    /// A text-only draft.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachment: None,
        }
    }

    /// Attach a file to the draft.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Whitespace-only text with no attachment counts as empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.attachment.is_none()
    }
}

/// A message in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    /// The contact whose thread this message belongs to.
    pub contact_id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl Message {
    /// An outgoing message stamped with the current time.
    pub fn outgoing(contact_id: impl Into<String>, draft: MessageDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            contact_id: contact_id.into(),
            text: draft.text,
            sender: Sender::Me,
            timestamp: Utc::now(),
            attachment: draft.attachment,
        }
    }

    /// An incoming message stamped with the current time.
    pub fn incoming(contact_id: impl Into<String>, draft: MessageDraft) -> Self {
        Self {
            sender: Sender::Them,
            ..Self::outgoing(contact_id, draft)
        }
    }

    /// Bubble footer time in the viewer's local zone, e.g. `14:05`.
    pub fn time_label(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn mime_classification() {
        assert_eq!(AttachmentKind::from_mime("image/png"), AttachmentKind::Image);
        assert_eq!(AttachmentKind::from_mime("VIDEO/mp4"), AttachmentKind::Video);
        assert_eq!(
            AttachmentKind::from_mime("application/pdf"),
            AttachmentKind::Document
        );
        assert_eq!(AttachmentKind::from_mime(""), AttachmentKind::Document);
    }

    #[test]
    fn empty_draft_detection() {
        assert!(MessageDraft::default().is_empty());
        assert!(MessageDraft::text("   \n").is_empty());
        assert!(!MessageDraft::text("hi").is_empty());

        let file_only = MessageDraft::text("")
            .with_attachment(Attachment::new("a.pdf", "blob:1", "application/pdf"));
        assert!(!file_only.is_empty());
    }

    #[test]
    fn outgoing_keeps_draft_content() {
        let draft = MessageDraft::text("see attached")
            .with_attachment(Attachment::new("cat.jpg", "blob:2", "image/jpeg"));
        let msg = Message::outgoing("4", draft);
        assert_eq!(msg.sender, Sender::Me);
        assert_eq!(msg.contact_id, "4");
        assert_eq!(msg.text, "see attached");
        assert_eq!(msg.attachment.unwrap().kind, AttachmentKind::Image);
    }

    #[test]
    fn time_label_is_hours_and_minutes() {
        let label = Message::outgoing("1", MessageDraft::text("x")).time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }

    #[test]
    fn time_label_uses_local_time() {
        let mut msg = Message::incoming("3", MessageDraft::text("Love you!"));
        msg.timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 23, 45, 0).unwrap();
        let expected = msg.timestamp.with_timezone(&Local).format("%H:%M").to_string();
        assert_eq!(msg.time_label(), expected);
    }
}
