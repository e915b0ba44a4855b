//! Whispers - direct messages between the current user and a contact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{UserId, WhisperId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhisperKind {
    #[default]
    Text,
    Image,
    Audio,
    Video,
}

impl WhisperKind {
    /// Media whispers carry their payload in `media_url`.
    pub fn is_media(&self) -> bool {
        !matches!(self, WhisperKind::Text)
    }
}

/// A single direct message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Whisper {
    pub id: WhisperId,
    pub sender_id: UserId,
    pub kind: WhisperKind,
    pub content: String,
    pub media_url: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

impl Whisper {
    /// Short text for thread listings.
    pub fn preview(&self) -> String {
        match self.kind {
            WhisperKind::Text => self.content.clone(),
            WhisperKind::Image if !self.content.is_empty() => self.content.clone(),
            WhisperKind::Image => "Sent an image".to_string(),
            WhisperKind::Audio => "Sent a voice whisper".to_string(),
            WhisperKind::Video => "Sent a video".to_string(),
        }
    }
}

/// Input for sending a whisper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhisperDraft {
    pub kind: WhisperKind,
    pub content: String,
    pub media_url: Option<String>,
}

impl WhisperDraft {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: WhisperKind::Text,
            content: content.into(),
            media_url: None,
        }
    }

    pub fn media(kind: WhisperKind, media_url: impl Into<String>) -> Self {
        Self {
            kind,
            content: String::new(),
            media_url: Some(media_url.into()),
        }
    }
}

/// One row of the whisper inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub contact_id: UserId,
    pub contact_name: String,
    pub last_preview: Option<String>,
    pub last_activity: Option<DateTime<Utc>>,
    pub unread: usize,
}
