//! Feed posts and their authors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CommentId, PostId, UserId};

/// Avatar shown for anonymous authors.
pub const ANONYMOUS_AVATAR: &str = "https://www.gravatar.com/avatar/0?d=mp&f=y";

/// What a post primarily shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Image,
    Video,
    #[default]
    Text,
    Mixed,
}

/// Who wrote a piece of content.
///
/// Only `Known` authors have a profile to navigate to or a thread to whisper into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorRef {
    /// A registered user.
    Known(UserId),
    /// Posted anonymously; the real author is not recorded.
    Anonymous,
    /// Content sourced from outside Lumina, tagged with its origin.
    External(String),
}

impl AuthorRef {
    /// The user behind this reference, if it is a known user.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            AuthorRef::Known(id) => Some(id),
            AuthorRef::Anonymous | AuthorRef::External(_) => None,
        }
    }

    /// Whether the author can be clicked through to a profile or whispered to.
    pub fn is_interactive(&self) -> bool {
        matches!(self, AuthorRef::Known(_))
    }

    /// Whether this reference points at the given user.
    pub fn is_user(&self, id: &UserId) -> bool {
        self.user_id() == Some(id)
    }
}

/// A comment left under a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: AuthorRef,
    pub author_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// A unit of user-generated content shown in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub kind: PostKind,
    /// Body text for text posts, caption otherwise.
    pub content: String,
    pub media_url: Option<String>,
    pub author: AuthorRef,
    pub author_name: String,
    pub author_avatar: String,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    /// Whether the current user has liked this post.
    pub liked: bool,
    pub comments: Vec<Comment>,
    pub tags: Vec<String>,
    /// Media width / height. Often unknown until the image loads.
    pub aspect_ratio: Option<f64>,
}

/// Input for creating a feed post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub content: String,
    pub media_url: Option<String>,
    pub anonymous: bool,
    pub tags: Vec<String>,
    pub aspect_ratio: Option<f64>,
}

impl PostDraft {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn image(media_url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            content: caption.into(),
            media_url: Some(media_url.into()),
            ..Self::default()
        }
    }

    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    pub fn aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// The kind a post built from this draft gets.
    pub fn kind(&self) -> PostKind {
        match self.media_url.as_deref() {
            Some(url) if !url.trim().is_empty() => PostKind::Image,
            _ => PostKind::Text,
        }
    }
}
