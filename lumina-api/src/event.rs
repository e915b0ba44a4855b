//! Identifiers and the events the store emits to subscribers (renderers, logs, etc.)

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Unique identifier for a feed post.
    PostId
);
string_id!(
    /// Unique identifier for a user.
    UserId
);
string_id!(
    /// Unique identifier for a circle.
    CircleId
);
string_id!(
    /// Unique identifier for a post inside a circle.
    CirclePostId
);
string_id!(
    /// Unique identifier for a whisper.
    WhisperId
);
string_id!(
    /// Unique identifier for a comment.
    CommentId
);

/// Events emitted by the store after a command commits a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LuminaEvent {
    /// A post was added to the top of the feed.
    PostCreated { post_id: PostId, generation: u64 },

    /// The current user liked or unliked a post.
    PostLiked {
        post_id: PostId,
        liked: bool,
        likes: u32,
    },

    /// A comment was appended to a post.
    CommentAdded {
        post_id: PostId,
        comment_id: CommentId,
    },

    /// A whisper was appended to a thread.
    WhisperSent {
        contact_id: UserId,
        whisper_id: WhisperId,
    },

    /// Incoming whispers of a thread were marked read.
    ThreadRead { contact_id: UserId, marked: usize },

    /// A post was published to a circle.
    CirclePostPublished {
        circle_id: CircleId,
        post_id: CirclePostId,
    },

    /// The current user's profile changed.
    ProfileUpdated { user_id: UserId },

    /// The current user started or stopped following someone.
    FollowChanged { user_id: UserId, following: bool },
}
