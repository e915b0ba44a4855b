//! Circles - group communities with their own post stream.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AuthorRef, CircleId, CirclePostId, UserId};

/// Display name used for anonymous circle posts.
pub const ANONYMOUS_SOUL: &str = "Anonymous Soul";

/// A post inside a circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePost {
    pub id: CirclePostId,
    pub author: AuthorRef,
    pub author_name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
}

/// A group community.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub id: CircleId,
    pub name: String,
    pub description: String,
    pub creator_id: UserId,
    pub members: Vec<UserId>,
    pub is_private: bool,
    /// Newest first.
    pub posts: Vec<CirclePost>,
}
