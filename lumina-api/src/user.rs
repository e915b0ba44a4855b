//! User profiles and their visibility settings.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// A Lumina user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub age: Option<u32>,
    pub mbti: Option<String>,
    pub interests: Vec<String>,
    pub bio: Option<String>,
    pub following: Vec<UserId>,
    pub followers: Vec<UserId>,
    pub is_private: bool,
    pub show_age: bool,
    pub show_mbti: bool,
    pub show_interests: bool,
}

impl User {
    /// Whether this user follows `other`.
    pub fn follows(&self, other: &UserId) -> bool {
        self.following.contains(other)
    }

    /// The profile details this user has chosen to show.
    pub fn visible_details(&self) -> VisibleDetails {
        VisibleDetails {
            age: self.age.filter(|_| self.show_age),
            mbti: self.mbti.clone().filter(|_| self.show_mbti),
            interests: if self.show_interests {
                self.interests.clone()
            } else {
                Vec::new()
            },
        }
    }

    /// True when every visibility flag is off, whatever the fields hold.
    pub fn hides_all_details(&self) -> bool {
        !(self.show_age || self.show_mbti || self.show_interests)
    }

    /// Case-insensitive substring match on display name or username.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.username.to_lowercase().contains(&needle)
    }
}

/// Profile fields filtered through the owner's visibility flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibleDetails {
    pub age: Option<u32>,
    pub mbti: Option<String>,
    pub interests: Vec<String>,
}

/// Edits to the current user's profile. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileEdit {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub interests: Option<Vec<String>>,
    pub show_age: Option<bool>,
    pub show_mbti: Option<bool>,
    pub show_interests: Option<bool>,
}

impl ProfileEdit {
    /// Apply the edit in place.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(bio) = &self.bio {
            user.bio = Some(bio.clone()).filter(|b| !b.trim().is_empty());
        }
        if let Some(interests) = &self.interests {
            user.interests = interests.clone();
        }
        if let Some(show) = self.show_age {
            user.show_age = show;
        }
        if let Some(show) = self.show_mbti {
            user.show_mbti = show;
        }
        if let Some(show) = self.show_interests {
            user.show_interests = show;
        }
    }
}
