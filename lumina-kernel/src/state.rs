//! Store state - immutable snapshots of posts, users, circles and whispers.

use indexmap::IndexMap;
use lumina_api::{
    Circle, CircleId, Post, PostId, ThreadSummary, User, UserId, VisibleDetails, Whisper,
};
use serde::Serialize;
use uuid::Uuid;

/// Generate a new unique identifier for store-created content.
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// A consistent view of all store state at one generation.
///
/// Snapshots are never mutated once committed; commands build a new one.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Incremented by every committed command.
    pub generation: u64,

    /// The signed-in user.
    pub current_user: UserId,

    pub users: Vec<User>,

    /// Feed posts, newest first.
    pub posts: Vec<Post>,

    pub circles: Vec<Circle>,

    /// Whisper threads keyed by contact, each oldest first.
    pub whispers: IndexMap<UserId, Vec<Whisper>>,
}

impl Snapshot {
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    pub(crate) fn user_mut(&mut self, id: &UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| &u.id == id)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user(&self.current_user)
    }

    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    pub(crate) fn post_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| &p.id == id)
    }

    pub fn circle(&self, id: &CircleId) -> Option<&Circle> {
        self.circles.iter().find(|c| &c.id == id)
    }

    pub(crate) fn circle_mut(&mut self, id: &CircleId) -> Option<&mut Circle> {
        self.circles.iter_mut().find(|c| &c.id == id)
    }

    /// Whispers exchanged with a contact, oldest first.
    pub fn thread(&self, contact: &UserId) -> &[Whisper] {
        self.whispers.get(contact).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Incoming whispers in a thread that have not been read.
    pub fn unread_in(&self, contact: &UserId) -> usize {
        self.thread(contact)
            .iter()
            .filter(|w| w.sender_id != self.current_user && !w.is_read)
            .count()
    }

    /// Total unread whispers across all threads.
    pub fn unread_count(&self) -> usize {
        self.whispers.keys().map(|contact| self.unread_in(contact)).sum()
    }

    /// Inbox rows, most recent activity first.
    pub fn thread_summaries(&self) -> Vec<ThreadSummary> {
        let mut summaries: Vec<ThreadSummary> = self
            .whispers
            .iter()
            .map(|(contact, thread)| {
                let last = thread.last();
                ThreadSummary {
                    contact_id: contact.clone(),
                    contact_name: self
                        .user(contact)
                        .map(|u| u.name.clone())
                        .unwrap_or_else(|| contact.to_string()),
                    last_preview: last.map(Whisper::preview),
                    last_activity: last.map(|w| w.timestamp),
                    unread: self.unread_in(contact),
                }
            })
            .collect();

        // Stable sort keeps insertion order for threads with equal activity.
        summaries.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        summaries
    }

    /// Users whose name or username contains `query`, case-insensitively.
    pub fn search_souls(&self, query: &str) -> Vec<&User> {
        let query = query.trim();
        self.users.iter().filter(|u| u.matches_query(query)).collect()
    }

    /// Posts shown on a user's profile. Anonymous posts never appear.
    pub fn posts_by(&self, user: &UserId) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.author.is_user(user)).collect()
    }

    /// Assemble what a profile page shows for `id`, as seen by the current user.
    pub fn profile(&self, id: &UserId) -> Option<ProfileView> {
        let user = self.user(id)?;
        let is_own = id == &self.current_user;

        Some(ProfileView {
            user: user.clone(),
            posts: self.posts_by(id).into_iter().cloned().collect(),
            details: user.visible_details(),
            is_own,
            follows_you: !is_own && user.follows(&self.current_user),
            following: !is_own
                && self
                    .current_user()
                    .map(|me| me.follows(id))
                    .unwrap_or(false),
        })
    }
}

/// Everything a profile page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub user: User,
    pub posts: Vec<Post>,
    pub details: VisibleDetails,
    pub is_own: bool,
    /// The profile's owner follows the current user.
    pub follows_you: bool,
    /// The current user follows the profile's owner.
    pub following: bool,
}
