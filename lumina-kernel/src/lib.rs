//! Lumina Kernel - The social feed core.
//!
//! This crate contains:
//! - Masonry layout engine (greedy shortest-column placement)
//! - Viewport breakpoints
//! - Snapshot-based state controller
//! - Commands (posts, likes, comments, whispers, circles, profiles)
//! - Seed data

pub mod feed;
pub mod masonry;
pub mod seed;
pub mod viewport;

mod commands;
mod error;
mod state;

pub use error::{LayoutError, LuminaError};
pub use feed::{FeedLayout, FeedView};
pub use masonry::{MasonryItem, MasonryLayout, estimated_height, layout};
pub use state::{ProfileView, Snapshot};
pub use viewport::columns_for_width;

use std::sync::Arc;

use chrono::Utc;
use lumina_api::{Circle, CircleId, LuminaEvent, ThreadSummary, User, UserId, Whisper};
use tokio::sync::broadcast;

/// The store controller - owns the committed snapshot and executes commands.
pub struct Lumina {
    snapshot: Arc<Snapshot>,
    event_tx: broadcast::Sender<LuminaEvent>,
    feed: FeedView,
}

impl Lumina {
    /// Create a controller over an initial snapshot, with an event channel.
    pub fn new(snapshot: Snapshot) -> (Self, broadcast::Receiver<LuminaEvent>) {
        let (event_tx, event_rx) = broadcast::channel(256);
        let lumina = Self {
            snapshot: Arc::new(snapshot),
            event_tx,
            feed: FeedView::new(),
        };
        (lumina, event_rx)
    }

    /// Create a controller over the seed community.
    pub fn seeded() -> (Self, broadcast::Receiver<LuminaEvent>) {
        Self::new(seed::snapshot(Utc::now()))
    }

    /// The committed snapshot. Later commands never change it.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn generation(&self) -> u64 {
        self.snapshot.generation
    }

    /// Subscribe to store events.
    pub fn subscribe(&self) -> broadcast::Receiver<LuminaEvent> {
        self.event_tx.subscribe()
    }

    /// Emit a store event.
    pub fn emit(&self, event: LuminaEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Swap in a new snapshot, bumping its generation.
    fn commit(&mut self, mut next: Snapshot) -> u64 {
        next.generation = self.snapshot.generation + 1;
        let generation = next.generation;
        self.snapshot = Arc::new(next);
        generation
    }

    /// A mutable copy of the committed snapshot to build the next one from.
    fn draft(&self) -> Snapshot {
        Snapshot::clone(&self.snapshot)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.snapshot.current_user()
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.snapshot.user(id)
    }

    /// Profile page data for `id`, as seen by the current user.
    pub fn profile(&self, id: &UserId) -> Result<ProfileView, LuminaError> {
        self.snapshot
            .profile(id)
            .ok_or_else(|| LuminaError::UserNotFound(id.clone()))
    }

    /// Users matching `query` by name or username.
    pub fn search_souls(&self, query: &str) -> Vec<&User> {
        self.snapshot.search_souls(query)
    }

    pub fn circles(&self) -> &[Circle] {
        &self.snapshot.circles
    }

    pub fn circle(&self, id: &CircleId) -> Result<&Circle, LuminaError> {
        self.snapshot
            .circle(id)
            .ok_or_else(|| LuminaError::CircleNotFound(id.clone()))
    }

    /// Whisper inbox, most recent activity first.
    pub fn whisper_threads(&self) -> Vec<ThreadSummary> {
        self.snapshot.thread_summaries()
    }

    /// Whispers exchanged with `contact`, oldest first.
    pub fn thread(&self, contact: &UserId) -> &[Whisper] {
        self.snapshot.thread(contact)
    }

    pub fn unread_count(&self) -> usize {
        self.snapshot.unread_count()
    }

    /// The feed laid out for a viewport of `width` pixels.
    pub fn feed(&mut self, width: u32) -> Result<&FeedLayout, LuminaError> {
        self.feed_with_columns(columns_for_width(width))
    }

    /// The feed laid out over an explicit number of columns.
    pub fn feed_with_columns(&mut self, column_count: usize) -> Result<&FeedLayout, LuminaError> {
        Ok(self.feed.layout(&self.snapshot, column_count)?)
    }

    /// Number of times the feed layout has been rebuilt.
    pub fn feed_rebuilds(&self) -> u64 {
        self.feed.rebuilds()
    }
}
