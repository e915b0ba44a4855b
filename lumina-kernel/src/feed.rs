//! Feed view - holds the committed masonry layout of the current snapshot.
//!
//! The layout is keyed by (snapshot generation, column count). When either
//! changes the whole layout is rebuilt; nothing is patched incrementally.

use lumina_api::PostId;
use serde::Serialize;

use crate::error::LayoutError;
use crate::masonry;
use crate::state::Snapshot;

/// The feed split into columns of post ids, in assignment order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedLayout {
    /// Snapshot generation the layout was computed from.
    pub generation: u64,
    pub column_count: usize,
    pub columns: Vec<Vec<PostId>>,
}

impl FeedLayout {
    /// Total number of placed posts.
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owner of the current committed feed layout.
#[derive(Debug, Default)]
pub struct FeedView {
    committed: Option<FeedLayout>,
    /// Number of full recomputations so far.
    rebuilds: u64,
}

impl FeedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout of `snapshot`'s posts over `column_count` columns.
    ///
    /// Returns the committed layout when it was built from the same
    /// generation and column count, otherwise recomputes and commits.
    pub fn layout(
        &mut self,
        snapshot: &Snapshot,
        column_count: usize,
    ) -> Result<&FeedLayout, LayoutError> {
        let layout = match self.committed.take() {
            Some(layout)
                if layout.generation == snapshot.generation
                    && layout.column_count == column_count =>
            {
                layout
            }
            previous => {
                let columns = match masonry::layout(&snapshot.posts, column_count) {
                    Ok(placed) => placed.map(|post| post.id.clone()),
                    Err(err) => {
                        self.committed = previous;
                        return Err(err);
                    }
                };
                self.rebuilds += 1;
                tracing::debug!(
                    generation = snapshot.generation,
                    column_count,
                    posts = snapshot.posts.len(),
                    "feed layout rebuilt"
                );
                FeedLayout {
                    generation: snapshot.generation,
                    column_count,
                    columns,
                }
            }
        };
        Ok(&*self.committed.insert(layout))
    }

    /// The last committed layout, if any.
    pub fn committed(&self) -> Option<&FeedLayout> {
        self.committed.as_ref()
    }

    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}
