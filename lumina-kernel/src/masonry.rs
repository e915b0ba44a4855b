//! Masonry layout - greedy shortest-column placement for the feed.
//!
//! Real pixel heights are unknown before media loads, so each post gets a
//! unitless height estimate and is appended to whichever column is currently
//! shortest. The layout is recomputed from scratch whenever its inputs change.
//!
//! ```text
//! posts (input order) -> pick shortest column -> append -> add estimate
//! ```

use lumina_api::{Post, PostKind};

use crate::error::LayoutError;

/// Caption and padding overhead added below every image.
pub const CAPTION_OVERHEAD: f64 = 0.4;
/// Flat estimate for anything that is not an image.
pub const TEXT_POST_HEIGHT: f64 = 1.2;
/// Aspect ratio assumed when an image's ratio is missing or unusable.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;

/// Anything the masonry engine can place.
pub trait MasonryItem {
    fn kind(&self) -> PostKind;

    /// Media width / height, if known.
    fn aspect_ratio(&self) -> Option<f64>;
}

impl MasonryItem for Post {
    fn kind(&self) -> PostKind {
        self.kind
    }

    fn aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio
    }
}

/// Resolve a possibly missing or invalid ratio to a usable one.
pub fn effective_aspect_ratio(ratio: Option<f64>) -> f64 {
    match ratio {
        Some(r) if r.is_finite() && r > 0.0 => r,
        _ => DEFAULT_ASPECT_RATIO,
    }
}

/// Estimated height contribution of a single item.
///
/// For a fixed column width an image's rendered height is proportional to
/// `1 / aspect_ratio`; the caption adds a constant on top.
pub fn estimated_height<T: MasonryItem + ?Sized>(item: &T) -> f64 {
    match item.kind() {
        PostKind::Image => 1.0 / effective_aspect_ratio(item.aspect_ratio()) + CAPTION_OVERHEAD,
        PostKind::Text | PostKind::Video | PostKind::Mixed => TEXT_POST_HEIGHT,
    }
}

/// Posts distributed into columns, borrowed from the input slice.
#[derive(Debug)]
pub struct MasonryLayout<'a, T> {
    columns: Vec<Vec<&'a T>>,
}

impl<'a, T: MasonryItem> MasonryLayout<'a, T> {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Vec<&'a T>] {
        &self.columns
    }

    /// Project every placed item, keeping the column structure.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Vec<Vec<U>> {
        self.columns
            .iter()
            .map(|column| column.iter().map(|item| f(item)).collect())
            .collect()
    }

    /// Estimated height of each column, recomputed from its items.
    pub fn estimated_heights(&self) -> Vec<f64> {
        self.columns
            .iter()
            .map(|column| column.iter().map(|item| estimated_height(*item)).sum())
            .collect()
    }
}

/// Distribute `items` over `column_count` columns.
///
/// Ties between equally short columns go to the lowest index, so the result
/// is fully determined by the inputs. Fails if `column_count` is zero.
pub fn layout<T: MasonryItem>(
    items: &[T],
    column_count: usize,
) -> Result<MasonryLayout<'_, T>, LayoutError> {
    if column_count == 0 {
        return Err(LayoutError::InvalidConfiguration(column_count));
    }

    let mut columns: Vec<Vec<&T>> = (0..column_count).map(|_| Vec::new()).collect();
    let mut heights = vec![0.0f64; column_count];

    for item in items {
        let shortest = shortest_column(&heights);
        columns[shortest].push(item);
        heights[shortest] += estimated_height(item);
    }

    tracing::trace!(items = items.len(), column_count, ?heights, "masonry layout computed");

    Ok(MasonryLayout { columns })
}

/// Index of the first column with the minimum height.
fn shortest_column(heights: &[f64]) -> usize {
    let mut shortest = 0;
    for (index, &height) in heights.iter().enumerate().skip(1) {
        if height < heights[shortest] {
            shortest = index;
        }
    }
    shortest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        kind: PostKind,
        ratio: Option<f64>,
    }

    impl MasonryItem for Item {
        fn kind(&self) -> PostKind {
            self.kind
        }

        fn aspect_ratio(&self) -> Option<f64> {
            self.ratio
        }
    }

    fn text(id: &'static str) -> Item {
        Item { id, kind: PostKind::Text, ratio: None }
    }

    fn image(id: &'static str, ratio: f64) -> Item {
        Item { id, kind: PostKind::Image, ratio: Some(ratio) }
    }

    fn ids(layout: &MasonryLayout<'_, Item>) -> Vec<Vec<&'static str>> {
        layout.map(|item| item.id)
    }

    #[test]
    fn test_mixed_posts_trace() {
        let items = vec![text("a"), image("b", 2.0), text("c")];
        let result = layout(&items, 2).unwrap();
        assert_eq!(ids(&result), vec![vec!["a"], vec!["b", "c"]]);

        let heights = result.estimated_heights();
        assert!((heights[0] - 1.2).abs() < 1e-9);
        assert!((heights[1] - 2.1).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_gives_empty_columns() {
        let items: Vec<Item> = Vec::new();
        let result = layout(&items, 3).unwrap();
        assert_eq!(result.column_count(), 3);
        assert!(result.columns().iter().all(Vec::is_empty));
    }

    #[test]
    fn test_zero_aspect_ratio_defaults() {
        let items = vec![image("x", 0.0)];
        let result = layout(&items, 1).unwrap();
        assert_eq!(ids(&result), vec![vec!["x"]]);
        assert!((result.estimated_heights()[0] - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_zero_columns_is_invalid() {
        let items = vec![text("a")];
        let err = layout(&items, 0).unwrap_err();
        assert_eq!(err, LayoutError::InvalidConfiguration(0));
    }

    #[test]
    fn test_equal_text_posts_alternate() {
        let items = vec![text("a"), text("b"), text("c"), text("d")];
        let result = layout(&items, 2).unwrap();
        assert_eq!(ids(&result), vec![vec!["a", "c"], vec!["b", "d"]]);
    }

    #[test]
    fn test_single_column_keeps_input_order() {
        let items = vec![image("a", 0.5), text("b"), image("c", 3.0)];
        let result = layout(&items, 1).unwrap();
        assert_eq!(ids(&result), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_invalid_ratios_fall_back() {
        assert_eq!(effective_aspect_ratio(None), DEFAULT_ASPECT_RATIO);
        assert_eq!(effective_aspect_ratio(Some(-2.0)), DEFAULT_ASPECT_RATIO);
        assert_eq!(effective_aspect_ratio(Some(f64::NAN)), DEFAULT_ASPECT_RATIO);
        assert_eq!(effective_aspect_ratio(Some(f64::INFINITY)), DEFAULT_ASPECT_RATIO);
        assert_eq!(effective_aspect_ratio(Some(0.75)), 0.75);
    }

    #[test]
    fn test_non_image_kinds_use_flat_estimate() {
        let video = Item { id: "v", kind: PostKind::Video, ratio: Some(0.1) };
        let mixed = Item { id: "m", kind: PostKind::Mixed, ratio: None };
        assert_eq!(estimated_height(&video), TEXT_POST_HEIGHT);
        assert_eq!(estimated_height(&mixed), TEXT_POST_HEIGHT);
    }

    #[test]
    fn test_duplicate_ids_are_placed_by_position() {
        let items = vec![text("a"), text("a"), text("a")];
        let result = layout(&items, 2).unwrap();
        assert_eq!(ids(&result), vec![vec!["a", "a"], vec!["a"]]);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        assert_eq!(shortest_column(&[1.0, 1.0, 1.0]), 0);
        assert_eq!(shortest_column(&[2.0, 1.0, 1.0]), 1);
        assert_eq!(shortest_column(&[2.0, 3.0, 0.5]), 2);
    }

    /// Deterministic pseudo-random feed for property checks.
    fn generated_feed(len: usize, seed: u64) -> Vec<Item> {
        const IDS: [&str; 8] = ["p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7"];
        let mut state = seed;
        (0..len)
            .map(|i| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let roll = (state >> 33) % 100;
                let id = IDS[i % IDS.len()];
                if roll < 40 {
                    text(id)
                } else {
                    image(id, 0.25 + (roll as f64) / 40.0)
                }
            })
            .collect()
    }

    #[test]
    fn test_every_item_placed_once_in_order() {
        for column_count in 1..=5 {
            let items = generated_feed(37, column_count as u64);
            let result = layout(&items, column_count).unwrap();

            let mut seen: Vec<usize> = Vec::new();
            for column in result.columns() {
                let positions: Vec<usize> = column
                    .iter()
                    .map(|placed| {
                        items
                            .iter()
                            .position(|item| std::ptr::eq(item, *placed))
                            .unwrap()
                    })
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
                seen.extend(positions);
            }
            seen.sort_unstable();
            assert_eq!(seen, (0..items.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_column_spread_bounded_by_largest_item() {
        for column_count in 1..=5 {
            let items = generated_feed(50, 7 + column_count as u64);
            let result = layout(&items, column_count).unwrap();
            let heights = result.estimated_heights();
            let max = heights.iter().cloned().fold(f64::MIN, f64::max);
            let min = heights.iter().cloned().fold(f64::MAX, f64::min);
            let largest = items.iter().map(|item| estimated_height(item)).fold(0.0, f64::max);
            assert!(max - min <= largest + 1e-9, "spread {} > {}", max - min, largest);
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let items = generated_feed(25, 42);
        let first = ids(&layout(&items, 3).unwrap());
        let second = ids(&layout(&items, 3).unwrap());
        assert_eq!(first, second);
    }
}
