//! Integration tests for the feed: masonry placement over real posts, the
//! committed feed layout, and snapshot isolation across commands.

use chrono::{TimeZone, Utc};
use lumina_api::{AuthorRef, LuminaEvent, Post, PostDraft, PostId, PostKind, UserId};
use lumina_kernel::{LayoutError, Lumina, LuminaError, estimated_height, layout, seed};

fn post(id: &str, kind: PostKind, aspect_ratio: Option<f64>) -> Post {
    Post {
        id: PostId::from(id),
        kind,
        content: String::new(),
        media_url: None,
        author: AuthorRef::Known(UserId::from("1")),
        author_name: "Elena Vance".to_string(),
        author_avatar: String::new(),
        timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        likes: 0,
        liked: false,
        comments: Vec::new(),
        tags: Vec::new(),
        aspect_ratio,
    }
}

fn column_ids(posts: &[Post], column_count: usize) -> Vec<Vec<String>> {
    layout(posts, column_count)
        .unwrap()
        .map(|p| p.id.to_string())
}

#[test]
fn test_text_image_text_trace() {
    let posts = vec![
        post("a", PostKind::Text, None),
        post("b", PostKind::Image, Some(2.0)),
        post("c", PostKind::Text, None),
    ];
    assert_eq!(column_ids(&posts, 2), vec![vec!["a"], vec!["b", "c"]]);
}

#[test]
fn test_empty_feed_three_columns() {
    assert_eq!(column_ids(&[], 3), vec![Vec::<String>::new(); 3]);
}

#[test]
fn test_missing_ratio_image_uses_default() {
    let posts = vec![post("x", PostKind::Image, None)];
    assert!((estimated_height(&posts[0]) - 1.4).abs() < 1e-9);
    assert_eq!(column_ids(&posts, 1), vec![vec!["x"]]);
}

#[test]
fn test_zero_columns_fail_without_result() {
    let posts = vec![post("a", PostKind::Text, None)];
    assert_eq!(
        layout(&posts, 0).unwrap_err(),
        LayoutError::InvalidConfiguration(0)
    );
}

#[test]
fn test_four_text_posts_alternate() {
    let posts: Vec<Post> = ["a", "b", "c", "d"]
        .iter()
        .map(|id| post(id, PostKind::Text, None))
        .collect();
    assert_eq!(column_ids(&posts, 2), vec![vec!["a", "c"], vec!["b", "d"]]);
}

#[test]
fn test_seed_feed_two_columns() {
    let (mut lumina, _rx) = Lumina::seeded();
    let feed = lumina.feed(500).unwrap();
    assert_eq!(feed.column_count, 2);
    let ids: Vec<Vec<&str>> = feed
        .columns
        .iter()
        .map(|c| c.iter().map(PostId::as_str).collect())
        .collect();
    assert_eq!(ids, vec![vec!["p1", "p4"], vec!["p2", "p3", "p5", "p6"]]);
}

#[test]
fn test_feed_follows_breakpoints() {
    let (mut lumina, _rx) = Lumina::seeded();
    assert_eq!(lumina.feed(1440).unwrap().column_count, 4);
    assert_eq!(lumina.feed(1024).unwrap().column_count, 3);
    assert_eq!(lumina.feed(375).unwrap().column_count, 2);
}

#[test]
fn test_feed_rebuilt_after_new_post() {
    let (mut lumina, _rx) = Lumina::seeded();
    lumina.feed(1280).unwrap();
    lumina.feed(1300).unwrap();
    assert_eq!(lumina.feed_rebuilds(), 1);

    let id = lumina.create_post(PostDraft::text("first light")).unwrap();
    let feed = lumina.feed(1300).unwrap();
    assert_eq!(feed.columns[0][0], id);
    assert_eq!(feed.len(), 7);
    assert_eq!(lumina.feed_rebuilds(), 2);
}

#[test]
fn test_invalid_column_count_surfaces() {
    let (mut lumina, _rx) = Lumina::seeded();
    let err = lumina.feed_with_columns(0).unwrap_err();
    assert!(matches!(
        err,
        LuminaError::Layout(LayoutError::InvalidConfiguration(0))
    ));
}

#[test]
fn test_old_snapshot_unchanged_by_commands() {
    let (mut lumina, _rx) = Lumina::seeded();
    let before = lumina.snapshot();

    lumina.create_post(PostDraft::text("later")).unwrap();
    lumina.like_post(&PostId::from("p2")).unwrap();

    assert_eq!(before.generation, 0);
    assert_eq!(before.posts.len(), 6);
    assert_eq!(before.post(&PostId::from("p2")).unwrap().likes, 45);

    let after = lumina.snapshot();
    assert_eq!(after.generation, 2);
    assert_eq!(after.posts.len(), 7);
    assert_eq!(after.post(&PostId::from("p2")).unwrap().likes, 46);
}

#[test]
fn test_commands_emit_events() {
    let (mut lumina, mut rx) = Lumina::seeded();
    let id = lumina.create_post(PostDraft::text("hello")).unwrap();

    match rx.try_recv() {
        Ok(LuminaEvent::PostCreated {
            post_id,
            generation,
        }) => {
            assert_eq!(post_id, id);
            assert_eq!(generation, 1);
        }
        other => panic!("unexpected event: {:?}", other),
    }

    // Failed commands commit and emit nothing.
    assert!(lumina.create_post(PostDraft::text("")).is_err());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_profile_excludes_anonymous_posts() {
    let (lumina, _rx) = Lumina::seeded();
    let elena = lumina.profile(&UserId::from("1")).unwrap();
    let ids: Vec<&str> = elena.posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p4"]);
    assert!(elena.is_own);
    assert!(!elena.follows_you);
}

#[test]
fn test_profile_of_other_user() {
    let (lumina, _rx) = Lumina::seeded();
    let sarah = lumina.profile(&UserId::from("2")).unwrap();
    assert!(sarah.follows_you);
    assert!(sarah.following);
    assert_eq!(sarah.details.age, None);
    assert_eq!(sarah.details.mbti.as_deref(), Some("ENFP"));

    let maya = lumina.profile(&UserId::from("3")).unwrap();
    assert!(!maya.follows_you);
    assert_eq!(maya.details.mbti, None);

    assert!(matches!(
        lumina.profile(&UserId::from("42")),
        Err(LuminaError::UserNotFound(_))
    ));
}

#[test]
fn test_search_souls() {
    let (lumina, _rx) = Lumina::seeded();
    let names = |q: &str| -> Vec<String> {
        lumina
            .search_souls(q)
            .into_iter()
            .map(|u| u.name.clone())
            .collect()
    };
    assert_eq!(names("chen"), vec!["Sarah Chen"]);
    assert_eq!(names("ELENA_V"), vec!["Elena Vance"]);
    assert_eq!(names("").len(), 3);
    assert!(names("nobody").is_empty());
}

#[test]
fn test_whisper_inbox_order() {
    let (lumina, _rx) = Lumina::seeded();
    let threads = lumina.whisper_threads();
    assert_eq!(threads.len(), 2);
    assert_eq!(threads[0].contact_name, "Sarah Chen");
    assert_eq!(threads[0].unread, 1);
    assert_eq!(threads[0].last_preview.as_deref(), Some("This reminded me of you."));
    assert_eq!(threads[1].contact_name, "Maya Blue");
}

#[test]
fn test_seed_is_reproducible() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
    let a = serde_json::to_string(&seed::snapshot(now)).unwrap();
    let b = serde_json::to_string(&seed::snapshot(now)).unwrap();
    assert_eq!(a, b);
}
