//! Seed data - the initial community every store starts from.

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use lumina_api::{
    ANONYMOUS_AVATAR, AuthorRef, Circle, CircleId, CirclePost, CirclePostId, Post, PostId,
    PostKind, User, UserId, Whisper, WhisperId, WhisperKind,
};

use crate::state::Snapshot;

/// The user the seeded store is signed in as.
pub const SEED_CURRENT_USER: &str = "1";

/// Build the seeded snapshot with timestamps relative to `now`.
pub fn snapshot(now: DateTime<Utc>) -> Snapshot {
    Snapshot {
        generation: 0,
        current_user: UserId::from(SEED_CURRENT_USER),
        users: users(),
        posts: posts(now),
        circles: circles(now),
        whispers: whispers(now),
    }
}

fn ids(list: &[&str]) -> Vec<UserId> {
    list.iter().map(|id| UserId::from(*id)).collect()
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::from("1"),
            name: "Elena Vance".into(),
            username: "elena_v".into(),
            avatar: "https://picsum.photos/id/64/200/200".into(),
            age: Some(26),
            mbti: Some("INFJ".into()),
            interests: strings(&["Minimalism", "Cottagecore", "Poetry"]),
            bio: Some("Finding beauty in the quiet moments.".into()),
            following: ids(&["2", "3"]),
            followers: ids(&["2"]),
            is_private: false,
            show_age: true,
            show_mbti: true,
            show_interests: true,
        },
        User {
            id: UserId::from("2"),
            name: "Sarah Chen".into(),
            username: "schen_art".into(),
            avatar: "https://picsum.photos/id/65/200/200".into(),
            age: Some(24),
            mbti: Some("ENFP".into()),
            interests: strings(&["Digital Art", "Coffee", "Urban Planning"]),
            bio: Some("Capturing city vibes.".into()),
            following: ids(&["1"]),
            followers: ids(&["1", "3"]),
            is_private: false,
            show_age: false,
            show_mbti: true,
            show_interests: true,
        },
        User {
            id: UserId::from("3"),
            name: "Maya Blue".into(),
            username: "maya.blue".into(),
            avatar: "https://picsum.photos/id/70/200/200".into(),
            age: None,
            mbti: Some("ISFP".into()),
            interests: strings(&["Books", "Lofi", "Galleries"]),
            bio: Some("Slow mornings, long reads.".into()),
            following: ids(&["2"]),
            followers: ids(&["1"]),
            is_private: true,
            show_age: false,
            show_mbti: false,
            show_interests: true,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    kind: PostKind,
    content: &str,
    media_url: Option<&str>,
    author: (&str, &str, &str),
    age: Duration,
    likes: u32,
    tags: &[&str],
    aspect_ratio: f64,
    now: DateTime<Utc>,
) -> Post {
    let (author_id, author_name, author_avatar) = author;
    let anonymous = author_id == "anon";
    Post {
        id: PostId::from(id),
        kind,
        content: content.into(),
        media_url: media_url.map(Into::into),
        author: if anonymous {
            AuthorRef::Anonymous
        } else {
            AuthorRef::Known(UserId::from(author_id))
        },
        author_name: author_name.into(),
        author_avatar: author_avatar.into(),
        timestamp: now - age,
        likes,
        liked: false,
        comments: Vec::new(),
        tags: strings(tags),
        aspect_ratio: Some(aspect_ratio),
    }
}

fn posts(now: DateTime<Utc>) -> Vec<Post> {
    let elena = ("1", "Elena Vance", "https://picsum.photos/id/64/200/200");
    let sarah = ("2", "Sarah Chen", "https://picsum.photos/id/65/200/200");
    let maya = ("3", "Maya Blue", "https://picsum.photos/id/70/200/200");
    let anon = ("anon", "Anonymous", ANONYMOUS_AVATAR);

    vec![
        post(
            "p1",
            PostKind::Image,
            "Morning light in the studio.",
            Some("https://picsum.photos/id/10/600/800"),
            elena,
            Duration::hours(1),
            124,
            &["Aesthetic", "Studio"],
            0.75,
            now,
        ),
        post(
            "p2",
            PostKind::Text,
            "Does anyone else feel like autumn is just a long exhale? 🍂",
            None,
            anon,
            Duration::hours(2),
            45,
            &["Thoughts", "Autumn"],
            1.2,
            now,
        ),
        post(
            "p3",
            PostKind::Image,
            "New setup details.",
            Some("https://picsum.photos/id/20/600/400"),
            sarah,
            Duration::hours(3),
            89,
            &["Tech", "DeskSetup"],
            1.5,
            now,
        ),
        post(
            "p4",
            PostKind::Image,
            "Dreaming of the sea.",
            Some("https://picsum.photos/id/30/600/900"),
            elena,
            Duration::hours(4),
            231,
            &["Travel", "Nature"],
            0.66,
            now,
        ),
        post(
            "p5",
            PostKind::Text,
            "Recommendation: Try reading \"The Alchemist\" while listening to lofi rain. Pure magic.",
            None,
            maya,
            Duration::hours(5),
            67,
            &["Books", "Cozy"],
            1.0,
            now,
        ),
        post(
            "p6",
            PostKind::Image,
            "Fresh blooms.",
            Some("https://picsum.photos/id/40/600/800"),
            anon,
            Duration::hours(6),
            156,
            &["Flowers", "Spring"],
            0.75,
            now,
        ),
    ]
}

fn circles(now: DateTime<Utc>) -> Vec<Circle> {
    vec![
        Circle {
            id: CircleId::from("g1"),
            name: "Quiet Readers".into(),
            description: "A space for introverted book lovers to share quotes and current reads."
                .into(),
            creator_id: UserId::from("1"),
            members: ids(&["1", "2", "3"]),
            is_private: false,
            posts: vec![CirclePost {
                id: CirclePostId::from("gp1"),
                author: AuthorRef::Known(UserId::from("2")),
                author_name: "Sarah Chen".into(),
                content: "Finished my 10th book of the year! Any recommendations?".into(),
                timestamp: now - Duration::hours(1),
                likes: 12,
            }],
        },
        Circle {
            id: CircleId::from("g2"),
            name: "Artists Collective".into(),
            description: "Sharing works in progress and honest critiques.".into(),
            creator_id: UserId::from("2"),
            members: ids(&["1", "2"]),
            is_private: true,
            posts: Vec::new(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn whisper(
    id: &str,
    sender: &str,
    kind: WhisperKind,
    content: &str,
    media_url: Option<&str>,
    age: Duration,
    is_read: bool,
    now: DateTime<Utc>,
) -> Whisper {
    Whisper {
        id: WhisperId::from(id),
        sender_id: UserId::from(sender),
        kind,
        content: content.into(),
        media_url: media_url.map(Into::into),
        timestamp: now - age,
        is_read,
    }
}

fn whispers(now: DateTime<Utc>) -> IndexMap<UserId, Vec<Whisper>> {
    let mut threads = IndexMap::new();
    threads.insert(
        UserId::from("2"),
        vec![
            whisper(
                "m1",
                "2",
                WhisperKind::Text,
                "I loved that aesthetic you shared! There's something so peaceful about the way you see the world. ✨",
                None,
                Duration::seconds(3600),
                true,
                now,
            ),
            whisper(
                "m2",
                SEED_CURRENT_USER,
                WhisperKind::Text,
                "Hey Sarah! Thank you so much for saying that. It's really just a reflection of how I'm feeling today. Quiet and calm. 🌿",
                None,
                Duration::seconds(3000),
                true,
                now,
            ),
            whisper(
                "m3",
                "2",
                WhisperKind::Image,
                "This reminded me of you.",
                Some("https://picsum.photos/id/102/600/400"),
                Duration::seconds(2000),
                false,
                now,
            ),
        ],
    );
    threads.insert(
        UserId::from("3"),
        vec![whisper(
            "m4",
            "3",
            WhisperKind::Text,
            "Are you going to the gallery tonight?",
            None,
            Duration::seconds(5000),
            false,
            now,
        )],
    );
    threads
}
