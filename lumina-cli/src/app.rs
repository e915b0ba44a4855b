//! Sub-command execution against a freshly seeded store.

use anyhow::{Context, Result};
use lumina_api::{CircleId, Post, PostDraft, PostId, UserId, WhisperDraft};
use lumina_inspire::{ExternalPlatform, GeminiClient, Inspiration};
use lumina_kernel::{FeedLayout, Lumina, Snapshot};
use serde::Serialize;

use crate::cli::{Args, Command};
use crate::config::{InspireOverrides, load_inspire_config};

pub async fn run(args: Args) -> Result<()> {
    let json = args.json;
    let (mut lumina, _events) = Lumina::seeded();

    match args.command {
        Command::Feed { width, columns } => {
            let feed = match columns {
                Some(count) => lumina.feed_with_columns(count)?,
                None => lumina.feed(width)?,
            }
            .clone();
            print_feed(&lumina.snapshot(), &feed, json)
        }

        Command::Souls { query } => {
            let souls = lumina.search_souls(&query);
            if json {
                return print_json(&souls);
            }
            if souls.is_empty() {
                println!("No souls match \"{}\".", query.trim());
            }
            for user in souls {
                println!("{:<4} {:<14} @{}", user.id, user.name, user.username);
            }
            Ok(())
        }

        Command::Profile { user } => {
            let profile = lumina.profile(&UserId::new(user))?;
            if json {
                return print_json(&profile);
            }
            let u = &profile.user;
            println!("{} (@{})", u.name, u.username);
            if let Some(bio) = &u.bio {
                println!("  {}", bio);
            }
            println!(
                "  {} followers · {} following{}",
                u.followers.len(),
                u.following.len(),
                if profile.follows_you { " · follows you" } else { "" }
            );
            let details = &profile.details;
            if u.hides_all_details() {
                println!("  (details kept private)");
            }
            if let Some(mbti) = &details.mbti {
                println!("  MBTI: {}", mbti);
            }
            if let Some(age) = details.age {
                println!("  Age: {}", age);
            }
            if !details.interests.is_empty() {
                println!("  Interests: {}", details.interests.join(", "));
            }
            println!("  {} posts", profile.posts.len());
            for post in &profile.posts {
                println!("    {}", describe_post(post));
            }
            Ok(())
        }

        Command::Post {
            text,
            media,
            aspect,
            anonymous,
            tags,
            width,
        } => {
            let draft = PostDraft {
                content: text,
                media_url: media,
                anonymous,
                tags,
                aspect_ratio: aspect,
            };
            let id = lumina.create_post(draft)?;
            tracing::info!(%id, "created post");
            let feed = lumina.feed(width)?.clone();
            print_feed(&lumina.snapshot(), &feed, json)
        }

        Command::Whispers { contact, send } => match contact {
            None => {
                let threads = lumina.whisper_threads();
                if json {
                    return print_json(&threads);
                }
                println!("Whispers · {} unread", lumina.unread_count());
                for thread in threads {
                    println!(
                        "{:<4} {:<14} {:>2} new  {}",
                        thread.contact_id,
                        thread.contact_name,
                        thread.unread,
                        thread.last_preview.unwrap_or_default()
                    );
                }
                Ok(())
            }
            Some(contact) => {
                let contact = UserId::new(contact);
                if let Some(text) = send {
                    lumina.send_whisper(&contact, WhisperDraft::text(text))?;
                }
                lumina.mark_thread_read(&contact)?;
                let snapshot = lumina.snapshot();
                let thread = snapshot.thread(&contact);
                if json {
                    return print_json(&thread);
                }
                for whisper in thread {
                    let who = if whisper.sender_id == snapshot.current_user {
                        "you".to_string()
                    } else {
                        snapshot
                            .user(&whisper.sender_id)
                            .map(|u| u.name.clone())
                            .unwrap_or_else(|| whisper.sender_id.to_string())
                    };
                    println!(
                        "[{}] {}: {}",
                        whisper.timestamp.format("%H:%M"),
                        who,
                        whisper.preview()
                    );
                }
                Ok(())
            }
        },

        Command::Circles {
            circle,
            publish,
            anonymous,
        } => match circle {
            None => {
                let circles = lumina.circles();
                if json {
                    return print_json(&circles);
                }
                for circle in circles {
                    println!(
                        "{:<4} {:<20} {} members{}",
                        circle.id,
                        circle.name,
                        circle.members.len(),
                        if circle.is_private { " · private" } else { "" }
                    );
                }
                Ok(())
            }
            Some(circle) => {
                let circle_id = CircleId::new(circle);
                if let Some(text) = publish {
                    lumina.publish_circle_post(&circle_id, &text, anonymous)?;
                }
                let circle = lumina.circle(&circle_id)?;
                if json {
                    return print_json(circle);
                }
                println!("{}: {}", circle.name, circle.description);
                for post in &circle.posts {
                    println!("  {} ({} likes): {}", post.author_name, post.likes, post.content);
                }
                Ok(())
            }
        },

        Command::Inspire {
            query,
            model,
            endpoint,
            timeout,
        } => {
            let config = load_inspire_config(InspireOverrides {
                model,
                endpoint,
                timeout_secs: timeout,
            });
            let client = GeminiClient::new(config).context("failed to build HTTP client")?;
            let result = Inspiration::new(client).search(&query).await?;

            let links: Vec<(&str, String)> = ExternalPlatform::ALL
                .iter()
                .filter_map(|p| p.search_url(&query).map(|url| (p.label(), url)))
                .collect();

            if json {
                #[derive(Serialize)]
                struct Output<'a> {
                    #[serde(flatten)]
                    result: &'a lumina_inspire::SearchResult,
                    links: &'a [(&'a str, String)],
                }
                return print_json(&Output {
                    result: &result,
                    links: &links,
                });
            }

            println!("{}\n", result.text);
            if !result.sources.is_empty() {
                println!("Sources:");
                for source in &result.sources {
                    println!("  {} <{}>", source.title, source.uri);
                }
                println!();
            }
            println!("Explore further:");
            for (label, url) in links {
                println!("  {:<10} {}", label, url);
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_feed(snapshot: &Snapshot, feed: &FeedLayout, json: bool) -> Result<()> {
    if json {
        return print_json(feed);
    }

    println!(
        "Feed · {} columns · {} posts",
        feed.column_count,
        feed.len()
    );
    for (index, column) in feed.columns.iter().enumerate() {
        println!("column {}", index + 1);
        for id in column {
            match snapshot.post(id) {
                Some(post) => println!("  {}", describe_post(post)),
                None => println!("  {}", id),
            }
        }
    }
    Ok(())
}

fn describe_post(post: &Post) -> String {
    let id: &PostId = &post.id;
    let kind = format!("{:?}", post.kind).to_lowercase();
    let content = if post.content.chars().count() > 48 {
        let cut: String = post.content.chars().take(47).collect();
        format!("{cut}…")
    } else {
        post.content.clone()
    };
    let author = match post.author.user_id() {
        Some(user) if post.author.is_interactive() => format!("{} (@{})", post.author_name, user),
        _ => post.author_name.clone(),
    };
    format!(
        "{:<10} {:<6} {:<50} by {} · {} likes",
        truncate_id(id.as_str()),
        kind,
        format!("\"{content}\""),
        author,
        post.likes
    )
}

fn truncate_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}
