//! Store commands.
//!
//! Every command validates its input against the committed snapshot, builds
//! the next snapshot from a copy, commits it and emits one event. A failed
//! command commits nothing.

use chrono::Utc;
use lumina_api::{
    ANONYMOUS_AVATAR, ANONYMOUS_SOUL, AuthorRef, CircleId, CirclePost, CirclePostId, Comment,
    CommentId, LuminaEvent, Post, PostDraft, PostId, ProfileEdit, UserId, Whisper, WhisperDraft,
    WhisperId,
};

use crate::state::next_id;
use crate::{Lumina, LuminaError};

impl Lumina {
    /// Add a post to the top of the feed.
    pub fn create_post(&mut self, draft: PostDraft) -> Result<PostId, LuminaError> {
        let has_media = draft
            .media_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        if draft.content.trim().is_empty() && !has_media {
            return Err(LuminaError::EmptyContent("a post needs text or media"));
        }

        let mut next = self.draft();
        let me = self.me()?;

        let (author, author_name, author_avatar) = if draft.anonymous {
            (
                AuthorRef::Anonymous,
                "Anonymous".to_string(),
                ANONYMOUS_AVATAR.to_string(),
            )
        } else {
            (
                AuthorRef::Known(me.id.clone()),
                me.name.clone(),
                me.avatar.clone(),
            )
        };

        let post = Post {
            id: PostId::new(next_id()),
            kind: draft.kind(),
            content: draft.content.clone(),
            media_url: draft.media_url.clone().filter(|_| has_media),
            author,
            author_name,
            author_avatar,
            timestamp: Utc::now(),
            likes: 0,
            liked: false,
            comments: Vec::new(),
            tags: draft.tags,
            aspect_ratio: draft.aspect_ratio,
        };
        let post_id = post.id.clone();
        next.posts.insert(0, post);

        let generation = self.commit(next);
        tracing::info!(%post_id, generation, anonymous = draft.anonymous, "post created");
        self.emit(LuminaEvent::PostCreated {
            post_id: post_id.clone(),
            generation,
        });
        Ok(post_id)
    }

    /// Toggle the current user's like on a post. Returns the new like state.
    pub fn like_post(&mut self, post_id: &PostId) -> Result<bool, LuminaError> {
        let mut next = self.draft();
        let post = next
            .post_mut(post_id)
            .ok_or_else(|| LuminaError::PostNotFound(post_id.clone()))?;

        post.liked = !post.liked;
        if post.liked {
            post.likes += 1;
        } else {
            post.likes = post.likes.saturating_sub(1);
        }
        let (liked, likes) = (post.liked, post.likes);

        self.commit(next);
        tracing::info!(%post_id, liked, likes, "post like toggled");
        self.emit(LuminaEvent::PostLiked {
            post_id: post_id.clone(),
            liked,
            likes,
        });
        Ok(liked)
    }

    /// Append a comment by the current user.
    pub fn add_comment(&mut self, post_id: &PostId, text: &str) -> Result<CommentId, LuminaError> {
        if text.trim().is_empty() {
            return Err(LuminaError::EmptyContent("a comment needs text"));
        }
        let me = self.me()?;
        let comment = Comment {
            id: CommentId::new(next_id()),
            author: AuthorRef::Known(me.id.clone()),
            author_name: me.name.clone(),
            text: text.trim().to_string(),
            timestamp: Utc::now(),
        };
        let comment_id = comment.id.clone();

        let mut next = self.draft();
        next.post_mut(post_id)
            .ok_or_else(|| LuminaError::PostNotFound(post_id.clone()))?
            .comments
            .push(comment);

        self.commit(next);
        tracing::info!(%post_id, %comment_id, "comment added");
        self.emit(LuminaEvent::CommentAdded {
            post_id: post_id.clone(),
            comment_id: comment_id.clone(),
        });
        Ok(comment_id)
    }

    /// Send a whisper from the current user to `contact`.
    pub fn send_whisper(
        &mut self,
        contact: &UserId,
        draft: WhisperDraft,
    ) -> Result<WhisperId, LuminaError> {
        if self.snapshot.user(contact).is_none() {
            return Err(LuminaError::UserNotFound(contact.clone()));
        }
        if contact == &self.snapshot.current_user {
            return Err(LuminaError::InvalidOperation(
                "cannot whisper to yourself".to_string(),
            ));
        }

        let media_url = draft.media_url.filter(|url| !url.trim().is_empty());
        if draft.kind.is_media() {
            if media_url.is_none() {
                return Err(LuminaError::MissingMedia(draft.kind));
            }
        } else if draft.content.trim().is_empty() {
            return Err(LuminaError::EmptyContent("a text whisper needs content"));
        }

        let mut next = self.draft();
        let whisper = Whisper {
            id: WhisperId::new(next_id()),
            sender_id: next.current_user.clone(),
            kind: draft.kind,
            content: draft.content,
            media_url,
            timestamp: Utc::now(),
            is_read: true,
        };
        let whisper_id = whisper.id.clone();
        next.whispers.entry(contact.clone()).or_default().push(whisper);

        self.commit(next);
        tracing::info!(%contact, %whisper_id, kind = ?draft.kind, "whisper sent");
        self.emit(LuminaEvent::WhisperSent {
            contact_id: contact.clone(),
            whisper_id: whisper_id.clone(),
        });
        Ok(whisper_id)
    }

    /// Mark every incoming whisper from `contact` as read. Returns how many changed.
    pub fn mark_thread_read(&mut self, contact: &UserId) -> Result<usize, LuminaError> {
        if self.snapshot.user(contact).is_none() {
            return Err(LuminaError::UserNotFound(contact.clone()));
        }
        let unread = self.snapshot.unread_in(contact);
        if unread == 0 {
            return Ok(0);
        }

        let mut next = self.draft();
        let me = next.current_user.clone();
        if let Some(thread) = next.whispers.get_mut(contact) {
            thread
                .iter_mut()
                .filter(|w| w.sender_id != me)
                .for_each(|w| w.is_read = true);
        }

        self.commit(next);
        tracing::debug!(%contact, marked = unread, "thread marked read");
        self.emit(LuminaEvent::ThreadRead {
            contact_id: contact.clone(),
            marked: unread,
        });
        Ok(unread)
    }

    /// Publish a post at the top of a circle's stream.
    pub fn publish_circle_post(
        &mut self,
        circle_id: &CircleId,
        text: &str,
        anonymous: bool,
    ) -> Result<CirclePostId, LuminaError> {
        if self.snapshot.circle(circle_id).is_none() {
            return Err(LuminaError::CircleNotFound(circle_id.clone()));
        }
        if text.trim().is_empty() {
            return Err(LuminaError::EmptyContent("a circle post needs text"));
        }

        let me = self.me()?;
        let (author, author_name) = if anonymous {
            (AuthorRef::Anonymous, ANONYMOUS_SOUL.to_string())
        } else {
            (AuthorRef::Known(me.id.clone()), me.name.clone())
        };
        let post = CirclePost {
            id: CirclePostId::new(next_id()),
            author,
            author_name,
            content: text.to_string(),
            timestamp: Utc::now(),
            likes: 0,
        };
        let post_id = post.id.clone();

        let mut next = self.draft();
        if let Some(circle) = next.circle_mut(circle_id) {
            circle.posts.insert(0, post);
        }

        self.commit(next);
        tracing::info!(%circle_id, %post_id, anonymous, "circle post published");
        self.emit(LuminaEvent::CirclePostPublished {
            circle_id: circle_id.clone(),
            post_id: post_id.clone(),
        });
        Ok(post_id)
    }

    /// Apply edits to the current user's profile.
    pub fn update_profile(&mut self, edit: ProfileEdit) -> Result<(), LuminaError> {
        if edit.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(LuminaError::EmptyContent("a display name cannot be blank"));
        }

        let mut next = self.draft();
        let me = next.current_user.clone();
        let user = next
            .user_mut(&me)
            .ok_or_else(|| LuminaError::UserNotFound(me.clone()))?;
        edit.apply_to(user);
        let new_name = user.name.clone();

        // Denormalised author names on the user's own posts follow the profile.
        for post in next.posts.iter_mut().filter(|p| p.author.is_user(&me)) {
            post.author_name = new_name.clone();
        }

        self.commit(next);
        tracing::info!(user_id = %me, "profile updated");
        self.emit(LuminaEvent::ProfileUpdated { user_id: me });
        Ok(())
    }

    /// Follow or unfollow `target`. Returns whether the current user now follows them.
    pub fn toggle_follow(&mut self, target: &UserId) -> Result<bool, LuminaError> {
        if self.snapshot.user(target).is_none() {
            return Err(LuminaError::UserNotFound(target.clone()));
        }
        let me = self.snapshot.current_user.clone();
        if target == &me {
            return Err(LuminaError::InvalidOperation(
                "cannot follow yourself".to_string(),
            ));
        }

        let mut next = self.draft();
        let following = {
            let user = next
                .user_mut(&me)
                .ok_or_else(|| LuminaError::UserNotFound(me.clone()))?;
            toggle_membership(&mut user.following, target)
        };
        if let Some(other) = next.user_mut(target) {
            set_membership(&mut other.followers, &me, following);
        }

        self.commit(next);
        tracing::info!(%target, following, "follow toggled");
        self.emit(LuminaEvent::FollowChanged {
            user_id: target.clone(),
            following,
        });
        Ok(following)
    }

    fn me(&self) -> Result<lumina_api::User, LuminaError> {
        self.snapshot
            .current_user()
            .cloned()
            .ok_or_else(|| LuminaError::UserNotFound(self.snapshot.current_user.clone()))
    }
}

/// Add `id` if absent, remove it if present. Returns whether it is now present.
fn toggle_membership(list: &mut Vec<UserId>, id: &UserId) -> bool {
    let present = list.contains(id);
    set_membership(list, id, !present);
    !present
}

fn set_membership(list: &mut Vec<UserId>, id: &UserId, present: bool) {
    if present {
        if !list.contains(id) {
            list.push(id.clone());
        }
    } else {
        list.retain(|existing| existing != id);
    }
}
