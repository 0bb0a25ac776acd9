//! Feed state and the post list components.
//!
//! The feed is always a fresh read of the server's list: after a successful
//! post it is re-fetched, never merged locally. A failed refresh keeps the
//! previous contents on screen and is only logged.

use api::{ApiError, Post, SocialApi};
use dioxus::prelude::*;

const EMPTY_FEED: &str = "No posts yet. Be the first!";

/// View state of the feed screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedModel {
    pub posts: Vec<Post>,
    pub draft: String,
    pub error: Option<String>,
}

/// Result of submitting the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The draft was empty; nothing was sent.
    Ignored,
    /// The post was accepted. `posts` is the follow-up load, `None` if it failed.
    Posted { posts: Option<Vec<Post>> },
    /// The server rejected the post.
    Rejected(String),
}

impl FeedModel {
    /// Replace the feed with a fresh load. A failed load keeps what is shown.
    pub fn refresh(&mut self, loaded: Option<Vec<Post>>) {
        if let Some(posts) = loaded {
            self.posts = posts;
        }
    }

    pub fn apply(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Posted { posts } => {
                self.draft.clear();
                self.error = None;
                self.refresh(posts);
            }
            SubmitOutcome::Rejected(message) => self.error = Some(message),
        }
    }
}

/// Fetch the feed. Failures are logged and reported as `None`.
pub async fn load_feed<A: SocialApi>(api: &A) -> Option<Vec<Post>> {
    match api.list_posts().await {
        Ok(posts) => Some(posts),
        Err(e) => {
            tracing::warn!("Error fetching posts: {e}");
            None
        }
    }
}

/// Publish `draft` as `author_id`, then reload the feed once.
pub async fn submit_post<A: SocialApi>(api: &A, author_id: i64, draft: &str) -> SubmitOutcome {
    if draft.is_empty() {
        return SubmitOutcome::Ignored;
    }

    match api.create_post(author_id, draft).await {
        Ok(()) => SubmitOutcome::Posted {
            posts: load_feed(api).await,
        },
        Err(ApiError::EmptyContent) => SubmitOutcome::Ignored,
        Err(e) => {
            tracing::warn!("Error creating post: {e}");
            let message = e.user_message().unwrap_or("Post failed").to_string();
            SubmitOutcome::Rejected(message)
        }
    }
}

/// A single post, attributed to its author.
#[component]
pub fn PostCard(post: Post) -> Element {
    let badge = post
        .author_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    let author = post.author_label();
    let content = post.content;

    rsx! {
        article {
            class: "post-card",
            div {
                class: "post-card__header",
                span { class: "post-card__avatar", "{badge}" }
                span { class: "post-card__author", "{author}" }
            }
            p { class: "post-card__content", "{content}" }
        }
    }
}

/// The list of posts, or a placeholder when there are none.
#[component]
pub fn PostList(posts: Vec<Post>) -> Element {
    if posts.is_empty() {
        return rsx! {
            p { class: "feed-empty", "{EMPTY_FEED}" }
        };
    }

    rsx! {
        div {
            class: "feed-list",
            for (index, post) in posts.into_iter().enumerate() {
                PostCard { key: "{index}", post }
            }
        }
    }
}
