//! Home feed: composer plus the server's post list.

use dioxus::prelude::*;
use ui::{use_api, use_session, FeedModel, PostList};

/// Feed page component.
#[component]
pub fn Feed() -> Element {
    let api = use_api();
    let session = use_session();
    let mut feed = use_signal(FeedModel::default);

    let active = session.current();
    let username = active.as_ref().map(|s| s.username.clone()).unwrap_or_default();
    let user_id = active.map(|s| s.user_id);

    // Load once on mount. The task is dropped with this view.
    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            let loaded = ui::load_feed(&api).await;
            feed.write().refresh(loaded);
        }
    });

    let handle_post = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(author_id) = user_id else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let draft = feed.peek().draft.clone();
            let outcome = ui::submit_post(&api, author_id, &draft).await;
            feed.write().apply(outcome);
        });
    };

    let FeedModel { posts, draft, error } = feed();

    rsx! {
        div {
            class: "feed-page",
            h1 { "👋 Welcome back, {username}!" }

            div {
                class: "composer",
                form {
                    onsubmit: handle_post,
                    style: "display: flex; gap: 1rem; flex: 1;",
                    input {
                        r#type: "text",
                        placeholder: "What's happening?",
                        value: draft,
                        oninput: move |evt: FormEvent| feed.write().draft = evt.value(),
                    }
                    button { class: "primary-btn", r#type: "submit", "Post" }
                }
            }

            if let Some(err) = error {
                div { class: "form-error", "{err}" }
            }

            PostList { posts }
        }
    }
}
