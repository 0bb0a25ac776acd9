//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod storage;
pub use storage::{make_session_store, PlatformStore};

mod auth;
pub use auth::{
    register_account, sign_in, use_session, LogoutButton, SessionContext, SessionProvider,
};

mod api_context;
pub use api_context::{use_api, ApiProvider};

pub mod routing;
pub use routing::{gate, resolve, Gate, Screen};

mod feed;
pub use feed::{load_feed, submit_post, FeedModel, PostCard, PostList, SubmitOutcome};

mod flash;
pub use flash::{use_flash, Flash, FlashBanner, FlashProvider};

mod navbar;
pub use navbar::{Navbar, BRAND};

#[cfg(test)]
mod test_support;
