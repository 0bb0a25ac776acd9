mod auth;
mod post;

pub use auth::{Credentials, LoginResponse, Registration};
pub use post::{NewPost, Post};

use serde::Deserialize;

/// Body of a non-2xx response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
