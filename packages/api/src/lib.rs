//! # API crate — HTTP client for the GridSocial gateway
//!
//! Every screen of the web client talks to the remote service through the
//! [`SocialApi`] trait defined here. [`HttpClient`] implements it over
//! `reqwest` against a single base URL; tests substitute fakes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HttpClient`]: request building, status mapping, rejection messages |
//! | [`error`] | [`ApiError`] taxonomy shared by every operation |
//! | [`models`] | Wire types (`Post`, `LoginResponse`, request bodies) |
//!
//! ## Endpoints
//!
//! | Operation | Request | Success |
//! |-----------|---------|---------|
//! | `login` | `POST /login` `{username, password}` | `200 {token, username, userId}` |
//! | `register` | `POST /register` `{username, email, password}` | any 2xx |
//! | `list_posts` | `GET /posts` | `200 [{authorId, content, ...}]` |
//! | `create_post` | `POST /posts` `{authorId, content}` | any 2xx |
//!
//! Every call is a single request/response. There is no retry, caching, or
//! de-duplication of in-flight requests.

use std::future::Future;

pub mod client;
pub mod error;
pub mod models;

pub use client::HttpClient;
pub use error::ApiError;
pub use models::{Credentials, LoginResponse, NewPost, Post, Registration};
pub use store::Session;

/// Operations the client performs against the remote service.
pub trait SocialApi {
    /// Exchange credentials for a session.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;

    /// Create an account. The user must log in separately afterwards.
    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// Fetch the feed in server order.
    fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>, ApiError>>;

    /// Publish a post. Empty content is rejected before any request is sent.
    fn create_post(
        &self,
        author_id: i64,
        content: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;
}
