//! Scripted [`SocialApi`] used by the view-logic tests.

use std::cell::{Cell, RefCell};

use api::{ApiError, Credentials, LoginResponse, Post, Registration, SocialApi};

/// A transport failure that never touches the network.
pub fn transport_error() -> ApiError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
    ApiError::Transport(err)
}

/// In-process stand-in for the remote service.
///
/// `posts` is the server's feed; successful `create_post` calls append to it.
#[derive(Default)]
pub struct FakeApi {
    login: RefCell<Option<Result<LoginResponse, ApiError>>>,
    register: RefCell<Option<ApiError>>,
    reject_post: RefCell<Option<String>>,
    fail_list: Cell<bool>,
    posts: RefCell<Vec<Post>>,
    list_calls: Cell<usize>,
    create_calls: Cell<usize>,
    register_calls: Cell<usize>,
}

impl FakeApi {
    pub fn with_login(self, result: Result<(&str, &str, i64), ApiError>) -> Self {
        let result = result.map(|(token, username, user_id)| LoginResponse {
            token: token.to_string(),
            username: username.to_string(),
            user_id,
        });
        *self.login.borrow_mut() = Some(result);
        self
    }

    pub fn with_register(self, result: Result<(), ApiError>) -> Self {
        *self.register.borrow_mut() = result.err();
        self
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        *self.posts.borrow_mut() = posts;
        self
    }

    pub fn reject_posts_with(self, message: &str) -> Self {
        *self.reject_post.borrow_mut() = Some(message.to_string());
        self
    }

    pub fn fail_listing(&self, fail: bool) {
        self.fail_list.set(fail);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.get()
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.get()
    }
}

impl SocialApi for FakeApi {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.login
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ApiError::Auth("Login failed".into())))
    }

    async fn register(&self, _registration: &Registration) -> Result<(), ApiError> {
        self.register_calls.set(self.register_calls.get() + 1);
        match self.register.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.list_calls.set(self.list_calls.get() + 1);
        if self.fail_list.get() {
            return Err(transport_error());
        }
        Ok(self.posts.borrow().clone())
    }

    async fn create_post(&self, author_id: i64, content: &str) -> Result<(), ApiError> {
        self.create_calls.set(self.create_calls.get() + 1);
        if content.is_empty() {
            return Err(ApiError::EmptyContent);
        }
        if let Some(message) = self.reject_post.borrow().clone() {
            return Err(ApiError::Submission(message));
        }
        self.posts.borrow_mut().push(Post::new(author_id, content));
        Ok(())
    }
}
