//! # HTTP implementation of [`SocialApi`]
//!
//! [`HttpClient`] wraps a `reqwest::Client` (which uses `fetch` on wasm) and a
//! base URL. Non-2xx responses are mapped to the [`ApiError`] variant of the
//! operation that issued them, carrying the best message the server supplied:
//!
//! 1. JSON `{"message": "..."}` when present and non-empty;
//! 2. otherwise a non-empty body sent as `text/plain` or with no content
//!    type at all (HTML error pages from proxies are never shown);
//! 3. otherwise a per-operation fallback ("Login failed", ...).

use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};

use crate::error::ApiError;
use crate::models::{Credentials, ErrorBody, LoginResponse, NewPost, Post, Registration};
use crate::SocialApi;

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";
const POST_FALLBACK: &str = "Post failed";

/// `reqwest`-backed API client bound to one origin.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpClient {
    /// Create a client for `base_url`. A trailing `/` is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Resolve the user-facing message of a rejected request.
async fn rejection_message(resp: Response, fallback: &str) -> (StatusCode, String) {
    let status = resp.status();
    let plain_text = match resp.headers().get(CONTENT_TYPE) {
        None => true,
        Some(value) => value
            .to_str()
            .map(|v| v.trim().to_ascii_lowercase().starts_with("text/plain"))
            .unwrap_or(false),
    };
    let body = resp.text().await.unwrap_or_default();
    (status, message_from_body(&body, plain_text, fallback))
}

fn message_from_body(body: &str, plain_text: bool, fallback: &str) -> String {
    let body = body.trim();
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
    }
    if !plain_text || body.is_empty() || body.starts_with(['{', '[', '<']) {
        fallback.to_string()
    } else {
        body.to_string()
    }
}

impl SocialApi for HttpClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        tracing::debug!(username = %credentials.username, "POST /login");
        let resp = self
            .http
            .post(self.url("/login"))
            .json(credentials)
            .send()
            .await?;

        if !resp.status().is_success() {
            let (status, message) = rejection_message(resp, LOGIN_FALLBACK).await;
            tracing::warn!(%status, "login rejected: {message}");
            return Err(ApiError::Auth(message));
        }

        Ok(resp.json::<LoginResponse>().await?)
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        tracing::debug!(username = %registration.username, "POST /register");
        let resp = self
            .http
            .post(self.url("/register"))
            .json(registration)
            .send()
            .await?;

        if !resp.status().is_success() {
            let (status, message) = rejection_message(resp, REGISTER_FALLBACK).await;
            tracing::warn!(%status, "registration rejected: {message}");
            return Err(ApiError::Validation(message));
        }

        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        tracing::debug!("GET /posts");
        let posts = self
            .http
            .get(self.url("/posts"))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Post>>()
            .await?;
        Ok(posts)
    }

    async fn create_post(&self, author_id: i64, content: &str) -> Result<(), ApiError> {
        if content.is_empty() {
            return Err(ApiError::EmptyContent);
        }

        tracing::debug!(author_id, "POST /posts");
        let resp = self
            .http
            .post(self.url("/posts"))
            .json(&NewPost { author_id, content })
            .send()
            .await?;

        if !resp.status().is_success() {
            let (status, message) = rejection_message(resp, POST_FALLBACK).await;
            tracing::warn!(%status, "post rejected: {message}");
            return Err(ApiError::Submission(message));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[test]
    fn test_message_from_body() {
        assert_eq!(
            message_from_body(r#"{"message":"Invalid Credentials"}"#, false, LOGIN_FALLBACK),
            "Invalid Credentials"
        );
        assert_eq!(message_from_body(r#"{"message":""}"#, false, LOGIN_FALLBACK), "Login failed");
        assert_eq!(message_from_body(r#"{"error":"x"}"#, true, LOGIN_FALLBACK), "Login failed");
        assert_eq!(
            message_from_body("Username is required", true, REGISTER_FALLBACK),
            "Username is required"
        );
        assert_eq!(message_from_body("  ", true, POST_FALLBACK), "Post failed");
    }

    #[test]
    fn test_markup_body_falls_back() {
        let page = "<html><body><h1>502 Bad Gateway</h1></body></html>";
        assert_eq!(message_from_body(page, false, LOGIN_FALLBACK), "Login failed");
        assert_eq!(message_from_body(page, true, LOGIN_FALLBACK), "Login failed");
        assert_eq!(message_from_body("Bad Gateway", false, POST_FALLBACK), "Post failed");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = HttpClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/posts"), "http://localhost:8080/posts");
    }

    #[tokio::test]
    async fn test_login_success() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({"username": "alice", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Login Success",
                "token": "jwt-token",
                "userId": 1,
                "username": "alice",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(server.uri());
        let resp = client
            .login(&Credentials::new("alice", "pw"))
            .await
            .unwrap();
        assert_eq!(resp.token, "jwt-token");
        assert_eq!(resp.user_id, 1);
        assert_eq!(resp.username, "alice");
    }

    #[tokio::test]
    async fn test_login_rejected_carries_server_message() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"message": "invalid credentials"})),
            )
            .mount(&server)
            .await;

        let err = HttpClient::new(server.uri())
            .login(&Credentials::new("alice", "wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Auth(ref m) if m == "invalid credentials"));
    }

    #[tokio::test]
    async fn test_register_accepts_any_2xx() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .and(body_json(serde_json::json!({
                "username": "bob",
                "email": "bob@example.com",
                "password": "pw",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_string("not json at all"))
            .expect(1)
            .mount(&server)
            .await;

        let registration = Registration {
            username: "bob".into(),
            email: "bob@example.com".into(),
            password: "pw".into(),
        };
        HttpClient::new(server.uri())
            .register(&registration)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_register_rejected_plain_text() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Username is required"))
            .mount(&server)
            .await;

        let registration = Registration {
            username: String::new(),
            email: "x@example.com".into(),
            password: "pw".into(),
        };
        let err = HttpClient::new(server.uri())
            .register(&registration)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m == "Username is required"));
    }

    #[tokio::test]
    async fn test_login_html_error_page_uses_fallback() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(502).set_body_raw(
                "<html><body><h1>502 Bad Gateway</h1></body></html>",
                "text/html",
            ))
            .mount(&server)
            .await;

        let credentials = Credentials {
            username: "alice".into(),
            password: "pw".into(),
        };
        let err = HttpClient::new(server.uri())
            .login(&credentials)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Auth(ref m) if m == "Login failed"));
    }

    #[tokio::test]
    async fn test_list_posts_tolerates_null_fields() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 3, "authorId": 2, "content": "kept"},
                {"id": 2, "authorId": null, "content": "orphan"},
                {"id": 1, "authorId": 4, "content": null},
            ])))
            .mount(&server)
            .await;

        let posts = HttpClient::new(server.uri()).list_posts().await.unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].content, "kept");
        assert_eq!(posts[1].author_id, None);
        assert_eq!(posts[2].content, "");
    }

    #[tokio::test]
    async fn test_list_posts_preserves_server_order() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 2, "authorId": 5, "content": "second", "likes": 0},
                {"id": 1, "authorId": 1, "content": "first", "likes": 3},
            ])))
            .mount(&server)
            .await;

        let posts = HttpClient::new(server.uri()).list_posts().await.unwrap();
        let contents: Vec<&str> = posts.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, ["second", "first"]);
        assert_eq!(posts[0].author_id, Some(5));
    }

    #[tokio::test]
    async fn test_list_posts_server_error_is_transport() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = HttpClient::new(server.uri()).list_posts().await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_create_post_empty_content_sends_nothing() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let err = HttpClient::new(server.uri())
            .create_post(1, "")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::EmptyContent));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_post() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .and(body_json(serde_json::json!({"authorId": 1, "content": "hi"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"message": "Post Created"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        HttpClient::new(server.uri()).create_post(1, "hi").await.unwrap();
    }

    #[tokio::test]
    async fn test_create_post_rejected() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = HttpClient::new(server.uri())
            .create_post(1, "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Submission(ref m) if m == "Post failed"));
    }

    #[tokio::test]
    async fn test_unreachable_origin_is_transport() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let err = HttpClient::new("http://127.0.0.1:9")
            .login(&Credentials::new("alice", "pw"))
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert!(err.user_message().is_none());
    }
}
