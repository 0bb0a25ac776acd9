//! # Session persistence
//!
//! A [`Session`] is the client-held proof of authentication: the opaque token
//! issued by the login endpoint plus the username and numeric user id that came
//! with it. [`SessionStore`] reads and writes those three fields through a
//! [`KeyValueStore`], so the same logic runs against browser `localStorage`
//! ([`crate::LocalStorage`]) and an in-memory map ([`crate::MemoryStore`]).
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `token` | opaque auth token |
//! | `username` | display name returned at login |
//! | `userId` | decimal string of the numeric user id |
//!
//! With a namespace every key is prefixed, e.g. `"staging:token"`.
//!
//! The presence of a non-empty token is the only authentication signal the
//! client has. There is no expiry and at most one session exists at a time.

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";
const USER_ID_KEY: &str = "userId";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub user_id: i64,
}

/// Session fields persisted in a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    kv: S,
    namespace: Option<String>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create an unscoped session store.
    pub fn new(kv: S) -> Self {
        Self::with_namespace(kv, None)
    }

    /// Create a session store whose keys are prefixed with `namespace`.
    pub fn with_namespace(kv: S, namespace: Option<&str>) -> Self {
        Self {
            kv,
            namespace: namespace.map(str::to_string),
        }
    }

    fn key(&self, name: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}:{name}"),
            None => name.to_string(),
        }
    }

    /// Overwrite all three session fields.
    pub fn set_session(&self, session: &Session) {
        self.kv.set(&self.key(TOKEN_KEY), &session.token);
        self.kv.set(&self.key(USERNAME_KEY), &session.username);
        self.kv.set(&self.key(USER_ID_KEY), &session.user_id.to_string());
    }

    /// Whether a non-empty token is stored.
    pub fn has_token(&self) -> bool {
        self.kv
            .get(&self.key(TOKEN_KEY))
            .is_some_and(|token| !token.is_empty())
    }

    /// Read the stored session.
    ///
    /// Returns `None` unless a non-empty token is present and the user id
    /// parses as an integer.
    pub fn load(&self) -> Option<Session> {
        let token = self.kv.get(&self.key(TOKEN_KEY)).filter(|t| !t.is_empty())?;
        let user_id = self
            .kv
            .get(&self.key(USER_ID_KEY))?
            .trim()
            .parse::<i64>()
            .ok()?;
        let username = self.kv.get(&self.key(USERNAME_KEY)).unwrap_or_default();
        Some(Session {
            token,
            username,
            user_id,
        })
    }

    /// Remove every session field.
    pub fn clear(&self) {
        for name in [TOKEN_KEY, USERNAME_KEY, USER_ID_KEY] {
            self.kv.remove(&self.key(name));
        }
    }
}
