//! Authentication context and hooks for the UI.
//!
//! [`SessionContext`] is created once by [`SessionProvider`] and shared through
//! Dioxus context. It pairs the persisted [`store::SessionStore`] with a signal
//! that every view reads, so signing in or out is observed immediately by the
//! router and the navbar without reloading the page.

use api::{ApiError, Credentials, Registration, Session, SocialApi};
use dioxus::prelude::*;
use store::{KeyValueStore, SessionStore};

use crate::storage::{make_session_store, PlatformStore};
use crate::Icon;
use crate::icons::FaRightFromBracket;

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

/// Shared handle to the current session.
#[derive(Clone, Copy)]
pub struct SessionContext {
    active: Signal<Option<Session>>,
    store: Signal<SessionStore<PlatformStore>>,
}

impl SessionContext {
    /// Build the context from whatever the store holds.
    pub fn open(store: SessionStore<PlatformStore>) -> Self {
        Self {
            active: Signal::new(restore(&store)),
            store: Signal::new(store),
        }
    }

    /// Whether a user is signed in. Subscribes the caller to changes.
    pub fn is_authenticated(&self) -> bool {
        self.active.read().is_some()
    }

    /// The signed-in session, if any.
    pub fn current(&self) -> Option<Session> {
        self.active.read().clone()
    }

    /// A handle to the persisted store.
    pub fn store(&self) -> SessionStore<PlatformStore> {
        self.store.peek().clone()
    }

    /// Mark `session` as active. The caller has already persisted it.
    pub fn set_active(&mut self, session: Session) {
        tracing::info!(username = %session.username, "signed in");
        self.active.set(Some(session));
    }

    /// Clear the persisted session and mark the client signed out.
    pub fn sign_out(&mut self) {
        self.store.peek().clear();
        self.active.set(None);
        tracing::info!("signed out");
    }
}

/// Read the persisted session at startup.
///
/// A token without a readable session (e.g. a corrupt user id) is cleared so
/// the client starts signed out rather than half signed in.
pub fn restore<S: KeyValueStore>(store: &SessionStore<S>) -> Option<Session> {
    if !store.has_token() {
        return None;
    }
    let loaded = store.load();
    if loaded.is_none() {
        tracing::warn!("discarding malformed stored session");
        store.clear();
    }
    loaded
}

/// Get the shared session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Provider component that owns the session context.
/// Wrap your app with this component to enable authentication.
///
/// An empty `namespace` leaves the session keys unscoped.
#[component]
pub fn SessionProvider(namespace: String, children: Element) -> Element {
    use_context_provider(|| {
        let namespace = Some(namespace.trim()).filter(|ns| !ns.is_empty());
        SessionContext::open(make_session_store(namespace))
    });

    rsx! {
        {children}
    }
}

/// Log in and persist the resulting session.
///
/// The store is written only on success. The error is the message to show in
/// the login form.
pub async fn sign_in<A, S>(
    api: &A,
    store: &SessionStore<S>,
    credentials: &Credentials,
) -> Result<Session, String>
where
    A: SocialApi,
    S: KeyValueStore,
{
    match api.login(credentials).await {
        Ok(resp) => {
            let session = Session::from(resp);
            store.set_session(&session);
            Ok(session)
        }
        Err(e) => Err(form_message(&e, LOGIN_FAILED)),
    }
}

/// Create an account. The error is the message to show in the form.
pub async fn register_account<A: SocialApi>(
    api: &A,
    registration: &Registration,
) -> Result<(), String> {
    api.register(registration)
        .await
        .map_err(|e| form_message(&e, REGISTRATION_FAILED))
}

fn form_message(err: &ApiError, fallback: &str) -> String {
    if err.is_transport() {
        tracing::warn!("{err}");
    }
    err.user_message().unwrap_or(fallback).to_string()
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| session.sign_out(),
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
