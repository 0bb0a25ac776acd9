//! Route gating.
//!
//! | Screen | Path | Signed out | Signed in |
//! |--------|------|-----------|-----------|
//! | Login | `/login` | show | redirect to `/` |
//! | Register | `/register` | show | redirect to `/` |
//! | Feed | `/` | redirect to `/login` | show |
//!
//! Any other path is treated as `/`.

/// One of the three screens the client can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Register,
    Feed,
}

/// Gating decision for a requested screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Show(Screen),
    Redirect(Screen),
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Login, Screen::Register, Screen::Feed];

    pub fn path(self) -> &'static str {
        match self {
            Screen::Login => "/login",
            Screen::Register => "/register",
            Screen::Feed => "/",
        }
    }

    /// Map a path to its screen. Unknown paths map to the feed.
    pub fn from_path(path: &str) -> Screen {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/login" => Screen::Login,
            "/register" => Screen::Register,
            _ => Screen::Feed,
        }
    }

    pub fn requires_session(self) -> bool {
        matches!(self, Screen::Feed)
    }
}

/// Decide whether `screen` may render for the given authentication state.
pub fn gate(screen: Screen, authenticated: bool) -> Gate {
    match (screen.requires_session(), authenticated) {
        (true, false) => Gate::Redirect(Screen::Login),
        (false, true) => Gate::Redirect(Screen::Feed),
        _ => Gate::Show(screen),
    }
}

/// The screen that ends up rendering after following redirects.
pub fn resolve(screen: Screen, authenticated: bool) -> Screen {
    let mut current = screen;
    // Every redirect lands on a screen that shows, so this settles in one hop.
    for _ in 0..Screen::ALL.len() {
        match gate(current, authenticated) {
            Gate::Show(shown) => return shown,
            Gate::Redirect(next) => current = next,
        }
    }
    current
}
