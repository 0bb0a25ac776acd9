use dioxus::prelude::*;

use store::ClientConfig;
use ui::{use_session, ApiProvider, FlashProvider, Navbar, Screen, SessionProvider};
use views::{Feed, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Feed {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    fn screen(&self) -> Screen {
        match self {
            Route::Feed {} | Route::NotFound { .. } => Screen::Feed,
            Route::Login {} => Screen::Login,
            Route::Register {} => Screen::Register,
        }
    }
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Feed => Route::Feed {},
            Screen::Login => Route::Login {},
            Screen::Register => Route::Register {},
        }
    }
}

const CONFIG_TOML: &str = include_str!("../gridsocial.toml");

fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {e}", ClientConfig::filename());
        ClientConfig::default()
    });
    config.with_base_url(option_env!("GRIDSOCIAL_API_URL"))
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ApiProvider {
            base_url: config.api.base_url.clone(),
            SessionProvider {
                namespace: config.session.namespace.clone(),
                FlashProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Gates every route on the session and renders the navbar above it.
#[component]
fn AppShell() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let target = Route::from(ui::resolve(route.screen(), session.is_authenticated()));
    if target != route {
        nav.replace(target);
        return rsx! {};
    }

    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}

/// Unknown paths are redirected by [`AppShell`] before this renders.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(?segments, "unknown path");
    rsx! {}
}
