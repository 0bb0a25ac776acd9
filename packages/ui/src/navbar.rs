use dioxus::prelude::*;

use crate::auth::{use_session, LogoutButton};
use crate::Icon;
use crate::icons::FaUser;

pub const BRAND: &str = "GridSocial";

#[component]
pub fn Navbar() -> Element {
    let session = use_session();

    rsx! {
        nav {
            class: "navbar",
            div { class: "navbar__brand", "{BRAND}" }
            if let Some(username) = session.current().map(|active| active.username) {
                div {
                    class: "navbar__user",
                    Icon { icon: FaUser, width: 12, height: 12 }
                    span { "{username}" }
                    LogoutButton { class: "navbar__logout" }
                }
            }
        }
    }
}
