//! Login page view with username/password form.

use api::Credentials;
use dioxus::prelude::*;
use ui::{use_api, use_flash, use_session, FlashBanner};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut flash = use_flash();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            flash.dismiss();

            let credentials = Credentials::new(username(), password());
            match ui::sign_in(&api, &session.store(), &credentials).await {
                Ok(active) => {
                    session.set_active(active);
                    nav.replace(Route::Feed {});
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { "Login" }

                FlashBanner {}

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_login,
                    class: "auth-form",

                    label { r#for: "login-username", "Username" }
                    input {
                        id: "login-username",
                        r#type: "text",
                        placeholder: "Enter username",
                        required: true,
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }

                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        placeholder: "Enter password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button { class: "primary-btn", r#type: "submit", "Sign In" }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
