//! Registration page view with username/email/password form.

use api::Registration;
use dioxus::prelude::*;
use ui::{use_api, use_flash};

use crate::Route;

const REGISTERED: &str = "Registration successful! Please log in.";

/// Register page component.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut flash = use_flash();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let registration = Registration {
                username: username(),
                email: email(),
                password: password(),
            };
            match ui::register_account(&api, &registration).await {
                Ok(()) => {
                    flash.show(REGISTERED);
                    nav.push(Route::Login {});
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
                h2 { "Create Account" }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_register,
                    class: "auth-form",

                    input {
                        r#type: "text",
                        placeholder: "Username",
                        required: true,
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }

                    input {
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    input {
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button { class: "primary-btn", r#type: "submit", "Sign Up" }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
