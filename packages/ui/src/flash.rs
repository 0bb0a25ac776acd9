//! One-shot notices carried across a navigation.

use dioxus::prelude::*;

/// A notice shown on the next screen, e.g. after registering.
#[derive(Clone, Copy)]
pub struct Flash(Signal<Option<String>>);

impl Flash {
    pub fn show(&mut self, message: impl Into<String>) {
        self.0.set(Some(message.into()));
    }

    pub fn dismiss(&mut self) {
        self.0.set(None);
    }

    pub fn message(&self) -> Option<String> {
        self.0.read().clone()
    }
}

pub fn use_flash() -> Flash {
    use_context::<Flash>()
}

#[component]
pub fn FlashProvider(children: Element) -> Element {
    use_context_provider(|| Flash(Signal::new(None)));

    rsx! {
        {children}
    }
}

/// Renders the pending notice, if any, with a dismiss control.
#[component]
pub fn FlashBanner() -> Element {
    let mut flash = use_flash();

    let Some(message) = flash.message() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "flash",
            role: "status",
            span { "{message}" }
            button {
                class: "flash__dismiss",
                r#type: "button",
                onclick: move |_| flash.dismiss(),
                "×"
            }
        }
    }
}
