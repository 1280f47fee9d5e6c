use dioxus::prelude::*;

#[component]
pub fn ContentUnavailable(message: String) -> Element {
    rsx! {
        section { class: "page",
            div { class: "notice notice--error", role: "alert",
                h2 { class: "notice__title", {crate::t!("content-unavailable-title")} }
                p { class: "notice__detail", "{message}" }
            }
        }
    }
}
