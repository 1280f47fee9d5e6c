use dioxus::prelude::*;

use crate::components::NavLink;

/// Catch-all page. The navigation bar shows no active item here.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page-not-found",
            div { class: "notice",
                h1 { class: "notice__title", {crate::t!("not-found-title")} }
                p { class: "notice__detail", {crate::t!("not-found-body", path = path)} }
                NavLink { to: "/", class: "button button--ghost", {crate::t!("not-found-home")} }
            }
        }
    }
}
