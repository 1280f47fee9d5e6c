use dioxus::prelude::*;

use crate::components::{NavLink, WordSlider};
use crate::core::content::ContentState;

/// Letters of the hero monogram, each with its own typographic treatment.
const MONOGRAM: [(&str, &str); 5] = [
    ("F", "hero__glyph hero__glyph--sans"),
    ("o", "hero__glyph hero__glyph--mono"),
    ("L", "hero__glyph hero__glyph--serif"),
    ("i", "hero__glyph hero__glyph--serif-bold"),
    ("O", "hero__glyph hero__glyph--sans-medium"),
];

#[component]
pub fn Home() -> Element {
    let content = ContentState::load();
    let role = content
        .portfolio
        .map(|p| p.site.role.clone())
        .unwrap_or_default();

    rsx! {
        section { class: "page page-home hero",
            div { class: "hero__content reveal",
                h1 { class: "hero__monogram", aria_label: "Folio",
                    for (letter, class) in MONOGRAM {
                        span { key: "{class}", class, aria_hidden: "true", "{letter}" }
                    }
                }
                h2 { class: "hero__role", "{role}" }
                p { class: "hero__slider",
                    span { class: "hero__slider-prefix", {crate::t!("home-slider-prefix")} }
                    WordSlider {}
                }
                p { class: "hero__tagline", {crate::t!("home-tagline")} }
                div { class: "hero__cta",
                    NavLink { to: "/projects", class: "button button--primary button--glow",
                        {crate::t!("home-cta")}
                    }
                }
            }
        }
    }
}
