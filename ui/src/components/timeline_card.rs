use dioxus::prelude::*;

use crate::core::content::TimelineEntry;
use crate::core::motion;

use super::icons::{Icon, IconKind};

#[component]
pub fn TimelineCard(entry: TimelineEntry, index: usize, icon: IconKind) -> Element {
    let period = entry.period.label(&crate::t!("experience-present"));
    let delay = motion::stagger_style(index);

    rsx! {
        article { class: "timeline-card reveal", style: "{delay}",
            div { class: "timeline-card__rail", aria_hidden: "true",
                span { class: "timeline-card__dot" }
            }
            div { class: "timeline-card__body",
                span { class: "timeline-card__badge",
                    Icon { kind: icon, class: "icon icon--sm" }
                }
                header { class: "timeline-card__header",
                    h3 { class: "timeline-card__title", "{entry.title}" }
                    p { class: "timeline-card__org", "{entry.organization}" }
                    p { class: "timeline-card__meta", "{period} | {entry.location}" }
                }
                p { class: "timeline-card__description", "{entry.description}" }
                if !entry.tags.is_empty() {
                    ul { class: "tag-list",
                        for tag in entry.tags.iter() {
                            li { key: "{tag}", class: "tag", "{tag}" }
                        }
                    }
                }
            }
        }
    }
}
