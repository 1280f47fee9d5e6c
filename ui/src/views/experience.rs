use dioxus::prelude::*;

use crate::components::{ContentUnavailable, Icon, IconKind, TimelineCard};
use crate::core::content::{ContentState, TimelineEntry};

#[component]
pub fn Experience() -> Element {
    let content = ContentState::load();
    let Some(portfolio) = content.portfolio else {
        return rsx! { ContentUnavailable { message: content.error.unwrap_or_default() } };
    };

    rsx! {
        section { class: "page page-experience",
            header { class: "page__header reveal",
                h1 { class: "page__title",
                    span { class: "page__index", {crate::t!("experience-index")} }
                    {crate::t!("experience-title")}
                }
                p { class: "page__intro", {crate::t!("experience-intro")} }
            }

            {timeline_section(
                crate::t!("experience-work"),
                IconKind::Code,
                IconKind::Briefcase,
                portfolio.work_timeline(),
            )}

            div { class: "timeline-divider", aria_hidden: "true" }

            {timeline_section(
                crate::t!("experience-education"),
                IconKind::School,
                IconKind::School,
                portfolio.education_timeline(),
            )}

            footer { class: "page__footer",
                p { {crate::t!("experience-footer")} }
            }
        }
    }
}

fn timeline_section(
    heading: String,
    heading_icon: IconKind,
    card_icon: IconKind,
    entries: Vec<&TimelineEntry>,
) -> Element {
    rsx! {
        section { class: "timeline",
            div { class: "section-heading",
                span { class: "section-heading__icon",
                    Icon { kind: heading_icon, class: "icon icon--md" }
                }
                h2 { class: "section-heading__title", "{heading}" }
            }
            div { class: "timeline__entries",
                for (index, entry) in entries.into_iter().enumerate() {
                    TimelineCard {
                        key: "{entry.title}-{entry.organization}",
                        entry: entry.clone(),
                        index,
                        icon: card_icon,
                    }
                }
            }
        }
    }
}
