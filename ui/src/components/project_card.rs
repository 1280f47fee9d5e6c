use dioxus::prelude::*;

use crate::core::content::{Project, ProjectCategory};

use super::icons::{Icon, IconKind};

#[component]
pub fn ProjectCard(project: Project) -> Element {
    let variant = match project.category {
        ProjectCategory::Professional => "project-card project-card--professional reveal",
        ProjectCategory::Academic => "project-card project-card--academic reveal",
    };
    let view_code = crate::t!("projects-view-code");

    rsx! {
        article { class: variant,
            div { class: "project-card__top",
                div { class: "project-card__heading",
                    span { class: "project-card__icon",
                        Icon { kind: project.icon, class: "icon icon--lg" }
                    }
                    h3 { class: "project-card__title", "{project.title}" }
                    p { class: "project-card__kind", "{project.kind}" }
                }
                a {
                    class: "project-card__link",
                    href: "{project.link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    title: "{view_code}",
                    aria_label: "{view_code}",
                    Icon { kind: IconKind::Github, class: "icon icon--md" }
                }
            }
            p { class: "project-card__description", "{project.description}" }
            div { class: "project-card__stack",
                p { class: "project-card__stack-label", {crate::t!("projects-tech-stack")} }
                p { class: "project-card__stack-value", "{project.tech_stack}" }
            }
        }
    }
}
