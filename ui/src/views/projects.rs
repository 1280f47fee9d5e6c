use dioxus::prelude::*;

use crate::components::{ContentUnavailable, Icon, IconKind, ProjectCard};
use crate::core::content::{ContentState, ProjectCategory};
use crate::core::motion;

#[component]
pub fn Projects() -> Element {
    let content = ContentState::load();
    let Some(portfolio) = content.portfolio else {
        return rsx! { ContentUnavailable { message: content.error.unwrap_or_default() } };
    };

    let professional = portfolio.projects_in(ProjectCategory::Professional);
    let academic = portfolio.projects_in(ProjectCategory::Academic);

    rsx! {
        section { class: "page page-projects",
            header { class: "page__header reveal",
                h1 { class: "page__title",
                    span { class: "page__index", {crate::t!("projects-index")} }
                    {crate::t!("projects-title")}
                }
                p { class: "page__intro", {crate::t!("projects-intro")} }
            }

            if !professional.is_empty() {
                section { class: "projects-section",
                    h2 { class: "section-heading__title projects-section__title",
                        Icon { kind: IconKind::Briefcase, class: "icon icon--lg" }
                        {crate::t!("projects-professional")}
                    }
                    div { class: "projects-grid projects-grid--single",
                        for (index, project) in professional.into_iter().enumerate() {
                            div { key: "{project.title}", style: motion::stagger_style(index),
                                ProjectCard { project: project.clone() }
                            }
                        }
                    }
                }
            }

            if !academic.is_empty() {
                section { class: "projects-section",
                    h2 { class: "section-heading__title projects-section__title",
                        Icon { kind: IconKind::GraduationCap, class: "icon icon--lg" }
                        {crate::t!("projects-academic")}
                    }
                    div { class: "projects-grid projects-grid--double",
                        for (index, project) in academic.into_iter().enumerate() {
                            div { key: "{project.title}", style: motion::stagger_style(index),
                                ProjectCard { project: project.clone() }
                            }
                        }
                    }
                }
            }

            section { class: "page__cta",
                h2 { {crate::t!("projects-all-code-title")} }
                p { {crate::t!("projects-all-code-intro")} }
                a {
                    class: "button button--ghost",
                    href: "{portfolio.site.github_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { kind: IconKind::Github, class: "icon icon--sm" }
                    {crate::t!("projects-github-cta")}
                }
            }
        }
    }
}
