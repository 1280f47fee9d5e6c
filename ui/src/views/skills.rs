use dioxus::prelude::*;

use crate::components::{ContentUnavailable, Icon, IconKind, NavLink, SkillBar};
use crate::core::content::ContentState;
use crate::core::motion;

#[component]
pub fn Skills() -> Element {
    let content = ContentState::load();
    let Some(portfolio) = content.portfolio else {
        return rsx! { ContentUnavailable { message: content.error.unwrap_or_default() } };
    };

    rsx! {
        section { class: "page page-skills",
            header { class: "page__header reveal",
                h1 { class: "page__title",
                    span { class: "page__index", {crate::t!("skills-index")} }
                    {crate::t!("skills-title")}
                }
                p { class: "page__intro", {crate::t!("skills-intro")} }
            }

            div { class: "skills-grid",
                for (index, group) in portfolio.skills.iter().enumerate() {
                    article {
                        key: "{group.category}",
                        class: "skill-group reveal",
                        style: motion::stagger_style(index),
                        header { class: "skill-group__header",
                            Icon { kind: group.icon, class: "icon icon--lg skill-group__icon" }
                            h2 { class: "skill-group__title", "{group.category}" }
                        }
                        ul { class: "skill-group__list",
                            for skill in group.skills.iter() {
                                li { key: "{skill.name}", class: "skill-group__item",
                                    p { class: "skill-group__name", "{skill.name}" }
                                    SkillBar { skill: skill.clone() }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "page__cta",
                h2 { {crate::t!("skills-cert-title")} }
                p { {crate::t!("skills-cert-intro")} }
                NavLink { to: "/experience", class: "button button--primary",
                    Icon { kind: IconKind::Briefcase, class: "icon icon--sm" }
                    {crate::t!("skills-timeline-cta")}
                }
            }
        }
    }
}
