use dioxus::prelude::*;

use crate::core::content::Skill;
use crate::i18n;

use super::icons::{Icon, IconKind};

/// Proficiency bar; the fill animates from zero via the `.skill-bar__fill` keyframes.
#[component]
pub fn SkillBar(skill: Skill) -> Element {
    let level = skill.level;
    let width = level.bar_width();
    let label = i18n::tr(level.label_key());
    let class = format!("skill-bar {}", level.css_class());

    rsx! {
        div { class,
            div {
                class: "skill-bar__track",
                role: "meter",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{width}",
                aria_label: "{label}",
                div { class: "skill-bar__fill", style: "width: {width}%;" }
            }
            span { class: "skill-bar__level", "{label}" }
            if let Some(tag) = skill.tag {
                span { class: "skill-bar__tag",
                    Icon { kind: IconKind::Star, class: "icon icon--xs" }
                    "{tag}"
                }
            }
        }
    }
}
