//! Skill proficiency scale.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum SkillLevel {
    Familiar,
    Proficient,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        Self::Familiar,
        Self::Proficient,
        Self::Advanced,
        Self::Expert,
    ];

    /// Fill of the proficiency bar, in percent.
    pub fn bar_width(self) -> u8 {
        match self {
            Self::Familiar => 40,
            Self::Proficient => 70,
            Self::Advanced => 85,
            Self::Expert => 95,
        }
    }

    /// CSS tone modifier, brighter for stronger skills.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Familiar => "skill-bar--familiar",
            Self::Proficient => "skill-bar--proficient",
            Self::Advanced => "skill-bar--advanced",
            Self::Expert => "skill-bar--expert",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Familiar => "skill-level-familiar",
            Self::Proficient => "skill-level-proficient",
            Self::Advanced => "skill-level-advanced",
            Self::Expert => "skill-level-expert",
        }
    }
}
