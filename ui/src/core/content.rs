//! Portfolio content: site configuration plus the records each page renders.
//!
//! The document is embedded at compile time from `content/portfolio.json` and
//! decoded once. Views go through [`ContentState::load`] so a broken document
//! shows a placeholder instead of taking the app down.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use super::period::Period;
use super::skills::SkillLevel;

const EMBEDDED_PORTFOLIO: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/content/portfolio.json"
));

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio document is not valid: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid month `{raw}` (expected YYYY-MM): {reason}")]
    InvalidPeriod { raw: String, reason: String },
    #[error("period ends ({end}) before it starts ({start})")]
    PeriodOrder { start: String, end: String },
    #[error("duplicate {kind} `{name}`")]
    Duplicate { kind: &'static str, name: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    pub owner: String,
    pub role: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub email: String,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub organization: String,
    pub location: String,
    pub period: Period,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Professional,
    Academic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Briefcase,
    Zap,
    Shield,
    Code,
    Server,
    Database,
    Terminal,
    Mail,
    Phone,
    Linkedin,
    Github,
    GraduationCap,
    School,
    Send,
    MapPin,
    MessageCircle,
    Star,
    Menu,
    Close,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub kind: String,
    pub category: ProjectCategory,
    pub icon: IconKind,
    pub description: String,
    pub tech_stack: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub icon: IconKind,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactChannel {
    pub title: String,
    pub icon: IconKind,
    pub href: String,
    pub label: String,
    #[serde(default)]
    pub external: bool,
}

impl ContactChannel {
    pub fn target(&self) -> &'static str {
        if self.external {
            "_blank"
        } else {
            "_self"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub site: SiteConfig,
    pub work: Vec<TimelineEntry>,
    pub education: Vec<TimelineEntry>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub contacts: Vec<ContactChannel>,
}

impl Portfolio {
    pub fn from_json(src: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(src)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        for entry in self.work.iter().chain(&self.education) {
            entry.period.check_order()?;
        }
        ensure_unique("project", self.projects.iter().map(|p| p.title.as_str()))?;
        ensure_unique("skill group", self.skills.iter().map(|g| g.category.as_str()))?;
        ensure_unique("contact channel", self.contacts.iter().map(|c| c.title.as_str()))?;
        Ok(())
    }

    /// Work history, most recent first.
    pub fn work_timeline(&self) -> Vec<&TimelineEntry> {
        most_recent_first(&self.work)
    }

    pub fn education_timeline(&self) -> Vec<&TimelineEntry> {
        most_recent_first(&self.education)
    }

    /// Projects of one category, in declaration order.
    pub fn projects_in(&self, category: ProjectCategory) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ContentError::Duplicate {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn most_recent_first(entries: &[TimelineEntry]) -> Vec<&TimelineEntry> {
    let mut sorted: Vec<&TimelineEntry> = entries.iter().collect();
    // Stable: entries starting in the same month keep declaration order.
    sorted.sort_by(|a, b| b.period.start.cmp(&a.period.start));
    sorted
}

static PORTFOLIO: Lazy<Result<Portfolio, ContentError>> =
    Lazy::new(|| Portfolio::from_json(EMBEDDED_PORTFOLIO));

/// The embedded portfolio, decoded on first access.
pub fn portfolio() -> Result<&'static Portfolio, &'static ContentError> {
    Lazy::force(&PORTFOLIO).as_ref()
}

/// What a view needs to render: the content, or why it is missing.
#[derive(Debug, Clone, Default)]
pub struct ContentState {
    pub portfolio: Option<&'static Portfolio>,
    pub error: Option<String>,
}

impl ContentState {
    pub fn load() -> Self {
        match portfolio() {
            Ok(portfolio) => Self {
                portfolio: Some(portfolio),
                error: None,
            },
            Err(err) => {
                tracing::warn!("portfolio content unavailable: {err}");
                Self {
                    portfolio: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "site": {
            "brand": "Folio", "owner": "Ada", "role": "Engineer", "title": "Ada",
            "description": "d", "location": "Earth", "email": "ada@example.com",
            "github_url": "https://github.com/ada"
        },
        "work": [
            { "title": "Old", "organization": "A", "location": "X",
              "period": { "start": "2020-01", "end": "2021-01" }, "description": "" },
            { "title": "New", "organization": "B", "location": "Y",
              "period": { "start": "2024-03" }, "description": "", "tags": ["Rust"] }
        ],
        "education": [],
        "projects": [
            { "title": "P1", "kind": "k", "category": "academic", "icon": "zap",
              "description": "", "tech_stack": "", "link": "https://example.com/1" },
            { "title": "P2", "kind": "k", "category": "professional", "icon": "briefcase",
              "description": "", "tech_stack": "", "link": "https://example.com/2" },
            { "title": "P3", "kind": "k", "category": "academic", "icon": "code",
              "description": "", "tech_stack": "", "link": "https://example.com/3" }
        ],
        "skills": [],
        "contacts": []
    }"#;

    #[test]
    fn embedded_document_decodes() {
        let portfolio = portfolio().expect("embedded portfolio should be valid");
        assert!(!portfolio.site.brand.is_empty());
        assert!(!portfolio.projects.is_empty());
    }

    #[test]
    fn timeline_is_most_recent_first() {
        let portfolio = Portfolio::from_json(MINIMAL).unwrap();
        let titles: Vec<_> = portfolio
            .work_timeline()
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["New", "Old"]);
        assert!(portfolio.work[1].period.is_ongoing());
    }

    #[test]
    fn projects_group_by_category_in_order() {
        let portfolio = Portfolio::from_json(MINIMAL).unwrap();
        let academic: Vec<_> = portfolio
            .projects_in(ProjectCategory::Academic)
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(academic, vec!["P1", "P3"]);
        assert_eq!(portfolio.projects_in(ProjectCategory::Professional).len(), 1);
    }

    #[test]
    fn bad_month_is_a_decode_error() {
        let broken = MINIMAL.replace("2024-03", "2024-3x");
        assert!(matches!(
            Portfolio::from_json(&broken),
            Err(ContentError::Decode(_))
        ));
    }

    #[test]
    fn backwards_period_is_rejected() {
        let broken = MINIMAL.replace("\"end\": \"2021-01\"", "\"end\": \"2019-01\"");
        assert!(matches!(
            Portfolio::from_json(&broken),
            Err(ContentError::PeriodOrder { .. })
        ));
    }

    #[test]
    fn duplicate_project_titles_are_rejected() {
        let broken = MINIMAL.replace("\"title\": \"P3\"", "\"title\": \"P1\"");
        match Portfolio::from_json(&broken) {
            Err(ContentError::Duplicate { kind, name }) => {
                assert_eq!(kind, "project");
                assert_eq!(name, "P1");
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn external_channels_open_in_new_tab() {
        let channel = ContactChannel {
            title: "Email".into(),
            icon: IconKind::Mail,
            href: "mailto:ada@example.com".into(),
            label: "ada@example.com".into(),
            external: true,
        };
        assert_eq!(channel.target(), "_blank");
    }
}
