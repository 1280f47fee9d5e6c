//! Shared UI crate for Folio. Content, navigation state and every view live
//! here; the platform crates only supply routing and a window.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Site header (components/navigation_bar.rs)
    pub mod navigation_bar;
    pub use navigation_bar::NavigationBar;

    pub mod content_unavailable;
    pub mod cursor_glow;
    pub mod icons;
    pub mod nav_link;
    pub mod project_card;
    pub mod site_shell;
    pub mod skill_bar;
    pub mod theme;
    pub mod timeline_card;
    pub mod word_slider;

    pub use content_unavailable::ContentUnavailable;
    pub use cursor_glow::CursorGlow;
    pub use icons::{Icon, IconKind};
    pub use nav_link::NavLink;
    pub use project_card::ProjectCard;
    pub use site_shell::SiteShell;
    pub use skill_bar::SkillBar;
    pub use theme::{ThemeStyles, THEME_CSS_INLINE};
    pub use timeline_card::TimelineCard;
    pub use word_slider::WordSlider;
}

pub use core::nav::{NavigationItem, NavigationRequest, NAV_ITEMS};
