//! Navigation model shared by every platform shell.
//!
//! Nothing here reads router state. The hosting shell passes the active route
//! in on every render and turns [`NavigationRequest`]s back into route changes,
//! so `ui` never needs to know a platform's `Route` enum.

use dioxus::prelude::EventHandler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationItem {
    /// Unique label, also the fallback-locale display text.
    pub name: &'static str,
    /// Route path the item points at.
    pub href: &'static str,
    /// Fluent message id used for the localized label.
    pub label_key: &'static str,
}

impl NavigationItem {
    pub const fn new(name: &'static str, href: &'static str, label_key: &'static str) -> Self {
        Self {
            name,
            href,
            label_key,
        }
    }
}

/// The site's primary navigation, in display order.
pub static NAV_ITEMS: [NavigationItem; 5] = [
    NavigationItem::new("Home", "/", "nav-home"),
    NavigationItem::new("Experience", "/experience", "nav-experience"),
    NavigationItem::new("Projects", "/projects", "nav-projects"),
    NavigationItem::new("Skills", "/skills", "nav-skills"),
    NavigationItem::new("Contact", "/contact", "nav-contact"),
];

/// Exact, case-sensitive match. `/projects/` does not select `/projects`.
pub fn is_selected(item: &NavigationItem, active_route: &str) -> bool {
    item.href == active_route
}

pub fn selected_item<'a>(
    items: &'a [NavigationItem],
    active_route: &str,
) -> Option<&'a NavigationItem> {
    items.iter().find(|item| is_selected(item, active_route))
}

/// A request for the host to change route. The bar never routes by itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: String,
}

impl NavigationRequest {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// Context handle through which nested views (call-to-action links) emit
/// navigation requests to the same host callback the bar uses.
#[derive(Clone, Copy)]
pub struct NavigationSink(pub EventHandler<NavigationRequest>);

impl NavigationSink {
    pub fn request(&self, target: impl Into<String>) {
        self.0.call(NavigationRequest::to(target));
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Render snapshot for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub item: &'static NavigationItem,
    pub selected: bool,
    pub hovered: bool,
}

impl NavEntry {
    /// The squiggle is shown for the current page and for the item under the pointer.
    pub fn underline(&self) -> bool {
        self.selected || self.hovered
    }
}

/// Per-instance interaction state of a navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    items: &'static [NavigationItem],
    hovered: Option<usize>,
    menu: MobileMenu,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::with_items(&NAV_ITEMS)
    }
}

impl NavigationState {
    pub fn with_items(items: &'static [NavigationItem]) -> Self {
        Self {
            items,
            hovered: None,
            menu: MobileMenu::Closed,
        }
    }

    pub fn menu(&self) -> MobileMenu {
        self.menu
    }

    pub fn hovered(&self) -> Option<&'static NavigationItem> {
        let items = self.items;
        self.hovered.map(|idx| &items[idx])
    }

    /// Marks `item` as hovered, replacing any previous hover. Returns `false`
    /// (leaving state untouched) if the item is not part of this bar.
    pub fn hover(&mut self, item: &NavigationItem) -> bool {
        self.hover_by_name(item.name)
    }

    pub fn hover_by_name(&mut self, name: &str) -> bool {
        match self.items.iter().position(|item| item.name == name) {
            Some(idx) => {
                self.hovered = Some(idx);
                true
            }
            None => false,
        }
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn is_hovered(&self, item: &NavigationItem) -> bool {
        self.hovered()
            .map(|hovered| hovered.name == item.name)
            .unwrap_or(false)
    }

    pub fn toggle_menu(&mut self) -> MobileMenu {
        self.menu = self.menu.toggled();
        self.menu
    }

    /// Item activation: collapses the mobile menu and hands the target back
    /// to the caller for the host to act on.
    pub fn select(&mut self, item: &NavigationItem) -> NavigationRequest {
        self.menu = MobileMenu::Closed;
        NavigationRequest::to(item.href)
    }

    pub fn entries(&self, active_route: &str) -> Vec<NavEntry> {
        let items = self.items;
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| NavEntry {
                item,
                selected: is_selected(item, active_route),
                hovered: self.hovered == Some(idx),
            })
            .collect()
    }

    pub fn shows_underline(&self, item: &NavigationItem, active_route: &str) -> bool {
        is_selected(item, active_route) || self.is_hovered(item)
    }
}
