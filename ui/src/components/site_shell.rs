use dioxus::prelude::*;

use crate::core::content;
use crate::core::nav::{NavigationRequest, NavigationSink};

use super::cursor_glow::CursorGlow;
use super::navigation_bar::NavigationBar;
use super::theme::ThemeStyles;

/// Page chrome shared by every route: theme, document metadata, navigation
/// bar, cursor glow. The platform layout renders its router outlet as
/// `children` and supplies the route plus a navigation handler.
#[component]
pub fn SiteShell(
    active_route: String,
    on_navigate: EventHandler<NavigationRequest>,
    children: Element,
) -> Element {
    use_context_provider(|| NavigationSink(on_navigate));
    let mut pointer = use_signal(|| None::<(f64, f64)>);

    let site = content::portfolio().ok().map(|p| &p.site);

    rsx! {
        ThemeStyles {}
        if let Some(site) = site {
            document::Title { "{site.title}" }
            document::Meta { name: "description", content: "{site.description}" }
        }

        div {
            class: "site",
            onmousemove: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                pointer.set(Some((point.x, point.y)));
            },
            div { class: "site__backdrop", aria_hidden: "true" }
            CursorGlow { pointer }
            NavigationBar { active_route, on_navigate }
            main { class: "site__main", {children} }
        }
    }
}
