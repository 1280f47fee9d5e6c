use crate::core::nav::{NavEntry, NavigationRequest, NavigationState, NAV_ITEMS};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;

use super::icons::{Icon, IconKind};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const SQUIGGLE_PATH: &str = "M1 5.39971C7.48565 -1.08593 6.44837 -0.12827 8.33643 6.47992C8.34809 6.52075 11.6019 2.72875 12.3422 2.33912C13.8991 1.5197 16.6594 2.96924 18.3734 2.96924C21.665 2.96924 23.1972 1.69759 26.745 2.78921C29.7551 3.71539 32.6954 3.7794 35.8368 3.7794";

const MOBILE_MENU_ID: &str = "navbar-mobile-menu";

/// Site header with the primary navigation.
///
/// The bar owns only its interaction state (hover, mobile menu). The active
/// route comes in as a prop on every render, and item activation is reported
/// through `on_navigate`; the platform shell decides how to route.
#[component]
pub fn NavigationBar(active_route: String, on_navigate: EventHandler<NavigationRequest>) -> Element {
    i18n::init();

    let state = use_signal(NavigationState::default);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        NavigationHeader { active_route, state, on_navigate }
    }
}

#[component]
fn NavigationHeader(
    active_route: String,
    state: Signal<NavigationState>,
    on_navigate: EventHandler<NavigationRequest>,
) -> Element {
    let mut state = state;
    let lang_code_ctx = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.map(|c| c()).unwrap_or_default();

    let entries = state.read().entries(&active_route);
    let menu_open = state.read().menu().is_open();
    let (toggle_label, toggle_icon) = if menu_open {
        (t!("nav-menu-close"), IconKind::Close)
    } else {
        (t!("nav-menu-open"), IconKind::Menu)
    };

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                a {
                    class: "navbar__brand",
                    href: "/",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        let request = state.write().select(&NAV_ITEMS[0]);
                        on_navigate.call(request);
                    },
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", {brand_name()} }
                }

                nav {
                    class: "navbar__links",
                    aria_label: t!("nav-primary-label"),
                    for entry in entries.iter().copied() {
                        {render_link(entry, state, on_navigate)}
                    }
                }

                div { class: "navbar__actions",
                    LocaleSwitcher {}

                    button {
                        r#type: "button",
                        class: "navbar__toggle",
                        aria_expanded: "{menu_open}",
                        aria_controls: MOBILE_MENU_ID,
                        aria_label: "{toggle_label}",
                        onclick: move |_| {
                            let menu = state.write().toggle_menu();
                            tracing::debug!(?menu, "mobile menu toggled");
                        },
                        Icon { kind: toggle_icon, class: "navbar__toggle-icon" }
                    }
                }
            }

            if menu_open {
                nav {
                    id: MOBILE_MENU_ID,
                    class: "navbar__mobile",
                    aria_label: t!("nav-primary-label"),
                    for entry in entries.iter().copied() {
                        {render_link(entry, state, on_navigate)}
                    }
                }
            }
        }
    }
}

/// Language picker. Writes the new tag into a `Signal<String>` context if
/// the platform provided one, so the shell can remount routed content.
#[component]
fn LocaleSwitcher() -> Element {
    let lang_code_ctx = try_use_context::<Signal<String>>();
    let mut current_lang =
        use_signal(|| initial_language(lang_code_ctx.map(|code| code.peek().as_str().to_owned())));
    let langs = use_signal(i18n::available_languages);

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::info!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("failed to switch language to {val}: {err}"),
        }
    };

    if langs().len() < 2 {
        return rsx! {};
    }

    rsx! {
        div { class: "navbar__locale",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {t!("nav-language-label")}
            }
            select {
                id: "locale-select",
                value: "{current_lang()}",
                oninput: on_change,
                { langs().iter().map(|code| {
                    let c = code.clone();
                    rsx!{
                        option { key: "{c}", value: "{c}", "{c}" }
                    }
                })}
            }
        }
    }
}

/// The shell's language signal wins; without one, whatever the loader
/// negotiated at startup.
fn initial_language(from_context: Option<String>) -> String {
    from_context
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(i18n::current_language)
}

fn render_link(
    entry: NavEntry,
    mut state: Signal<NavigationState>,
    on_navigate: EventHandler<NavigationRequest>,
) -> Element {
    let item = entry.item;
    let label = i18n::tr(item.label_key);
    let class = if entry.selected {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    };

    rsx! {
        a {
            key: "{item.name}",
            class,
            href: item.href,
            aria_current: entry.selected.then_some("page"),
            onmouseenter: move |_| {
                state.write().hover(item);
            },
            onmouseleave: move |_| state.write().leave(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                let request = state.write().select(item);
                tracing::debug!(route = %request.target, "navigation requested");
                on_navigate.call(request);
            },
            "{label}"
            if entry.underline() {
                SquigglyUnderline {}
            }
        }
    }
}

/// Hand-drawn underline under the hovered or current link. Purely decorative.
#[component]
fn SquigglyUnderline() -> Element {
    rsx! {
        span { class: "navbar__squiggle", aria_hidden: "true",
            svg {
                width: "37",
                height: "8",
                view_box: "0 0 37 8",
                fill: "none",
                path {
                    d: SQUIGGLE_PATH,
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                }
            }
        }
    }
}

fn brand_name() -> String {
    crate::core::content::portfolio()
        .map(|p| p.site.brand.clone())
        .unwrap_or_else(|_| "Folio".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct HeaderHarnessProps {
        route: String,
        seeded: NavigationState,
    }

    #[allow(non_snake_case)]
    fn HeaderHarness(props: HeaderHarnessProps) -> Element {
        let state = use_signal(|| props.seeded.clone());
        rsx! {
            NavigationHeader {
                active_route: props.route.clone(),
                state,
                on_navigate: move |_: NavigationRequest| {},
            }
        }
    }

    fn render_header(route: &str, seeded: NavigationState) -> String {
        i18n::init();
        let mut dom = VirtualDom::new_with_props(
            HeaderHarness,
            HeaderHarnessProps {
                route: route.to_string(),
                seeded,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    const CURRENT: &str = r#"aria-current="page""#;
    const SQUIGGLE: &str = r#"class="navbar__squiggle""#;
    const MOBILE: &str = r#" id="navbar-mobile-menu""#;

    #[test]
    fn current_page_is_marked_once() {
        let html = render_header("/projects", NavigationState::default());
        assert_eq!(count(&html, CURRENT), 1, "{html}");
        assert_eq!(count(&html, SQUIGGLE), 1, "{html}");
        assert!(html.contains(r#"href="/projects""#));
    }

    #[test]
    fn unknown_route_renders_without_a_current_page() {
        let html = render_header("/unknown", NavigationState::default());
        assert_eq!(count(&html, CURRENT), 0);
        assert_eq!(count(&html, SQUIGGLE), 0);
        for item in &NAV_ITEMS {
            assert!(html.contains(&format!(r#"href="{}""#, item.href)), "{}", item.href);
        }
    }

    #[test]
    fn hovered_item_gets_its_own_squiggle() {
        let mut seeded = NavigationState::default();
        seeded.hover(&NAV_ITEMS[3]);
        let html = render_header("/", seeded);
        assert_eq!(count(&html, CURRENT), 1);
        assert_eq!(count(&html, SQUIGGLE), 2);
    }

    #[test]
    fn mobile_menu_renders_only_while_open() {
        let closed = render_header("/projects", NavigationState::default());
        assert_eq!(count(&closed, MOBILE), 0);
        assert!(closed.contains(r#"aria-expanded="false""#));

        let mut seeded = NavigationState::default();
        seeded.toggle_menu();
        let open = render_header("/projects", seeded);
        assert_eq!(count(&open, MOBILE), 1);
        assert!(open.contains(r#"aria-expanded="true""#));
        // Desktop and mobile lists both mark the current page.
        assert_eq!(count(&open, CURRENT), 2);
    }

    #[allow(non_snake_case)]
    fn BarOnUnknownRoute() -> Element {
        rsx! {
            NavigationBar {
                active_route: "/unknown".to_string(),
                on_navigate: move |_: NavigationRequest| {},
            }
        }
    }

    #[test]
    fn full_bar_renders_for_an_unknown_route() {
        let mut dom = VirtualDom::new(BarOnUnknownRoute);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"id="navbar""#));
        assert_eq!(count(&html, CURRENT), 0);
        assert_eq!(count(&html, MOBILE), 0);
    }

    #[test]
    fn initial_language_prefers_the_shell_signal() {
        i18n::init();
        assert_eq!(initial_language(Some("es-ES".to_string())), "es-ES");
        assert_eq!(initial_language(None), i18n::current_language());
        assert_eq!(initial_language(Some(String::new())), i18n::current_language());
    }
}
