#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::components::{SiteShell, THEME_CSS_INLINE};
use ui::views::{Contact, Experience, Home, NotFound, Projects, Skills};
use ui::NavigationRequest;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/experience")]
    Experience {},
    #[route("/projects")]
    Projects {},
    #[route("/skills")]
    Skills {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Folio – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // Some window managers ignore the builder flag.
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // The webview has no asset server in packaged builds.
        document::Style { "{THEME_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout around the shared shell; owns the mapping from navigation
/// requests to the desktop `Route` enum.
#[component]
fn DesktopShell() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let on_navigate = move |request: NavigationRequest| match request.target.parse::<Route>() {
        Ok(next) => {
            navigator.push(next);
        }
        Err(err) => {
            tracing::warn!(target_route = %request.target, "unroutable navigation request: {err}")
        }
    };

    rsx! {
        SiteShell {
            active_route: route.to_string(),
            on_navigate,
            Outlet::<Route> {}
        }
    }
}
