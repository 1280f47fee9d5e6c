use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::components::SiteShell;
use ui::views::{Contact, Experience, Home, NotFound, Projects, Skills};
use ui::NavigationRequest;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
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

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // The navbar's locale switcher writes here; keying the router on it
    // remounts routed content in the new language.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: feeds the current path to the shared shell and turns its
/// navigation requests back into `Route`s.
#[component]
fn WebShell() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let on_navigate = move |request: NavigationRequest| {
        match request.target.parse::<Route>() {
            Ok(next) => {
                navigator.push(next);
            }
            Err(err) => tracing::warn!(target_route = %request.target, "unroutable navigation request: {err}"),
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
