use dioxus::prelude::*;

use crate::core::nav::NavigationSink;

/// In-site link for content areas (calls to action). Clicks are forwarded to
/// the shell's navigation handler when one is in context; without one the
/// anchor falls back to a plain page load.
#[component]
pub fn NavLink(#[props(into)] to: String, #[props(default, into)] class: String, children: Element) -> Element {
    let sink = try_use_context::<NavigationSink>();
    let href = to.clone();

    rsx! {
        a {
            class,
            href,
            onclick: move |evt: MouseEvent| {
                if let Some(sink) = sink {
                    evt.prevent_default();
                    sink.request(to.clone());
                }
            },
            {children}
        }
    }
}
