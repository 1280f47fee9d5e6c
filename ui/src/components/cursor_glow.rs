use dioxus::prelude::*;

use crate::core::motion;

/// Blurred disc trailing the pointer. Hidden until the first pointer event, so
/// touch devices never see it.
#[component]
pub fn CursorGlow(pointer: Signal<Option<(f64, f64)>>) -> Element {
    let Some((x, y)) = pointer() else {
        return rsx! {};
    };
    let style = motion::cursor_transform(x, y);

    rsx! {
        div { class: "cursor-glow", aria_hidden: "true", style: "{style}" }
    }
}
