use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Shared theme, also embedded for native release builds where the asset
/// directory may not ship next to the binary.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[component]
pub fn ThemeStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }
    }
}
