use dioxus::prelude::*;

use crate::core::motion::{WordCycle, WORD_INTERVAL_MS};
use crate::core::timing;

pub const SLIDER_WORDS: [&str; 7] = ["Design", "Code", "Create", "Repeat", "Music", "Draw", "Travel"];

/// Vertical ticker cycling through [`SLIDER_WORDS`].
#[component]
pub fn WordSlider() -> Element {
    let mut cycle = use_signal(|| WordCycle::new(SLIDER_WORDS.len()));

    use_future(move || async move {
        loop {
            timing::sleep_ms(WORD_INTERVAL_MS).await;
            cycle.write().advance();
        }
    });

    let current = cycle.read().index();
    let track_style = format!(
        "transform: translateY(-{:.4}%);",
        cycle.read().offset_percent()
    );

    rsx! {
        span { class: "word-slider", aria_live: "polite",
            span { class: "word-slider__track", style: "{track_style}",
                for (idx, word) in SLIDER_WORDS.iter().enumerate() {
                    span {
                        key: "{word}",
                        class: if idx == current { "word-slider__word word-slider__word--active" } else { "word-slider__word" },
                        aria_hidden: if idx == current { "false" } else { "true" },
                        "{word}"
                    }
                }
            }
        }
    }
}
