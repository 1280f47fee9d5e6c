//! Timing helpers for entrance animations and the decorative widgets.

/// Delay between consecutive cards in a staggered list.
pub const STAGGER_STEP_MS: u64 = 100;

/// Time each word stays on screen in the home page slider.
pub const WORD_INTERVAL_MS: u64 = 2_625;

/// Radius of the cursor glow; the disc is centred on the pointer.
pub const CURSOR_GLOW_RADIUS: f64 = 96.0;

pub fn stagger_delay_ms(index: usize) -> u64 {
    index as u64 * STAGGER_STEP_MS
}

/// Inline style delaying a `.reveal` element's entrance animation.
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {}ms;", stagger_delay_ms(index))
}

pub fn cursor_transform(x: f64, y: f64) -> String {
    format!(
        "transform: translate3d({:.0}px, {:.0}px, 0);",
        x - CURSOR_GLOW_RADIUS,
        y - CURSOR_GLOW_RADIUS
    )
}

/// Position in a fixed word list that wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCycle {
    index: usize,
    len: usize,
}

impl WordCycle {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Vertical offset of the slider track, in percent of its height.
    pub fn offset_percent(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            self.index as f64 * 100.0 / self.len as f64
        }
    }
}
