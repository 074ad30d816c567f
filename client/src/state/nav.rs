//! Navigation bar chrome.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use studio::consts::NAV_SCROLLED_Y;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Page scrolled past the threshold; the bar switches to its solid style.
    pub scrolled: bool,
    /// Full-screen mobile menu is showing.
    pub menu_open: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > NAV_SCROLLED_Y;
    }

    #[must_use]
    pub fn bar_class(self) -> &'static str {
        if self.scrolled { "site-nav site-nav--scrolled" } else { "site-nav" }
    }
}
