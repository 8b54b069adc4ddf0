//! View model of the header: two independent flags and their transitions.
//!
//! Everything here is pure so the rendering rules can be checked without a
//! DOM. `NavigationBar` keeps one `ViewState` in a signal and feeds it to
//! `NavigationBarView`.

/// Vertical offset (CSS px) past which the header detaches from the flow.
pub const SCROLL_THRESHOLD: f64 = 10.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Mobile panel is shown.
    pub menu_open: bool,
    /// Page offset is past [`SCROLL_THRESHOLD`].
    pub scrolled: bool,
}

impl ViewState {
    pub fn is_past_threshold(offset: f64) -> bool {
        offset > SCROLL_THRESHOLD
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Recompute `scrolled` for a new offset. Returns whether it changed.
    pub fn apply_scroll(&mut self, offset: f64) -> bool {
        let scrolled = Self::is_past_threshold(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn container_class(&self) -> &'static str {
        if self.scrolled {
            "site-nav site-nav--scrolled"
        } else {
            "site-nav site-nav--resting"
        }
    }

    pub fn shows_mobile_panel(&self) -> bool {
        self.menu_open
    }

    pub fn shows_divider(&self) -> bool {
        !self.scrolled
    }
}
