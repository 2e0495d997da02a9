use crate::config::UiTuning;

/// Tracks which of a fixed list of anchors is currently the active section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTracker {
    ids: Vec<String>,
    threshold: f64,
    active: Option<String>,
}

impl SectionTracker {
    pub fn new<I, S>(ids: I, threshold: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            threshold,
            active: None,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Feeds one intersection entry. Returns true when the active section changed.
    pub fn observe(&mut self, id: &str, ratio: f64, intersecting: bool) -> bool {
        if !intersecting || ratio < self.threshold || self.is_active(id) {
            return false;
        }
        if !self.ids.iter().any(|s| s == id) {
            log::warn!("ignoring untracked section `{id}`");
            return false;
        }
        self.active = Some(id.to_string());
        true
    }
}

/// Document offset to scroll to so the section lands below the fixed header.
pub fn scroll_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (element_top + scroll_y - header_offset).max(0.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub hidden: bool,
    last_y: f64,
}

impl NavbarState {
    /// Hides while moving down past `hide_after`, shows again on any upward scroll.
    pub fn on_scroll(&mut self, y: f64, scrolled_at: f64, hide_after: f64) {
        self.scrolled = y > scrolled_at;
        self.hidden = self.last_y < y && y > hide_after;
        self.last_y = y;
    }

    pub fn update(&mut self, y: f64, ui: &UiTuning) {
        self.on_scroll(y, ui.nav_scrolled_at, ui.nav_hide_after);
    }
}

pub fn show_scroll_top(y: f64, show_at: f64) -> bool {
    y > show_at
}

/// The hero's scroll hint disappears once 30% of a viewport has been scrolled.
pub fn show_scroll_hint(y: f64, viewport_height: f64) -> bool {
    y <= viewport_height * 0.3
}

/// Entry animation that plays once, the first time its element scrolls into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    shown: bool,
}

impl Reveal {
    pub fn shown(&self) -> bool {
        self.shown
    }

    /// Returns true only on the first intersection; leaving the viewport keeps it shown.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.shown || !intersecting {
            return false;
        }
        self.shown = true;
        true
    }

    pub fn class(&self) -> &'static str {
        if self.shown {
            "reveal reveal-shown"
        } else {
            "reveal"
        }
    }
}
