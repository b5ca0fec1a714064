// SPDX-License-Identifier: MPL-2.0
//! Responsive chrome.
//!
//! A single breakpoint splits widths into narrow (bottom nav bar) and wide
//! (side bar). The watcher reports only the first evaluation and real
//! crossings.

use crate::domain::ui::Breakpoint;

/// Which side of the breakpoint the viewport is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    Narrow,
    Wide,
}

/// A change reported by [`LayoutWatcher::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutChange {
    pub mode: LayoutMode,
    /// True for the very first evaluation.
    pub first: bool,
}

/// Tracks the viewport width against a breakpoint.
#[derive(Debug, Clone, Default)]
pub struct LayoutWatcher {
    breakpoint: Breakpoint,
    last: Option<LayoutMode>,
}

impl LayoutWatcher {
    #[must_use]
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            last: None,
        }
    }

    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    #[must_use]
    pub fn mode(&self) -> Option<LayoutMode> {
        self.last
    }

    /// Evaluates `width`, returning a change only when the mode flipped.
    pub fn observe(&mut self, width: u32) -> Option<LayoutChange> {
        let mode = if self.breakpoint.is_narrow(width) {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        };
        let first = self.last.is_none();
        if self.last == Some(mode) {
            return None;
        }
        self.last = Some(mode);
        Some(LayoutChange { mode, first })
    }
}

/// Visibility of the side bar and nav bar. A bar the page lacks stays `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chrome {
    side_bar_hidden: Option<bool>,
    nav_bar_hidden: Option<bool>,
}

impl Chrome {
    #[must_use]
    pub fn new(has_side_bar: bool, has_nav_bar: bool) -> Self {
        Self {
            side_bar_hidden: has_side_bar.then_some(false),
            nav_bar_hidden: has_nav_bar.then_some(false),
        }
    }

    /// `None` when the page has no side bar.
    #[must_use]
    pub fn side_bar_hidden(&self) -> Option<bool> {
        self.side_bar_hidden
    }

    /// `None` when the page has no nav bar.
    #[must_use]
    pub fn nav_bar_hidden(&self) -> Option<bool> {
        self.nav_bar_hidden
    }

    pub(crate) fn apply(&mut self, mode: LayoutMode) {
        let narrow = mode == LayoutMode::Narrow;
        if let Some(hidden) = self.side_bar_hidden.as_mut() {
            *hidden = narrow;
        }
        if let Some(hidden) = self.nav_bar_hidden.as_mut() {
            *hidden = !narrow;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_evaluation_always_reports() {
        let mut watcher = LayoutWatcher::new(Breakpoint::new(460));
        assert_eq!(
            watcher.observe(1024),
            Some(LayoutChange {
                mode: LayoutMode::Wide,
                first: true
            })
        );
    }

    #[test]
    fn same_side_repeats_are_silent() {
        let mut watcher = LayoutWatcher::new(Breakpoint::new(460));
        let _ = watcher.observe(300);
        assert_eq!(watcher.observe(320), None);
        assert_eq!(watcher.observe(460), None);
        assert_eq!(watcher.mode(), Some(LayoutMode::Narrow));
    }

    #[test]
    fn crossing_reports_once() {
        let mut watcher = LayoutWatcher::new(Breakpoint::new(460));
        let _ = watcher.observe(300);
        assert_eq!(
            watcher.observe(461),
            Some(LayoutChange {
                mode: LayoutMode::Wide,
                first: false
            })
        );
        assert_eq!(watcher.observe(900), None);
    }

    #[test]
    fn narrow_swaps_side_bar_for_nav_bar() {
        let mut chrome = Chrome::new(true, true);
        chrome.apply(LayoutMode::Narrow);
        assert_eq!(chrome.side_bar_hidden(), Some(true));
        assert_eq!(chrome.nav_bar_hidden(), Some(false));

        chrome.apply(LayoutMode::Wide);
        assert_eq!(chrome.side_bar_hidden(), Some(false));
        assert_eq!(chrome.nav_bar_hidden(), Some(true));
    }

    #[test]
    fn missing_bars_are_skipped() {
        let mut chrome = Chrome::new(false, true);
        chrome.apply(LayoutMode::Wide);
        assert_eq!(chrome.side_bar_hidden(), None);
        assert_eq!(chrome.nav_bar_hidden(), Some(true));
    }
}
