// SPDX-License-Identifier: MPL-2.0
//! Layout-declared surfaces.
//!
//! The page layout declares once, at startup, which named menus and dialogs
//! exist in each region and whether the page has a side bar and a nav bar.
//! The coordinators only toggle the visibility and transition state of
//! what is declared here.

use super::backdrop::BackdropSurface;
use super::dialog::DialogSurface;
use super::menu::MenuSurface;
use super::toast::ToastSurface;
use crate::domain::region::{Region, RegionMap};

/// Visual transition class applied to a surface or node.
///
/// Renderers map these to their own animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    FadeIn,
    FadeOut,
    PopIn,
    SlideFromDown,
    SlideDown,
}

impl Transition {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Transition::FadeIn => "fade-in",
            Transition::FadeOut => "fade-out",
            Transition::PopIn => "pop-in",
            Transition::SlideFromDown => "slide-from-down",
            Transition::SlideDown => "slide-down",
        }
    }
}

/// Named nodes declared by the markup of one region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMarkup {
    pub menus: Vec<String>,
    pub dialogs: Vec<String>,
}

/// Page structure handed to the coordinator at startup.
///
/// # Example
///
/// ```
/// use overlay_coordinator::domain::region::Region;
/// use overlay_coordinator::overlay::PageLayout;
///
/// let layout = PageLayout::new()
///     .menu(Region::Main, "filters")
///     .dialog(Region::Full, "logout")
///     .with_side_bar()
///     .with_nav_bar();
///
/// assert_eq!(layout.markup(Region::Main).menus, vec!["filters".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    regions: RegionMap<RegionMarkup>,
    has_side_bar: bool,
    has_nav_bar: bool,
}

impl PageLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a menu node in `region`. Duplicate ids are ignored.
    #[must_use]
    pub fn menu(mut self, region: Region, id: impl Into<String>) -> Self {
        let id = id.into();
        let menus = &mut self.regions.get_mut(region).menus;
        if !menus.contains(&id) {
            menus.push(id);
        }
        self
    }

    /// Declares a named dialog node in `region`. Duplicate ids are ignored.
    #[must_use]
    pub fn dialog(mut self, region: Region, id: impl Into<String>) -> Self {
        let id = id.into();
        let dialogs = &mut self.regions.get_mut(region).dialogs;
        if !dialogs.contains(&id) {
            dialogs.push(id);
        }
        self
    }

    #[must_use]
    pub fn with_side_bar(mut self) -> Self {
        self.has_side_bar = true;
        self
    }

    #[must_use]
    pub fn with_nav_bar(mut self) -> Self {
        self.has_nav_bar = true;
        self
    }

    #[must_use]
    pub fn markup(&self, region: Region) -> &RegionMarkup {
        self.regions.get(region)
    }

    #[must_use]
    pub fn has_side_bar(&self) -> bool {
        self.has_side_bar
    }

    #[must_use]
    pub fn has_nav_bar(&self) -> bool {
        self.has_nav_bar
    }
}

/// Read-only view of the four surfaces a region owns.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceSet<'a> {
    pub toast: &'a ToastSurface,
    pub menu: &'a MenuSurface,
    pub dialog: &'a DialogSurface,
    pub backdrop: &'a BackdropSurface,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_declares_nodes_per_region() {
        let layout = PageLayout::new()
            .menu(Region::Main, "filters")
            .menu(Region::Aside, "cart")
            .dialog(Region::Full, "logout");

        assert_eq!(layout.markup(Region::Main).menus, vec!["filters"]);
        assert_eq!(layout.markup(Region::Aside).menus, vec!["cart"]);
        assert!(layout.markup(Region::Full).menus.is_empty());
        assert_eq!(layout.markup(Region::Full).dialogs, vec!["logout"]);
    }

    #[test]
    fn duplicate_ids_are_declared_once() {
        let layout = PageLayout::new()
            .menu(Region::Main, "filters")
            .menu(Region::Main, "filters");
        assert_eq!(layout.markup(Region::Main).menus.len(), 1);
    }

    #[test]
    fn chrome_flags_default_to_absent() {
        let layout = PageLayout::new();
        assert!(!layout.has_side_bar());
        assert!(!layout.has_nav_bar());

        let layout = layout.with_side_bar().with_nav_bar();
        assert!(layout.has_side_bar());
        assert!(layout.has_nav_bar());
    }

    #[test]
    fn transition_class_names() {
        assert_eq!(Transition::SlideFromDown.class_name(), "slide-from-down");
        assert_eq!(Transition::FadeOut.class_name(), "fade-out");
    }
}
