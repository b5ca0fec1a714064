// SPDX-License-Identifier: MPL-2.0
//! Dimmed overlay behind menus and dialogs.
//!
//! A region's backdrop is shared by every menu and dialog in that region.
//! Each of them holds it as an owner; the backdrop only fades out once the
//! last owner releases it. An explicit hide from the caller drops every
//! owner at once.

use super::{TimerAction, TimerKey, Timers};
use crate::domain::region::{Region, RegionMap};
use crate::domain::ui::TransitionDuration;
use std::collections::BTreeSet;

/// Who is keeping a backdrop visible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BackdropOwner {
    /// Shown directly through the public backdrop API.
    Caller,
    Menu(String),
    Dialog(String),
}

/// Backdrop surface of one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackdropSurface {
    hidden: bool,
    fading: bool,
    owners: BTreeSet<BackdropOwner>,
}

impl Default for BackdropSurface {
    fn default() -> Self {
        Self {
            hidden: true,
            fading: false,
            owners: BTreeSet::new(),
        }
    }
}

impl BackdropSurface {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns true between a hide request and the end of its fade.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fading
    }

    pub fn owners(&self) -> impl Iterator<Item = &BackdropOwner> {
        self.owners.iter()
    }
}

/// Per-region backdrop visibility.
#[derive(Debug, Default)]
pub struct BackdropController {
    surfaces: RegionMap<BackdropSurface>,
}

impl BackdropController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn surface(&self, region: Region) -> &BackdropSurface {
        self.surfaces.get(region)
    }

    /// Returns true when the backdrop is shown and not fading out.
    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        let surface = self.surfaces.get(region);
        !surface.hidden && !surface.fading
    }

    /// Shows the backdrop on behalf of `owner`, aborting any pending fade.
    pub(crate) fn show(&mut self, timers: &mut Timers, region: Region, owner: BackdropOwner) {
        timers.cancel(&TimerKey::BackdropHide(region));

        let surface = self.surfaces.get_mut(region);
        surface.fading = false;
        surface.hidden = false;
        tracing::trace!(%region, ?owner, "backdrop held");
        surface.owners.insert(owner);
    }

    /// Drops `owner`'s hold; fades out once nobody holds the backdrop.
    pub(crate) fn release(
        &mut self,
        timers: &mut Timers,
        region: Region,
        owner: &BackdropOwner,
        fade: TransitionDuration,
    ) {
        let surface = self.surfaces.get_mut(region);
        surface.owners.remove(owner);
        if surface.owners.is_empty() {
            self.fade_out(timers, region, fade);
        } else {
            tracing::debug!(%region, remaining = surface.owners.len(), "backdrop still held");
        }
    }

    /// Hides the backdrop regardless of who holds it.
    pub(crate) fn hide(&mut self, timers: &mut Timers, region: Region, fade: TransitionDuration) {
        self.surfaces.get_mut(region).owners.clear();
        self.fade_out(timers, region, fade);
    }

    /// Shows a hidden or fading backdrop, hides a visible one.
    pub(crate) fn toggle(&mut self, timers: &mut Timers, region: Region, fade: TransitionDuration) {
        if self.is_visible(region) {
            self.hide(timers, region, fade);
        } else {
            self.show(timers, region, BackdropOwner::Caller);
        }
    }

    /// End of the fade: the backdrop is gone.
    pub(crate) fn settle_hidden(&mut self, region: Region) {
        let surface = self.surfaces.get_mut(region);
        surface.hidden = true;
        surface.fading = false;
        tracing::trace!(%region, "backdrop hidden");
    }

    fn fade_out(&mut self, timers: &mut Timers, region: Region, fade: TransitionDuration) {
        let surface = self.surfaces.get_mut(region);
        if surface.hidden {
            return;
        }
        surface.fading = true;
        timers.schedule(
            TimerKey::BackdropHide(region),
            fade.as_duration(),
            TimerAction::BackdropHidden(region),
        );
    }
}
