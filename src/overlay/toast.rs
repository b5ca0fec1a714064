// SPDX-License-Identifier: MPL-2.0
//! Single-slot toast display.
//!
//! Each region shows at most one toast at a time. A new toast is dropped
//! while another one is visible in the same region, unless it is forced, in
//! which case the visible toast is cleared first. Toasts are never queued.
//!
//! An accepted toast goes through two timed phases registered under
//! per-region keys: it fades after the timeout and is removed after half
//! the timeout again.

use super::surface::Transition;
use super::{TimerAction, TimerKey, Timers};
use crate::domain::region::{Region, RegionMap};
use crate::domain::ui::ToastTimeout;
use std::str::FromStr;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    /// Plain message, no emoji.
    #[default]
    Normal,
    Success,
    Error,
    /// Positive outcome (thumbs up).
    Good,
    /// Negative outcome (thumbs down).
    Bad,
}

impl ToastKind {
    /// Short code used by page scripts (`0t`, `st`, `et`, `1t`, `2t`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            ToastKind::Normal => "0t",
            ToastKind::Success => "st",
            ToastKind::Error => "et",
            ToastKind::Good => "1t",
            ToastKind::Bad => "2t",
        }
    }

    /// Parses a kind from its code or name; anything else is `Normal`.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    /// Emoji prefixed to the message, if the kind has one.
    #[must_use]
    pub fn emoji(self) -> Option<&'static str> {
        match self {
            ToastKind::Error => Some("🚫"),
            ToastKind::Good => Some("👍"),
            ToastKind::Bad => Some("👎"),
            ToastKind::Normal | ToastKind::Success => None,
        }
    }
}

impl FromStr for ToastKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0t" | "normal" => Ok(ToastKind::Normal),
            "st" | "success" => Ok(ToastKind::Success),
            "et" | "error" => Ok(ToastKind::Error),
            "1t" | "good" => Ok(ToastKind::Good),
            "2t" | "bad" => Ok(ToastKind::Bad),
            _ => Err(()),
        }
    }
}

/// A transient message to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
    kind: ToastKind,
    region: Region,
}

impl Toast {
    /// Creates a normal toast for the full-page region.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::default(),
            region: Region::default(),
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn toast_kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn target_region(&self) -> Region {
        self.region
    }
}

/// Rendered content of the live toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContent {
    pub kind: ToastKind,
    pub emoji: Option<&'static str>,
    pub message: String,
    /// `PopIn` while entering, `FadeOut` once the fade phase started.
    pub transition: Transition,
}

impl ToastContent {
    fn from_toast(toast: Toast) -> Self {
        Self {
            kind: toast.kind,
            emoji: toast.kind.emoji(),
            message: toast.message,
            transition: Transition::PopIn,
        }
    }

    /// Message text with the kind's emoji prefix.
    #[must_use]
    pub fn text(&self) -> String {
        match self.emoji {
            Some(emoji) => format!("{emoji}{}", self.message),
            None => self.message.clone(),
        }
    }
}

/// Toast surface of one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastSurface {
    hidden: bool,
    content: Option<ToastContent>,
}

impl Default for ToastSurface {
    fn default() -> Self {
        Self {
            hidden: true,
            content: None,
        }
    }
}

impl ToastSurface {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The live toast, if any.
    #[must_use]
    pub fn content(&self) -> Option<&ToastContent> {
        self.content.as_ref()
    }

    fn clear(&mut self) {
        self.content = None;
        self.hidden = true;
    }
}

/// Shows and retires toasts, one region at a time.
#[derive(Debug, Default)]
pub struct ToastCoordinator {
    surfaces: RegionMap<ToastSurface>,
    toasting: RegionMap<bool>,
}

impl ToastCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn surface(&self, region: Region) -> &ToastSurface {
        self.surfaces.get(region)
    }

    /// Returns true while a toast occupies `region`.
    #[must_use]
    pub fn is_toasting(&self, region: Region) -> bool {
        *self.toasting.get(region)
    }

    pub(crate) fn show(
        &mut self,
        timers: &mut Timers,
        toast: Toast,
        timeout: ToastTimeout,
        force: bool,
    ) {
        let region = toast.region;
        if self.is_toasting(region) && !force {
            tracing::debug!(%region, "toast ignored, another one is showing");
            return;
        }

        self.clear(timers, region);

        tracing::debug!(%region, kind = toast.kind.code(), force, "toast shown");
        let surface = self.surfaces.get_mut(region);
        surface.content = Some(ToastContent::from_toast(toast));
        surface.hidden = false;
        *self.toasting.get_mut(region) = true;

        timers.schedule(
            TimerKey::ToastFade(region),
            timeout.as_duration(),
            TimerAction::ToastFade(region),
        );
        timers.schedule(
            TimerKey::ToastRemove(region),
            timeout.lifetime(),
            TimerAction::ToastRemove(region),
        );
    }

    /// Starts the fade-out phase of the live toast.
    pub(crate) fn fade(&mut self, region: Region) {
        if let Some(content) = self.surfaces.get_mut(region).content.as_mut() {
            content.transition = Transition::FadeOut;
        }
    }

    /// Retires the live toast, freeing the region for the next one.
    pub(crate) fn remove(&mut self, region: Region) {
        tracing::debug!(%region, "toast removed");
        self.surfaces.get_mut(region).clear();
        *self.toasting.get_mut(region) = false;
    }

    /// Cancels both phases and empties the surface.
    fn clear(&mut self, timers: &mut Timers, region: Region) {
        timers.cancel(&TimerKey::ToastFade(region));
        timers.cancel(&TimerKey::ToastRemove(region));
        self.surfaces.get_mut(region).clear();
        *self.toasting.get_mut(region) = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn timers() -> (Timers, Instant) {
        let start = Instant::now();
        (Timers::new(start), start)
    }

    #[test]
    fn kind_codes_parse_back() {
        for kind in [
            ToastKind::Normal,
            ToastKind::Success,
            ToastKind::Error,
            ToastKind::Good,
            ToastKind::Bad,
        ] {
            assert_eq!(kind.code().parse::<ToastKind>(), Ok(kind));
        }
    }

    #[test]
    fn malformed_kind_degrades_to_normal() {
        assert_eq!(ToastKind::parse_lenient("sparkly"), ToastKind::Normal);
        assert_eq!(ToastKind::parse_lenient("GOOD"), ToastKind::Good);
    }

    #[test]
    fn emoji_prefixes_message() {
        let content = ToastContent::from_toast(Toast::new("Nope").kind(ToastKind::Error));
        assert_eq!(content.text(), "🚫Nope");

        let plain = ToastContent::from_toast(Toast::new("Saved").kind(ToastKind::Success));
        assert_eq!(plain.text(), "Saved");
    }

    #[test]
    fn new_toast_targets_full_region() {
        let toast = Toast::new("hi");
        assert_eq!(toast.target_region(), Region::Full);
        assert_eq!(toast.toast_kind(), ToastKind::Normal);
    }

    #[test]
    fn show_fills_surface_and_schedules_both_phases() {
        let (mut timers, start) = timers();
        let mut toasts = ToastCoordinator::new();

        toasts.show(&mut timers, Toast::new("hello"), ToastTimeout::from_secs(2.0), false);

        let surface = toasts.surface(Region::Full);
        assert!(!surface.is_hidden());
        assert_eq!(surface.content().map(|c| c.message.as_str()), Some("hello"));
        assert!(toasts.is_toasting(Region::Full));
        assert_eq!(
            timers.due_at(&TimerKey::ToastFade(Region::Full)),
            Some(start + Duration::from_secs(2))
        );
        assert_eq!(
            timers.due_at(&TimerKey::ToastRemove(Region::Full)),
            Some(start + Duration::from_secs(3))
        );
    }

    #[test]
    fn second_toast_without_force_is_ignored() {
        let (mut timers, _) = timers();
        let mut toasts = ToastCoordinator::new();
        let timeout = ToastTimeout::from_secs(2.0);

        toasts.show(&mut timers, Toast::new("first"), timeout, false);
        toasts.show(&mut timers, Toast::new("second"), timeout, false);

        let content = toasts.surface(Region::Full).content().unwrap();
        assert_eq!(content.message, "first");
    }

    #[test]
    fn forced_toast_replaces_visible_one() {
        let (mut timers, start) = timers();
        let mut toasts = ToastCoordinator::new();

        toasts.show(&mut timers, Toast::new("first"), ToastTimeout::from_secs(2.0), false);
        toasts.show(&mut timers, Toast::new("second"), ToastTimeout::from_secs(4.0), true);

        let content = toasts.surface(Region::Full).content().unwrap();
        assert_eq!(content.message, "second");
        assert_eq!(timers.len(), 2);
        assert_eq!(
            timers.due_at(&TimerKey::ToastRemove(Region::Full)),
            Some(start + Duration::from_secs(6))
        );
    }

    #[test]
    fn regions_toast_independently() {
        let (mut timers, _) = timers();
        let mut toasts = ToastCoordinator::new();
        let timeout = ToastTimeout::default();

        toasts.show(&mut timers, Toast::new("main").region(Region::Main), timeout, false);
        toasts.show(&mut timers, Toast::new("aside").region(Region::Aside), timeout, false);

        assert!(toasts.is_toasting(Region::Main));
        assert!(toasts.is_toasting(Region::Aside));
        assert!(!toasts.is_toasting(Region::Full));
    }

    #[test]
    fn fade_then_remove_clears_surface() {
        let (mut timers, _) = timers();
        let mut toasts = ToastCoordinator::new();
        toasts.show(&mut timers, Toast::new("bye"), ToastTimeout::default(), false);

        toasts.fade(Region::Full);
        assert_eq!(
            toasts.surface(Region::Full).content().unwrap().transition,
            Transition::FadeOut
        );

        toasts.remove(Region::Full);
        assert!(toasts.surface(Region::Full).is_hidden());
        assert!(toasts.surface(Region::Full).content().is_none());
        assert!(!toasts.is_toasting(Region::Full));
    }
}
