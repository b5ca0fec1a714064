// SPDX-License-Identifier: MPL-2.0
//! Overlay and transient-UI coordination.
//!
//! [`Overlay`] owns every transient surface of the page (toasts, menus,
//! dialogs, backdrops, the aside panel and the responsive chrome) together
//! with the timer registry that drives their transitions.
//!
//! Operations mutate state synchronously and schedule a timer for the end of
//! their transition. Nothing happens until the caller advances the logical
//! clock with [`Overlay::advance_to`], or lets [`driver`] do it on a tokio
//! runtime. Timers share keys, so the latest call on a key always wins:
//!
//! | Key | Shared by |
//! |-----|-----------|
//! | `ToastFade(region)`, `ToastRemove(region)` | the two phases of a region's toast |
//! | `Menu(region, id)` | show and hide of one menu |
//! | `Dialog(region)` | open and close of every dialog in a region |
//! | `BackdropHide(region)` | backdrop fade-outs |
//! | `Aside` | aside open and close |

pub mod aside;
pub mod backdrop;
pub mod completion;
pub mod dialog;
pub mod driver;
pub mod layout;
pub mod menu;
pub mod settings;
pub mod surface;
pub mod timer;
pub mod toast;

pub use completion::Completion;
pub use dialog::{DialogHandle, DialogNode, DialogParams, DialogReply, DialogState};
pub use layout::{Chrome, LayoutChange, LayoutMode};
pub use menu::MenuState;
pub use settings::OverlaySettings;
pub use surface::{PageLayout, SurfaceSet, Transition};
pub use toast::{Toast, ToastKind};

use crate::domain::region::Region;
use crate::domain::ui::{ToastTimeout, TransitionDuration};
use crate::error::Result;
use aside::AsidePanel;
use backdrop::BackdropController;
use completion::Resolver;
use dialog::DialogCoordinator;
use layout::LayoutWatcher;
use menu::MenuCoordinator;
use std::time::{Duration, Instant};
use timer::TimerRegistry;
use toast::ToastCoordinator;

/// Identity of a pending transition timer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerKey {
    ToastFade(Region),
    ToastRemove(Region),
    Menu(Region, String),
    Dialog(Region),
    BackdropHide(Region),
    Aside,
}

/// What to do when a timer fires.
#[derive(Debug)]
pub(crate) enum TimerAction {
    ToastFade(Region),
    ToastRemove(Region),
    MenuShown {
        region: Region,
        id: String,
        done: Resolver<()>,
    },
    MenuHidden {
        region: Region,
        id: String,
        done: Resolver<()>,
    },
    DialogOpened {
        handle: DialogHandle,
        done: Resolver<DialogHandle>,
    },
    DialogClosed {
        handle: DialogHandle,
        done: Resolver<()>,
    },
    BackdropHidden(Region),
    AsideOpened(Resolver<()>),
    AsideClosed(Resolver<()>),
}

pub(crate) type Timers = TimerRegistry<TimerKey, TimerAction>;

/// Coordinator of every transient surface on a page.
#[derive(Debug)]
pub struct Overlay {
    settings: OverlaySettings,
    timers: Timers,
    toasts: ToastCoordinator,
    menus: MenuCoordinator,
    dialogs: DialogCoordinator,
    backdrops: BackdropController,
    aside: AsidePanel,
    watcher: LayoutWatcher,
    chrome: Chrome,
}

impl Overlay {
    /// Creates the coordinator for `layout`, with its logical clock at `now`.
    #[must_use]
    pub fn new(layout: &PageLayout, settings: OverlaySettings, now: Instant) -> Self {
        Self {
            timers: Timers::new(now),
            toasts: ToastCoordinator::new(),
            menus: MenuCoordinator::new(|region| layout.markup(region).menus.clone()),
            dialogs: DialogCoordinator::new(
                |region| layout.markup(region).dialogs.clone(),
                settings.dialog_labels.clone(),
            ),
            backdrops: BackdropController::new(),
            aside: AsidePanel::new(),
            watcher: LayoutWatcher::new(settings.breakpoint),
            chrome: Chrome::new(layout.has_side_bar(), layout.has_nav_bar()),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.timers.now()
    }

    /// When the next pending transition ends, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    /// Returns true when no transition is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    #[must_use]
    pub fn is_pending(&self, key: &TimerKey) -> bool {
        self.timers.is_pending(key)
    }

    /// Fires every timer due at or before `until`, in order, and moves the
    /// clock to `until`. Returns the number of timers fired.
    pub fn advance_to(&mut self, until: Instant) -> usize {
        let mut fired = 0;
        while let Some((key, action)) = self.timers.pop_due(until) {
            self.dispatch(key, action);
            fired += 1;
        }
        self.timers.settle(until);
        fired
    }

    /// Advances the clock by `step` from the current logical time.
    pub fn advance_by(&mut self, step: Duration) -> usize {
        let until = self.now() + step;
        self.advance_to(until)
    }

    fn dispatch(&mut self, key: TimerKey, action: TimerAction) {
        tracing::trace!(?key, "dispatching timer");
        match action {
            TimerAction::ToastFade(region) => self.toasts.fade(region),
            TimerAction::ToastRemove(region) => self.toasts.remove(region),
            TimerAction::MenuShown { region, id, done } => {
                self.menus.settle_shown(region, &id, done);
            }
            TimerAction::MenuHidden { region, id, done } => {
                self.menus.settle_hidden(region, &id, done);
            }
            TimerAction::DialogOpened { handle, done } => self.dialogs.settle_opened(handle, done),
            TimerAction::DialogClosed { handle, done } => {
                self.dialogs.settle_closed(&handle, done);
            }
            TimerAction::BackdropHidden(region) => self.backdrops.settle_hidden(region),
            TimerAction::AsideOpened(done) => AsidePanel::settle_opened(done),
            TimerAction::AsideClosed(done) => self.aside.settle_closed(done),
        }
    }

    // =========================================================================
    // Surfaces
    // =========================================================================

    /// Read-only view of a region's surfaces.
    #[must_use]
    pub fn surfaces(&self, region: Region) -> SurfaceSet<'_> {
        SurfaceSet {
            toast: self.toasts.surface(region),
            menu: self.menus.surface(region),
            dialog: self.dialogs.surface(region),
            backdrop: self.backdrops.surface(region),
        }
    }

    #[must_use]
    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    #[must_use]
    pub fn aside(&self) -> &AsidePanel {
        &self.aside
    }

    // =========================================================================
    // Toasts
    // =========================================================================

    /// Shows `toast` in its region unless another one is showing there.
    ///
    /// `force` replaces a visible toast instead of dropping the new one.
    pub fn show_toast(&mut self, toast: Toast, timeout: ToastTimeout, force: bool) {
        self.toasts.show(&mut self.timers, toast, timeout, force);
    }

    /// Shows `toast` with the configured timeout.
    pub fn notify(&mut self, toast: Toast) {
        let timeout = self.settings.toast_timeout;
        self.show_toast(toast, timeout, false);
    }

    #[must_use]
    pub fn is_toasting(&self, region: Region) -> bool {
        self.toasts.is_toasting(region)
    }

    // =========================================================================
    // Menus
    // =========================================================================

    pub fn show_menu(
        &mut self,
        menu_id: &str,
        duration: TransitionDuration,
        region: Region,
    ) -> Completion<()> {
        self.menus
            .show(&mut self.timers, &mut self.backdrops, menu_id, duration, region)
    }

    pub fn hide_menu(
        &mut self,
        menu_id: &str,
        duration: TransitionDuration,
        region: Region,
    ) -> Completion<()> {
        let fade = self.settings.backdrop_fade;
        self.menus.hide(
            &mut self.timers,
            &mut self.backdrops,
            menu_id,
            duration,
            fade,
            region,
        )
    }

    /// Hides an open menu, shows a closed one. `None` if the menu is unknown.
    pub fn toggle_menu(
        &mut self,
        menu_id: &str,
        duration: TransitionDuration,
        region: Region,
    ) -> Option<Completion<()>> {
        if !self.menus.exists(menu_id, region) {
            tracing::debug!(%region, menu_id, "toggle ignored, no such menu");
            return None;
        }
        Some(if self.is_menu_open(menu_id, region) {
            self.hide_menu(menu_id, duration, region)
        } else {
            self.show_menu(menu_id, duration, region)
        })
    }

    /// True from the moment a show starts until a hide settles.
    #[must_use]
    pub fn is_menu_open(&self, menu_id: &str, region: Region) -> bool {
        self.menus.is_open(menu_id, region)
    }

    #[must_use]
    pub fn active_menu_id(&self, region: Region) -> Option<&str> {
        self.menus.active_id(region)
    }

    #[must_use]
    pub fn menu_state(&self, menu_id: &str, region: Region) -> Option<MenuState> {
        self.menus.state(menu_id, region)
    }

    /// The backdrop was clicked: toggles the region's active menu.
    pub fn backdrop_clicked(&mut self, region: Region) -> Option<Completion<()>> {
        let duration = self.settings.backdrop_click_duration;
        self.toggle_active_menu(region, duration)
    }

    /// A menu's close button was clicked: toggles the region's active menu.
    pub fn close_menu_clicked(&mut self, region: Region) -> Option<Completion<()>> {
        let duration = self.settings.menu_duration;
        self.toggle_active_menu(region, duration)
    }

    fn toggle_active_menu(
        &mut self,
        region: Region,
        duration: TransitionDuration,
    ) -> Option<Completion<()>> {
        let id = self.menus.active_id(region)?.to_string();
        self.toggle_menu(&id, duration, region)
    }

    // =========================================================================
    // Dialogs
    // =========================================================================

    pub fn open_dialog(
        &mut self,
        params: DialogParams,
        duration: TransitionDuration,
        region: Region,
    ) -> Completion<DialogHandle> {
        let fade = self.settings.backdrop_fade;
        self.dialogs.open(
            &mut self.timers,
            &mut self.backdrops,
            params,
            duration,
            fade,
            region,
        )
    }

    pub fn close_dialog(
        &mut self,
        handle: &DialogHandle,
        duration: TransitionDuration,
    ) -> Completion<()> {
        let fade = self.settings.backdrop_fade;
        self.dialogs
            .close(&mut self.timers, &mut self.backdrops, handle, duration, fade)
    }

    /// Runs the dialog's confirm callback and closes it unless told not to.
    ///
    /// Returns the close completion, or `None` when the dialog stays open.
    pub fn confirm_dialog(
        &mut self,
        handle: &DialogHandle,
        duration: TransitionDuration,
    ) -> Result<Option<Completion<()>>> {
        self.answer_dialog(handle, true, duration)
    }

    /// Like [`confirm_dialog`](Self::confirm_dialog), with the cancel callback.
    pub fn cancel_dialog(
        &mut self,
        handle: &DialogHandle,
        duration: TransitionDuration,
    ) -> Result<Option<Completion<()>>> {
        self.answer_dialog(handle, false, duration)
    }

    fn answer_dialog(
        &mut self,
        handle: &DialogHandle,
        confirm: bool,
        duration: TransitionDuration,
    ) -> Result<Option<Completion<()>>> {
        match self.dialogs.respond(handle, confirm)? {
            DialogReply::Close => Ok(Some(self.close_dialog(handle, duration))),
            DialogReply::KeepOpen => Ok(None),
        }
    }

    #[must_use]
    pub fn dialog(&self, handle: &DialogHandle) -> Option<&DialogNode> {
        self.dialogs.dialog(handle)
    }

    // =========================================================================
    // Backdrops
    // =========================================================================

    pub fn show_backdrop_of(&mut self, region: Region) {
        self.backdrops
            .show(&mut self.timers, region, backdrop::BackdropOwner::Caller);
    }

    /// Fades the backdrop out, whoever holds it.
    pub fn hide_backdrop_of(&mut self, region: Region) {
        let fade = self.settings.backdrop_fade;
        self.backdrops.hide(&mut self.timers, region, fade);
    }

    pub fn toggle_backdrop(&mut self, region: Region) {
        let fade = self.settings.backdrop_fade;
        self.backdrops.toggle(&mut self.timers, region, fade);
    }

    #[must_use]
    pub fn is_backdrop_visible(&self, region: Region) -> bool {
        self.backdrops.is_visible(region)
    }

    // =========================================================================
    // Aside panel
    // =========================================================================

    pub fn open_aside(&mut self, duration: TransitionDuration) -> Completion<()> {
        self.aside.open(&mut self.timers, duration)
    }

    pub fn close_aside(&mut self, duration: TransitionDuration) -> Completion<()> {
        self.aside.close(&mut self.timers, duration)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Applies a viewport width, swapping side bar and nav bar on crossings.
    pub fn resize(&mut self, width: u32) -> Option<LayoutChange> {
        let change = self.watcher.observe(width)?;
        tracing::debug!(width, mode = ?change.mode, first = change.first, "layout changed");
        self.chrome.apply(change.mode);
        Some(change)
    }

    #[must_use]
    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.watcher.mode()
    }
}
