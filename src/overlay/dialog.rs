// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs.
//!
//! Dialogs come in two flavors:
//!
//! - the default dialog (id [`DEFAULT_DIALOG_ID`]), whose content is rebuilt
//!   from the parameters on every open, overwriting what it showed before;
//! - named dialogs declared by the page layout, whose content persists and
//!   which are only shown and hidden.
//!
//! All dialog transitions of a region share one timer key: opening or
//! closing any dialog cancels whatever dialog transition was in flight in
//! that region. A different dialog caught mid-open or mid-close that way is
//! hidden on the spot and gives up its backdrop hold.

use super::backdrop::{BackdropController, BackdropOwner};
use super::completion::{self, Completion, Resolver};
use super::surface::Transition;
use super::{TimerAction, TimerKey, Timers};
use crate::domain::region::{Region, RegionMap};
use crate::domain::ui::TransitionDuration;
use crate::error::{Error, Result};
use std::fmt;

/// Id of the dialog built from parameters.
pub const DEFAULT_DIALOG_ID: &str = "dialog";

/// Lifecycle of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// What a confirm or cancel callback wants done with its dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogReply {
    /// Close the dialog.
    #[default]
    Close,
    /// Leave the dialog open, e.g. to show a validation message.
    KeepOpen,
}

/// Caller-supplied button handler.
pub type DialogCallback = Box<dyn FnMut(&DialogHandle) -> DialogReply>;

/// Identifies an opened dialog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogHandle {
    pub region: Region,
    pub id: String,
}

/// Text shown by the default dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogContent {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub show_divider: bool,
}

/// Labels used when the parameters leave a button unnamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultLabels {
    pub confirm: String,
    pub cancel: String,
}

impl Default for DefaultLabels {
    fn default() -> Self {
        Self {
            confirm: "OK".to_string(),
            cancel: "Cancel".to_string(),
        }
    }
}

/// Parameters of an [`open_dialog`](crate::overlay::Overlay::open_dialog) call.
#[derive(Default)]
pub struct DialogParams {
    id: Option<String>,
    title: String,
    message: String,
    confirm_label: Option<String>,
    cancel_label: Option<String>,
    no_divider: bool,
    on_confirm: Option<DialogCallback>,
    on_cancel: Option<DialogCallback>,
}

impl DialogParams {
    /// Parameters for the default dialog.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Parameters targeting a named dialog declared by the layout.
    pub fn named(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn no_divider(mut self) -> Self {
        self.no_divider = true;
        self
    }

    #[must_use]
    pub fn on_confirm(mut self, f: impl FnMut(&DialogHandle) -> DialogReply + 'static) -> Self {
        self.on_confirm = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, f: impl FnMut(&DialogHandle) -> DialogReply + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    /// The targeted id; the default id when none was given.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(DEFAULT_DIALOG_ID)
    }

    fn is_default(&self) -> bool {
        self.id() == DEFAULT_DIALOG_ID
    }
}

impl fmt::Debug for DialogParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogParams")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("confirm_label", &self.confirm_label)
            .field("cancel_label", &self.cancel_label)
            .field("no_divider", &self.no_divider)
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

/// A dialog node inside a region's dialog surface.
pub struct DialogNode {
    id: String,
    hidden: bool,
    opened: bool,
    transition: Option<Transition>,
    state: DialogState,
    content: Option<DialogContent>,
    on_confirm: Option<DialogCallback>,
    on_cancel: Option<DialogCallback>,
}

impl DialogNode {
    fn new(id: String) -> Self {
        Self {
            id,
            hidden: true,
            opened: false,
            transition: None,
            state: DialogState::Closed,
            content: None,
            on_confirm: None,
            on_cancel: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Set once the open transition has finished.
    #[must_use]
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    #[must_use]
    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Generated content; only the default dialog has any.
    #[must_use]
    pub fn content(&self) -> Option<&DialogContent> {
        self.content.as_ref()
    }
}

impl fmt::Debug for DialogNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogNode")
            .field("id", &self.id)
            .field("hidden", &self.hidden)
            .field("opened", &self.opened)
            .field("transition", &self.transition)
            .field("state", &self.state)
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

/// Dialog container of one region.
#[derive(Debug)]
pub struct DialogSurface {
    hidden: bool,
    transition: Option<Transition>,
    dialogs: Vec<DialogNode>,
}

impl Default for DialogSurface {
    fn default() -> Self {
        Self {
            hidden: true,
            transition: None,
            dialogs: Vec::new(),
        }
    }
}

impl DialogSurface {
    fn with_dialogs(ids: &[String]) -> Self {
        Self {
            dialogs: ids
                .iter()
                .filter(|id| id.as_str() != DEFAULT_DIALOG_ID)
                .cloned()
                .map(DialogNode::new)
                .collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    #[must_use]
    pub fn dialog(&self, id: &str) -> Option<&DialogNode> {
        self.dialogs.iter().find(|d| d.id == id)
    }

    pub fn dialogs(&self) -> impl Iterator<Item = &DialogNode> {
        self.dialogs.iter()
    }

    fn dialog_mut(&mut self, id: &str) -> Option<&mut DialogNode> {
        self.dialogs.iter_mut().find(|d| d.id == id)
    }

    /// Returns the default dialog, creating it on first use.
    fn default_dialog(&mut self) -> &mut DialogNode {
        let index = match self.dialogs.iter().position(|d| d.id == DEFAULT_DIALOG_ID) {
            Some(index) => index,
            None => {
                self.dialogs.push(DialogNode::new(DEFAULT_DIALOG_ID.to_string()));
                self.dialogs.len() - 1
            }
        };
        &mut self.dialogs[index]
    }
}

/// Opens, answers and closes modal dialogs.
#[derive(Debug, Default)]
pub struct DialogCoordinator {
    surfaces: RegionMap<DialogSurface>,
    labels: DefaultLabels,
}

impl DialogCoordinator {
    /// Creates a coordinator for the named dialogs each region declares.
    pub fn new(declared: impl Fn(Region) -> Vec<String>, labels: DefaultLabels) -> Self {
        Self {
            surfaces: RegionMap::from_fn(|region| DialogSurface::with_dialogs(&declared(region))),
            labels,
        }
    }

    #[must_use]
    pub fn surface(&self, region: Region) -> &DialogSurface {
        self.surfaces.get(region)
    }

    #[must_use]
    pub fn dialog(&self, handle: &DialogHandle) -> Option<&DialogNode> {
        self.surface(handle.region).dialog(&handle.id)
    }

    pub(crate) fn open(
        &mut self,
        timers: &mut Timers,
        backdrops: &mut BackdropController,
        params: DialogParams,
        duration: TransitionDuration,
        backdrop_fade: TransitionDuration,
        region: Region,
    ) -> Completion<DialogHandle> {
        let id = params.id().to_string();
        let is_default = params.is_default();
        let surface = self.surfaces.get_mut(region);

        let node = if is_default {
            let content = DialogContent {
                title: params.title,
                message: params.message,
                confirm_label: params
                    .confirm_label
                    .unwrap_or_else(|| self.labels.confirm.clone()),
                cancel_label: params
                    .cancel_label
                    .unwrap_or_else(|| self.labels.cancel.clone()),
                show_divider: !params.no_divider,
            };
            let node = surface.default_dialog();
            node.content = Some(content);
            node
        } else {
            match surface.dialog_mut(&id) {
                Some(node) => node,
                None => {
                    tracing::debug!(%region, dialog_id = %id, "open rejected, no such dialog");
                    return Completion::rejected(Error::dialog_not_found(&id, region));
                }
            }
        };

        // The default dialog is rebuilt each time, callbacks included.
        if is_default {
            node.on_confirm = params.on_confirm;
            node.on_cancel = params.on_cancel;
        } else {
            if params.on_confirm.is_some() {
                node.on_confirm = params.on_confirm;
            }
            if params.on_cancel.is_some() {
                node.on_cancel = params.on_cancel;
            }
        }
        node.hidden = false;
        node.opened = false;
        node.transition = Some(Transition::SlideFromDown);
        node.state = DialogState::Opening;
        surface.hidden = false;
        surface.transition = Some(Transition::FadeIn);

        backdrops.show(timers, region, BackdropOwner::Dialog(id.clone()));

        tracing::debug!(%region, dialog_id = %id, "dialog opening");
        let (done, completion) = completion::pair();
        let displaced = timers.schedule(
            TimerKey::Dialog(region),
            duration.as_duration(),
            TimerAction::DialogOpened {
                handle: DialogHandle {
                    region,
                    id: id.clone(),
                },
                done,
            },
        );
        if let Some(action) = displaced {
            self.abandon(timers, backdrops, action, &id, backdrop_fade);
        }
        completion
    }

    pub(crate) fn close(
        &mut self,
        timers: &mut Timers,
        backdrops: &mut BackdropController,
        handle: &DialogHandle,
        duration: TransitionDuration,
        backdrop_fade: TransitionDuration,
    ) -> Completion<()> {
        let region = handle.region;
        let surface = self.surfaces.get_mut(region);
        let Some(node) = surface.dialog_mut(&handle.id) else {
            return Completion::rejected(Error::dialog_not_found(&handle.id, region));
        };

        node.opened = false;
        node.transition = Some(Transition::SlideDown);
        node.state = DialogState::Closing;
        surface.transition = Some(Transition::FadeOut);

        backdrops.release(
            timers,
            region,
            &BackdropOwner::Dialog(handle.id.clone()),
            backdrop_fade,
        );

        tracing::debug!(%region, dialog_id = %handle.id, "dialog closing");
        let (done, completion) = completion::pair();
        let displaced = timers.schedule(
            TimerKey::Dialog(region),
            duration.as_duration(),
            TimerAction::DialogClosed {
                handle: handle.clone(),
                done,
            },
        );
        if let Some(action) = displaced {
            self.abandon(timers, backdrops, action, &handle.id, backdrop_fade);
        }
        completion
    }

    /// Hides the dialog whose transition `action` was displaced, unless it is
    /// `current`, the dialog now transitioning. Dropping `action` settles its
    /// completion as preempted.
    fn abandon(
        &mut self,
        timers: &mut Timers,
        backdrops: &mut BackdropController,
        action: TimerAction,
        current: &str,
        backdrop_fade: TransitionDuration,
    ) {
        let (handle, was_opening) = match &action {
            TimerAction::DialogOpened { handle, .. } => (handle, true),
            TimerAction::DialogClosed { handle, .. } => (handle, false),
            _ => return,
        };
        if handle.id == current {
            return;
        }

        let surface = self.surfaces.get_mut(handle.region);
        if let Some(node) = surface.dialog_mut(&handle.id) {
            node.hidden = true;
            node.opened = false;
            node.transition = None;
            node.state = DialogState::Closed;
        }
        if surface.dialogs.iter().all(|d| d.hidden) {
            surface.hidden = true;
        }
        // a closing dialog already let go of the backdrop
        if was_opening {
            backdrops.release(
                timers,
                handle.region,
                &BackdropOwner::Dialog(handle.id.clone()),
                backdrop_fade,
            );
        }
        tracing::debug!(region = %handle.region, dialog_id = %handle.id, "dialog abandoned mid-transition");
    }

    /// Runs the confirm (`confirm == true`) or cancel callback of a dialog.
    ///
    /// Dialogs without a wired callback reply [`DialogReply::Close`].
    pub(crate) fn respond(&mut self, handle: &DialogHandle, confirm: bool) -> Result<DialogReply> {
        let node = self
            .surfaces
            .get_mut(handle.region)
            .dialog_mut(&handle.id)
            .ok_or_else(|| Error::dialog_not_found(&handle.id, handle.region))?;

        let callback = if confirm {
            node.on_confirm.as_mut()
        } else {
            node.on_cancel.as_mut()
        };
        let reply = callback.map_or(DialogReply::Close, |f| f(handle));
        tracing::debug!(region = %handle.region, dialog_id = %handle.id, confirm, ?reply, "dialog answered");
        Ok(reply)
    }

    /// The open transition finished.
    pub(crate) fn settle_opened(&mut self, handle: DialogHandle, done: Resolver<DialogHandle>) {
        if let Some(node) = self.surfaces.get_mut(handle.region).dialog_mut(&handle.id) {
            node.opened = true;
            node.state = DialogState::Open;
        }
        tracing::debug!(region = %handle.region, dialog_id = %handle.id, "dialog open");
        done.resolve(handle);
    }

    /// The close transition finished.
    pub(crate) fn settle_closed(&mut self, handle: &DialogHandle, done: Resolver<()>) {
        let surface = self.surfaces.get_mut(handle.region);
        if let Some(node) = surface.dialog_mut(&handle.id) {
            node.hidden = true;
            node.state = DialogState::Closed;
        }
        if surface.dialogs.iter().all(|d| d.hidden) {
            surface.hidden = true;
        }
        tracing::debug!(region = %handle.region, dialog_id = %handle.id, "dialog closed");
        done.resolve(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    struct Fixture {
        dialogs: DialogCoordinator,
        backdrops: BackdropController,
        timers: Timers,
        start: Instant,
    }

    impl Fixture {
        fn new() -> Self {
            let start = Instant::now();
            let dialogs = DialogCoordinator::new(
                |region| match region {
                    Region::Full => vec!["logout".to_string()],
                    _ => Vec::new(),
                },
                DefaultLabels::default(),
            );
            Self {
                dialogs,
                backdrops: BackdropController::new(),
                timers: Timers::new(start),
                start,
            }
        }

        fn open(&mut self, params: DialogParams, region: Region) -> Completion<DialogHandle> {
            self.dialogs.open(
                &mut self.timers,
                &mut self.backdrops,
                params,
                TransitionDuration::from_secs(0.5),
                TransitionDuration::from_millis(300),
                region,
            )
        }

        fn close(&mut self, handle: &DialogHandle) -> Completion<()> {
            self.dialogs.close(
                &mut self.timers,
                &mut self.backdrops,
                handle,
                TransitionDuration::from_secs(0.5),
                TransitionDuration::from_millis(300),
            )
        }

        fn run(&mut self, secs: f32) {
            let until = self.start + Duration::from_secs_f32(secs);
            while let Some((_, action)) = self.timers.pop_due(until) {
                match action {
                    TimerAction::DialogOpened { handle, done } => {
                        self.dialogs.settle_opened(handle, done);
                    }
                    TimerAction::DialogClosed { handle, done } => {
                        self.dialogs.settle_closed(&handle, done);
                    }
                    TimerAction::BackdropHidden(region) => self.backdrops.settle_hidden(region),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn default_dialog_is_built_from_params() {
        let mut fx = Fixture::new();
        let mut opened = fx.open(
            DialogParams::new("Delete?", "This cannot be undone").confirm_label("Delete"),
            Region::Full,
        );

        let handle = DialogHandle {
            region: Region::Full,
            id: DEFAULT_DIALOG_ID.to_string(),
        };
        let node = fx.dialogs.dialog(&handle).unwrap();
        let content = node.content().unwrap();
        assert_eq!(content.title, "Delete?");
        assert_eq!(content.confirm_label, "Delete");
        assert_eq!(content.cancel_label, "Cancel");
        assert!(content.show_divider);
        assert_eq!(node.state(), DialogState::Opening);
        assert!(!node.is_opened());
        assert!(fx.backdrops.is_visible(Region::Full));

        fx.run(0.5);
        assert_eq!(opened.try_take(), Some(Ok(handle.clone())));
        assert!(fx.dialogs.dialog(&handle).unwrap().is_opened());
    }

    #[test]
    fn default_dialog_is_overwritten_not_duplicated() {
        let mut fx = Fixture::new();
        let _ = fx.open(DialogParams::new("A", ""), Region::Full);
        fx.run(0.5);
        let _ = fx.open(DialogParams::new("B", "").no_divider(), Region::Full);
        fx.run(1.0);

        let defaults: Vec<_> = fx
            .dialogs
            .surface(Region::Full)
            .dialogs()
            .filter(|d| d.id() == DEFAULT_DIALOG_ID)
            .collect();
        assert_eq!(defaults.len(), 1);
        let content = defaults[0].content().unwrap();
        assert_eq!(content.title, "B");
        assert!(!content.show_divider);
    }

    #[test]
    fn unknown_named_dialog_rejects_without_mutation() {
        let mut fx = Fixture::new();
        let mut opened = fx.open(DialogParams::named("missing"), Region::Full);

        assert!(opened.try_take().unwrap().unwrap_err().is_not_found());
        assert!(fx.dialogs.surface(Region::Full).is_hidden());
        assert!(!fx.backdrops.is_visible(Region::Full));
        assert!(fx.timers.is_empty());
    }

    #[test]
    fn named_dialog_has_no_generated_content() {
        let mut fx = Fixture::new();
        let _ = fx.open(DialogParams::named("logout"), Region::Full);
        let handle = DialogHandle {
            region: Region::Full,
            id: "logout".to_string(),
        };
        let node = fx.dialogs.dialog(&handle).unwrap();
        assert!(!node.is_hidden());
        assert!(node.content().is_none());
    }

    #[test]
    fn second_open_in_region_preempts_first() {
        let mut fx = Fixture::new();
        let mut first = fx.open(DialogParams::named("logout"), Region::Full);
        let mut second = fx.open(DialogParams::new("Hi", ""), Region::Full);

        assert_eq!(first.try_take(), Some(Err(Error::Preempted)));
        fx.run(0.5);
        assert_eq!(second.try_take().unwrap().unwrap().id, DEFAULT_DIALOG_ID);
    }

    #[test]
    fn preempted_open_of_other_dialog_is_rolled_back() {
        let mut fx = Fixture::new();
        let logout = DialogHandle {
            region: Region::Full,
            id: "logout".to_string(),
        };
        let _ = fx.open(DialogParams::named("logout"), Region::Full);
        let mut shown = fx.open(DialogParams::new("Hi", ""), Region::Full);

        let node = fx.dialogs.dialog(&logout).unwrap();
        assert!(node.is_hidden());
        assert_eq!(node.state(), DialogState::Closed);
        let owners: Vec<_> = fx.backdrops.surface(Region::Full).owners().cloned().collect();
        assert_eq!(owners, vec![BackdropOwner::Dialog(DEFAULT_DIALOG_ID.to_string())]);

        fx.run(0.5);
        let handle = shown.try_take().unwrap().unwrap();
        let _ = fx.close(&handle);
        fx.run(5.0);

        assert!(fx.dialogs.surface(Region::Full).is_hidden());
        assert!(fx.backdrops.surface(Region::Full).is_hidden());
        assert_eq!(fx.backdrops.surface(Region::Full).owners().count(), 0);
    }

    #[test]
    fn preempted_close_of_other_dialog_still_hides_it() {
        let mut fx = Fixture::new();
        let _ = fx.open(DialogParams::named("logout"), Region::Full);
        fx.run(0.5);
        let logout = DialogHandle {
            region: Region::Full,
            id: "logout".to_string(),
        };
        let mut closing = fx.close(&logout);
        let _ = fx.open(DialogParams::new("Next", ""), Region::Full);

        assert_eq!(closing.try_take(), Some(Err(Error::Preempted)));
        let node = fx.dialogs.dialog(&logout).unwrap();
        assert!(node.is_hidden());
        assert_eq!(node.state(), DialogState::Closed);
        assert!(!fx.dialogs.surface(Region::Full).is_hidden());
        assert!(fx.backdrops.is_visible(Region::Full));
    }

    #[test]
    fn reopening_same_dialog_keeps_it_visible() {
        let mut fx = Fixture::new();
        let mut first = fx.open(DialogParams::named("logout"), Region::Full);
        let _ = fx.open(DialogParams::named("logout"), Region::Full);

        assert_eq!(first.try_take(), Some(Err(Error::Preempted)));
        let logout = DialogHandle {
            region: Region::Full,
            id: "logout".to_string(),
        };
        let node = fx.dialogs.dialog(&logout).unwrap();
        assert!(!node.is_hidden());
        assert_eq!(node.state(), DialogState::Opening);
        assert!(fx.backdrops.is_visible(Region::Full));
    }

    #[test]
    fn close_hides_dialog_and_surface() {
        let mut fx = Fixture::new();
        let _ = fx.open(DialogParams::named("logout"), Region::Full);
        fx.run(0.5);

        let handle = DialogHandle {
            region: Region::Full,
            id: "logout".to_string(),
        };
        let mut closed = fx.close(&handle);
        assert_eq!(fx.dialogs.dialog(&handle).unwrap().state(), DialogState::Closing);

        fx.run(1.0);
        assert_eq!(closed.try_take(), Some(Ok(())));
        assert!(fx.dialogs.dialog(&handle).unwrap().is_hidden());
        assert!(fx.dialogs.surface(Region::Full).is_hidden());
        assert!(fx.backdrops.surface(Region::Full).is_hidden());
    }

    #[test]
    fn respond_runs_wired_callback() {
        let mut fx = Fixture::new();
        let confirmed = Rc::new(Cell::new(0));
        let seen = Rc::clone(&confirmed);
        let _ = fx.open(
            DialogParams::new("Sure?", "").on_confirm(move |_| {
                seen.set(seen.get() + 1);
                DialogReply::KeepOpen
            }),
            Region::Full,
        );

        let handle = DialogHandle {
            region: Region::Full,
            id: DEFAULT_DIALOG_ID.to_string(),
        };
        assert_eq!(fx.dialogs.respond(&handle, true), Ok(DialogReply::KeepOpen));
        assert_eq!(confirmed.get(), 1);

        // no cancel callback wired
        assert_eq!(fx.dialogs.respond(&handle, false), Ok(DialogReply::Close));
    }

    #[test]
    fn default_dialog_drops_previous_callbacks() {
        let mut fx = Fixture::new();
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let _ = fx.open(
            DialogParams::new("Delete A?", "").on_confirm(move |_| {
                seen.set(seen.get() + 1);
                DialogReply::KeepOpen
            }),
            Region::Full,
        );
        fx.run(0.5);
        let _ = fx.open(DialogParams::new("B", ""), Region::Full);

        let handle = DialogHandle {
            region: Region::Full,
            id: DEFAULT_DIALOG_ID.to_string(),
        };
        assert_eq!(fx.dialogs.respond(&handle, true), Ok(DialogReply::Close));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn named_dialog_keeps_callbacks_across_opens() {
        let mut fx = Fixture::new();
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let _ = fx.open(
            DialogParams::named("logout").on_cancel(move |_| {
                seen.set(seen.get() + 1);
                DialogReply::Close
            }),
            Region::Full,
        );
        let _ = fx.open(DialogParams::named("logout"), Region::Full);

        let handle = DialogHandle {
            region: Region::Full,
            id: "logout".to_string(),
        };
        assert_eq!(fx.dialogs.respond(&handle, false), Ok(DialogReply::Close));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn respond_to_unknown_dialog_is_not_found() {
        let mut fx = Fixture::new();
        let handle = DialogHandle {
            region: Region::Aside,
            id: "logout".to_string(),
        };
        assert!(fx.dialogs.respond(&handle, true).unwrap_err().is_not_found());
    }

    #[test]
    fn params_default_to_default_id() {
        assert_eq!(DialogParams::new("t", "m").id(), DEFAULT_DIALOG_ID);
        assert_eq!(DialogParams::named("x").id(), "x");
        assert!(DialogParams::named(DEFAULT_DIALOG_ID).is_default());
    }
}
