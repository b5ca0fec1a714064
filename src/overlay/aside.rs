// SPDX-License-Identifier: MPL-2.0
//! The `<aside>` side panel.

use super::completion::{self, Completion, Resolver};
use super::{TimerAction, TimerKey, Timers};
use crate::domain::ui::TransitionDuration;

/// Open/close state of the aside panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsidePanel {
    hidden: bool,
    opened: bool,
    closing: bool,
}

impl Default for AsidePanel {
    fn default() -> Self {
        Self {
            hidden: true,
            opened: false,
            closing: false,
        }
    }
}

impl AsidePanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub(crate) fn open(&mut self, timers: &mut Timers, duration: TransitionDuration) -> Completion<()> {
        self.hidden = false;
        self.opened = true;
        self.closing = false;
        tracing::debug!("aside opening");

        let (done, completion) = completion::pair();
        timers.schedule(TimerKey::Aside, duration.as_duration(), TimerAction::AsideOpened(done));
        completion
    }

    pub(crate) fn close(&mut self, timers: &mut Timers, duration: TransitionDuration) -> Completion<()> {
        self.closing = true;
        tracing::debug!("aside closing");

        let (done, completion) = completion::pair();
        timers.schedule(TimerKey::Aside, duration.as_duration(), TimerAction::AsideClosed(done));
        completion
    }

    pub(crate) fn settle_opened(done: Resolver<()>) {
        tracing::trace!("aside open");
        done.resolve(());
    }

    pub(crate) fn settle_closed(&mut self, done: Resolver<()>) {
        self.opened = false;
        self.closing = false;
        self.hidden = true;
        tracing::trace!("aside closed");
        done.resolve(());
    }
}
