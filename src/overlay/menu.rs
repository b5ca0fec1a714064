// SPDX-License-Identifier: MPL-2.0
//! Slide-in menu panels.
//!
//! Menus are declared by the page layout and identified by
//! `(region, menu id)`. Show and hide share a single timer key per menu, so
//! whichever was called last is the only one that settles; the other
//! completion reports [`Error::Preempted`](crate::error::Error::Preempted).

use super::backdrop::{BackdropController, BackdropOwner};
use super::completion::{self, Completion, Resolver};
use super::surface::Transition;
use super::{TimerAction, TimerKey, Timers};
use crate::domain::region::{Region, RegionMap};
use crate::domain::ui::TransitionDuration;
use crate::error::Error;

/// Lifecycle of a menu panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// A menu panel declared in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    id: String,
    hidden: bool,
    active: bool,
    transition: Option<Transition>,
    state: MenuState,
}

impl MenuNode {
    fn new(id: String) -> Self {
        Self {
            id,
            hidden: true,
            active: false,
            transition: None,
            state: MenuState::Closed,
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

    /// Set once the menu has fully opened, cleared once it has fully closed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }
}

/// Menu container of one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSurface {
    hidden: bool,
    transition: Option<Transition>,
    menus: Vec<MenuNode>,
}

impl Default for MenuSurface {
    fn default() -> Self {
        Self {
            hidden: true,
            transition: None,
            menus: Vec::new(),
        }
    }
}

impl MenuSurface {
    fn with_menus(ids: &[String]) -> Self {
        Self {
            menus: ids.iter().cloned().map(MenuNode::new).collect(),
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
    pub fn menu(&self, id: &str) -> Option<&MenuNode> {
        self.menus.iter().find(|m| m.id == id)
    }

    pub fn menus(&self) -> impl Iterator<Item = &MenuNode> {
        self.menus.iter()
    }

    fn menu_mut(&mut self, id: &str) -> Option<&mut MenuNode> {
        self.menus.iter_mut().find(|m| m.id == id)
    }
}

/// Opens and closes menu panels.
#[derive(Debug, Default)]
pub struct MenuCoordinator {
    surfaces: RegionMap<MenuSurface>,
}

impl MenuCoordinator {
    /// Creates a coordinator for the menus each region declares.
    pub fn new(declared: impl Fn(Region) -> Vec<String>) -> Self {
        Self {
            surfaces: RegionMap::from_fn(|region| MenuSurface::with_menus(&declared(region))),
        }
    }

    #[must_use]
    pub fn surface(&self, region: Region) -> &MenuSurface {
        self.surfaces.get(region)
    }

    #[must_use]
    pub fn exists(&self, id: &str, region: Region) -> bool {
        self.surface(region).menu(id).is_some()
    }

    /// Reads the visibility flag, so it is already true while opening.
    #[must_use]
    pub fn is_open(&self, id: &str, region: Region) -> bool {
        self.surface(region).menu(id).is_some_and(|m| !m.hidden)
    }

    #[must_use]
    pub fn state(&self, id: &str, region: Region) -> Option<MenuState> {
        self.surface(region).menu(id).map(MenuNode::state)
    }

    /// Id of the menu currently marked active in `region`.
    #[must_use]
    pub fn active_id(&self, region: Region) -> Option<&str> {
        self.surface(region)
            .menus()
            .find(|m| m.active)
            .map(MenuNode::id)
    }

    pub(crate) fn show(
        &mut self,
        timers: &mut Timers,
        backdrops: &mut BackdropController,
        id: &str,
        duration: TransitionDuration,
        region: Region,
    ) -> Completion<()> {
        let surface = self.surfaces.get_mut(region);
        let Some(node) = surface.menu_mut(id) else {
            tracing::debug!(%region, menu_id = id, "show rejected, no such menu");
            return Completion::rejected(Error::menu_not_found(id, region));
        };

        node.hidden = false;
        node.transition = Some(Transition::SlideFromDown);
        node.state = MenuState::Opening;
        surface.hidden = false;
        surface.transition = Some(Transition::FadeIn);

        backdrops.show(timers, region, BackdropOwner::Menu(id.to_string()));

        tracing::debug!(%region, menu_id = id, "menu opening");
        let (done, completion) = completion::pair();
        timers.schedule(
            TimerKey::Menu(region, id.to_string()),
            duration.as_duration(),
            TimerAction::MenuShown {
                region,
                id: id.to_string(),
                done,
            },
        );
        completion
    }

    pub(crate) fn hide(
        &mut self,
        timers: &mut Timers,
        backdrops: &mut BackdropController,
        id: &str,
        duration: TransitionDuration,
        backdrop_fade: TransitionDuration,
        region: Region,
    ) -> Completion<()> {
        let surface = self.surfaces.get_mut(region);
        let Some(node) = surface.menu_mut(id) else {
            tracing::debug!(%region, menu_id = id, "hide rejected, no such menu");
            return Completion::rejected(Error::menu_not_found(id, region));
        };

        node.transition = Some(Transition::SlideDown);
        node.state = MenuState::Closing;
        surface.transition = Some(Transition::FadeOut);

        backdrops.release(
            timers,
            region,
            &BackdropOwner::Menu(id.to_string()),
            backdrop_fade,
        );

        tracing::debug!(%region, menu_id = id, "menu closing");
        let (done, completion) = completion::pair();
        timers.schedule(
            TimerKey::Menu(region, id.to_string()),
            duration.as_duration(),
            TimerAction::MenuHidden {
                region,
                id: id.to_string(),
                done,
            },
        );
        completion
    }

    /// The show transition finished.
    pub(crate) fn settle_shown(&mut self, region: Region, id: &str, done: Resolver<()>) {
        if let Some(node) = self.surfaces.get_mut(region).menu_mut(id) {
            node.state = MenuState::Open;
            node.active = true;
        }
        tracing::debug!(%region, menu_id = id, "menu open");
        done.resolve(());
    }

    /// The hide transition finished.
    pub(crate) fn settle_hidden(&mut self, region: Region, id: &str, done: Resolver<()>) {
        let surface = self.surfaces.get_mut(region);
        if let Some(node) = surface.menu_mut(id) {
            node.state = MenuState::Closed;
            node.active = false;
            node.hidden = true;
        }
        if surface.menus.iter().all(|m| m.hidden) {
            surface.hidden = true;
        }
        tracing::debug!(%region, menu_id = id, "menu closed");
        done.resolve(());
    }
}
