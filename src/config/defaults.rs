// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Bounds live with the newtypes in [`crate::domain::ui::newtypes`]; this
//! module only holds the values written to a fresh `settings.toml`.

use crate::domain::ui::newtypes::{breakpoint_bounds, toast_bounds, transition_bounds};

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Seconds a toast stays fully visible.
pub const DEFAULT_TOAST_TIMEOUT_SECS: f32 = toast_bounds::DEFAULT_SECS;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Menu show/hide transition, in seconds.
pub const DEFAULT_MENU_DURATION_SECS: f32 = transition_bounds::DEFAULT_SECS;

/// Dialog open/close transition, in seconds.
pub const DEFAULT_DIALOG_DURATION_SECS: f32 = transition_bounds::DEFAULT_SECS;

/// Backdrop fade-out, in milliseconds.
pub const DEFAULT_BACKDROP_FADE_MS: u32 = 300;

/// Menu transition used when the backdrop is clicked, in seconds.
pub const DEFAULT_BACKDROP_CLICK_DURATION_SECS: f32 = 0.5;

/// Aside panel open/close, in milliseconds.
pub const DEFAULT_ASIDE_DURATION_MS: u32 = 300;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Widths at or below this many pixels use the narrow layout.
pub const DEFAULT_BREAKPOINT_PX: u32 = breakpoint_bounds::DEFAULT_PX;
