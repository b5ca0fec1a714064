// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

/// Rounds non-negative seconds to whole milliseconds, so `0.3` is exactly 300ms.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped, non-negative
fn whole_millis(secs: f32) -> Duration {
    Duration::from_millis((f64::from(secs) * 1000.0).round() as u64)
}

// =============================================================================
// Toast Timeout Bounds
// =============================================================================

/// Toast timeout bounds, in seconds.
pub mod toast_bounds {
    /// Minimum visible time before the fade starts.
    pub const MIN_SECS: f32 = 0.1;
    /// Maximum visible time before the fade starts.
    pub const MAX_SECS: f32 = 60.0;
    /// Default visible time before the fade starts.
    pub const DEFAULT_SECS: f32 = 5.0;
}

// =============================================================================
// ToastTimeout
// =============================================================================

/// Time a toast stays fully visible, guaranteed to be within 0.1s–60s.
///
/// The toast fades after this timeout and is removed after half of it
/// again, so its total lifetime is 1.5× the timeout.
///
/// # Example
///
/// ```
/// use overlay_coordinator::domain::ui::ToastTimeout;
/// use std::time::Duration;
///
/// let timeout = ToastTimeout::from_secs(2.0);
/// assert_eq!(timeout.as_duration(), Duration::from_secs(2));
/// assert_eq!(timeout.lifetime(), Duration::from_secs(3));
///
/// // Non-positive values are clamped to the minimum
/// assert!(ToastTimeout::from_secs(0.0).is_min());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastTimeout(f32);

impl ToastTimeout {
    /// Creates a new timeout, clamping the value to the valid range.
    ///
    /// `NaN` falls back to the default.
    #[must_use]
    pub fn from_secs(secs: f32) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(toast_bounds::MIN_SECS, toast_bounds::MAX_SECS))
    }

    /// Returns the raw value in seconds.
    #[must_use]
    pub fn secs(self) -> f32 {
        self.0
    }

    /// Delay until the fade transition starts.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        whole_millis(self.0)
    }

    /// Delay until the toast is removed (1.5× the timeout).
    #[must_use]
    pub fn lifetime(self) -> Duration {
        whole_millis(self.0 * 1.5)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= toast_bounds::MIN_SECS
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= toast_bounds::MAX_SECS
    }
}

impl Default for ToastTimeout {
    fn default() -> Self {
        Self(toast_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Transition Bounds
// =============================================================================

/// Transition duration bounds, in seconds.
pub mod transition_bounds {
    /// Zero means the transition settles on the next clock advance.
    pub const MIN_SECS: f32 = 0.0;
    /// Longest accepted transition.
    pub const MAX_SECS: f32 = 10.0;
    /// Default menu and dialog transition.
    pub const DEFAULT_SECS: f32 = 0.5;
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Length of a menu, dialog, backdrop or aside transition (0s–10s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionDuration(f32);

impl TransitionDuration {
    /// Settles on the next clock advance.
    pub const IMMEDIATE: Self = Self(0.0);

    /// Creates a new duration from seconds, clamping to the valid range.
    #[must_use]
    pub fn from_secs(secs: f32) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(transition_bounds::MIN_SECS, transition_bounds::MAX_SECS))
    }

    /// Creates a new duration from milliseconds, clamping to the valid range.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // animation timings, not accounting
    pub fn from_millis(millis: u32) -> Self {
        Self::from_secs(millis as f32 / 1000.0)
    }

    #[must_use]
    pub fn secs(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        whole_millis(self.0)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(transition_bounds::DEFAULT_SECS)
    }
}

impl From<Duration> for TransitionDuration {
    fn from(duration: Duration) -> Self {
        Self::from_secs(duration.as_secs_f32())
    }
}

// =============================================================================
// Breakpoint
// =============================================================================

/// Layout breakpoint bounds, in pixels.
pub mod breakpoint_bounds {
    pub const MIN_PX: u32 = 120;
    pub const MAX_PX: u32 = 4096;
    pub const DEFAULT_PX: u32 = 460;
}

/// Viewport width separating the narrow layout from the wide one.
///
/// Widths at or below the breakpoint are narrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint(u32);

impl Breakpoint {
    #[must_use]
    pub fn new(px: u32) -> Self {
        Self(px.clamp(breakpoint_bounds::MIN_PX, breakpoint_bounds::MAX_PX))
    }

    #[must_use]
    pub fn px(self) -> u32 {
        self.0
    }

    /// Returns true when `width` falls on the narrow side.
    #[must_use]
    pub fn is_narrow(self, width: u32) -> bool {
        width <= self.0
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(breakpoint_bounds::DEFAULT_PX)
    }
}
