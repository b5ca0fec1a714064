// SPDX-License-Identifier: MPL-2.0
//! Drives an [`Overlay`]'s logical clock from the tokio timer.
//!
//! Under `tokio::time::pause()` the driver advances instantly and
//! deterministically, which is how the tests run it.

use super::Overlay;
use std::time::{Duration, Instant};

/// Current tokio time as a std instant.
///
/// Pass this to [`Overlay::new`] so the overlay's clock matches the one the
/// driver sleeps on, including when tokio time is paused.
#[must_use]
pub fn clock_now() -> Instant {
    tokio::time::Instant::now().into_std()
}

/// Sleeps until each pending transition is due and fires it, until none is
/// left. Returns the number of timers fired.
pub async fn run_until_idle(overlay: &mut Overlay) -> usize {
    let mut fired = 0;
    while let Some(due) = overlay.next_due() {
        tokio::time::sleep_until(tokio::time::Instant::from_std(due)).await;
        fired += overlay.advance_to(clock_now().max(due));
    }
    fired
}

/// Fires everything due within `span` from now, then sleeps out the rest of it.
pub async fn run_for(overlay: &mut Overlay, span: Duration) -> usize {
    let deadline = clock_now() + span;
    let mut fired = 0;
    while let Some(due) = overlay.next_due().filter(|due| *due <= deadline) {
        tokio::time::sleep_until(tokio::time::Instant::from_std(due)).await;
        fired += overlay.advance_to(clock_now().max(due).min(deadline));
    }
    tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
    fired += overlay.advance_to(deadline);
    fired
}
