// SPDX-License-Identifier: MPL-2.0
//! Toasts reporting the outcome of shop calls.

use super::ShopResponse;
use crate::domain::region::Region;
use crate::error::Result;
use crate::i18n::I18n;
use crate::overlay::{Overlay, Toast, ToastKind};

/// Thumbs up in the full-page region on success, thumbs down otherwise.
#[must_use]
pub fn cart_feedback(outcome: &Result<ShopResponse>, product: &str, i18n: &I18n) -> Toast {
    let (key, kind) = match outcome {
        Ok(response) if response.success => ("toast-cart-added", ToastKind::Good),
        _ => ("toast-cart-failed", ToastKind::Bad),
    };
    Toast::new(i18n.tr_with_args(key, &[("product", product)]))
        .kind(kind)
        .region(Region::Full)
}

/// Success toast next to the review form, or an error toast.
#[must_use]
pub fn review_feedback(outcome: &Result<ShopResponse>, i18n: &I18n) -> Toast {
    match outcome {
        Ok(response) if response.success => Toast::new(i18n.tr("toast-review-posted"))
            .kind(ToastKind::Success)
            .region(Region::Aside),
        _ => Toast::new(i18n.tr("toast-review-failed"))
            .kind(ToastKind::Error)
            .region(Region::Full),
    }
}

/// Shows the cart outcome, unless a toast is already showing.
pub fn notify_cart(overlay: &mut Overlay, outcome: &Result<ShopResponse>, product: &str, i18n: &I18n) {
    overlay.notify(cart_feedback(outcome, product, i18n));
}

/// Shows the review outcome, replacing any visible toast.
pub fn notify_review(overlay: &mut Overlay, outcome: &Result<ShopResponse>, i18n: &I18n) {
    let timeout = overlay.settings().toast_timeout;
    overlay.show_toast(review_feedback(outcome, i18n), timeout, true);
}
