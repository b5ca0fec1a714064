// SPDX-License-Identifier: MPL-2.0
//! Localized strings for dialog labels and feedback toasts.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The active
//! locale is picked from the CLI, then the config file, then the OS locale,
//! then `en-US`.

pub mod fluent;

pub use fluent::I18n;
