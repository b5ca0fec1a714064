// SPDX-License-Identifier: MPL-2.0
//! `overlay_coordinator` is a headless coordinator for transient UI.
//!
//! It decides when toasts, menus, dialogs, backdrops and the aside panel
//! appear and disappear in the three regions of a page (`main`, `aside` and
//! `full`), and reports when each transition has finished. Rendering is left
//! to the host: it reads surface state back through
//! [`Overlay::surfaces`](overlay::Overlay::surfaces).
//!
//! # Modules
//!
//! - [`overlay`]: the [`Overlay`](overlay::Overlay) facade and its coordinators
//! - [`domain`]: regions and validated value types
//! - [`config`]: `settings.toml` loading and saving
//! - [`i18n`]: Fluent translations
//! - [`shop`]: storefront calls reported through toasts

#![doc(html_root_url = "https://docs.rs/overlay_coordinator/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod overlay;
pub mod paths;
pub mod shop;
