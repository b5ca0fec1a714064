// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`region`]: Page regions ([`Region`](region::Region)) and the per-region
//!   lookup table ([`RegionMap`](region::RegionMap))
//! - [`ui`]: UI value objects ([`ToastTimeout`](ui::newtypes::ToastTimeout),
//!   [`TransitionDuration`](ui::newtypes::TransitionDuration),
//!   [`Breakpoint`](ui::newtypes::Breakpoint))

pub mod region;
pub mod ui;
