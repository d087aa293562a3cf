// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and validation rules. It has no
//! dependencies on external crates (except `std`) so the banner's state
//! machine can be tested without a GUI runtime.
//!
//! # Modules
//!
//! - [`banner`]: [`AutoHideDuration`](banner::AutoHideDuration),
//!   [`TransitionDelay`](banner::TransitionDelay) and the diagnostics history
//!   [`BufferCapacity`](banner::BufferCapacity)

pub mod banner;
