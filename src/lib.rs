// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` provides a themeable notification banner and a set of
//! vector icon components for the Iced GUI framework.
//!
//! The banner is driven by an explicit state machine with cancellable
//! timers, closes on timeout or outside click, and replaces its content
//! through a close/reopen cycle. A headless [`snackbar::Banner`] carries all
//! of the behavior; [`snackbar::Snackbar`] runs it on the iced runtime.

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod snackbar;
pub mod ui;

#[cfg(test)]
mod test_utils;
