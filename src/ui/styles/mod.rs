// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for banners, icons and the demo application.

pub mod button;
pub mod container;
pub mod svg;
