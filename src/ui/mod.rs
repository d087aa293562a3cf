// SPDX-License-Identifier: MPL-2.0
//! Visual building blocks shared by the banner and the icon set.
//!
//! # Modules
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Theme object and Light/Dark/System mode
//! - [`styles`] - Style functions for buttons, containers and svgs
//! - [`icons`] - Material icon components

pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
