// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Transition**: Open/close animation length shared by the gate and replacement timers
//! - **Auto-hide**: Default dismiss delay used by the demo application
//! - **Breakpoints**: Viewport widths separating small, medium and large devices
//! - **Diagnostics**: Event buffer capacity bounds

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Length of the banner's open/close transition (in milliseconds).
///
/// Click-away detection is gated for this long after opening, and a queued
/// replacement waits this long before reopening.
pub const DEFAULT_TRANSITION_MS: u64 = 400;

/// Minimum transition length (in milliseconds).
pub const MIN_TRANSITION_MS: u64 = 50;

/// Maximum transition length (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2_000;

/// Extra delay before the message fades in after the body starts moving.
pub const CONTENT_FADE_IN_DELAY_MS: u64 = 100;

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Default auto-hide delay for the demo application (in milliseconds).
///
/// The component itself never auto-hides unless the owner asks for it.
pub const DEFAULT_AUTO_HIDE_MS: i64 = 4_000;

// ==========================================================================
// Viewport Breakpoints
// ==========================================================================

/// Window width (logical pixels) from which the viewport counts as medium.
pub const MEDIUM_BREAKPOINT_PX: f32 = 768.0;

/// Window width (logical pixels) from which the viewport counts as large.
pub const LARGE_BREAKPOINT_PX: f32 = 992.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Transition validation
    assert!(MIN_TRANSITION_MS > 0);
    assert!(MAX_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(CONTENT_FADE_IN_DELAY_MS < DEFAULT_TRANSITION_MS);

    // Auto-hide validation
    assert!(DEFAULT_AUTO_HIDE_MS > 0);

    // Breakpoint validation
    assert!(MEDIUM_BREAKPOINT_PX > 0.0);
    assert!(LARGE_BREAKPOINT_PX > MEDIUM_BREAKPOINT_PX);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
