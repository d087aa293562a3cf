// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for notification banners.
//!
//! Banners log what they do through a [`DiagnosticsHandle`]; a
//! [`DiagnosticsCollector`] owned by the application drains those events into
//! a memory-bounded [`CircularBuffer`] and can export them as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with its [`DiagnosticEventKind`]
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
