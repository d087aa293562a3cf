// SPDX-License-Identifier: MPL-2.0
//! Banner domain types.
//!
//! Value objects shared by the snackbar controller, its configuration, its
//! style computation and its diagnostics history.

mod newtypes;

pub use newtypes::{
    event_history_bounds, transition_bounds, AutoHideDuration, BufferCapacity, TransitionDelay,
};
