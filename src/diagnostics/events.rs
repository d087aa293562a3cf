// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types emitted by the notification banner.
//!
//! Events describe what the banner did and why: phase transitions, close
//! requests sent to the owner, replacements and timer firings that arrived
//! too late to matter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::snackbar::{CloseReason, Phase, TimerKind, Trigger};

/// A single recorded event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    /// Wall-clock time the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// Identifier of the emitting banner (its class name), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The type and data of the event.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(source: Option<String>, kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(Utc::now(), source, kind)
    }

    /// Creates an event with an explicit timestamp.
    #[must_use]
    pub fn with_timestamp(
        timestamp: DateTime<Utc>,
        source: Option<String>,
        kind: DiagnosticEventKind,
    ) -> Self {
        Self {
            timestamp,
            source,
            kind,
        }
    }
}

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    // ==========================================================================
    // State Machine
    // ==========================================================================
    /// The banner moved from one phase to another.
    Transition {
        from: Phase,
        to: Phase,
        trigger: Trigger,
    },

    /// New content was staged behind a close/reopen cycle.
    ReplacementQueued {
        /// Length of the staged message, in characters.
        message_chars: usize,
    },

    /// Staged content was committed and the banner reopened.
    ReplacementCommitted,

    // ==========================================================================
    // Close Requests
    // ==========================================================================
    /// A close request was routed to the owner (controlled) or self-applied
    /// (uncontrolled).
    CloseRequested {
        reason: CloseReason,
        controlled: bool,
    },

    // ==========================================================================
    // Timers
    // ==========================================================================
    /// A timer fired after being cancelled or superseded, and was ignored.
    StaleTimer { kind: TimerKind, generation: u64 },

    /// The banner was unmounted, cancelling this many pending timers.
    Unmounted { cancelled_timers: usize },

    // ==========================================================================
    // Free-form
    // ==========================================================================
    /// Anything noteworthy that is not a fault.
    Warning { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_serializes_with_type_tag() {
        let kind = DiagnosticEventKind::Transition {
            from: Phase::Closed,
            to: Phase::Opening,
            trigger: Trigger::Show,
        };
        let json = serde_json::to_value(&kind).expect("serialize");

        assert_eq!(json["type"], "transition");
        assert_eq!(json["from"], "closed");
        assert_eq!(json["to"], "opening");
        assert_eq!(json["trigger"], "show");
    }

    #[test]
    fn close_request_reason_uses_owner_vocabulary() {
        let kind = DiagnosticEventKind::CloseRequested {
            reason: CloseReason::Clickaway,
            controlled: true,
        };
        let json = serde_json::to_value(&kind).expect("serialize");

        assert_eq!(json["reason"], "clickaway");
    }

    #[test]
    fn source_is_omitted_when_absent() {
        let event = DiagnosticEvent::new(None, DiagnosticEventKind::ReplacementCommitted);
        let json = serde_json::to_string(&event).expect("serialize");
        assert!(!json.contains("source"));

        let back: DiagnosticEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }
}
