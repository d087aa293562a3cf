// SPDX-License-Identifier: MPL-2.0
//! Timer slots and the commands the banner asks its host to execute.
//!
//! The banner never sleeps itself. It hands out [`Command::Schedule`] with a
//! [`TimerToken`] and expects the token back when the delay elapses. Each
//! [`TimerKind`] owns one slot; arming a slot bumps its generation, so a token
//! from a cancelled or superseded arming is recognised as stale and ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The three independent one-shot timers of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Requests a close once the banner has been open long enough.
    AutoHide,
    /// Enables click-away detection once the open transition finishes.
    TransitionGate,
    /// Reopens with staged content once the close transition finishes.
    Replacement,
}

impl TimerKind {
    pub const ALL: [TimerKind; 3] = [
        TimerKind::AutoHide,
        TimerKind::TransitionGate,
        TimerKind::Replacement,
    ];

    /// Stable slot index, used by hosts that keep per-kind handles in arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            TimerKind::AutoHide => 0,
            TimerKind::TransitionGate => 1,
            TimerKind::Replacement => 2,
        }
    }
}

/// Identifies one arming of one timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
}

/// Why the banner wants to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseReason {
    /// The auto-hide delay elapsed.
    Timeout,
    /// A pointer interaction happened outside the banner.
    Clickaway,
}

impl CloseReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CloseReason::Timeout => "timeout",
            CloseReason::Clickaway => "clickaway",
        }
    }
}

impl std::fmt::Display for CloseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work the host must perform on the banner's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Deliver `token` back to the banner after `after` has elapsed.
    Schedule { token: TimerToken, after: Duration },
    /// Drop the scheduled delivery of `token`, if still pending.
    Cancel(TimerToken),
    /// Tell the owner the banner should close (controlled mode only).
    RequestClose(CloseReason),
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    generation: u64,
    live: bool,
}

/// One slot per [`TimerKind`], each holding at most one live arming.
#[derive(Debug, Clone, Default)]
pub struct Timers {
    slots: [Slot; 3],
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `kind`, returning the superseded token (if one was live) and
    /// the new token.
    pub fn arm(&mut self, kind: TimerKind) -> (Option<TimerToken>, TimerToken) {
        let superseded = self.cancel(kind);
        let slot = &mut self.slots[kind.index()];
        slot.generation += 1;
        slot.live = true;
        (
            superseded,
            TimerToken {
                kind,
                generation: slot.generation,
            },
        )
    }

    /// Cancels `kind`, returning its token if it was live.
    pub fn cancel(&mut self, kind: TimerKind) -> Option<TimerToken> {
        let token = self.live(kind)?;
        self.slots[kind.index()].live = false;
        Some(token)
    }

    /// Cancels every live slot.
    pub fn cancel_all(&mut self) -> Vec<TimerToken> {
        TimerKind::ALL
            .into_iter()
            .filter_map(|kind| self.cancel(kind))
            .collect()
    }

    /// Consumes a fired token. Returns false when the token is stale.
    pub fn accept(&mut self, token: TimerToken) -> bool {
        if self.live(token.kind) == Some(token) {
            self.slots[token.kind.index()].live = false;
            true
        } else {
            false
        }
    }

    /// Returns the live token of `kind`, if any.
    #[must_use]
    pub fn live(&self, kind: TimerKind) -> Option<TimerToken> {
        let slot = self.slots[kind.index()];
        slot.live.then_some(TimerToken {
            kind,
            generation: slot.generation,
        })
    }

    #[must_use]
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.slots[kind.index()].live
    }

    /// Number of live slots.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.live).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rearming_supersedes_previous_token() {
        let mut timers = Timers::new();
        let (none, first) = timers.arm(TimerKind::AutoHide);
        assert!(none.is_none());

        let (superseded, second) = timers.arm(TimerKind::AutoHide);
        assert_eq!(superseded, Some(first));
        assert_ne!(first, second);

        assert!(!timers.accept(first));
        assert!(timers.accept(second));
    }

    #[test]
    fn accepted_token_cannot_fire_twice() {
        let mut timers = Timers::new();
        let (_, token) = timers.arm(TimerKind::TransitionGate);

        assert!(timers.accept(token));
        assert!(!timers.accept(token));
        assert!(!timers.is_armed(TimerKind::TransitionGate));
    }

    #[test]
    fn slots_are_independent() {
        let mut timers = Timers::new();
        let (_, auto_hide) = timers.arm(TimerKind::AutoHide);
        let (_, gate) = timers.arm(TimerKind::TransitionGate);

        assert_eq!(timers.cancel(TimerKind::TransitionGate), Some(gate));
        assert!(timers.accept(auto_hide));
        assert_eq!(timers.live_count(), 0);
    }

    #[test]
    fn cancel_all_returns_live_tokens_only() {
        let mut timers = Timers::new();
        timers.arm(TimerKind::AutoHide);
        timers.arm(TimerKind::Replacement);

        let cancelled = timers.cancel_all();
        assert_eq!(cancelled.len(), 2);
        assert!(timers.cancel_all().is_empty());
    }

    #[test]
    fn close_reason_strings() {
        assert_eq!(CloseReason::Timeout.to_string(), "timeout");
        assert_eq!(CloseReason::Clickaway.as_str(), "clickaway");
    }
}
