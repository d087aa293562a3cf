// SPDX-License-Identifier: MPL-2.0
//! Virtual-time host for banners.
//!
//! [`Timeline`] executes [`Command`]s against a simulated clock instead of the
//! async runtime. Tests, benches and headless hosts use it to drive a
//! [`Banner`] through exact timer choreographies.

use std::time::Duration;

use crate::snackbar::{Banner, CloseReason, Command, TimerToken};

/// A close request observed at a virtual instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseRequest {
    pub at: Duration,
    pub reason: CloseReason,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: Duration,
    /// Insertion order, breaks ties between timers due at the same instant.
    seq: u64,
    token: TimerToken,
}

/// Simulated clock and timer queue.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
    close_requests: Vec<CloseRequest>,
    fired: usize,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the timeline started.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Executes commands at the current instant.
    pub fn apply(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            match command {
                Command::Schedule { token, after } => {
                    self.seq += 1;
                    self.pending.push(Pending {
                        due: self.now + after,
                        seq: self.seq,
                        token,
                    });
                }
                Command::Cancel(token) => self.pending.retain(|p| p.token != token),
                Command::RequestClose(reason) => self.close_requests.push(CloseRequest {
                    at: self.now,
                    reason,
                }),
            }
        }
    }

    /// Advances the clock by `by`, delivering every timer that falls due to
    /// `banner` in due order.
    pub fn advance(&mut self, banner: &mut Banner, by: Duration) {
        let target = self.now + by;
        while let Some(index) = self.next_due(target) {
            let pending = self.pending.remove(index);
            self.now = pending.due;
            self.fired += 1;
            let commands = banner.on_timer(pending.token);
            self.apply(commands);
        }
        self.now = target;
    }

    /// Advances to an absolute virtual time. Earlier instants are ignored.
    pub fn advance_to(&mut self, banner: &mut Banner, at: Duration) {
        if let Some(by) = at.checked_sub(self.now) {
            self.advance(banner, by);
        }
    }

    fn next_due(&self, target: Duration) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(index, _)| index)
    }

    /// Close requests recorded so far.
    #[must_use]
    pub fn close_requests(&self) -> &[CloseRequest] {
        &self.close_requests
    }

    /// Returns and forgets the recorded close requests.
    pub fn take_close_requests(&mut self) -> Vec<CloseRequest> {
        std::mem::take(&mut self.close_requests)
    }

    /// Number of timers still scheduled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of timers delivered to the banner, stale ones included.
    #[must_use]
    pub fn fired(&self) -> usize {
        self.fired
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
