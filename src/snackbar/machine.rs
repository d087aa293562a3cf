// SPDX-License-Identifier: MPL-2.0
//! Banner visibility state machine.
//!
//! Every legal move is a row in [`TRANSITIONS`]: a source phase, a trigger, a
//! destination phase and the side effects to run, in order. Pairs missing from
//! the table are ignored, which is how late or redundant triggers become
//! no-ops.

use serde::{Deserialize, Serialize};

/// Visibility phase of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Hidden, nothing pending.
    #[default]
    Closed,
    /// Visible, open transition still running; click-away is off.
    Opening,
    /// Visible and settled; click-away is on.
    Open,
    /// Hidden while the close transition runs, with content staged.
    ClosingForReplacement,
    /// Visible again with the staged content, open transition running.
    Reopening,
}

impl Phase {
    /// Whether the banner is visually shown in this phase.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Phase::Opening | Phase::Open | Phase::Reopening)
    }
}

/// Input that may move the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Owner (or uncontrolled self) wants the banner visible.
    Show,
    /// Owner (or uncontrolled self) wants the banner hidden.
    Hide,
    /// Transition gate timer fired.
    GateElapsed,
    /// New content arrived while open with `open` unchanged.
    ReplaceContent,
    /// Replacement timer fired.
    ReplacementElapsed,
}

/// Effect executed by the controller when a transition is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideEffect {
    ArmAutoHide,
    CancelAutoHide,
    ArmGate,
    CancelGate,
    ArmReplacement,
    CancelReplacement,
    EnableClickAway,
    DisableClickAway,
    /// Move staged content into the displayed slot.
    CommitStaged,
    /// Drop staged content without showing it.
    DiscardStaged,
}

/// Destination and effects of one table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub to: Phase,
    pub effects: &'static [SideEffect],
}

use Phase::{ClosingForReplacement, Closed, Open, Opening, Reopening};
use SideEffect::*;

const OPEN_EFFECTS: &[SideEffect] = &[ArmAutoHide, ArmGate];
const CLOSE_EFFECTS: &[SideEffect] = &[CancelAutoHide, CancelGate, DisableClickAway];
const REPLACE_EFFECTS: &[SideEffect] = &[
    CancelAutoHide,
    CancelGate,
    DisableClickAway,
    ArmReplacement,
];

/// The transition table.
pub const TRANSITIONS: &[(Phase, Trigger, Transition)] = &[
    // Opening
    (Closed, Trigger::Show, Transition { to: Opening, effects: OPEN_EFFECTS }),
    (Opening, Trigger::GateElapsed, Transition { to: Open, effects: &[EnableClickAway] }),
    (Reopening, Trigger::GateElapsed, Transition { to: Open, effects: &[EnableClickAway] }),
    // Closing
    (Opening, Trigger::Hide, Transition { to: Closed, effects: CLOSE_EFFECTS }),
    (Open, Trigger::Hide, Transition { to: Closed, effects: CLOSE_EFFECTS }),
    (Reopening, Trigger::Hide, Transition { to: Closed, effects: CLOSE_EFFECTS }),
    // Queued replacement
    (Opening, Trigger::ReplaceContent, Transition { to: ClosingForReplacement, effects: REPLACE_EFFECTS }),
    (Open, Trigger::ReplaceContent, Transition { to: ClosingForReplacement, effects: REPLACE_EFFECTS }),
    (Reopening, Trigger::ReplaceContent, Transition { to: ClosingForReplacement, effects: REPLACE_EFFECTS }),
    (
        ClosingForReplacement,
        Trigger::ReplacementElapsed,
        Transition { to: Reopening, effects: &[CommitStaged, ArmAutoHide, ArmGate] },
    ),
    (
        ClosingForReplacement,
        Trigger::Show,
        Transition { to: Opening, effects: &[CancelReplacement, DiscardStaged, ArmAutoHide, ArmGate] },
    ),
    (
        ClosingForReplacement,
        Trigger::Hide,
        Transition { to: Closed, effects: &[CancelReplacement, DiscardStaged] },
    ),
];

/// Looks up the row for `(from, trigger)`.
#[must_use]
pub fn transition(from: Phase, trigger: Trigger) -> Option<Transition> {
    TRANSITIONS
        .iter()
        .find(|(phase, t, _)| *phase == from && *t == trigger)
        .map(|(_, _, transition)| *transition)
}
