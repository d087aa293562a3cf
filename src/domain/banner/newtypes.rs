// SPDX-License-Identifier: MPL-2.0
//! Banner newtypes.
//!
//! Owners hand the banner loosely typed values (milliseconds from a config
//! file, a slider, a literal). These wrappers decide once, at the boundary,
//! what counts as "disabled" and what range is acceptable.

use std::time::Duration;

// =============================================================================
// Transition Bounds
// =============================================================================

/// Transition length bounds in milliseconds (50 to 2000).
pub mod transition_bounds {
    /// Minimum transition length.
    pub const MIN_MS: u64 = 50;
    /// Maximum transition length.
    pub const MAX_MS: u64 = 2_000;
    /// Default transition length, matching the banner's slide/fade animation.
    pub const DEFAULT_MS: u64 = 400;
}

/// Bounds of the banner event history kept for diagnostics.
pub mod event_history_bounds {
    pub const MIN: usize = 16;
    pub const MAX: usize = 10_000;
    pub const DEFAULT: usize = 500;
}

// =============================================================================
// AutoHideDuration
// =============================================================================

/// Delay after which an open banner asks to be closed.
///
/// Non-positive or non-finite input silently disables auto-hide instead of
/// failing, so sloppy owner input never errors.
///
/// # Example
///
/// ```
/// use iced_snackbar::domain::banner::AutoHideDuration;
/// use std::time::Duration;
///
/// let delay = AutoHideDuration::from_millis(2_000);
/// assert_eq!(delay.as_duration(), Some(Duration::from_millis(2_000)));
///
/// assert!(!AutoHideDuration::from_millis(0).is_enabled());
/// assert!(!AutoHideDuration::from_millis(-5).is_enabled());
/// assert!(!AutoHideDuration::from_secs_f64(f64::NAN).is_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AutoHideDuration(Option<Duration>);

impl AutoHideDuration {
    /// Auto-hide turned off.
    pub const DISABLED: Self = Self(None);

    /// Builds a delay from signed milliseconds; `<= 0` disables auto-hide.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        match u64::try_from(millis) {
            Ok(ms) if ms > 0 => Self(Some(Duration::from_millis(ms))),
            _ => Self::DISABLED,
        }
    }

    /// Builds a delay from fractional seconds; non-finite or `<= 0` disables auto-hide.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Duration::try_from_secs_f64(secs).map_or(Self::DISABLED, |d| Self(Some(d)))
        } else {
            Self::DISABLED
        }
    }

    /// Builds a delay from a duration; a zero duration disables auto-hide.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        if duration.is_zero() {
            Self::DISABLED
        } else {
            Self(Some(duration))
        }
    }

    /// Returns the delay, or `None` when auto-hide is disabled.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        self.0
    }

    /// Returns true when the banner should auto-hide.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.0.is_some()
    }
}

impl From<Option<Duration>> for AutoHideDuration {
    fn from(value: Option<Duration>) -> Self {
        value.map_or(Self::DISABLED, Self::from_duration)
    }
}

// =============================================================================
// TransitionDelay
// =============================================================================

/// Length of the open/close transition.
///
/// Gates click-away detection after opening and spaces the close/reopen
/// cycle of a queued replacement. Always within 50–2000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionDelay(Duration);

impl TransitionDelay {
    /// Creates a transition delay, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis.clamp(
            transition_bounds::MIN_MS,
            transition_bounds::MAX_MS,
        )))
    }

    /// Returns the delay as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the delay in whole milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        // Bounded by MAX_MS, cannot truncate.
        self.0.as_millis() as u64
    }
}

impl Default for TransitionDelay {
    fn default() -> Self {
        Self(Duration::from_millis(transition_bounds::DEFAULT_MS))
    }
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Number of banner events (transitions, close requests, stale timers) the
/// diagnostics history retains before dropping the oldest.
///
/// Read from `[snackbar] diagnostics_capacity`; out-of-range values are
/// clamped rather than rejected, like the transition length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(events: usize) -> Self {
        Self(events.clamp(event_history_bounds::MIN, event_history_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(event_history_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_millis_enable_auto_hide() {
        let delay = AutoHideDuration::from_millis(1_500);
        assert!(delay.is_enabled());
        assert_eq!(delay.as_duration(), Some(Duration::from_millis(1_500)));
    }

    #[test]
    fn non_positive_millis_disable_auto_hide() {
        assert_eq!(AutoHideDuration::from_millis(0), AutoHideDuration::DISABLED);
        assert_eq!(AutoHideDuration::from_millis(-1), AutoHideDuration::DISABLED);
        assert_eq!(
            AutoHideDuration::from_millis(i64::MIN),
            AutoHideDuration::DISABLED
        );
    }

    #[test]
    fn non_finite_seconds_disable_auto_hide() {
        assert!(!AutoHideDuration::from_secs_f64(f64::NAN).is_enabled());
        assert!(!AutoHideDuration::from_secs_f64(f64::INFINITY).is_enabled());
        assert!(!AutoHideDuration::from_secs_f64(-2.0).is_enabled());
        assert!(AutoHideDuration::from_secs_f64(0.25).is_enabled());
    }

    #[test]
    fn zero_duration_disables_auto_hide() {
        assert!(!AutoHideDuration::from_duration(Duration::ZERO).is_enabled());
        assert!(!AutoHideDuration::from(None).is_enabled());
        assert!(AutoHideDuration::from(Some(Duration::from_secs(1))).is_enabled());
    }

    #[test]
    fn default_is_disabled() {
        assert_eq!(AutoHideDuration::default(), AutoHideDuration::DISABLED);
    }

    #[test]
    fn transition_delay_clamps() {
        assert_eq!(
            TransitionDelay::from_millis(0).as_millis(),
            transition_bounds::MIN_MS
        );
        assert_eq!(
            TransitionDelay::from_millis(60_000).as_millis(),
            transition_bounds::MAX_MS
        );
        assert_eq!(TransitionDelay::from_millis(250).as_millis(), 250);
    }

    #[test]
    fn transition_delay_default_is_400ms() {
        assert_eq!(
            TransitionDelay::default().as_duration(),
            Duration::from_millis(400)
        );
    }

    #[test]
    fn history_capacity_is_clamped_like_the_config_allows() {
        assert_eq!(BufferCapacity::new(0).value(), event_history_bounds::MIN);
        assert_eq!(BufferCapacity::new(usize::MAX).value(), event_history_bounds::MAX);
        assert_eq!(BufferCapacity::new(64).value(), 64);
        assert_eq!(BufferCapacity::default().value(), 500);
    }
}
