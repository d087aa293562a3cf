// SPDX-License-Identifier: MPL-2.0
//! Headless notification banner.
//!
//! [`Banner`] owns visibility, displayed and staged content, the three timer
//! slots and the injected capabilities. It never waits on anything itself:
//! every method returns the [`Command`]s its host must carry out, and timers
//! come back through [`Banner::on_timer`].

use iced::{Rectangle, Size};

use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use crate::domain::banner::TransitionDelay;
use crate::snackbar::click_away::{BoundsDetector, ClickAwayDetector, PointerEvent};
use crate::snackbar::machine::{self, Phase, SideEffect, Trigger};
use crate::snackbar::props::{BannerProps, Content};
use crate::snackbar::style::{banner_bounds, compute_styles, Styles};
use crate::snackbar::timer::{CloseReason, Command, TimerKind, TimerToken, Timers};
use crate::snackbar::viewport::{DeviceSize, ViewportObserver, WindowViewport};
use crate::ui::theming::AppTheme;

/// Outcome of reconciling two consecutive props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatePatch {
    /// Props are identical; nothing to do.
    Unchanged,
    /// Take the requested visibility and show `content` immediately.
    Adopt { open: bool, content: Content },
    /// Close, then reopen with `staged` once the close transition ends.
    Replace { staged: Content },
}

/// Construction-time collaborators and settings of a [`Banner`].
#[derive(Debug)]
pub struct BannerOptions {
    pub transition: TransitionDelay,
    pub detector: Box<dyn ClickAwayDetector>,
    pub viewport: Box<dyn ViewportObserver>,
    pub diagnostics: Option<DiagnosticsHandle>,
    /// Identifier attached to diagnostic events.
    pub source: Option<String>,
}

impl Default for BannerOptions {
    fn default() -> Self {
        Self {
            transition: TransitionDelay::default(),
            detector: Box::new(BoundsDetector::new()),
            viewport: Box::new(WindowViewport::new()),
            diagnostics: None,
            source: None,
        }
    }
}

impl BannerOptions {
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionDelay) -> Self {
        self.transition = transition;
        self
    }

    #[must_use]
    pub fn with_detector(mut self, detector: impl ClickAwayDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: impl ViewportObserver + 'static) -> Self {
        self.viewport = Box::new(viewport);
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Notification banner state.
#[derive(Debug)]
pub struct Banner {
    phase: Phase,
    displayed: Content,
    staged: Option<Content>,
    props: BannerProps,
    timers: Timers,
    transition: TransitionDelay,
    detector: Box<dyn ClickAwayDetector>,
    viewport: Box<dyn ViewportObserver>,
    theme: AppTheme,
    diagnostics: Option<DiagnosticsHandle>,
    source: Option<String>,
    mounted: bool,
}

impl Banner {
    /// Mounts a banner seeded from `props`.
    ///
    /// A controlled banner mounted with `open = true` starts opening right
    /// away; an uncontrolled one starts closed.
    pub fn mount(props: BannerProps, theme: AppTheme, options: BannerOptions) -> (Self, Vec<Command>) {
        let mut banner = Self {
            phase: Phase::Closed,
            displayed: props.content.clone(),
            staged: None,
            props,
            timers: Timers::new(),
            transition: options.transition,
            detector: options.detector,
            viewport: options.viewport,
            theme,
            diagnostics: options.diagnostics,
            source: options.source,
            mounted: true,
        };
        banner.refresh_bounds();

        let commands = if banner.props.open == Some(true) {
            banner.fire(Trigger::Show)
        } else {
            Vec::new()
        };
        (banner, commands)
    }

    // =========================================================================
    // Reconciliation
    // =========================================================================

    /// Decides how `next` props should be applied after `prev`.
    #[must_use]
    pub fn reconcile(&self, prev: &BannerProps, next: &BannerProps) -> StatePatch {
        if prev == next {
            return StatePatch::Unchanged;
        }

        if self.phase.is_open() && next.open == prev.open && next.content != prev.content {
            return StatePatch::Replace {
                staged: next.content.clone(),
            };
        }

        StatePatch::Adopt {
            open: next.open.unwrap_or_else(|| self.intends_open()),
            content: next.content.clone(),
        }
    }

    /// Applies new props from the owner.
    pub fn set_props(&mut self, next: BannerProps) -> Vec<Command> {
        if !self.mounted {
            return Vec::new();
        }
        let patch = self.reconcile(&self.props, &next);
        self.props = next;
        let commands = self.apply(patch);
        // Overrides may have resized the body.
        self.refresh_bounds();
        commands
    }

    fn apply(&mut self, patch: StatePatch) -> Vec<Command> {
        match patch {
            StatePatch::Unchanged => Vec::new(),
            StatePatch::Replace { staged } => {
                self.log(DiagnosticEventKind::ReplacementQueued {
                    message_chars: staged.message.chars().count(),
                });
                self.staged = Some(staged);
                self.fire(Trigger::ReplaceContent)
            }
            StatePatch::Adopt { open, content } => {
                self.displayed = content;
                self.fire(if open { Trigger::Show } else { Trigger::Hide })
            }
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Handles a fired timer. Stale tokens are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> Vec<Command> {
        if !self.mounted || !self.timers.accept(token) {
            self.log(DiagnosticEventKind::StaleTimer {
                kind: token.kind,
                generation: token.generation,
            });
            return Vec::new();
        }

        match token.kind {
            TimerKind::AutoHide => self.request_close(CloseReason::Timeout),
            TimerKind::TransitionGate => self.fire(Trigger::GateElapsed),
            TimerKind::Replacement => self.fire(Trigger::ReplacementElapsed),
        }
    }

    /// Feeds pointer input to the click-away detector.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Vec<Command> {
        if !self.mounted {
            return Vec::new();
        }
        let outside = self.detector.observe(event);
        if outside && self.phase == Phase::Open {
            self.request_close(CloseReason::Clickaway)
        } else {
            Vec::new()
        }
    }

    /// Records a new window size.
    pub fn on_resize(&mut self, size: Size) {
        self.viewport.resized(size);
        self.refresh_bounds();
    }

    /// Opens an uncontrolled banner. Ignored in controlled mode.
    pub fn show(&mut self) -> Vec<Command> {
        self.self_apply(Trigger::Show)
    }

    /// Closes an uncontrolled banner. Ignored in controlled mode.
    pub fn dismiss(&mut self) -> Vec<Command> {
        self.self_apply(Trigger::Hide)
    }

    /// Cancels every pending timer and unbinds the detector. Later timer
    /// firings, pointer events and props are ignored.
    pub fn unmount(&mut self) -> Vec<Command> {
        if !self.mounted {
            return Vec::new();
        }
        self.mounted = false;
        self.detector.unbind();
        self.staged = None;
        self.phase = Phase::Closed;

        let cancelled = self.timers.cancel_all();
        self.log(DiagnosticEventKind::Unmounted {
            cancelled_timers: cancelled.len(),
        });
        cancelled.into_iter().map(Command::Cancel).collect()
    }

    pub fn set_theme(&mut self, theme: AppTheme) {
        self.theme = theme;
        self.refresh_bounds();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the banner is visually shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    #[must_use]
    pub fn displayed(&self) -> &Content {
        &self.displayed
    }

    #[must_use]
    pub fn staged(&self) -> Option<&Content> {
        self.staged.as_ref()
    }

    #[must_use]
    pub fn props(&self) -> &BannerProps {
        &self.props
    }

    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.props.is_controlled()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn click_away_enabled(&self) -> bool {
        self.detector.is_bound()
    }

    #[must_use]
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    #[must_use]
    pub fn transition(&self) -> TransitionDelay {
        self.transition
    }

    #[must_use]
    pub fn device(&self) -> DeviceSize {
        self.viewport.device()
    }

    #[must_use]
    pub fn viewport_size(&self) -> Option<Size> {
        self.viewport.size()
    }

    #[must_use]
    pub fn theme(&self) -> &AppTheme {
        &self.theme
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Area the open banner occupies, once the viewport size is known.
    #[must_use]
    pub fn bounds(&self) -> Option<Rectangle> {
        self.viewport
            .size()
            .map(|size| banner_bounds(size, &self.displayed, &self.theme, &self.styles().body))
    }

    /// Styles for the current phase, with the owner's overrides applied.
    #[must_use]
    pub fn styles(&self) -> Styles {
        compute_styles(self.is_open(), self.device(), &self.theme, self.transition)
            .with_overrides(&self.props.style, &self.props.body_style)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Visibility an uncontrolled banner keeps across prop updates. A queued
    /// replacement counts as open: the banner is only closed to reopen.
    fn intends_open(&self) -> bool {
        self.phase.is_open() || self.phase == Phase::ClosingForReplacement
    }

    fn self_apply(&mut self, trigger: Trigger) -> Vec<Command> {
        if !self.mounted {
            return Vec::new();
        }
        if self.is_controlled() {
            self.log(DiagnosticEventKind::Warning {
                message: format!("{trigger:?} ignored: visibility is owner-controlled"),
            });
            return Vec::new();
        }
        self.fire(trigger)
    }

    /// Routes a close request: to the owner when controlled, applied
    /// directly when uncontrolled.
    fn request_close(&mut self, reason: CloseReason) -> Vec<Command> {
        let controlled = self.is_controlled();
        self.log(DiagnosticEventKind::CloseRequested { reason, controlled });

        #[cfg(feature = "tracing")]
        tracing::debug!(source = ?self.source, %reason, controlled, "banner close requested");

        if controlled {
            vec![Command::RequestClose(reason)]
        } else {
            self.fire(Trigger::Hide)
        }
    }

    /// Takes the table row for `trigger`, if any, and runs its effects.
    fn fire(&mut self, trigger: Trigger) -> Vec<Command> {
        let Some(row) = machine::transition(self.phase, trigger) else {
            return Vec::new();
        };
        let from = self.phase;
        self.phase = row.to;

        #[cfg(feature = "tracing")]
        tracing::debug!(source = ?self.source, ?from, to = ?row.to, ?trigger, "banner transition");

        self.log(DiagnosticEventKind::Transition {
            from,
            to: row.to,
            trigger,
        });

        let mut commands = Vec::new();
        for effect in row.effects {
            self.run(*effect, &mut commands);
        }
        commands
    }

    fn run(&mut self, effect: SideEffect, commands: &mut Vec<Command>) {
        match effect {
            SideEffect::ArmAutoHide => match self.props.auto_hide.as_duration() {
                Some(after) => self.arm(TimerKind::AutoHide, after, commands),
                None => self.cancel(TimerKind::AutoHide, commands),
            },
            SideEffect::CancelAutoHide => self.cancel(TimerKind::AutoHide, commands),
            SideEffect::ArmGate => {
                self.arm(TimerKind::TransitionGate, self.transition.as_duration(), commands);
            }
            SideEffect::CancelGate => self.cancel(TimerKind::TransitionGate, commands),
            SideEffect::ArmReplacement => {
                self.arm(TimerKind::Replacement, self.transition.as_duration(), commands);
            }
            SideEffect::CancelReplacement => self.cancel(TimerKind::Replacement, commands),
            SideEffect::EnableClickAway => self.detector.bind(),
            SideEffect::DisableClickAway => self.detector.unbind(),
            SideEffect::CommitStaged => {
                if let Some(content) = self.staged.take() {
                    self.displayed = content;
                    self.refresh_bounds();
                    self.log(DiagnosticEventKind::ReplacementCommitted);
                }
            }
            SideEffect::DiscardStaged => self.staged = None,
        }
    }

    fn arm(&mut self, kind: TimerKind, after: std::time::Duration, commands: &mut Vec<Command>) {
        let (superseded, token) = self.timers.arm(kind);
        if let Some(old) = superseded {
            commands.push(Command::Cancel(old));
        }
        commands.push(Command::Schedule { token, after });
    }

    fn cancel(&mut self, kind: TimerKind, commands: &mut Vec<Command>) {
        if let Some(token) = self.timers.cancel(kind) {
            commands.push(Command::Cancel(token));
        }
    }

    fn refresh_bounds(&mut self) {
        let bounds = self.bounds();
        self.detector.set_bounds(bounds);
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(self.source.as_deref(), kind);
        }
    }
}
