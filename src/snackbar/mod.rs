// SPDX-License-Identifier: MPL-2.0
//! Notification banner ("snackbar").
//!
//! The banner shows a short message with an optional action along the
//! bottom edge of the window, closes itself on timeout or outside click, and
//! swaps content through a close/reopen cycle when a new message arrives
//! while it is already visible.
//!
//! # Architecture
//!
//! - [`machine`]: phases, triggers and the transition table
//! - [`Banner`]: headless controller emitting [`Command`]s
//! - [`Snackbar`]: iced host running those commands on the runtime
//! - [`Timeline`]: virtual-time host for tests and headless use
//! - [`ClickAwayDetector`] and [`ViewportObserver`]: injected capabilities
//!
//! # Controlled and uncontrolled mode
//!
//! With `open` set, the owner decides visibility and receives close requests
//! (`"timeout"` or `"clickaway"`) through `on_request_close`. Without it, the
//! banner is opened with [`Snackbar::show`] and applies close requests to
//! itself; `on_request_close` is then never called.
//!
//! # Example
//!
//! ```
//! use iced_snackbar::snackbar::{Banner, BannerOptions, BannerProps, Content, Phase, Timeline};
//! use iced_snackbar::ui::theming::AppTheme;
//! use std::time::Duration;
//!
//! let props = BannerProps::controlled(Content::new("A"), true);
//! let (mut banner, commands) = Banner::mount(props.clone(), AppTheme::default(), BannerOptions::default());
//! let mut timeline = Timeline::new();
//! timeline.apply(commands);
//!
//! timeline.apply(banner.set_props(props.with_message("B")));
//! assert_eq!(banner.phase(), Phase::ClosingForReplacement);
//!
//! timeline.advance(&mut banner, Duration::from_millis(400));
//! assert_eq!(banner.displayed().message, "B");
//! assert!(banner.is_open());
//! ```

pub mod click_away;
mod component;
mod controller;
pub mod machine;
mod props;
pub mod style;
mod timeline;
mod timer;
mod view;
pub mod viewport;

pub use click_away::{BoundsDetector, ClickAwayDetector, PointerEvent};
pub use component::{subscription, Message, Snackbar};
pub use controller::{Banner, BannerOptions, StatePatch};
pub use machine::{Phase, SideEffect, Trigger};
pub use props::{BannerProps, Content, Props, PropsBuilder};
pub use style::{compute_styles, StyleOverride, Styles};
pub use timeline::{CloseRequest, Timeline};
pub use timer::{CloseReason, Command, TimerKind, TimerToken, Timers};
pub use viewport::{DeviceSize, ViewportObserver, WindowViewport};
