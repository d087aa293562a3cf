// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::snackbar::{self, CloseReason};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Banner messages are
/// forwarded to the snackbar; the rest are owner decisions.
#[derive(Debug, Clone)]
pub enum Message {
    Snackbar(snackbar::Message),
    /// Show the next sample notification, replacing a visible one.
    Notify,
    Hide,
    /// The banner asked to be closed.
    CloseRequested(CloseReason),
    /// The banner's action button was pressed.
    Action,
    ToggleFavourite,
    ToggleChecked,
    ToggleTheme,
    ExportDiagnostics,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Overrides the configured theme mode.
    pub theme_mode: Option<ThemeMode>,
    /// Overrides the configured auto-hide delay.
    pub auto_hide_ms: Option<i64>,
    /// Directory holding `settings.toml`.
    pub config_dir: Option<PathBuf>,
}
