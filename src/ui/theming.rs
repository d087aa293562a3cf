// SPDX-License-Identifier: MPL-2.0
//! Theme object handed to banners and icons at construction.
//!
//! There is no ambient theme: every component receives an [`AppTheme`]
//! explicitly and falls back to [`AppTheme::default()`] (the light scheme)
//! when the owner does not care.

use crate::ui::design_tokens::{opacity, palette, spacing, z_index};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub accent: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: Color {
                a: 0.87,
                ..palette::BLACK
            },
            text_secondary: Color {
                a: 0.54,
                ..palette::BLACK
            },

            brand_primary: palette::PRIMARY_500,
            accent: palette::ACCENT_200,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_700,
            accent: palette::ACCENT_100,
        }
    }

    /// Detects the system theme and returns the matching scheme.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Dark) = dark_light::detect() {
            Self::dark()
        } else {
            Self::light() // Default to light on detection error
        }
    }
}

/// Banner-specific colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnackbarPalette {
    pub text: Color,
    pub background: Color,
    pub action: Color,
}

impl SnackbarPalette {
    fn for_scheme(colors: &ColorScheme) -> Self {
        Self {
            text: palette::WHITE,
            background: Color {
                a: opacity::BANNER_SURFACE,
                ..palette::BLACK
            },
            action: colors.accent,
        }
    }
}

/// Layout spacing the banner reads from the theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSpacing {
    /// Horizontal padding of the banner body and left margin of the action.
    pub desktop_gutter: f32,
    /// Height (and line height) of the banner body.
    pub desktop_subheader_height: f32,
}

impl Default for ThemeSpacing {
    fn default() -> Self {
        Self {
            desktop_gutter: spacing::LG,
            desktop_subheader_height: spacing::XXL,
        }
    }
}

/// Stacking order of overlay layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZIndex {
    pub snackbar: u32,
}

impl Default for ZIndex {
    fn default() -> Self {
        Self {
            snackbar: z_index::SNACKBAR,
        }
    }
}

/// Complete theme configuration.
///
/// `AppTheme::default()` is the light scheme with the standard spacing and
/// z-index values; it never probes the operating system.
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    pub snackbar: SnackbarPalette,
    pub spacing: ThemeSpacing,
    pub z_index: ZIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode '{other}' (expected light, dark or system)")),
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };
        let snackbar = SnackbarPalette::for_scheme(&colors);

        Self {
            colors,
            mode,
            snackbar,
            spacing: ThemeSpacing::default(),
            z_index: ZIndex::default(),
        }
    }

    /// The matching built-in iced theme for the surrounding application.
    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        if self.mode.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::Light)
    }
}
