// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::shadow;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Banner body: solid background, optional rounding, no border.
pub fn snackbar_body(
    background: Color,
    text_color: Color,
    rad: f32,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            radius: rad.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Full-width row anchoring the body to the bottom edge. Transparent unless
/// the owner overrides its background.
pub fn snackbar_root(background: Option<Color>) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: background.map(Background::Color),
        ..Default::default()
    }
}

/// Generic panel surface for the demo application, derived from the active
/// iced theme so it stays readable in light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
