// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Flat text button, as used for the banner action.
///
/// Transparent at rest; hover and press add a faint wash of the label color.
pub fn flat(label: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let wash = match status {
            button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE * 0.5),
            button::Status::Pressed => Some(opacity::OVERLAY_SUBTLE),
            _ => None,
        };
        let text_color = match status {
            button::Status::Disabled => Color { a: 0.5, ..label },
            _ => label,
        };

        button::Style {
            background: wash.map(|a| Background::Color(Color { a, ..label })),
            text_color,
            border: Border {
                radius: radius::XS.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Raised button for the demo controls.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Disabled => palette::GRAY_200,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::SM
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_button_is_transparent_at_rest() {
        let style = flat(palette::ACCENT_200)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.text_color, palette::ACCENT_200);
    }

    #[test]
    fn flat_button_washes_on_hover_and_press() {
        let style_fn = flat(palette::ACCENT_200);
        let hover = style_fn(&Theme::Light, button::Status::Hovered);
        let pressed = style_fn(&Theme::Light, button::Status::Pressed);

        assert!(hover.background.is_some());
        assert_ne!(hover.background, pressed.background);
    }

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }
}
