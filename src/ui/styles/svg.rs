// SPDX-License-Identifier: MPL-2.0
//! SVG icon styles.

use iced::widget::svg;
use iced::{Color, Theme};

/// Tints an icon, switching to `hover` while the pointer is over it.
pub fn icon(color: Color, hover: Option<Color>) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, status: svg::Status| {
        let color = match (status, hover) {
            (svg::Status::Hovered, Some(hover)) => hover,
            _ => color,
        };
        svg::Style { color: Some(color) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_color_applies_only_when_hovered() {
        let style_fn = icon(Color::BLACK, Some(Color::WHITE));
        assert_eq!(style_fn(&Theme::Light, svg::Status::Idle).color, Some(Color::BLACK));
        assert_eq!(style_fn(&Theme::Light, svg::Status::Hovered).color, Some(Color::WHITE));
    }

    #[test]
    fn without_hover_color_stays_constant() {
        let style_fn = icon(Color::BLACK, None);
        assert_eq!(style_fn(&Theme::Light, svg::Status::Hovered).color, Some(Color::BLACK));
    }
}
