// SPDX-License-Identifier: MPL-2.0
//! Vector icon components.
//!
//! Every icon is a single Material path authored against a 24×24 viewBox.
//! The SVG document is built once per icon and its handle cached in a
//! `OnceLock`, so calling an icon constructor in `view` is cheap.
//!
//! # Usage
//!
//! ```
//! use iced_snackbar::ui::icons::{self, toggle};
//! use iced_snackbar::ui::theming::AppTheme;
//! use iced::Color;
//!
//! let theme = AppTheme::default();
//! let star: iced::Element<'_, ()> = toggle::star()
//!     .size(32.0)
//!     .hover_color(Color::from_rgb(1.0, 0.8, 0.0))
//!     .view(&theme);
//! # let _ = (star, icons::navigation::close());
//! ```
//!
//! # Naming Convention
//!
//! Icons use the Material names (e.g. `check_box_outline_blank`), grouped
//! by Material category.

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Element, Length};

use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use crate::ui::theming::AppTheme;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Defines a path constant and an icon constructor whose handle is created
/// on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $path_const:ident, $path:literal, $doc:literal) => {
        #[doc = concat!("Path data of [`", stringify!($name), "`].")]
        pub const $path_const: &str = $path;

        #[doc = $doc]
        #[must_use]
        pub fn $name() -> $crate::ui::icons::SvgIcon {
            static HANDLE: ::std::sync::OnceLock<::iced::widget::svg::Handle> =
                ::std::sync::OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                ::iced::widget::svg::Handle::from_memory(
                    $crate::ui::icons::svg_document($path).into_bytes(),
                )
            });
            $crate::ui::icons::SvgIcon::new(handle.clone())
        }
    };
}

pub mod navigation;
pub mod toggle;

/// Wraps path data in a standalone SVG document.
#[must_use]
pub fn svg_document(path: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {v} {v}"><path d="{path}"/></svg>"#,
        v = sizing::ICON_VIEWBOX
    )
}

/// A themeable icon ready to be rendered.
#[derive(Debug, Clone)]
pub struct SvgIcon {
    handle: Handle,
    size: f32,
    color: Option<Color>,
    hover_color: Option<Color>,
}

impl SvgIcon {
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            size: sizing::ICON_MD,
            color: None,
            hover_color: None,
        }
    }

    /// Square size in logical pixels.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Fill color; defaults to the theme's primary text color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Fill color while hovered.
    #[must_use]
    pub fn hover_color(mut self, color: Color) -> Self {
        self.hover_color = Some(color);
        self
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Effective fill color under `theme`.
    #[must_use]
    pub fn resolved_color(&self, theme: &AppTheme) -> Color {
        self.color.unwrap_or(theme.colors.text_primary)
    }

    /// Builds the svg widget.
    #[must_use]
    pub fn into_svg(self, theme: &AppTheme) -> Svg<'static> {
        let color = self.resolved_color(theme);
        Svg::new(self.handle)
            .width(Length::Fixed(self.size))
            .height(Length::Fixed(self.size))
            .style(styles::svg::icon(color, self.hover_color))
    }

    #[must_use]
    pub fn view<'a, Message: 'a>(self, theme: &AppTheme) -> Element<'a, Message> {
        self.into_svg(theme).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeMode;

    #[test]
    fn svg_document_wraps_path_in_viewbox() {
        let doc = svg_document("M0 0h24v24H0z");
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(r#"viewBox="0 0 24 24""#));
        assert!(doc.contains(r#"<path d="M0 0h24v24H0z"/>"#));
    }

    #[test]
    fn color_defaults_to_theme_text() {
        let light = AppTheme::default();
        let dark = AppTheme::new(ThemeMode::Dark);
        let icon = toggle::star();

        assert_eq!(icon.resolved_color(&light), light.colors.text_primary);
        assert_eq!(icon.resolved_color(&dark), Color::WHITE);
        assert_eq!(icon.color(Color::BLACK).resolved_color(&dark), Color::BLACK);
    }

    #[test]
    fn handles_are_cached_per_icon() {
        assert_eq!(toggle::star().handle().id(), toggle::star().handle().id());
        assert_ne!(
            toggle::star().handle().id(),
            toggle::star_border().handle().id()
        );
    }

    #[test]
    fn default_size_matches_viewbox() {
        let icon = navigation::close();
        assert_eq!(icon.size, sizing::ICON_VIEWBOX);
        assert_eq!(icon.size(48.0).size, 48.0);
    }
}
