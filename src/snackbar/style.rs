// SPDX-License-Identifier: MPL-2.0
//! Style computation for the banner.
//!
//! [`compute_styles`] is a pure function of visibility, device class, theme
//! and transition length. The adapter turns the result into iced styles; the
//! controller uses [`banner_bounds`] for click-away hit testing.

use std::fmt;
use std::time::Duration;

use iced::{Color, Point, Rectangle, Size};

use crate::config::CONTENT_FADE_IN_DELAY_MS;
use crate::domain::banner::TransitionDelay;
use crate::snackbar::{Content, DeviceSize};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::AppTheme;

/// Vertical offset of the action button relative to the body.
const ACTION_MARGIN_TOP: f32 = 6.0;
/// The action hangs into the body's right padding.
const ACTION_MARGIN_RIGHT: f32 = -16.0;

/// Animated property of a declared transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Transform,
    Visibility,
    Opacity,
}

/// A declared `ease-out` transition of one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub property: Property,
    pub duration: Duration,
    pub delay: Duration,
}

impl Transition {
    fn ease_out(property: Property, duration: Duration) -> Self {
        Self {
            property,
            duration,
            delay: Duration::ZERO,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let property = match self.property {
            Property::Transform => "transform",
            Property::Visibility => "visibility",
            Property::Opacity => "opacity",
        };
        write!(f, "{}ms ease-out {}", self.duration.as_millis(), property)?;
        if !self.delay.is_zero() {
            write!(f, " {}ms", self.delay.as_millis())?;
        }
        Ok(())
    }
}

/// Fixed, bottom-anchored, full-width row holding the body.
#[derive(Debug, Clone, PartialEq)]
pub struct RootStyle {
    pub z_index: u32,
    pub visible: bool,
    /// Downward offset; the hidden banner sits one body height below the edge.
    pub translate_y: f32,
    pub background: Option<Color>,
    pub transitions: [Transition; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyStyle {
    pub background: Color,
    pub padding_x: f32,
    pub height: f32,
    pub line_height: f32,
    pub radius: f32,
    /// `None` on small devices, where the body inherits the full width.
    pub max_width: Option<f32>,
    pub min_width: Option<f32>,
    pub fill_width: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentStyle {
    pub font_size: f32,
    pub color: Color,
    pub opacity: f32,
    pub transition: Transition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionStyle {
    pub color: Color,
    pub background: Color,
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_left: f32,
    pub float_right: bool,
}

/// Everything needed to draw a banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Styles {
    pub root: RootStyle,
    pub body: BodyStyle,
    pub content: ContentStyle,
    pub action: ActionStyle,
}

/// Owner overrides merged over computed styles. Unset fields keep the
/// computed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverride {
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub radius: Option<f32>,
    pub padding_x: Option<f32>,
    pub height: Option<f32>,
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub z_index: Option<u32>,
}

impl StyleOverride {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Computes banner styles.
#[must_use]
pub fn compute_styles(
    open: bool,
    device: DeviceSize,
    theme: &AppTheme,
    delay: TransitionDelay,
) -> Styles {
    let small = device.is_small();
    let desktop_gutter = theme.spacing.desktop_gutter;
    let subheader_height = theme.spacing.desktop_subheader_height;
    let duration = delay.as_duration();
    let fade_in_delay = Duration::from_millis(CONTENT_FADE_IN_DELAY_MS);

    let root = RootStyle {
        z_index: theme.z_index.snackbar,
        visible: open,
        translate_y: if open { 0.0 } else { subheader_height },
        background: None,
        transitions: [
            Transition::ease_out(Property::Transform, duration),
            Transition::ease_out(Property::Visibility, duration),
        ],
    };

    let body = BodyStyle {
        background: theme.snackbar.background,
        padding_x: desktop_gutter,
        height: subheader_height,
        line_height: subheader_height,
        radius: if small { radius::NONE } else { radius::XS },
        max_width: (!small).then_some(sizing::BANNER_MAX_WIDTH),
        min_width: (!small).then_some(sizing::BANNER_MIN_WIDTH),
        fill_width: small,
    };

    let content = ContentStyle {
        font_size: typography::BODY,
        color: theme.snackbar.text,
        opacity: if open { 1.0 } else { 0.0 },
        transition: if open {
            Transition {
                property: Property::Opacity,
                duration: duration + fade_in_delay,
                delay: fade_in_delay,
            }
        } else {
            Transition::ease_out(Property::Opacity, duration)
        },
    };

    let action = ActionStyle {
        color: theme.snackbar.action,
        background: Color::TRANSPARENT,
        margin_top: ACTION_MARGIN_TOP,
        margin_right: ACTION_MARGIN_RIGHT,
        margin_left: desktop_gutter,
        float_right: true,
    };

    Styles {
        root,
        body,
        content,
        action,
    }
}

impl Styles {
    /// Merges `style` over the root and `body_style` over the body.
    #[must_use]
    pub fn with_overrides(mut self, style: &StyleOverride, body_style: &StyleOverride) -> Self {
        if let Some(z_index) = style.z_index {
            self.root.z_index = z_index;
        }
        if style.background.is_some() {
            self.root.background = style.background;
        }
        if let Some(color) = style.text_color.or(body_style.text_color) {
            self.content.color = color;
        }

        let body = &mut self.body;
        if let Some(background) = body_style.background {
            body.background = background;
        }
        if let Some(radius) = body_style.radius {
            body.radius = radius;
        }
        if let Some(padding_x) = body_style.padding_x {
            body.padding_x = padding_x;
        }
        if let Some(height) = body_style.height {
            body.height = height;
            body.line_height = height;
        }
        if body_style.min_width.is_some() {
            body.min_width = body_style.min_width;
        }
        if body_style.max_width.is_some() {
            body.max_width = body_style.max_width;
        }
        self
    }
}

/// Width of the banner body for `content` under the (overridden) `body`
/// style. Small devices fill the viewport; otherwise the text width is
/// estimated and clamped to the body's min/max widths.
#[must_use]
pub fn body_width(viewport_width: f32, content: &Content, theme: &AppTheme, body: &BodyStyle) -> f32 {
    if body.fill_width {
        return viewport_width;
    }
    let gutter = theme.spacing.desktop_gutter;
    let glyphs = |text: &str| text.chars().count() as f32 * typography::BODY_GLYPH_ADVANCE;

    let mut width = glyphs(&content.message) + 2.0 * body.padding_x;
    if let Some(action) = &content.action {
        width += gutter + glyphs(action) + 2.0 * spacing::MD + ACTION_MARGIN_RIGHT;
    }
    width
        .max(body.min_width.unwrap_or(0.0))
        .min(body.max_width.unwrap_or(f32::INFINITY))
        .min(viewport_width)
}

/// Rectangle the open banner occupies in a viewport of `viewport` size. The
/// view lays the body out with the same width and height, so hit testing
/// and rendering agree.
#[must_use]
pub fn banner_bounds(viewport: Size, content: &Content, theme: &AppTheme, body: &BodyStyle) -> Rectangle {
    let width = body_width(viewport.width, content, theme, body);
    Rectangle::new(
        Point::new((viewport.width - width) / 2.0, viewport.height - body.height),
        Size::new(width, body.height),
    )
}
