// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every visual constant used by the banner and the icon components.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale, including the desktop gutter
- **Sizing**: Component sizes (icons, banner body)
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Z-Index**: Stacking order of overlay layers

## Examples

```
use iced_snackbar::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let banner_bg = Color {
    a: opacity::BANNER_SURFACE,
    ..palette::BLACK
};

let gutter = spacing::LG; // 24px
# let _ = (banner_bg, gutter);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (cyan scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.149, 0.776, 0.855); // #26c6da
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.737, 0.831); // #00bcd4
    pub const PRIMARY_700: Color = Color::from_rgb(0.0, 0.592, 0.655); // #0097a7

    // Accent (pink A200), used for the banner action label
    pub const ACCENT_200: Color = Color::from_rgb(1.0, 0.251, 0.506); // #ff4081
    pub const ACCENT_100: Color = Color::from_rgb(1.0, 0.502, 0.671); // #ff80ab
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Banner body background over black.
    pub const BANNER_SURFACE: f32 = 0.87;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units, desktop gutter
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units, desktop subheader height
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Square viewBox every icon path is authored against.
    pub const ICON_VIEWBOX: f32 = 24.0;

    // Banner body on medium and large viewports
    pub const BANNER_MIN_WIDTH: f32 = 288.0;
    pub const BANNER_MAX_WIDTH: f32 = 568.0;

    /// Flat button height inside the banner.
    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner message text.
    pub const BODY: f32 = 14.0;

    /// Action labels.
    pub const BUTTON: f32 = 14.0;

    /// Average advance of a body glyph, used to estimate banner width.
    pub const BODY_GLYPH_ADVANCE: f32 = 7.5;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const XS: f32 = 2.0;
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Z-Index Scale
// ============================================================================

pub mod z_index {
    pub const APP_BAR: u32 = 1100;
    pub const DIALOG: u32 = 1500;
    pub const SNACKBAR: u32 = 2900;
    pub const TOOLTIP: u32 = 3000;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BANNER_SURFACE > 0.0 && opacity::BANNER_SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::BANNER_MAX_WIDTH > sizing::BANNER_MIN_WIDTH);

    // Stacking validation
    assert!(z_index::SNACKBAR > z_index::DIALOG);
    assert!(z_index::TOOLTIP > z_index::SNACKBAR);
};
