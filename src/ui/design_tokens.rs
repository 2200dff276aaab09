// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by every dashboard surface.

## Organization

- **Palette**: Ledger greens for the brand, plus semantic colors per notification kind
- **Opacity**: Overlay and surface alpha levels
- **Spacing**: 4px-based spacing scale
- **Sizing**: Icons, navbar, toasts, bell dropdown
- **Typography**: Font size scale
- **Border** / **Radius** / **Shadow**

## Examples

```
use taxboard::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::INK_900
};
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const INK_900: Color = Color::from_rgb(0.07, 0.09, 0.11);
    pub const INK_800: Color = Color::from_rgb(0.11, 0.13, 0.16);
    pub const INK_700: Color = Color::from_rgb(0.16, 0.19, 0.23);
    pub const SLATE_400: Color = Color::from_rgb(0.45, 0.5, 0.56);
    pub const SLATE_200: Color = Color::from_rgb(0.78, 0.81, 0.85);
    pub const SLATE_100: Color = Color::from_rgb(0.92, 0.93, 0.95);

    // Brand (ledger green)
    pub const BRAND_400: Color = Color::from_rgb(0.3, 0.78, 0.62);
    pub const BRAND_500: Color = Color::from_rgb(0.16, 0.66, 0.5);
    pub const BRAND_600: Color = Color::from_rgb(0.1, 0.54, 0.41);

    // Semantic colors, one per notification kind
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.15;
    pub const OVERLAY_MEDIUM: f32 = 0.45;
    pub const OVERLAY_STRONG: f32 = 0.75;
    pub const OPAQUE: f32 = 1.0;

    /// Floating surfaces (toasts, dropdowns).
    pub const SURFACE: f32 = 0.97;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 28.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;

    pub const TOAST_WIDTH: f32 = 340.0;
    pub const DROPDOWN_WIDTH: f32 = 360.0;
    pub const DROPDOWN_MAX_HEIGHT: f32 = 420.0;

    /// Diameter of the count badge on the bell.
    pub const BADGE_SIZE: f32 = 18.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name in the navbar.
    pub const TITLE_MD: f32 = 20.0;
    /// Panel and dropdown headings.
    pub const TITLE_SM: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Badges, timestamps.
    pub const CAPTION: f32 = 11.0;
}

// ============================================================================
// Border / Radius
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent border.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::INK_900,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::BADGE_SIZE < sizing::ICON_LG);
    assert!(sizing::DROPDOWN_WIDTH >= sizing::TOAST_WIDTH);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn semantic_colors_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::ERROR_500);
        assert_ne!(palette::WARNING_500, palette::INFO_500);
        assert_ne!(palette::SUCCESS_500, palette::BRAND_500);
    }
}
