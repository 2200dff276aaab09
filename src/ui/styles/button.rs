// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action (brand green).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BRAND_400,
        button::Status::Disabled => palette::SLATE_400,
        button::Status::Active | button::Status::Pressed => palette::BRAND_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::BRAND_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button that only shows a background on hover or press.
///
/// Used for icon buttons (toast close, bell) and low-emphasis actions.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: alpha.map(|a| {
            Background::Color(Color {
                a,
                ..palette::SLATE_400
            })
        }),
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Toggle button in its "on" state (e.g. the bell while its dropdown is open).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let strong = theme.extended_palette().background.strong;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: opacity::OVERLAY_STRONG,
            ..strong.color
        },
        button::Status::Active | button::Status::Disabled => strong.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: strong.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Grayed out, non-interactive button.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: None,
        text_color: palette::SLATE_400,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only button in an accent color, underlined-link style.
pub fn link(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..color
            })),
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background,
            text_color: color,
            border: Border {
                color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
