// SPDX-License-Identifier: MPL-2.0
//! Centralized SVG icon module.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! are cached in a `OnceLock`, so building an icon widget never re-parses
//! the source.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let close = button(icons::sized(icons::cross(), sizing::ICON_SM));
//! let tinted = icons::tinted(icons::bell(), palette::WHITE);
//! ```
//!
//! Icons use visual names (`cross`, not `dismiss_notification`); see
//! [`icon_for_kind`] for the semantic mapping used by notifications.

use crate::ui::notifications::Kind;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function backed by a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(check, "check.svg", "Check mark inside a circle.");
define_icon!(cross, "cross.svg", "Diagonal cross, used for close buttons.");
define_icon!(info, "info.svg", "Letter i inside a circle.");
define_icon!(warning, "warning.svg", "Exclamation mark inside a triangle.");
define_icon!(error, "error.svg", "Cross inside a circle.");
define_icon!(bell, "bell.svg", "Notification bell.");

/// Resizes an icon to a square of `size` pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors an icon regardless of the active theme.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

/// Recolors an icon with the theme's text color.
pub fn themed<'a>(icon: Svg<'a>) -> Svg<'a> {
    icon.style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(theme.palette().text),
    })
}

/// Icon shown for a notification kind, tinted with the kind's color.
pub fn icon_for_kind<'a>(kind: Kind) -> Svg<'a> {
    let icon = match kind {
        Kind::Success => check(),
        Kind::Error => error(),
        Kind::Warning => warning(),
        Kind::Info => info(),
    };
    tinted(icon, kind.color())
}
