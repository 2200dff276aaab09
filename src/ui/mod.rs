// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `update` that returns an `Event` for the parent,
//! and a `view`.
//!
//! - [`notifications`] - Notification engine, toast stack and bell widget
//! - [`navbar`] - Title bar with the export action and the bell
//! - [`activity`] - Transaction list whose actions raise notifications
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod activity;
pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
