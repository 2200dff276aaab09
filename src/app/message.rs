// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::activity;
use crate::ui::navbar;
use crate::ui::notifications::NotificationMessage;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
///
/// Notification actions carry a `Message` as payload, so activating one
/// re-enters `update` with whatever the caller attached.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Activity(activity::Message),
    Notification(NotificationMessage),
    /// Expiry tick, only delivered while a notification timer is pending.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TAXBOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Theme for this session, overriding `[general] theme_mode`.
    pub theme: Option<ThemeMode>,
}
