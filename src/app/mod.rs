// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the notification engine and hands it by reference to every
//! view that renders it. Components never enqueue directly; they return
//! events and the handlers in `update` do the enqueueing.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, paths, Config};
use crate::ui::activity;
use crate::ui::notifications::{Descriptor, Engine};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

pub const APP_TITLE: &str = "Taxboard";

/// Root Iced application state.
pub struct App {
    notifications: Engine<Message>,
    /// Whether the bell dropdown is open.
    bell_open: bool,
    activity: activity::State,
    theme_mode: ThemeMode,
    /// Resolved once at startup; `ThemeMode::System` queries the OS.
    theme: Theme,
    tick_interval: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.notifications.len())
            .field("bell_open", &self.bell_open)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `settings.toml` and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let app = Self::with_config(&config, &flags, config_warning);

        tracing::info!(
            theme_mode = ?app.theme_mode,
            default_duration_ms = app.notifications.default_duration().as_millis() as u64,
            tick_interval_ms = app.tick_interval.as_millis() as u64,
            "taxboard started"
        );

        (app, Task::none())
    }

    fn with_config(config: &Config, flags: &Flags, config_warning: Option<String>) -> Self {
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);

        let mut app = Self {
            notifications: Engine::new(config.notifications.default_duration()),
            bell_open: false,
            activity: activity::State::default(),
            theme_mode,
            theme: theme_mode.iced_theme(),
            tick_interval: config.notifications.tick_interval(),
        };

        if let Some(warning) = config_warning {
            let result = update::notify(
                &mut app.notifications,
                Descriptor::warning("Settings not loaded", warning),
            );
            if let Err(err) = result {
                tracing::error!(error = %err, "config warning dropped");
            }
        }

        app
    }

    fn title(&self) -> String {
        match self.notifications.len() {
            0 => APP_TITLE.to_string(),
            n => format!("{APP_TITLE} ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.bell_open);
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_pending_timers(),
            self.tick_interval,
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            notifications: &mut self.notifications,
            bell_open: &mut self.bell_open,
            activity: &mut self.activity,
        };

        match message {
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::Notification(message) => update::handle_notification_message(&mut ctx, message),
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::Activity(message) => update::handle_activity_message(&mut ctx, message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            title: APP_TITLE,
            notifications: &self.notifications,
            bell_open: self.bell_open,
            activity: &self.activity,
        })
    }
}
