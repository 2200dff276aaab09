// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::navbar;
use crate::ui::notifications::bell;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes Escape to the bell while its dropdown is open.
pub fn create_event_subscription(bell_open: bool) -> Subscription<Message> {
    if !bell_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Navbar(navbar::Message::Bell(bell::Message::Close))),
        _ => None,
    })
}

/// Creates the periodic expiry tick.
///
/// Runs only while at least one notification has a pending timer, so an idle
/// or all-persistent queue costs nothing.
pub fn create_tick_subscription(has_pending_timers: bool, interval: Duration) -> Subscription<Message> {
    if has_pending_timers {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
