// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Components return events; these handlers turn them into engine calls.
//! Every notification in the app is raised through [`notify`].

use super::Message;
use crate::error::{Error, Result};
use crate::ui::activity;
use crate::ui::navbar;
use crate::ui::notifications::{Descriptor, Engine, NotificationId, NotificationMessage};
use iced::Task;
use std::time::Instant;

/// Mutable slice of application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub notifications: &'a mut Engine<Message>,
    pub bell_open: &'a mut bool,
    pub activity: &'a mut activity::State,
}

/// Enqueues a notification raised by the app itself.
///
/// The app only builds descriptors it knows to be valid, so a rejection is a
/// bug: debug builds panic, release builds report it to the caller.
pub fn notify(
    notifications: &mut Engine<Message>,
    descriptor: Descriptor<Message>,
) -> Result<NotificationId> {
    let result = notifications.enqueue(descriptor).map_err(Error::from);
    debug_assert!(result.is_ok(), "invalid notification: {result:?}");
    result
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.expire_due(now);
    Task::none()
}

/// Applies a toast or bell message. An activated action is dispatched back
/// into `update` as its own message.
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: NotificationMessage,
) -> Task<Message> {
    match ctx.notifications.handle_message(message) {
        Some(payload) => Task::done(payload),
        None => Task::none(),
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.bell_open) {
        navbar::Event::None => Task::none(),
        navbar::Event::Notifications(message) => handle_notification_message(ctx, message),
        navbar::Event::ExportCsv => {
            let rows = ctx.activity.transactions().len();
            tracing::info!(rows, "exporting transactions");
            let result = notify(
                ctx.notifications,
                Descriptor::success(
                    "Export Complete",
                    format!("{rows} transactions written to taxboard-export.csv"),
                )
                .persistent(),
            );
            if let Err(err) = result {
                tracing::error!(error = %err, "export notification dropped");
            }
            Task::none()
        }
    }
}

pub fn handle_activity_message(
    ctx: &mut UpdateContext<'_>,
    message: activity::Message,
) -> Task<Message> {
    match ctx.activity.update(message) {
        activity::Event::None => {}
        activity::Event::Notify(descriptor) => {
            if let Err(err) = notify(ctx.notifications, descriptor.map_action(Message::Activity)) {
                tracing::error!(error = %err, "activity notification dropped");
            }
        }
    }
    Task::none()
}
