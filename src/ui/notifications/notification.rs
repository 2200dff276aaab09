// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! Callers build a [`Descriptor`] (everything except the identity) and hand
//! it to the engine, which validates it and turns it into a [`Notification`].

use crate::ui::design_tokens::palette;
use chrono::{DateTime, Local};
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Assigned by the engine at enqueue time and never reused by that engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Notification kind. Only affects the icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
        }
    }

    /// Short lowercase name, used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }
}

/// A single user-triggerable follow-up attached to a notification.
///
/// The payload is handed back to the caller when the action is activated.
/// In the application shell it is an app message that gets dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct Action<A> {
    pub label: String,
    pub payload: A,
}

/// Reasons a descriptor is rejected by `Engine::enqueue`.
///
/// Titles and messages are checked after trimming: a whitespace-only string
/// renders as a blank toast, so it counts as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or whitespace only.
    EmptyTitle,
    /// Message is empty or whitespace only.
    EmptyMessage,
    /// Duration was negative (milliseconds as given).
    NegativeDuration(i64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "notification title must not be empty"),
            ValidationError::EmptyMessage => write!(f, "notification message must not be empty"),
            ValidationError::NegativeDuration(ms) => {
                write!(f, "notification duration must be >= 0 ms, got {}", ms)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Everything needed to create a notification except its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor<A> {
    pub kind: Kind,
    pub title: String,
    pub message: String,
    /// Milliseconds before auto-dismiss. `Some(0)` never expires, `None`
    /// uses the engine default. Negative values are rejected on enqueue.
    pub duration_ms: Option<i64>,
    pub action: Option<Action<A>>,
}

impl<A> Descriptor<A> {
    pub fn new(kind: Kind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            duration_ms: None,
            action: None,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Info, title, message)
    }

    /// Sets the auto-dismiss delay in milliseconds.
    #[must_use]
    pub fn duration_ms(mut self, ms: i64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Sets the auto-dismiss delay from a [`Duration`] (saturating).
    #[must_use]
    pub fn auto_dismiss(self, duration: Duration) -> Self {
        let ms = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        self.duration_ms(ms)
    }

    /// Never auto-dismiss; only an explicit dismiss or clear-all removes it.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration_ms(0)
    }

    /// Attaches the follow-up action.
    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>, payload: A) -> Self {
        self.action = Some(Action {
            label: label.into(),
            payload,
        });
        self
    }

    /// Converts the action payload, e.g. to lift a component message into
    /// the application message type.
    pub fn map_action<B>(self, f: impl FnOnce(A) -> B) -> Descriptor<B> {
        Descriptor {
            kind: self.kind,
            title: self.title,
            message: self.message,
            duration_ms: self.duration_ms,
            action: self.action.map(|action| Action {
                label: action.label,
                payload: f(action.payload),
            }),
        }
    }

    /// Checks the descriptor and resolves its effective duration.
    ///
    /// Returns `None` for notifications that never auto-dismiss.
    pub fn validate(&self, default: Duration) -> Result<Option<Duration>, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        match self.duration_ms {
            None if default.is_zero() => Ok(None),
            None => Ok(Some(default)),
            Some(ms) if ms < 0 => Err(ValidationError::NegativeDuration(ms)),
            Some(0) => Ok(None),
            Some(ms) => Ok(Some(Duration::from_millis(ms.unsigned_abs()))),
        }
    }
}

/// A notification owned by the engine.
#[derive(Debug, Clone)]
pub struct Notification<A> {
    id: NotificationId,
    kind: Kind,
    title: String,
    message: String,
    /// `None` when the notification never auto-dismisses.
    lifetime: Option<Duration>,
    action: Option<Action<A>>,
    created_at: Instant,
    posted_at: DateTime<Local>,
}

impl<A> Notification<A> {
    pub(crate) fn from_descriptor(
        id: NotificationId,
        descriptor: Descriptor<A>,
        lifetime: Option<Duration>,
        now: Instant,
    ) -> Self {
        Self {
            id,
            kind: descriptor.kind,
            title: descriptor.title,
            message: descriptor.message,
            lifetime,
            action: descriptor.action,
            created_at: now,
            posted_at: Local::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action<A>> {
        self.action.as_ref()
    }

    /// Auto-dismiss delay, `None` for persistent notifications.
    #[must_use]
    pub fn lifetime(&self) -> Option<Duration> {
        self.lifetime
    }

    /// Wall-clock creation time, for display.
    #[must_use]
    pub fn posted_at(&self) -> DateTime<Local> {
        self.posted_at
    }

    /// When the notification expires, if ever. Drives the toast countdown.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.lifetime.map(|d| self.created_at + d)
    }
}
