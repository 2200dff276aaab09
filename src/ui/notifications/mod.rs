// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Any part of the dashboard (table row actions, header buttons, anomaly
//! flags) can enqueue a notification; the engine assigns it an id, keeps it
//! in insertion order and removes it when it expires, is dismissed, or the
//! user clears everything from the bell.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Descriptor`, `Kind` and validation
//! - [`engine`] - `Engine`, the queue plus its expiry timers
//! - [`timer`] - deadline-ordered, cancelable timer table
//! - [`toast`] - toast stack rendering
//! - [`bell`] - bell button, count badge and history dropdown
//!
//! # Usage
//!
//! ```
//! use taxboard::ui::notifications::{Descriptor, Engine};
//! use std::time::{Duration, Instant};
//!
//! let mut engine: Engine<()> = Engine::new(Duration::from_millis(5000));
//! let t0 = Instant::now();
//! let id = engine
//!     .enqueue_at(Descriptor::success("Export Complete", "Ready").persistent(), t0)
//!     .expect("valid descriptor");
//! assert_eq!(engine.len(), 1);
//!
//! engine.dismiss(id);
//! assert!(engine.list().is_empty());
//! ```
//!
//! # Timing
//!
//! Expiry is cooperative: the application calls [`Engine::expire_due`] from
//! a periodic tick that only runs while timers are pending, so a
//! notification disappears within one tick interval of its deadline.

pub mod bell;
pub mod engine;
pub mod notification;
pub mod timer;
pub mod toast;

pub use engine::{Engine, Message as NotificationMessage, Revision};
pub use notification::{Action, Descriptor, Kind, Notification, NotificationId, ValidationError};
pub use toast::Toast;
