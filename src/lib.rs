// SPDX-License-Identifier: MPL-2.0
//! `taxboard` is the desktop shell of a crypto-tax dashboard built with Iced.
//!
//! The interesting part is the notification system in
//! [`ui::notifications`]: a caller-agnostic engine with cancelable
//! auto-dismiss timers, rendered as a toast stack and a bell with history.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
