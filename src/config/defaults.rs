// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast lifetime and expiry tick resolution
//! - **Window**: Default and minimum window size

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Lifetime of a notification that does not set its own duration (ms).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Shortest configurable default lifetime (ms).
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;

/// Longest configurable default lifetime (ms).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

/// Interval of the expiry tick while timers are pending (ms).
///
/// Bounds how late a notification may disappear after its deadline.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Finest tick interval (ms).
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Coarsest tick interval (ms).
pub const MAX_TICK_INTERVAL_MS: u64 = 500;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_NOTIFICATION_DURATION_MS > 0);
    assert!(MIN_NOTIFICATION_DURATION_MS <= DEFAULT_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MIN_TICK_INTERVAL_MS <= DEFAULT_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    // Expiry lag is at most one tick; it must not exceed the shortest lifetime.
    assert!(MAX_TICK_INTERVAL_MS <= MIN_NOTIFICATION_DURATION_MS);

    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_defaults_are_valid() {
        assert_eq!(DEFAULT_NOTIFICATION_DURATION_MS, 5000);
        assert!(DEFAULT_NOTIFICATION_DURATION_MS >= MIN_NOTIFICATION_DURATION_MS);
        assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
    }

    #[test]
    fn coarsest_tick_lags_at_most_the_shortest_lifetime() {
        assert!(MAX_TICK_INTERVAL_MS <= MIN_NOTIFICATION_DURATION_MS);
    }

    #[test]
    fn tick_is_finer_than_default_lifetime() {
        assert!(DEFAULT_TICK_INTERVAL_MS < DEFAULT_NOTIFICATION_DURATION_MS);
    }
}
