// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reconnection policy for the event relay.

use std::time::Duration;

/// Configuration for automatic reconnection after the transport closes.
///
/// The default policy is disabled: once the server closes the connection the
/// relay stays closed until [`connect`](super::EventRelay::connect) is called
/// again.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use gohome_client::relay::ReconnectionPolicy;
///
/// // No reconnection
/// let policy = ReconnectionPolicy::default();
/// assert!(!policy.should_retry(0));
///
/// // Exponential backoff, up to 5 attempts
/// let policy = ReconnectionPolicy::enabled()
///     .with_max_retries(5)
///     .with_initial_delay(Duration::from_millis(500))
///     .with_max_delay(Duration::from_secs(30));
/// assert!(policy.should_retry(4));
/// assert!(!policy.should_retry(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReconnectionPolicy {
    /// Whether automatic reconnection is enabled.
    pub enabled: bool,
    /// Maximum number of attempts before giving up (None = infinite).
    pub max_retries: Option<u32>,
    /// Delay before the first attempt.
    pub initial_delay: Duration,
    /// Upper bound for the delay between attempts.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each failed attempt.
    pub backoff_multiplier: f32,
}

impl ReconnectionPolicy {
    /// Creates an enabled policy with exponential backoff and infinite retries.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Creates a disabled policy.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Sets the maximum number of attempts.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets infinite attempts.
    #[must_use]
    pub fn with_infinite_retries(mut self) -> Self {
        self.max_retries = None;
        self
    }

    /// Sets the delay before the first attempt.
    #[must_use]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the maximum delay between attempts.
    #[must_use]
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Sets the backoff multiplier.
    #[must_use]
    pub fn with_backoff_multiplier(mut self, multiplier: f32) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Calculates the delay before attempt number `attempt` (zero-based).
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return self.initial_delay.min(self.max_delay);
        }

        let factor = self
            .backoff_multiplier
            .max(1.0)
            .powi(i32::try_from(attempt).unwrap_or(i32::MAX));

        // Delays are seconds to minutes, far below f64 precision limits
        #[allow(clippy::cast_precision_loss)]
        let delay_ms = self.initial_delay.as_millis() as f64 * f64::from(factor);

        // Clamped to max_delay before the cast
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let capped_ms = delay_ms.min(self.max_delay.as_millis() as f64) as u64;

        Duration::from_millis(capped_ms)
    }

    /// Returns true if attempt number `attempt` (zero-based) should be made.
    #[must_use]
    pub fn should_retry(&self, attempt: u32) -> bool {
        self.enabled && self.max_retries.is_none_or(|max| attempt < max)
    }
}

impl Default for ReconnectionPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            max_retries: None,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            backoff_multiplier: 2.0,
        }
    }
}
