// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe thresholds.
//!
//! A [`SwipeConfig`] is fixed for the lifetime of a recognizer. The defaults
//! match the usual option surface of swipe helpers on the web:
//!
//! | option      | field         | default |
//! |-------------|---------------|---------|
//! | `enabled`   | `enabled`     | `true`  |
//! | `duration`  | `duration_ms` | `1000`  |
//! | `distance`  | `distance`    | `50.0`  |
//! | `restraint` | `restraint`   | `75.0`  |
//!
//! With the `serde` feature the config deserializes from those option names,
//! and any missing key takes its default.
//!
//! ```
//! use understory_swipe::config::SwipeConfig;
//!
//! let config = SwipeConfig::default().with_distance(30.0).with_duration_ms(500);
//! assert!(config.enabled);
//! assert_eq!(config.restraint, 75.0);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::ConfigError;

/// Default maximum duration of a swipe, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 1000;
/// Default minimum travel along the primary axis.
pub const DEFAULT_DISTANCE: f64 = 50.0;
/// Default maximum travel along the perpendicular axis.
pub const DEFAULT_RESTRAINT: f64 = 75.0;

/// Thresholds that decide whether an interaction is a swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// When `false` the recognizer ignores every event.
    pub enabled: bool,
    /// Maximum elapsed time between start and stop. Equal is allowed.
    #[cfg_attr(feature = "serde", serde(rename = "duration"))]
    pub duration_ms: u64,
    /// Minimum absolute travel along the primary axis.
    pub distance: f64,
    /// Maximum absolute travel along the perpendicular axis.
    pub restraint: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: DEFAULT_DURATION_MS,
            distance: DEFAULT_DISTANCE,
            restraint: DEFAULT_RESTRAINT,
        }
    }
}

impl SwipeConfig {
    /// A config that never recognizes anything.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the maximum duration in milliseconds.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the minimum primary-axis travel.
    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Set the maximum perpendicular-axis travel.
    #[must_use]
    pub fn with_restraint(mut self, restraint: f64) -> Self {
        self.restraint = restraint;
        self
    }

    /// Check that both thresholds are finite and non-negative.
    ///
    /// A zero `distance` is accepted; it makes any sufficiently restrained
    /// interaction a swipe.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("distance", self.distance)?;
        check_threshold("restraint", self.restraint)?;
        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { name });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}
