// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for constructing recognizers from invalid configuration.
//!
//! Event processing itself never fails: malformed or out-of-order input is
//! ignored.

/// A [`SwipeConfig`](crate::config::SwipeConfig) threshold that cannot describe a gesture.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The threshold is NaN or infinite.
    #[error("swipe threshold `{name}` must be finite")]
    NonFinite {
        /// Name of the offending option.
        name: &'static str,
    },
    /// The threshold is below zero.
    #[error("swipe threshold `{name}` must not be negative (got {value})")]
    Negative {
        /// Name of the offending option.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
