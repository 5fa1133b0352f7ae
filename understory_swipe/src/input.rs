// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inbound pointer events and clocks.
//!
//! Hosts translate their platform input into [`PointerEvent`] values. An event
//! carries the element it is currently targeting, whether that element is an
//! image, and where its coordinates come from:
//!
//! - [`PointerSource::Mouse`] carries the pointer position directly.
//! - [`PointerSource::Touch`] carries the event's *changed* touches. The
//!   recognizer reads the first changed touch for every phase, so stop events
//!   use the point where the finger lifted rather than where it went down.
//!
//! Events do not carry timestamps; the recognizer stamps each one with its
//! [`Clock`] when it is received.

use kurbo::Point;
use smallvec::SmallVec;

/// Touches changed by one event; two inline slots cover the common cases.
pub type ChangedTouches = SmallVec<[Point; 2]>;

/// What kind of element an event targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetKind {
    /// An image, which mouse input may start dragging natively.
    Image,
    /// Anything else.
    #[default]
    Other,
}

/// Where an event's coordinates come from.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerSource {
    /// Mouse or pen pointer at a position.
    Mouse {
        /// Pointer position.
        position: Point,
    },
    /// Touch input with the touches this event changed.
    Touch {
        /// Changed touches; the first one is the one tracked.
        changed: ChangedTouches,
    },
}

/// One pointer lifecycle event for an interaction surface.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent<K> {
    /// Element the event is currently targeting.
    pub target: K,
    /// Kind of the target element.
    pub target_kind: TargetKind,
    /// Coordinate source.
    pub source: PointerSource,
}

impl<K> PointerEvent<K> {
    /// A mouse event at `position` on a non-image target.
    pub fn mouse(target: K, position: Point) -> Self {
        Self {
            target,
            target_kind: TargetKind::Other,
            source: PointerSource::Mouse { position },
        }
    }

    /// A touch event whose single changed touch is at `position`.
    pub fn touch(target: K, position: Point) -> Self {
        Self::touches(target, [position])
    }

    /// A touch event with the given changed touches, in order.
    pub fn touches(target: K, changed: impl IntoIterator<Item = Point>) -> Self {
        Self {
            target,
            target_kind: TargetKind::Other,
            source: PointerSource::Touch {
                changed: changed.into_iter().collect(),
            },
        }
    }

    /// Set the kind of the target.
    #[must_use]
    pub fn with_target_kind(mut self, target_kind: TargetKind) -> Self {
        self.target_kind = target_kind;
        self
    }

    /// `true` for touch input.
    pub fn is_touch(&self) -> bool {
        matches!(self.source, PointerSource::Touch { .. })
    }

    /// The tracked position, or `None` for a touch event without changed touches.
    pub fn position(&self) -> Option<Point> {
        match &self.source {
            PointerSource::Mouse { position } => Some(*position),
            PointerSource::Touch { changed } => changed.first().copied(),
        }
    }
}

/// The phase of a pointer lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Pointer down / touch start.
    Start,
    /// Pointer move / touch move.
    Move,
    /// Pointer up / touch end.
    Stop,
    /// Touch cancel, or any host-side abort.
    Cancel,
}

/// Whether the host should suppress the platform default for an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DefaultAction {
    /// Let the platform handle the event normally.
    #[default]
    Allow,
    /// Suppress native behavior (image dragging on start, scrolling on move).
    Prevent,
}

impl DefaultAction {
    /// `true` for [`Prevent`](Self::Prevent).
    pub fn is_prevented(self) -> bool {
        self == Self::Prevent
    }
}

/// Source of receipt timestamps, in milliseconds.
///
/// Any `Fn() -> u64` is a clock, which keeps tests and hosts with their own
/// frame clock simple.
pub trait Clock {
    /// Current time in milliseconds. Only differences are used.
    fn now_ms(&self) -> u64;
}

impl<F: Fn() -> u64> Clock for F {
    fn now_ms(&self) -> u64 {
        self()
    }
}

/// Monotonic clock measuring milliseconds since its creation.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl InstantClock {
    /// Start a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for InstantClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
