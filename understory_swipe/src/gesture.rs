// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe directions, notification names, and the classification rule.
//!
//! [`classify`] is the pure core of the recognizer: given a config and the
//! start and end samples of one interaction, it decides whether the
//! interaction was a swipe and in which direction.
//!
//! ```
//! use kurbo::Point;
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::gesture::{classify, Direction, Rejection, SamplePoint};
//!
//! let config = SwipeConfig::default();
//! let start = SamplePoint::new(Point::new(100.0, 100.0), 0);
//!
//! let end = SamplePoint::new(Point::new(40.0, 110.0), 300);
//! assert_eq!(classify(&config, start, end), Ok(Direction::Left));
//!
//! // Too slow, even without any movement.
//! let end = SamplePoint::new(Point::new(100.0, 100.0), 1200);
//! assert_eq!(classify(&config, start, end), Err(Rejection::TooSlow));
//!
//! // Neither axis travels far enough while staying restrained.
//! let end = SamplePoint::new(Point::new(130.0, 60.0), 200);
//! assert_eq!(classify(&config, start, end), Err(Rejection::Undirected));
//! ```

use core::fmt;

use kurbo::{Point, Vec2};

use crate::config::SwipeConfig;

/// Direction of a recognized swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Travel toward negative x.
    Left,
    /// Travel toward positive x (or zero, when the distance threshold is zero).
    Right,
    /// Travel toward negative y.
    Up,
    /// Travel toward positive y (or zero, when the distance threshold is zero).
    Down,
}

impl Direction {
    /// All directions, horizontal first.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Lowercase name carried by the generic `swipe` notification.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// `true` for [`Left`](Self::Left) and [`Right`](Self::Right).
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// The direction-specific notification for this direction.
    pub const fn event_name(self) -> SwipeEventName {
        match self {
            Self::Left => SwipeEventName::SwipeLeft,
            Self::Right => SwipeEventName::SwipeRight,
            Self::Up => SwipeEventName::SwipeUp,
            Self::Down => SwipeEventName::SwipeDown,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of an outbound notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeEventName {
    /// Generic notification, fired first for every recognized swipe.
    Swipe,
    /// Fired after [`Swipe`](Self::Swipe) for a leftward swipe.
    SwipeLeft,
    /// Fired after [`Swipe`](Self::Swipe) for a rightward swipe.
    SwipeRight,
    /// Fired after [`Swipe`](Self::Swipe) for an upward swipe.
    SwipeUp,
    /// Fired after [`Swipe`](Self::Swipe) for a downward swipe.
    SwipeDown,
}

impl SwipeEventName {
    /// Conventional event name, e.g. `"swipeLeft"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swipe => "swipe",
            Self::SwipeLeft => "swipeLeft",
            Self::SwipeRight => "swipeRight",
            Self::SwipeUp => "swipeUp",
            Self::SwipeDown => "swipeDown",
        }
    }

    /// The direction a direction-specific name stands for; `None` for [`Swipe`](Self::Swipe).
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Swipe => None,
            Self::SwipeLeft => Some(Direction::Left),
            Self::SwipeRight => Some(Direction::Right),
            Self::SwipeUp => Some(Direction::Up),
            Self::SwipeDown => Some(Direction::Down),
        }
    }
}

impl fmt::Display for SwipeEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position together with the time it was received.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    /// Pointer position in the host's coordinate space.
    pub position: Point,
    /// Receipt time in milliseconds, from the recognizer's clock.
    pub time_ms: u64,
}

impl SamplePoint {
    /// Create a sample.
    pub const fn new(position: Point, time_ms: u64) -> Self {
        Self { position, time_ms }
    }

    /// Displacement from `earlier` to `self`.
    pub fn offset_from(&self, earlier: &Self) -> Vec2 {
        self.position - earlier.position
    }

    /// Milliseconds from `earlier` to `self`; zero if the clock went backwards.
    pub fn elapsed_since(&self, earlier: &Self) -> u64 {
        self.time_ms.saturating_sub(earlier.time_ms)
    }
}

/// A recognized swipe.
#[derive(Clone, Debug, PartialEq)]
pub struct Swipe<K> {
    /// Direction of travel.
    pub direction: Direction,
    /// Target the interaction started on.
    pub target: K,
    /// Start sample.
    pub start: SamplePoint,
    /// End sample.
    pub end: SamplePoint,
}

impl<K> Swipe<K> {
    /// Displacement from start to end.
    pub fn offset(&self) -> Vec2 {
        self.end.offset_from(&self.start)
    }

    /// Milliseconds from start to end.
    pub fn elapsed_ms(&self) -> u64 {
        self.end.elapsed_since(&self.start)
    }
}

/// Why an interaction did not qualify as a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Elapsed time exceeded the configured duration.
    TooSlow,
    /// Neither axis travelled the distance while the other stayed within restraint.
    Undirected,
}

/// Classify one interaction from its start and end samples.
///
/// The horizontal axis is tested first, so it wins if both axes could qualify
/// (possible only when `restraint >= distance`).
pub fn classify(
    config: &SwipeConfig,
    start: SamplePoint,
    end: SamplePoint,
) -> Result<Direction, Rejection> {
    if end.elapsed_since(&start) > config.duration_ms {
        return Err(Rejection::TooSlow);
    }
    let d = end.offset_from(&start);
    let (ax, ay) = (d.x.abs(), d.y.abs());
    if ax >= config.distance && ay <= config.restraint {
        Ok(if d.x < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        })
    } else if ay >= config.distance && ax <= config.restraint {
        Ok(if d.y < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        })
    } else {
        Err(Rejection::Undirected)
    }
}
