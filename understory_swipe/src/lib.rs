// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: directional swipe recognition for pointer and touch input.
//!
//! This crate turns a start → move* → stop (or cancel) sequence of pointer
//! events on one interaction surface into at most one directional swipe per
//! interaction. It does not render anything and does not know how the host
//! delivers input: callers translate their platform events into
//! [`PointerEvent`](input::PointerEvent) values, feed them to a
//! [`SwipeRecognizer`](recognizer::SwipeRecognizer), and honor the
//! [`DefaultAction`](input::DefaultAction) it returns.
//!
//! - [`config`]: thresholds and the enabled flag, with defaults matching the
//!   common `{duration: 1000, distance: 50, restraint: 75}` option surface
//! - [`input`]: inbound events, coordinate extraction and clocks
//! - [`gesture`]: directions, notification names and the pure classification rule
//! - [`listeners`]: ordered delivery of `swipe` / `swipeLeft` / … notifications
//! - [`recognizer`]: the per-surface interaction state machine
//! - [`registry`]: an explicit element → recognizer map (`registry` feature)
//!
//! ## Classification
//!
//! On stop the recognizer computes the displacement `(dx, dy)` and the elapsed
//! time from the start sample:
//!
//! - if the interaction took longer than `duration`, nothing fires;
//! - if `|dx| >= distance` and `|dy| <= restraint`, it is a horizontal swipe
//!   (`Left` when `dx < 0`, otherwise `Right`);
//! - else if `|dy| >= distance` and `|dx| <= restraint`, it is a vertical swipe
//!   (`Up` when `dy < 0`, otherwise `Down`);
//! - otherwise nothing fires.
//!
//! The horizontal test runs first and wins when both could match.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::cell::Cell;
//! use kurbo::Point;
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::gesture::{Direction, SwipeEventName};
//! use understory_swipe::input::PointerEvent;
//! use understory_swipe::recognizer::SwipeRecognizer;
//!
//! let now = Cell::new(0_u64);
//! let mut swipes = SwipeRecognizer::<u32, _>::new(SwipeConfig::default(), || now.get());
//!
//! let seen = std::rc::Rc::new(core::cell::RefCell::new(Vec::new()));
//! let log = seen.clone();
//! swipes.listeners_mut().on_any(move |n| log.borrow_mut().push(n.name));
//!
//! swipes.on_start(&PointerEvent::mouse(7_u32, Point::new(100.0, 100.0)));
//! now.set(300);
//! let swipe = swipes.on_stop(&PointerEvent::mouse(7, Point::new(40.0, 110.0)));
//!
//! assert_eq!(swipe.map(|s| s.direction), Some(Direction::Left));
//! assert_eq!(*seen.borrow(), [SwipeEventName::Swipe, SwipeEventName::SwipeLeft]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): compile against `std`; enables [`InstantClock`](input::InstantClock).
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//! - `registry` (default): the [`registry`] module (requires `hashbrown`).
//! - `serde`: deserialize [`SwipeConfig`](config::SwipeConfig) from its option names.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod error;
pub mod gesture;
pub mod input;
pub mod listeners;
pub mod recognizer;

#[cfg(feature = "registry")]
pub mod registry;

pub use config::SwipeConfig;
pub use error::ConfigError;
pub use gesture::{Direction, Swipe, SwipeEventName};
pub use recognizer::SwipeRecognizer;
