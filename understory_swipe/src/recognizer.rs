// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognizer: the per-surface interaction state machine.
//!
//! ## Usage
//!
//! 1) Create a [`SwipeRecognizer`] with a [`SwipeConfig`] and a [`Clock`].
//! 2) Subscribe listeners via [`SwipeRecognizer::listeners_mut`], or use the
//!    [`Swipe`] returned from [`SwipeRecognizer::on_stop`] directly.
//! 3) Forward the surface's pointer events to [`on_start`](SwipeRecognizer::on_start),
//!    [`on_move`](SwipeRecognizer::on_move), [`on_stop`](SwipeRecognizer::on_stop)
//!    and [`on_cancel`](SwipeRecognizer::on_cancel), or to
//!    [`handle`](SwipeRecognizer::handle) with a [`PointerPhase`].
//! 4) When a handler returns [`DefaultAction::Prevent`], suppress the
//!    platform default for that event.
//!
//! ## States
//!
//! The recognizer is either idle or tracking exactly one interaction, which
//! holds the target and the start sample together. Out-of-order input is
//! ignored rather than treated as an error:
//!
//! - a start while tracking keeps the original interaction;
//! - a move or stop while idle does nothing;
//! - a cancel always returns to idle.
//!
//! Stop always returns to idle, whether or not a swipe fired.
//!
//! ## Minimal example
//!
//! ```
//! use core::cell::Cell;
//! use kurbo::Point;
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::gesture::Direction;
//! use understory_swipe::input::{DefaultAction, PointerEvent};
//! use understory_swipe::recognizer::SwipeRecognizer;
//!
//! let now = Cell::new(0_u64);
//! let mut swipes = SwipeRecognizer::new(SwipeConfig::default(), || now.get());
//!
//! swipes.on_start(&PointerEvent::touch("list", Point::new(10.0, 200.0)));
//! assert!(swipes.is_active());
//!
//! // Mostly horizontal: the host should stop the page from scrolling.
//! now.set(80);
//! let action = swipes.on_move(&PointerEvent::touch("list", Point::new(60.0, 205.0)));
//! assert_eq!(action, DefaultAction::Prevent);
//!
//! now.set(150);
//! let swipe = swipes.on_stop(&PointerEvent::touch("list", Point::new(120.0, 210.0))).unwrap();
//! assert_eq!(swipe.direction, Direction::Right);
//! assert_eq!(swipe.target, "list");
//! assert!(!swipes.is_active());
//! ```

use crate::config::SwipeConfig;
use crate::error::ConfigError;
use crate::gesture::{SamplePoint, Swipe, classify};
use crate::input::{Clock, DefaultAction, PointerEvent, PointerPhase, TargetKind};
use crate::listeners::SwipeListeners;

/// The interaction being tracked: target and start sample are set together.
#[derive(Clone, Debug)]
struct Interaction<K> {
    target: K,
    start: SamplePoint,
}

/// Result of [`SwipeRecognizer::handle`].
#[derive(Clone, Debug, PartialEq)]
pub struct Response<K> {
    /// Whether the host should suppress the platform default.
    pub default_action: DefaultAction,
    /// Set when a stop completed a swipe.
    pub swipe: Option<Swipe<K>>,
}

impl<K> Response<K> {
    fn action(default_action: DefaultAction) -> Self {
        Self {
            default_action,
            swipe: None,
        }
    }
}

/// Recognizes directional swipes on one interaction surface.
///
/// `K` identifies elements (targets); `C` supplies receipt times.
pub struct SwipeRecognizer<K, C> {
    config: SwipeConfig,
    clock: C,
    interaction: Option<Interaction<K>>,
    listeners: SwipeListeners<K>,
}

impl<K: core::fmt::Debug, C> core::fmt::Debug for SwipeRecognizer<K, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwipeRecognizer")
            .field("config", &self.config)
            .field("interaction", &self.interaction)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

impl<K, C: Clock> SwipeRecognizer<K, C> {
    /// Create a recognizer. Thresholds are used as given.
    pub fn new(config: SwipeConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            interaction: None,
            listeners: SwipeListeners::new(),
        }
    }

    /// Create a recognizer after [validating](SwipeConfig::validate) the config.
    pub fn try_new(config: SwipeConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, clock))
    }

    /// The configuration.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// `false` when the config disables recognition.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// The clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// `true` while an interaction is tracked.
    pub fn is_active(&self) -> bool {
        self.interaction.is_some()
    }

    /// Target the tracked interaction started on.
    pub fn origin_target(&self) -> Option<&K> {
        self.interaction.as_ref().map(|i| &i.target)
    }

    /// Start sample of the tracked interaction.
    pub fn start_point(&self) -> Option<SamplePoint> {
        self.interaction.as_ref().map(|i| i.start)
    }

    /// Subscribed listeners.
    pub fn listeners(&self) -> &SwipeListeners<K> {
        &self.listeners
    }

    /// Subscribed listeners, for `on`/`off`.
    pub fn listeners_mut(&mut self) -> &mut SwipeListeners<K> {
        &mut self.listeners
    }

    fn sample(&self, event: &PointerEvent<K>) -> Option<SamplePoint> {
        let position = event.position()?;
        Some(SamplePoint::new(position, self.clock.now_ms()))
    }

    /// Handle a move. Returns [`DefaultAction::Prevent`] when the pointer has
    /// travelled further horizontally than vertically since the start.
    pub fn on_move(&mut self, event: &PointerEvent<K>) -> DefaultAction {
        let Some(interaction) = &self.interaction else {
            return DefaultAction::Allow;
        };
        let Some(position) = event.position() else {
            return DefaultAction::Allow;
        };
        let d = position - interaction.start.position;
        if d.x.abs() > d.y.abs() {
            DefaultAction::Prevent
        } else {
            DefaultAction::Allow
        }
    }

    /// Handle a stop, returning the swipe if one was recognized.
    ///
    /// Listeners see the generic notification and then the direction-specific
    /// one before this returns. The recognizer is idle afterwards.
    pub fn on_stop(&mut self, event: &PointerEvent<K>) -> Option<Swipe<K>> {
        let interaction = self.interaction.take()?;
        let Some(end) = self.sample(event) else {
            tracing::debug!("swipe stop without coordinates; interaction dropped");
            return None;
        };
        match classify(&self.config, interaction.start, end) {
            Ok(direction) => {
                let swipe = Swipe {
                    direction,
                    target: interaction.target,
                    start: interaction.start,
                    end,
                };
                tracing::debug!(
                    direction = direction.as_str(),
                    dx = end.position.x - interaction.start.position.x,
                    dy = end.position.y - interaction.start.position.y,
                    elapsed_ms = swipe.elapsed_ms(),
                    "swipe recognized"
                );
                self.listeners.emit(&swipe);
                Some(swipe)
            }
            Err(rejection) => {
                tracing::trace!(?rejection, "interaction is not a swipe");
                None
            }
        }
    }

    /// Handle a cancel. Always returns to idle and never notifies.
    pub fn on_cancel(&mut self) {
        if self.interaction.take().is_some() {
            tracing::trace!("swipe interaction cancelled");
        }
    }
}

impl<K: Clone, C: Clock> SwipeRecognizer<K, C> {
    /// Handle a start.
    ///
    /// Ignored while an interaction is already tracked, when disabled, and for
    /// touch events without changed touches. Returns [`DefaultAction::Prevent`]
    /// for a mouse start on an image so native image dragging does not steal
    /// the interaction.
    pub fn on_start(&mut self, event: &PointerEvent<K>) -> DefaultAction {
        if !self.config.enabled {
            return DefaultAction::Allow;
        }
        if self.interaction.is_some() {
            tracing::trace!("swipe start ignored; interaction already active");
            return DefaultAction::Allow;
        }
        let Some(start) = self.sample(event) else {
            return DefaultAction::Allow;
        };
        tracing::trace!(x = start.position.x, y = start.position.y, "swipe interaction started");
        self.interaction = Some(Interaction {
            target: event.target.clone(),
            start,
        });
        if event.target_kind == TargetKind::Image && !event.is_touch() {
            DefaultAction::Prevent
        } else {
            DefaultAction::Allow
        }
    }

    /// Route one event by phase.
    pub fn handle(&mut self, phase: PointerPhase, event: &PointerEvent<K>) -> Response<K> {
        match phase {
            PointerPhase::Start => Response::action(self.on_start(event)),
            PointerPhase::Move => Response::action(self.on_move(event)),
            PointerPhase::Stop => Response {
                default_action: DefaultAction::Allow,
                swipe: self.on_stop(event),
            },
            PointerPhase::Cancel => {
                self.on_cancel();
                Response::action(DefaultAction::Allow)
            }
        }
    }
}
