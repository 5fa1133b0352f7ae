// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit element → recognizer registry.
//!
//! Hosts that attach swipe recognition to many elements keep one
//! [`SwipeRecognizer`] per element in a [`SwipeRegistry`]. The registry is
//! owned by the caller and has an explicit lifecycle:
//!
//! - [`attach`](SwipeRegistry::attach) creates a recognizer if the element has
//!   none, and returns the existing one unchanged otherwise. A disabled config
//!   attaches nothing.
//! - [`dispatch`](SwipeRegistry::dispatch) routes one event to the element's
//!   recognizer.
//! - [`dispose`](SwipeRegistry::dispose) drops an element's recognizer, and
//!   with it any interaction in progress and its listeners.
//!
//! All recognizers share one clock, cloned on attach.
//!
//! ## Minimal example
//!
//! ```
//! use core::cell::Cell;
//! use kurbo::Point;
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::gesture::Direction;
//! use understory_swipe::input::{PointerEvent, PointerPhase};
//! use understory_swipe::registry::SwipeRegistry;
//!
//! let now = Cell::new(0_u64);
//! let mut registry = SwipeRegistry::new(|| now.get());
//!
//! assert!(registry.attach(1_u32, SwipeConfig::default()).is_some());
//! assert!(registry.attach(2, SwipeConfig::disabled()).is_none());
//!
//! registry.dispatch(&1, PointerPhase::Start, &PointerEvent::mouse(1, Point::new(0.0, 0.0)));
//! now.set(100);
//! let response = registry
//!     .dispatch(&1, PointerPhase::Stop, &PointerEvent::mouse(1, Point::new(0.0, -80.0)))
//!     .unwrap();
//! assert_eq!(response.swipe.map(|s| s.direction), Some(Direction::Up));
//!
//! // Element 2 never got a recognizer.
//! assert!(registry.dispatch(&2, PointerPhase::Start, &PointerEvent::mouse(2, Point::ZERO)).is_none());
//!
//! assert!(registry.dispose(&1));
//! assert!(registry.is_empty());
//! ```

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::config::SwipeConfig;
use crate::input::{Clock, PointerEvent, PointerPhase};
use crate::recognizer::{Response, SwipeRecognizer};

/// Recognizers keyed by element.
pub struct SwipeRegistry<K, C> {
    clock: C,
    recognizers: HashMap<K, SwipeRecognizer<K, C>>,
}

impl<K: fmt::Debug, C> fmt::Debug for SwipeRegistry<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeRegistry")
            .field("recognizers", &self.recognizers)
            .finish_non_exhaustive()
    }
}

impl<K, C> SwipeRegistry<K, C>
where
    K: Clone + Eq + Hash,
    C: Clock + Clone,
{
    /// Create an empty registry whose recognizers read `clock`.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            recognizers: HashMap::new(),
        }
    }

    /// Attach a recognizer to `element` if it has none.
    ///
    /// Returns the element's recognizer, which is the existing one (with its
    /// original config) when already attached. Returns `None` without
    /// attaching when `config` is disabled and the element has no recognizer.
    pub fn attach(
        &mut self,
        element: K,
        config: SwipeConfig,
    ) -> Option<&mut SwipeRecognizer<K, C>> {
        if !config.enabled && !self.recognizers.contains_key(&element) {
            tracing::trace!("swipe recognizer not attached; config disabled");
            return None;
        }
        let clock = &self.clock;
        Some(
            self.recognizers
                .entry(element)
                .or_insert_with(|| SwipeRecognizer::new(config, clock.clone())),
        )
    }

    /// The recognizer attached to `element`.
    pub fn get(&self, element: &K) -> Option<&SwipeRecognizer<K, C>> {
        self.recognizers.get(element)
    }

    /// The recognizer attached to `element`, mutably.
    pub fn get_mut(&mut self, element: &K) -> Option<&mut SwipeRecognizer<K, C>> {
        self.recognizers.get_mut(element)
    }

    /// `true` if `element` has a recognizer.
    pub fn contains(&self, element: &K) -> bool {
        self.recognizers.contains_key(element)
    }

    /// Number of attached recognizers.
    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    /// `true` if nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    /// Route one event to `element`'s recognizer.
    ///
    /// Returns `None` when the element has no recognizer.
    pub fn dispatch(
        &mut self,
        element: &K,
        phase: PointerPhase,
        event: &PointerEvent<K>,
    ) -> Option<Response<K>> {
        let recognizer = self.recognizers.get_mut(element)?;
        Some(recognizer.handle(phase, event))
    }

    /// Drop `element`'s recognizer. Returns `false` if none was attached.
    pub fn dispose(&mut self, element: &K) -> bool {
        self.recognizers.remove(element).is_some()
    }

    /// Drop every recognizer.
    pub fn clear(&mut self) {
        self.recognizers.clear();
    }

    /// Iterate over attached elements, in arbitrary order.
    pub fn elements(&self) -> impl Iterator<Item = &K> + '_ {
        self.recognizers.keys()
    }
}
