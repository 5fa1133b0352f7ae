// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener registry for swipe notifications.
//!
//! Every recognized swipe produces two notifications, in this order:
//!
//! 1) [`SwipeEventName::Swipe`] with `direction: Some(..)`;
//! 2) the direction-specific name (for example [`SwipeEventName::SwipeLeft`])
//!    with `direction: None`, since the name already says it.
//!
//! Listeners subscribe to one name with [`SwipeListeners::on`] or to all of
//! them with [`SwipeListeners::on_any`]. For each notification, matching
//! listeners run synchronously in registration order.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use kurbo::Point;
//! use understory_swipe::gesture::{Direction, SamplePoint, Swipe, SwipeEventName};
//! use understory_swipe::listeners::SwipeListeners;
//!
//! let mut listeners = SwipeListeners::<u32>::new();
//! let lefts = Rc::new(RefCell::new(0));
//! let counter = lefts.clone();
//! let id = listeners.on(SwipeEventName::SwipeLeft, move |_| *counter.borrow_mut() += 1);
//!
//! let swipe = Swipe {
//!     direction: Direction::Left,
//!     target: 3,
//!     start: SamplePoint::new(Point::new(100.0, 0.0), 0),
//!     end: SamplePoint::new(Point::new(0.0, 0.0), 100),
//! };
//! listeners.emit(&swipe);
//! assert_eq!(*lefts.borrow(), 1);
//!
//! assert!(listeners.off(id));
//! listeners.emit(&swipe);
//! assert_eq!(*lefts.borrow(), 1);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::gesture::{Direction, SamplePoint, Swipe, SwipeEventName};

/// Payload delivered to listeners.
#[derive(Debug, PartialEq)]
pub struct SwipeNotification<'a, K> {
    /// Notification name.
    pub name: SwipeEventName,
    /// Set on the generic [`Swipe`](SwipeEventName::Swipe) notification only.
    pub direction: Option<Direction>,
    /// Target the interaction started on.
    pub target: &'a K,
    /// Start sample.
    pub start: SamplePoint,
    /// End sample.
    pub end: SamplePoint,
}

impl<K> SwipeNotification<'_, K> {
    /// Direction of the swipe, whichever notification this is.
    pub fn swipe_direction(&self) -> Option<Direction> {
        self.direction.or(self.name.direction())
    }
}

/// Handle returned by [`SwipeListeners::on`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<K> = Box<dyn FnMut(&SwipeNotification<'_, K>)>;

struct Entry<K> {
    id: ListenerId,
    filter: Option<SwipeEventName>,
    callback: Callback<K>,
}

/// Ordered listeners for swipe notifications.
pub struct SwipeListeners<K> {
    next_id: u64,
    entries: Vec<Entry<K>>,
}

impl<K> fmt::Debug for SwipeListeners<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters: Vec<_> = self.entries.iter().map(|e| (e.id, e.filter)).collect();
        f.debug_struct("SwipeListeners")
            .field("next_id", &self.next_id)
            .field("entries", &filters)
            .finish()
    }
}

impl<K> Default for SwipeListeners<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SwipeListeners<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Subscribe to one notification name.
    pub fn on(
        &mut self,
        name: SwipeEventName,
        callback: impl FnMut(&SwipeNotification<'_, K>) + 'static,
    ) -> ListenerId {
        self.push(Some(name), Box::new(callback))
    }

    /// Subscribe to every notification.
    pub fn on_any(
        &mut self,
        callback: impl FnMut(&SwipeNotification<'_, K>) + 'static,
    ) -> ListenerId {
        self.push(None, Box::new(callback))
    }

    fn push(&mut self, filter: Option<SwipeEventName>, callback: Callback<K>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            filter,
            callback,
        });
        id
    }

    /// Unsubscribe. Returns `false` if the listener was already removed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Remove all listeners.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of subscribed listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver the generic and then the direction-specific notification for `swipe`.
    pub fn emit(&mut self, swipe: &Swipe<K>) {
        self.notify(&SwipeNotification {
            name: SwipeEventName::Swipe,
            direction: Some(swipe.direction),
            target: &swipe.target,
            start: swipe.start,
            end: swipe.end,
        });
        self.notify(&SwipeNotification {
            name: swipe.direction.event_name(),
            direction: None,
            target: &swipe.target,
            start: swipe.start,
            end: swipe.end,
        });
    }

    fn notify(&mut self, notification: &SwipeNotification<'_, K>) {
        for entry in &mut self.entries {
            if entry.filter.is_none_or(|name| name == notification.name) {
                (entry.callback)(notification);
            }
        }
    }
}
