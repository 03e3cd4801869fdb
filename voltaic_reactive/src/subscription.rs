// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered subscriber lists for change notification.
//!
//! This module provides [`Subscribers`], an ordered list of change
//! callbacks, and [`SubscriptionId`], the compact handle used to remove
//! them again.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

/// Callback invoked when a value changes.
///
/// The callback receives the old value and the new value.
pub type ChangedCallback<T> = Box<dyn Fn(&T, &T) + Send + Sync>;

/// Default inline capacity for subscriber entries.
///
/// Most values in the simulation have one or two observers (a view binding
/// and an accessibility binding), so this avoids heap allocation in the
/// common case.
const INLINE_SUBSCRIBERS: usize = 2;

/// Identifies one subscription within a [`Subscribers`] list.
///
/// Handles are only meaningful for the list that issued them.
///
/// # Example
///
/// ```rust
/// use voltaic_reactive::Subscribers;
///
/// let mut subscribers = Subscribers::<f64>::new();
/// let id = subscribers.subscribe(|_, _| {});
/// assert!(subscribers.unsubscribe(id));
/// assert!(!subscribers.unsubscribe(id));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    /// Returns the underlying index of this subscription ID.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubscriptionId").field(&self.0).finish()
    }
}

/// An ordered list of change callbacks for one value.
///
/// Callbacks are invoked synchronously, in subscription order, each
/// receiving the old and the new value. Subscriptions live until removed
/// with [`Subscribers::unsubscribe`]; for process-lifetime observers it is
/// fine to never remove them.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use voltaic_reactive::Subscribers;
///
/// let mut subscribers = Subscribers::new();
/// let fired = Arc::new(AtomicUsize::new(0));
/// let fired_clone = fired.clone();
///
/// subscribers.subscribe(move |old: &f64, new: &f64| {
///     assert_eq!((*old, *new), (4.5, 6.0));
///     fired_clone.fetch_add(1, Ordering::SeqCst);
/// });
///
/// subscribers.notify(&4.5, &6.0);
/// assert_eq!(fired.load(Ordering::SeqCst), 1);
/// ```
pub struct Subscribers<T> {
    /// Entries in subscription order. IDs are issued in ascending order and
    /// never reused, so the list stays sorted by ID.
    entries: SmallVec<[(SubscriptionId, ChangedCallback<T>); INLINE_SUBSCRIBERS]>,
    next_id: u32,
}

impl<T> Subscribers<T> {
    /// Creates an empty subscriber list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Registers a callback, returning the handle that removes it again.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` subscriptions have been issued over
    /// the lifetime of this list.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&T, &T) + Send + Sync + 'static,
    {
        assert!(
            self.next_id != u32::MAX,
            "Too many subscriptions issued (max {})",
            u32::MAX
        );
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription.
    ///
    /// Returns `true` if the subscription was present.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.entries.binary_search_by_key(&id, |(sid, _)| *sid) {
            Ok(idx) => {
                self.entries.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Invokes every callback with the given old and new value.
    ///
    /// Callbacks run synchronously in subscription order.
    pub fn notify(&self, old: &T, new: &T) {
        for (_, callback) in &self.entries {
            callback(old, new);
        }
    }

    /// Returns the number of active subscriptions.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no subscriptions are active.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug impl since callbacks aren't Debug.
impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
