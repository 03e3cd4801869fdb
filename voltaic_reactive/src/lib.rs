// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Voltaic Reactive: observable value holders with change subscriptions.
//!
//! This crate provides the small reactive foundation the simulation model is
//! built on: a value holder that coerces and stores writes, and an ordered
//! subscriber list that fans out change notifications synchronously.
//!
//! ## Core Concepts
//!
//! ### Value storage
//!
//! [`ObservableValue`] holds a current value, the default it was created
//! with, and an optional coerce callback applied before every store:
//!
//! - `set(value)` - coerce, compare, store; returns the `(old, new)` pair
//!   as a [`ValueChange`] only when the stored value actually changed
//! - `reset()` - write the default back through the same path
//!
//! Storage and notification are deliberately separate: `set` never invokes
//! callbacks. A composite model can update several values (an input and a
//! value derived from it, say) and only then fan out notifications, so no
//! subscriber ever observes a half-updated pair.
//!
//! ### Subscriptions
//!
//! [`Subscribers`] is an ordered callback list. Each callback receives the
//! old and the new value, and is invoked synchronously, in subscription
//! order, when the owner calls [`Subscribers::notify`].
//!
//! ## Quick Start
//!
//! ```rust
//! use voltaic_reactive::{ObservableValue, Subscribers};
//!
//! let mut value = ObservableValue::with_coerce(4.5_f64, |v: f64| v.clamp(0.1, 9.9));
//! let mut subscribers = Subscribers::new();
//! let id = subscribers.subscribe(|old: &f64, new: &f64| {
//!     assert!(old != new);
//! });
//!
//! // Out-of-range writes are coerced before storage.
//! let change = value.set(12.0).unwrap();
//! assert_eq!(change.new, 9.9);
//! subscribers.notify(&change.old, &change.new);
//!
//! // Writing the stored value again is a no-op.
//! assert!(value.set(9.9).is_none());
//!
//! assert!(subscribers.unsubscribe(id));
//! ```
//!
//! ## Reentrancy
//!
//! Notification is synchronous. Mutating a value from inside one of its own
//! subscriber callbacks is a correctness hazard (the update would recurse);
//! callers are expected to mutate only *other* state from callbacks.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod subscription;
mod value;

pub use subscription::{ChangedCallback, SubscriptionId, Subscribers};
pub use value::{CoerceCallback, ObservableValue, ValueChange};
