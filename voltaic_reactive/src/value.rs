// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable value storage.
//!
//! This module provides [`ObservableValue`] for holding a single value with
//! its default and an optional coerce hook, and [`ValueChange`] describing a
//! completed write.

use alloc::boxed::Box;

/// Callback for coercing a value before it is stored.
///
/// This can be used to clamp values, validate ranges, etc.
/// The callback receives the proposed value and returns the coerced value.
pub type CoerceCallback<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// A completed write: the value that was replaced and the value now stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueChange<T> {
    /// The previously stored value.
    pub old: T,
    /// The newly stored value, after coercion.
    pub new: T,
}

/// A value holder with a fixed default and an optional coerce hook.
///
/// Writes go through [`ObservableValue::set`], which coerces the proposed
/// value, compares it with the stored one, and reports the change; it never
/// notifies anyone itself. Pairing the holder with
/// [`Subscribers`](crate::Subscribers) is the owner's job, which lets a
/// model update several related values before any callback runs.
///
/// # Example
///
/// ```rust
/// use voltaic_reactive::ObservableValue;
///
/// let mut resistance = ObservableValue::with_coerce(500.0_f64, |r: f64| r.clamp(10.0, 1000.0));
/// assert_eq!(*resistance.get(), 500.0);
///
/// // Stored after clamping.
/// let change = resistance.set(5.0).unwrap();
/// assert_eq!(change.old, 500.0);
/// assert_eq!(change.new, 10.0);
///
/// // Back to the construction-time default.
/// let change = resistance.reset().unwrap();
/// assert_eq!(change.new, 500.0);
/// assert!(resistance.is_default());
/// ```
pub struct ObservableValue<T: Clone + PartialEq + 'static> {
    value: T,
    default: T,
    coerce: Option<CoerceCallback<T>>,
}

impl<T: Clone + PartialEq + 'static> ObservableValue<T> {
    /// Creates a new holder storing `default`.
    #[must_use]
    pub fn new(default: T) -> Self {
        Self {
            value: default.clone(),
            default,
            coerce: None,
        }
    }

    /// Creates a new holder storing `default`, with a coerce callback
    /// applied to every subsequent write.
    ///
    /// The default itself is stored as given; callers are expected to pass a
    /// default the callback would leave unchanged.
    #[must_use]
    pub fn with_coerce<F>(default: T, coerce: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self {
            value: default.clone(),
            default,
            coerce: Some(Box::new(coerce)),
        }
    }

    /// Returns a reference to the stored value.
    #[must_use]
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns a reference to the construction-time default.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Returns `true` if the stored value equals the default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.value == self.default
    }

    /// Coerces `value` and stores it if it differs from the stored value.
    ///
    /// Returns the `(old, new)` pair when a store happened, `None` when the
    /// coerced value already equals the stored one. No callbacks run here;
    /// the caller decides when (and whether) to notify.
    pub fn set(&mut self, value: T) -> Option<ValueChange<T>> {
        let coerced = match &self.coerce {
            Some(callback) => callback(value),
            None => value,
        };
        if coerced == self.value {
            return None;
        }
        let old = core::mem::replace(&mut self.value, coerced.clone());
        Some(ValueChange { old, new: coerced })
    }

    /// Writes the default back through [`ObservableValue::set`].
    pub fn reset(&mut self) -> Option<ValueChange<T>> {
        let default = self.default.clone();
        self.set(default)
    }

    /// Returns whether a coerce callback is set.
    #[must_use]
    #[inline]
    pub fn has_coerce(&self) -> bool {
        self.coerce.is_some()
    }
}

// Manual Debug impl since the coerce callback isn't Debug.
impl<T: Clone + PartialEq + core::fmt::Debug + 'static> core::fmt::Debug for ObservableValue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObservableValue")
            .field("value", &self.value)
            .field("default", &self.default)
            .field("has_coerce", &self.coerce.is_some())
            .finish()
    }
}
