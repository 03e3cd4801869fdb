// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reactive circuit model.

use core::fmt;

use voltaic_reactive::{ObservableValue, SubscriptionId, Subscribers, ValueChange};

use crate::config::{CircuitConfig, ConfigError};
use crate::quantity::Quantity;

/// Unit conversion factor from amps to milliamps.
///
/// `current_mA = MILLIAMPS_PER_AMP × voltage / resistance`. Fixed, not
/// configurable.
pub const MILLIAMPS_PER_AMP: f64 = 1000.0;

/// The reactive Ohm's Law circuit model.
///
/// Holds the two user-controlled inputs (voltage, resistance) and the
/// derived current, recomputed eagerly on every input change. Observers
/// subscribe per [`Quantity`] and are notified synchronously with the
/// `(old, new)` pair.
///
/// # Freshness
///
/// Both the changed input and the derived current are stored *before* any
/// callback runs, and input subscribers fire before current subscribers. An
/// observer of the input that reads [`CircuitModel::current`] from its
/// callback therefore sees the freshly derived value; there is no
/// observable staleness window.
///
/// # Clamping
///
/// Out-of-range setter input is clamped into the configured range, never
/// rejected. A write that is a no-op after clamping notifies nobody.
///
/// # Example
///
/// ```rust
/// use voltaic_model::{CircuitConfig, CircuitModel, Quantity};
///
/// let mut model = CircuitModel::new(CircuitConfig::default()).unwrap();
///
/// model.set_voltage(9.9);
/// model.set_resistance(10.0);
/// assert_eq!(model.current(), 990.0);
///
/// // Clamped: -5 V is below the configured minimum of 0.1 V.
/// model.set_voltage(-5.0);
/// assert_eq!(model.voltage(), 0.1);
///
/// model.reset();
/// assert_eq!(
///     model.current(),
///     1000.0 * model.voltage() / model.resistance(),
/// );
/// ```
pub struct CircuitModel {
    config: CircuitConfig,
    voltage: ObservableValue<f64>,
    resistance: ObservableValue<f64>,
    current: ObservableValue<f64>,
    voltage_subscribers: Subscribers<f64>,
    resistance_subscribers: Subscribers<f64>,
    current_subscribers: Subscribers<f64>,
}

impl CircuitModel {
    /// Creates a model from a configuration, with both inputs at their
    /// defaults and the current derived immediately.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails
    /// [`CircuitConfig::validate`]. Configuration problems are fatal at
    /// startup by design.
    pub fn new(config: CircuitConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let voltage_range = config.voltage_range;
        let resistance_range = config.resistance_range;
        let voltage =
            ObservableValue::with_coerce(config.default_voltage, move |v| voltage_range.clamp(v));
        let resistance = ObservableValue::with_coerce(config.default_resistance, move |r| {
            resistance_range.clamp(r)
        });
        let current = ObservableValue::new(derive_current(*voltage.get(), *resistance.get()));

        Ok(Self {
            config,
            voltage,
            resistance,
            current,
            voltage_subscribers: Subscribers::new(),
            resistance_subscribers: Subscribers::new(),
            current_subscribers: Subscribers::new(),
        })
    }

    /// Returns the validated configuration this model was built from.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &CircuitConfig {
        &self.config
    }

    /// Returns the voltage, in volts.
    #[must_use]
    #[inline]
    pub fn voltage(&self) -> f64 {
        *self.voltage.get()
    }

    /// Returns the resistance, in ohms.
    #[must_use]
    #[inline]
    pub fn resistance(&self) -> f64 {
        *self.resistance.get()
    }

    /// Returns the derived current, in milliamps.
    #[must_use]
    #[inline]
    pub fn current(&self) -> f64 {
        *self.current.get()
    }

    /// Returns the named quantity's value.
    #[must_use]
    pub fn value(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Voltage => self.voltage(),
            Quantity::Resistance => self.resistance(),
            Quantity::Current => self.current(),
        }
    }

    /// Sets the voltage, clamped into the configured range.
    ///
    /// Recomputes the current, then notifies voltage subscribers followed by
    /// current subscribers. A write that leaves the voltage unchanged after
    /// clamping notifies nobody.
    pub fn set_voltage(&mut self, volts: f64) {
        if let Some(change) = self.voltage.set(volts) {
            let current_change = self.update_current();
            self.voltage_subscribers.notify(&change.old, &change.new);
            Self::notify_current(&self.current_subscribers, current_change);
        }
    }

    /// Sets the resistance, clamped into the configured range.
    ///
    /// Recomputes the current, then notifies resistance subscribers followed
    /// by current subscribers. A write that leaves the resistance unchanged
    /// after clamping notifies nobody.
    pub fn set_resistance(&mut self, ohms: f64) {
        if let Some(change) = self.resistance.set(ohms) {
            let current_change = self.update_current();
            self.resistance_subscribers.notify(&change.old, &change.new);
            Self::notify_current(&self.current_subscribers, current_change);
        }
    }

    /// Restores both inputs to their configured defaults.
    ///
    /// Routes through the ordinary setters (voltage first, then
    /// resistance), so the notification cascade and the no-op suppression
    /// are identical to explicit writes. Idempotent: a second `reset()`
    /// notifies nobody.
    pub fn reset(&mut self) {
        let default_voltage = self.config.default_voltage;
        let default_resistance = self.config.default_resistance;
        self.set_voltage(default_voltage);
        self.set_resistance(default_resistance);
    }

    /// Registers a callback fired whenever the named quantity changes.
    ///
    /// The callback receives the old and the new value and runs
    /// synchronously on the mutating call. The returned handle is only
    /// meaningful together with the same `quantity`.
    pub fn subscribe<F>(&mut self, quantity: Quantity, callback: F) -> SubscriptionId
    where
        F: Fn(&f64, &f64) + Send + Sync + 'static,
    {
        self.subscribers_mut(quantity).subscribe(callback)
    }

    /// Removes a subscription previously registered for `quantity`.
    ///
    /// Returns `true` if the subscription was present.
    pub fn unsubscribe(&mut self, quantity: Quantity, id: SubscriptionId) -> bool {
        self.subscribers_mut(quantity).unsubscribe(id)
    }

    /// Returns the number of active subscriptions for `quantity`.
    #[must_use]
    pub fn subscriber_count(&self, quantity: Quantity) -> usize {
        match quantity {
            Quantity::Voltage => self.voltage_subscribers.len(),
            Quantity::Resistance => self.resistance_subscribers.len(),
            Quantity::Current => self.current_subscribers.len(),
        }
    }

    fn subscribers_mut(&mut self, quantity: Quantity) -> &mut Subscribers<f64> {
        match quantity {
            Quantity::Voltage => &mut self.voltage_subscribers,
            Quantity::Resistance => &mut self.resistance_subscribers,
            Quantity::Current => &mut self.current_subscribers,
        }
    }

    /// Stores the freshly derived current, returning the change if any.
    ///
    /// Must run before any input subscriber is notified.
    fn update_current(&mut self) -> Option<ValueChange<f64>> {
        let derived = derive_current(*self.voltage.get(), *self.resistance.get());
        self.current.set(derived)
    }

    fn notify_current(subscribers: &Subscribers<f64>, change: Option<ValueChange<f64>>) {
        if let Some(change) = change {
            subscribers.notify(&change.old, &change.new);
        }
    }
}

impl fmt::Debug for CircuitModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircuitModel")
            .field("voltage", &self.voltage())
            .field("resistance", &self.resistance())
            .field("current", &self.current())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// The one derivation in the system: volts over ohms, scaled to milliamps.
#[inline]
fn derive_current(voltage: f64, resistance: f64) -> f64 {
    MILLIAMPS_PER_AMP * voltage / resistance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::ValueRange;
    use alloc::format;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::sync::atomic::{AtomicUsize, Ordering};

    extern crate std;
    use std::sync::Mutex;

    fn model() -> CircuitModel {
        CircuitModel::new(CircuitConfig::default()).unwrap()
    }

    #[test]
    fn defaults_derive_immediately() {
        let model = model();
        assert_eq!(model.voltage(), 4.5);
        assert_eq!(model.resistance(), 500.0);
        // 1000 × 4.5 / 500 = 9.0 mA.
        assert_eq!(model.current(), 9.0);
    }

    #[test]
    fn current_tracks_both_inputs() {
        let mut model = model();

        model.set_resistance(10.0);
        model.set_voltage(9.9);
        assert!((model.current() - 990.0).abs() < 1e-9);

        model.set_voltage(0.1);
        model.set_resistance(1000.0);
        assert!((model.current() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn current_is_never_stale() {
        let mut model = model();
        for volts in [0.1, 1.0, 2.5, 4.5, 7.3, 9.9] {
            model.set_voltage(volts);
            assert_eq!(
                model.current(),
                1000.0 * model.voltage() / model.resistance()
            );
        }
        for ohms in [10.0, 55.0, 500.0, 999.0, 1000.0] {
            model.set_resistance(ohms);
            assert_eq!(
                model.current(),
                1000.0 * model.voltage() / model.resistance()
            );
        }
    }

    #[test]
    fn inputs_are_independent() {
        let mut model = model();
        model.set_voltage(7.0);
        assert_eq!(model.resistance(), 500.0);
        model.set_resistance(42.0);
        assert_eq!(model.voltage(), 7.0);
    }

    #[test]
    fn setters_clamp_out_of_range_input() {
        let mut model = model();

        model.set_voltage(-5.0);
        assert_eq!(model.voltage(), 0.1);

        model.set_voltage(99.0);
        assert_eq!(model.voltage(), 9.9);

        model.set_resistance(1.0);
        assert_eq!(model.resistance(), 10.0);

        model.set_resistance(1e6);
        assert_eq!(model.resistance(), 1000.0);
    }

    #[test]
    fn reset_restores_defaults_and_rederives() {
        let mut model = model();
        model.set_voltage(9.9);
        model.set_resistance(10.0);

        model.reset();
        assert_eq!(model.voltage(), 4.5);
        assert_eq!(model.resistance(), 500.0);
        assert_eq!(model.current(), 9.0);
    }

    #[test]
    fn set_voltage_fires_current_subscriber_exactly_once() {
        let mut model = model();
        let fired = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(None));

        let fired_clone = fired.clone();
        let seen_clone = seen.clone();
        model.subscribe(Quantity::Current, move |old, new| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
            *seen_clone.lock().unwrap() = Some((*old, *new));
        });

        model.set_voltage(9.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        // 1000 × 9 / 500 = 18 mA, derived from the *new* voltage.
        assert_eq!(*seen.lock().unwrap(), Some((9.0, 18.0)));
    }

    #[test]
    fn input_subscribers_fire_before_current_subscribers() {
        let mut model = model();
        let order = Arc::new(Mutex::new(Vec::new()));

        let order_v = order.clone();
        model.subscribe(Quantity::Voltage, move |_, _| {
            order_v.lock().unwrap().push(Quantity::Voltage);
        });
        let order_i = order.clone();
        model.subscribe(Quantity::Current, move |_, _| {
            order_i.lock().unwrap().push(Quantity::Current);
        });

        model.set_voltage(6.0);
        assert_eq!(
            *order.lock().unwrap(),
            alloc::vec![Quantity::Voltage, Quantity::Current]
        );
    }

    #[test]
    fn no_op_write_notifies_nobody() {
        let mut model = model();
        let fired = Arc::new(AtomicUsize::new(0));

        for quantity in Quantity::ALL {
            let fired = fired.clone();
            model.subscribe(quantity, move |_, _| {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }

        model.set_voltage(4.5);
        // Below the minimum clamps to the minimum; a second such write
        // clamps to the value already stored.
        model.set_voltage(-1.0);
        let after_clamp = fired.load(Ordering::SeqCst);
        model.set_voltage(-2.0);
        assert_eq!(fired.load(Ordering::SeqCst), after_clamp);
    }

    #[test]
    fn second_reset_notifies_nobody() {
        let mut model = model();
        let fired = Arc::new(AtomicUsize::new(0));

        model.set_voltage(9.0);
        model.set_resistance(100.0);

        for quantity in Quantity::ALL {
            let fired = fired.clone();
            model.subscribe(quantity, move |_, _| {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }

        model.reset();
        let after_first = fired.load(Ordering::SeqCst);
        assert!(after_first > 0);

        model.reset();
        assert_eq!(fired.load(Ordering::SeqCst), after_first);
    }

    #[test]
    fn clamped_noop_resistance_write_fires_nothing() {
        let mut model = model();
        model.set_resistance(10.0);

        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();
        model.subscribe(Quantity::Current, move |_, _| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        model.set_resistance(2.0); // clamps to 10.0, already stored
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsubscribed_observer_stops_firing() {
        let mut model = model();
        let fired = Arc::new(AtomicUsize::new(0));

        let fired_clone = fired.clone();
        let id = model.subscribe(Quantity::Current, move |_, _| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        model.set_voltage(5.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        assert!(model.unsubscribe(Quantity::Current, id));
        model.set_voltage(6.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(model.subscriber_count(Quantity::Current), 0);
    }

    #[test]
    fn voltage_observer_reads_fresh_current() {
        let mut model = CircuitModel::new(CircuitConfig::default()).unwrap();
        let seen = Arc::new(Mutex::new(None));

        // The callback cannot borrow the model (it is being mutated), so
        // verify freshness through the notified pair instead: the voltage
        // callback receives the new voltage, and by the ordering contract
        // the current value was already stored when it runs.
        let seen_clone = seen.clone();
        model.subscribe(Quantity::Voltage, move |_, new| {
            *seen_clone.lock().unwrap() = Some(*new);
        });

        model.set_voltage(9.0);
        assert_eq!(*seen.lock().unwrap(), Some(9.0));
        assert_eq!(model.current(), 18.0);
    }

    #[test]
    fn invalid_config_is_fatal_at_startup() {
        let config = CircuitConfig {
            resistance_range: ValueRange::new(0.0, 1000.0),
            ..CircuitConfig::default()
        };
        assert!(CircuitModel::new(config).is_err());
    }

    #[test]
    fn custom_config_defaults_flow_through() {
        let config = CircuitConfig {
            voltage_range: ValueRange::new(1.0, 12.0),
            resistance_range: ValueRange::new(50.0, 200.0),
            default_voltage: 6.0,
            default_resistance: 100.0,
        };
        let model = CircuitModel::new(config).unwrap();
        assert_eq!(model.voltage(), 6.0);
        assert_eq!(model.resistance(), 100.0);
        assert_eq!(model.current(), 60.0);
        assert_eq!(model.value(Quantity::Current), 60.0);
    }

    #[test]
    fn debug_output() {
        let model = model();
        let debug = format!("{:?}", model);
        assert!(debug.contains("CircuitModel"));
        assert!(debug.contains("voltage"));
    }
}
