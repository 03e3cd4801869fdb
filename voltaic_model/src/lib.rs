// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Voltaic Model: the reactive Ohm's Law circuit model.
//!
//! This crate holds the simulation's entire logical core: two user-controlled
//! inputs (voltage in volts, resistance in ohms) and one derived output
//! (current in milliamps), recomputed eagerly on every input change.
//!
//! ## Core Concepts
//!
//! - [`CircuitModel`] - the model itself: clamped setters, pure reads,
//!   per-quantity subscriptions, and `reset()`.
//! - [`Quantity`] - names the three observable quantities.
//! - [`CircuitConfig`] - the value ranges and defaults, validated once at
//!   model construction.
//! - [`ValueRange`] - a closed `f64` interval with clamp/normalize helpers.
//!
//! ## Derivation
//!
//! `current = 1000 × voltage / resistance`. The factor converts amps to
//! milliamps and is a fixed unit conversion, not configuration. The
//! resistance range's lower bound must be strictly positive, which makes the
//! derivation total; a configuration violating that is rejected by
//! [`CircuitModel::new`].
//!
//! ## Quick Start
//!
//! ```rust
//! use voltaic_model::{CircuitConfig, CircuitModel, Quantity};
//!
//! let mut model = CircuitModel::new(CircuitConfig::default()).unwrap();
//! assert_eq!(model.current(), 9.0); // 1000 × 4.5 / 500
//!
//! model.subscribe(Quantity::Current, |old, new| {
//!     assert!(old != new);
//! });
//!
//! model.set_resistance(10.0);
//! model.set_voltage(9.9);
//! assert_eq!(model.current(), 990.0);
//!
//! model.reset();
//! assert_eq!(model.voltage(), 4.5);
//! assert_eq!(model.resistance(), 500.0);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod circuit;
mod config;
mod quantity;
mod range;

pub use circuit::{CircuitModel, MILLIAMPS_PER_AMP};
pub use config::{CircuitConfig, ConfigError};
pub use quantity::Quantity;
pub use range::ValueRange;
