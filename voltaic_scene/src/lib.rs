// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Voltaic Scene: renderer-agnostic description of the circuit visualization.
//!
//! This crate translates the values held by a
//! [`CircuitModel`](voltaic_model::CircuitModel) into plain data a renderer
//! can draw: kurbo geometry, peniko brushes, formatted readout strings, and
//! accessibility prose. It contains no renderer, window, or event loop;
//! backends consume [`CircuitScene`] however they like.
//!
//! # Position in the stack
//!
//! - **Model** (`voltaic_model`): the reactive values.
//! - **Scene description (this crate)**: pure functions from values to
//!   geometry, paint, and strings, plus slider mappings for input handling.
//! - **Backends**: anything that walks the produced description, such as
//!   an SVG exporter, a vello view, or a test harness.
//!
//! # Core concepts
//!
//! - [`SceneFrame`] - proportional placement of every part within a frame.
//! - [`BatteryCell`], [`Resistor`], [`CurrentArrow`], [`FormulaLayout`] -
//!   the visual parts, each depicting one quantity.
//! - [`SceneParts`] - which parts a given model change invalidates.
//! - [`CircuitScene`] - the assembled description with partial rebuild.
//! - [`SliderTrack`] / [`SliderDrag`] - view-space input mapping for the
//!   two slider controls.
//! - [`SizeDescriber`] and the `describe` sentences - accessibility prose.
//!
//! # Example
//!
//! ```rust
//! use voltaic_model::{CircuitConfig, CircuitModel};
//! use voltaic_scene::{CircuitScene, SceneOptions};
//!
//! let model = CircuitModel::new(CircuitConfig::default()).unwrap();
//! let scene = CircuitScene::from_model(&model, &SceneOptions::default());
//!
//! assert_eq!(scene.battery.len(), 3); // 4.5 V as three 1.5 V cells
//! assert_eq!(scene.readout, "9.0 mA");
//! ```

#![no_std]

extern crate alloc;

mod arrows;
mod battery;
mod describe;
mod formula;
mod invalidate;
mod layout;
mod palette;
mod readout;
mod resistor;
mod scene;
mod slider;

pub use arrows::{ArrowDirection, CurrentArrow, arrow_height, arrow_height_range};
pub use battery::{BatteryCell, CELL_VOLTS, battery_cells};
pub use describe::{
    SIZE_DESCRIPTORS, SizeDescriber, current_sentence, relative_change_sentence, summary_sentence,
};
pub use formula::{FormulaLayout, FormulaLetter, letter_scale, letter_scale_range};
pub use invalidate::{SceneParts, parts_affected};
pub use layout::SceneFrame;
pub use palette::{
    ARROW_FILL, BACKGROUND, DOT_FILL, RESISTOR_FILL, WIRE_STROKE, battery_brush, terminal_brush,
};
pub use readout::{format_current, format_resistance, format_value, format_voltage};
pub use resistor::{DOT_RADIUS, MAX_DOTS, MIN_DOTS, Resistor, dot_count};
pub use scene::{CircuitScene, SceneOptions};
pub use slider::{SliderDrag, SliderTrack};
