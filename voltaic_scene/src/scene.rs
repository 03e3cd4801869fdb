// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assembly of the full scene description.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Size;

use voltaic_model::{CircuitModel, Quantity};

use crate::arrows::CurrentArrow;
use crate::battery::{BatteryCell, battery_cells};
use crate::describe::summary_sentence;
use crate::formula::FormulaLayout;
use crate::invalidate::SceneParts;
use crate::layout::{DEFAULT_FRAME_SIZE, SceneFrame};
use crate::readout::format_current;
use crate::resistor::Resistor;
use crate::slider::SliderTrack;

/// Keyboard step for the voltage slider, in volts.
const VOLTAGE_STEP: f64 = 0.1;

/// Keyboard step for the resistance slider, in ohms.
const RESISTANCE_STEP: f64 = 1.0;

/// Settings for building a [`CircuitScene`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneOptions {
    /// Frame size, in view units.
    pub size: Size,
    /// Seed for the resistor dot cloud.
    pub dot_seed: u64,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_FRAME_SIZE,
            dot_seed: 0,
        }
    }
}

/// The assembled scene description.
///
/// Everything a renderer needs, as plain data: placement, per-part
/// geometry, the formatted readout, and the accessibility summary. Parts
/// can be rebuilt selectively with [`CircuitScene::rebuild`], keyed by the
/// [`SceneParts`](crate::SceneParts) a model notification maps to via
/// [`parts_affected`](crate::parts_affected).
///
/// # Example
///
/// ```rust
/// use voltaic_model::{CircuitConfig, CircuitModel, Quantity};
/// use voltaic_scene::{CircuitScene, SceneOptions, parts_affected};
///
/// let mut model = CircuitModel::new(CircuitConfig::default()).unwrap();
/// let options = SceneOptions::default();
/// let mut scene = CircuitScene::from_model(&model, &options);
///
/// model.set_resistance(1000.0);
/// let parts = parts_affected(Quantity::Resistance) | parts_affected(Quantity::Current);
/// scene.rebuild(parts, &model, &options);
/// assert_eq!(scene.readout, "4.5 mA");
/// ```
#[derive(Clone, Debug)]
pub struct CircuitScene {
    /// Placement of every part.
    pub frame: SceneFrame,
    /// The battery row depicting the voltage.
    pub battery: Vec<BatteryCell>,
    /// The resistor depicting the resistance.
    pub resistor: Resistor,
    /// The current arrows, left and right.
    pub arrows: [CurrentArrow; 2],
    /// The V = I·R formula.
    pub formula: FormulaLayout,
    /// The formatted current readout.
    pub readout: String,
    /// One-sentence accessibility summary of the whole scene.
    pub summary: String,
}

impl CircuitScene {
    /// Builds the full description from the model's values.
    #[must_use]
    pub fn from_model(model: &CircuitModel, options: &SceneOptions) -> Self {
        let frame = SceneFrame::new(options.size);
        let config = model.config();
        Self {
            battery: battery_cells(
                model.voltage(),
                frame.battery_origin,
                frame.battery_cell_size,
            ),
            resistor: Resistor::new(
                frame.resistor_body,
                model.resistance(),
                config.resistance_range,
                options.dot_seed,
            ),
            arrows: CurrentArrow::pair(frame.arrow_anchors, model.current(), config),
            formula: FormulaLayout::new(
                frame.formula_box,
                model.voltage(),
                model.resistance(),
                model.current(),
                config,
            ),
            readout: format_current(model.current()),
            summary: summary_sentence(model.voltage(), model.resistance(), model.current()),
            frame,
        }
    }

    /// Rebuilds only the named parts from the model's values.
    ///
    /// The accessibility summary quotes all three quantities and is
    /// refreshed on every call regardless of `parts`.
    pub fn rebuild(&mut self, parts: SceneParts, model: &CircuitModel, options: &SceneOptions) {
        let config = model.config();
        if parts.contains(SceneParts::BATTERY) {
            self.battery = battery_cells(
                model.voltage(),
                self.frame.battery_origin,
                self.frame.battery_cell_size,
            );
        }
        if parts.contains(SceneParts::RESISTOR) {
            self.resistor = Resistor::new(
                self.frame.resistor_body,
                model.resistance(),
                config.resistance_range,
                options.dot_seed,
            );
        }
        if parts.contains(SceneParts::ARROWS) {
            self.arrows = CurrentArrow::pair(self.frame.arrow_anchors, model.current(), config);
        }
        if parts.contains(SceneParts::FORMULA) {
            self.formula = FormulaLayout::new(
                self.frame.formula_box,
                model.voltage(),
                model.resistance(),
                model.current(),
                config,
            );
        }
        if parts.contains(SceneParts::READOUT) {
            self.readout = format_current(model.current());
        }
        self.summary = summary_sentence(model.voltage(), model.resistance(), model.current());
    }

    /// The track for the voltage slider: frame span, configured range,
    /// 0.1 V steps.
    #[must_use]
    pub fn voltage_slider(&self, model: &CircuitModel) -> SliderTrack {
        SliderTrack::new(
            self.frame.slider_span.clone(),
            model.config().voltage_range,
            VOLTAGE_STEP,
        )
    }

    /// The track for the resistance slider: frame span, configured range,
    /// 1 Ω steps.
    #[must_use]
    pub fn resistance_slider(&self, model: &CircuitModel) -> SliderTrack {
        SliderTrack::new(
            self.frame.slider_span.clone(),
            model.config().resistance_range,
            RESISTANCE_STEP,
        )
    }

    /// The parts a change notification for `quantity` invalidates.
    ///
    /// Convenience re-export of [`parts_affected`](crate::parts_affected)
    /// for callers holding a scene.
    #[must_use]
    pub fn parts_for(quantity: Quantity) -> SceneParts {
        crate::invalidate::parts_affected(quantity)
    }
}
