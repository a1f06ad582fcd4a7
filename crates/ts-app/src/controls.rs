//! Operator-facing parameter values and their ranges.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use ts_core::Real;
use ts_engine::{DEFAULT_CAPACITY, SequenceParams, Variant};

/// Range, step and default of one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: Real,
    pub max: Real,
    pub step: Real,
    pub default: Real,
}

impl SliderSpec {
    pub fn range(&self) -> RangeInclusive<Real> {
        self.min..=self.max
    }

    pub fn contains(&self, value: Real) -> bool {
        self.range().contains(&value)
    }

    /// Snaps `value` to the step grid, then into `[min, max]`. NaN passes through.
    pub fn clamp(&self, value: Real) -> Real {
        if value.is_nan() {
            return value;
        }
        let steps = ((value - self.min) / self.step).round();
        // Divide by the steps-per-unit count so 0.1 grids land on exact decimals.
        let snapped = if self.step < 1.0 {
            self.min + steps / (1.0 / self.step).round()
        } else {
            self.min + steps * self.step
        };
        snapped.clamp(self.min, self.max)
    }
}

pub const V0_SLIDER: SliderSpec = SliderSpec {
    label: "Initial volume (V0)",
    min: 0.0,
    max: 2500.0,
    step: 0.1,
    default: 100.0,
};

pub const K_SLIDER: SliderSpec = SliderSpec {
    label: "Growth rate (K)",
    min: 0.0,
    max: 10.0,
    step: 0.01,
    default: 1.0,
};

pub const N_MAX_SLIDER: SliderSpec = SliderSpec {
    label: "Number of days (Nmax)",
    min: 1.0,
    max: 1000.0,
    step: 1.0,
    default: 10.0,
};

pub const W_SLIDER: SliderSpec = SliderSpec {
    label: "Evaporated volume (W)",
    min: 0.0,
    max: 2500.0,
    step: 0.1,
    default: 0.0,
};

/// Current value of every control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub variant: Variant,
    pub v0: Real,
    pub k: Real,
    pub n_max: usize,
    pub evaporation: Real,
    /// Not exposed as a slider.
    pub capacity: Real,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            v0: V0_SLIDER.default,
            k: K_SLIDER.default,
            n_max: N_MAX_SLIDER.default as usize,
            evaporation: W_SLIDER.default,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl ControlSettings {
    /// Full parameter bundle for the engine.
    pub fn to_params(&self) -> SequenceParams {
        SequenceParams {
            v0: self.v0,
            k: self.k,
            n_max: self.n_max,
            evaporation: self.evaporation,
            capacity: self.capacity,
        }
    }

    /// The `W` input is only shown for the evaporation variant.
    pub fn evaporation_visible(&self) -> bool {
        self.variant.uses_evaporation()
    }

    /// Returns a copy with one field replaced.
    ///
    /// Slider-backed values are clamped through their [`SliderSpec`]; the
    /// capacity is stored as given so an invalid one reaches the engine.
    pub fn with_change(mut self, change: ParameterChange) -> Self {
        match change {
            ParameterChange::Variant(v) => self.variant = v,
            ParameterChange::V0(v) => self.v0 = V0_SLIDER.clamp(v),
            ParameterChange::K(v) => self.k = K_SLIDER.clamp(v),
            ParameterChange::NMax(n) => self.n_max = N_MAX_SLIDER.clamp(n as Real) as usize,
            ParameterChange::Evaporation(v) => self.evaporation = W_SLIDER.clamp(v),
            ParameterChange::Capacity(v) => self.capacity = v,
        }
        self
    }

    /// Labels of the sliders whose value lies outside the operator range.
    pub fn out_of_range(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if !V0_SLIDER.contains(self.v0) {
            labels.push(V0_SLIDER.label);
        }
        if !K_SLIDER.contains(self.k) {
            labels.push(K_SLIDER.label);
        }
        if !N_MAX_SLIDER.contains(self.n_max as Real) {
            labels.push(N_MAX_SLIDER.label);
        }
        if self.evaporation_visible() && !W_SLIDER.contains(self.evaporation) {
            labels.push(W_SLIDER.label);
        }
        labels
    }
}

/// One operator edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterChange {
    Variant(Variant),
    V0(Real),
    K(Real),
    NMax(usize),
    Evaporation(Real),
    Capacity(Real),
}
