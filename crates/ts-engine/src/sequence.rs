//! Iteration driver and the per-variant entry points.

use serde::{Deserialize, Serialize};
use ts_core::Real;

use crate::error::{EngineError, EngineResult};
use crate::params::SequenceParams;
use crate::step::{TankState, seed};
use crate::variant::Variant;

/// Two index-aligned daily series; index `t` is the day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SequencePair {
    pub dirty: Vec<Real>,
    pub clean: Vec<Real>,
}

impl SequencePair {
    /// Reserves room for `n` days; lengths that cannot be allocated are rejected.
    fn try_with_capacity(n: usize) -> EngineResult<Self> {
        let mut pair = Self::default();
        pair.dirty
            .try_reserve_exact(n)
            .and_then(|()| pair.clean.try_reserve_exact(n))
            .map_err(|_| EngineError::InvalidLength { n_max: n })?;
        Ok(pair)
    }

    fn push(&mut self, state: TankState) {
        self.dirty.push(state.dirty);
        self.clean.push(state.clean);
    }

    pub fn len(&self) -> usize {
        self.dirty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirty.is_empty()
    }

    /// Day index for every entry.
    pub fn days(&self) -> Vec<usize> {
        day_indices(self.len())
    }

    pub fn states(&self) -> impl Iterator<Item = TankState> + '_ {
        self.dirty
            .iter()
            .zip(&self.clean)
            .map(|(&dirty, &clean)| TankState::new(dirty, clean))
    }

    pub fn last(&self) -> Option<TankState> {
        self.states().last()
    }
}

/// `0..n_max`.
pub fn day_indices(n_max: usize) -> Vec<usize> {
    (0..n_max).collect()
}

/// Seeds day 0 and applies the variant's step rule for days `1..n_max`.
pub fn generate(variant: Variant, params: &SequenceParams) -> EngineResult<SequencePair> {
    params.validate()?;

    let mut pair = SequencePair::try_with_capacity(params.n_max)?;
    let mut state = seed(variant, params);
    pair.push(state);

    for _ in 1..params.n_max {
        state = variant.step(state, params);
        pair.push(state);
    }

    Ok(pair)
}

pub fn compute_dirty_first(
    v0: Real,
    k: Real,
    n_max: usize,
    capacity: Real,
) -> EngineResult<SequencePair> {
    let params = SequenceParams::new(v0, k, n_max).with_capacity(capacity);
    generate(Variant::DirtyWaterFirst, &params)
}

pub fn compute_clean_first(
    v0: Real,
    k: Real,
    n_max: usize,
    capacity: Real,
) -> EngineResult<SequencePair> {
    let params = SequenceParams::new(v0, k, n_max).with_capacity(capacity);
    generate(Variant::CleanWaterFirst, &params)
}

pub fn compute_mixing(
    v0: Real,
    k: Real,
    n_max: usize,
    capacity: Real,
) -> EngineResult<SequencePair> {
    let params = SequenceParams::new(v0, k, n_max).with_capacity(capacity);
    generate(Variant::Mixing, &params)
}

pub fn compute_evaporation(
    v0: Real,
    k: Real,
    n_max: usize,
    evaporation: Real,
    capacity: Real,
) -> EngineResult<SequencePair> {
    let params = SequenceParams::new(v0, k, n_max)
        .with_evaporation(evaporation)
        .with_capacity(capacity);
    generate(Variant::MixingWithEvaporation, &params)
}
