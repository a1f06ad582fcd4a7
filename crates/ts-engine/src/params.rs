//! Parameter bundle handed to the engine on every call.

use serde::{Deserialize, Serialize};
use ts_core::{Real, ensure_finite, ensure_positive};

use crate::error::{EngineError, EngineResult};

/// Tank capacity used when none is given.
pub const DEFAULT_CAPACITY: Real = 2500.0;

/// Complete, immutable input of one sequence computation.
///
/// `evaporation` is only read by [`Variant::MixingWithEvaporation`](crate::Variant).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceParams {
    /// Initial volume `V0`.
    pub v0: Real,
    /// Daily growth rate `K`.
    pub k: Real,
    /// Number of days `Nmax`, seed included.
    pub n_max: usize,
    /// Evaporated volume per day `W`.
    pub evaporation: Real,
    /// Tank capacity `V`.
    pub capacity: Real,
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self {
            v0: 100.0,
            k: 1.0,
            n_max: 10,
            evaporation: 0.0,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl SequenceParams {
    pub fn new(v0: Real, k: Real, n_max: usize) -> Self {
        Self {
            v0,
            k,
            n_max,
            ..Self::default()
        }
    }

    pub fn with_evaporation(mut self, evaporation: Real) -> Self {
        self.evaporation = evaporation;
        self
    }

    pub fn with_capacity(mut self, capacity: Real) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks the preconditions shared by every variant.
    ///
    /// Negative but finite volumes and rates are accepted and propagate
    /// through the formulas unchanged.
    pub fn validate(&self) -> EngineResult<()> {
        if self.n_max < 1 {
            return Err(EngineError::InvalidLength { n_max: self.n_max });
        }
        ensure_positive(self.capacity, "capacity").map_err(|_| EngineError::Domain {
            capacity: self.capacity,
        })?;
        ensure_finite(self.capacity, "capacity")?;
        ensure_finite(self.v0, "v0")?;
        ensure_finite(self.k, "k")?;
        ensure_finite(self.evaporation, "evaporation")?;
        Ok(())
    }
}
