//! Sequence engine for the fixed-capacity tank models.
//!
//! Given an initial volume, a growth rate and (for one variant) an
//! evaporation volume, the engine produces two index-aligned daily series:
//! the dirty-water volume and the clean-water volume.
//!
//! # Architecture
//!
//! - [`Variant`] selects one of four recurrence behaviors
//! - Each variant is a pure step function `(prev, K, V[, W]) -> next`
//! - [`generate`] is the single iteration driver shared by every variant
//!
//! Every call is pure: identical parameters give bit-identical output and no
//! state survives between calls.

pub mod error;
pub mod params;
pub mod sequence;
pub mod step;
pub mod variant;

pub use error::{EngineError, EngineResult};
pub use params::{DEFAULT_CAPACITY, SequenceParams};
pub use sequence::{
    SequencePair, compute_clean_first, compute_dirty_first, compute_evaporation, compute_mixing,
    day_indices, generate,
};
pub use step::{
    TankState, seed, step_clean_first, step_dirty_first, step_mixing,
    step_mixing_with_evaporation,
};
pub use variant::{ParseVariantError, Variant};
