//! Single-day step rules.
//!
//! Pure functions: each takes the previous day and returns the next one.
//! The growth term `min(K * dirty, V)` is shared; the variants differ in how
//! it is limited by the free capacity `V - clean`.

use serde::{Deserialize, Serialize};
use ts_core::Real;

use crate::params::SequenceParams;
use crate::variant::Variant;

/// Volumes on one day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TankState {
    /// Dirty-water volume (morning of the day).
    pub dirty: Real,
    /// Clean-water volume (afternoon of the day).
    pub clean: Real,
}

impl TankState {
    pub fn new(dirty: Real, clean: Real) -> Self {
        Self { dirty, clean }
    }
}

#[inline]
fn growth(dirty: Real, k: Real, capacity: Real) -> Real {
    (k * dirty).min(capacity)
}

/// Day 0 values.
pub fn seed(variant: Variant, params: &SequenceParams) -> TankState {
    let clean = if variant.uses_evaporation() {
        params.v0 * (1.0 - params.evaporation / params.capacity)
    } else {
        params.v0
    };
    TankState::new(params.v0, clean)
}

/// `dirty = min(min(K*d, V), V - c)`, `clean = c + dirty`.
pub fn step_dirty_first(prev: TankState, k: Real, capacity: Real) -> TankState {
    let dirty = growth(prev.dirty, k, capacity).min(capacity - prev.clean);
    TankState::new(dirty, prev.clean + dirty)
}

/// `dirty = max(min(K*d, V) - c, 0)`, `clean = c + dirty`.
pub fn step_clean_first(prev: TankState, k: Real, capacity: Real) -> TankState {
    let dirty = (growth(prev.dirty, k, capacity) - prev.clean).max(0.0);
    TankState::new(dirty, prev.clean + dirty)
}

/// `dirty = min(K*d, V) * (V - c) / V`, `clean = c + dirty`.
pub fn step_mixing(prev: TankState, k: Real, capacity: Real) -> TankState {
    let dirty = mixed_growth(prev, k, capacity);
    TankState::new(dirty, prev.clean + dirty)
}

/// Mixing growth; then `clean = (c + dirty) * (1 - W/V)`.
pub fn step_mixing_with_evaporation(
    prev: TankState,
    k: Real,
    capacity: Real,
    evaporation: Real,
) -> TankState {
    let dirty = mixed_growth(prev, k, capacity);
    let clean = (prev.clean + dirty) * (1.0 - evaporation / capacity);
    TankState::new(dirty, clean)
}

#[inline]
fn mixed_growth(prev: TankState, k: Real, capacity: Real) -> Real {
    growth(prev.dirty, k, capacity) * (capacity - prev.clean) / capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    const V: Real = 2500.0;

    #[test]
    fn dirty_first_unclamped() {
        let next = step_dirty_first(TankState::new(100.0, 100.0), 2.0, V);
        assert_eq!(next, TankState::new(200.0, 300.0));
    }

    #[test]
    fn dirty_first_clamped_by_free_capacity() {
        let next = step_dirty_first(TankState::new(800.0, 1500.0), 2.0, V);
        assert_eq!(next, TankState::new(1000.0, 2500.0));
    }

    #[test]
    fn dirty_first_growth_capped_at_capacity() {
        let next = step_dirty_first(TankState::new(2000.0, 0.0), 5.0, V);
        assert_eq!(next, TankState::new(2500.0, 2500.0));
    }

    #[test]
    fn clean_first_suppressed_when_full() {
        let next = step_clean_first(TankState::new(2500.0, 2500.0), 1.0, V);
        assert_eq!(next, TankState::new(0.0, 2500.0));
    }

    #[test]
    fn clean_first_subtracts_clean_volume() {
        let next = step_clean_first(TankState::new(100.0, 100.0), 3.0, V);
        assert_eq!(next, TankState::new(200.0, 300.0));
    }

    #[test]
    fn mixing_scales_by_free_fraction() {
        let next = step_mixing(TankState::new(100.0, 1250.0), 2.0, V);
        assert_eq!(next, TankState::new(100.0, 1350.0));
    }

    #[test]
    fn mixing_full_tank_stops_growth() {
        let next = step_mixing(TankState::new(500.0, V), 3.0, V);
        assert_eq!(next.dirty, 0.0);
        assert_eq!(next.clean, V);
    }

    #[test]
    fn evaporation_shrinks_clean_volume() {
        let next = step_mixing_with_evaporation(TankState::new(0.0, 1000.0), 1.0, V, 250.0);
        assert_eq!(next.dirty, 0.0);
        assert_eq!(next.clean, 900.0);
    }

    #[test]
    fn evaporation_zero_matches_mixing() {
        let prev = TankState::new(123.4, 567.8);
        assert_eq!(
            step_mixing_with_evaporation(prev, 1.7, V, 0.0),
            step_mixing(prev, 1.7, V)
        );
    }

    #[test]
    fn seed_applies_evaporation_only_to_its_variant() {
        let params = SequenceParams::new(100.0, 1.0, 2).with_evaporation(250.0);
        for variant in Variant::ALL {
            let s = seed(variant, &params);
            assert_eq!(s.dirty, 100.0);
            if variant.uses_evaporation() {
                assert_eq!(s.clean, 90.0);
            } else {
                assert_eq!(s.clean, 100.0);
            }
        }
    }

    #[test]
    fn variant_step_dispatches_to_rule() {
        let params = SequenceParams::new(100.0, 3.0, 2).with_evaporation(100.0);
        let prev = TankState::new(300.0, 900.0);
        assert_eq!(
            Variant::DirtyWaterFirst.step(prev, &params),
            step_dirty_first(prev, 3.0, V)
        );
        assert_eq!(
            Variant::CleanWaterFirst.step(prev, &params),
            step_clean_first(prev, 3.0, V)
        );
        assert_eq!(Variant::Mixing.step(prev, &params), step_mixing(prev, 3.0, V));
        assert_eq!(
            Variant::MixingWithEvaporation.step(prev, &params),
            step_mixing_with_evaporation(prev, 3.0, V, 100.0)
        );
    }
}
