//! Per-unit phase-fraction and property-value storage.

use sinter_block::{deep_copy, Block, Host, MemorySpace};
use sinter_core::{MaterialState, StateProperty};

/// Per-unit state owned by the engine.
///
/// Two blocks in the memory space `M`:
///
/// - phase fractions, `(n_units, 3)` — one row of
///   {solid, liquid, powder} per unit, summing to 1;
/// - thermal property values, `(n_units, THERMAL_COUNT)` — the blended
///   outputs of the last update.
///
/// Fractions are seeded one-hot from per-unit initial phase tags,
/// mutated only by the update kernel, and resized (and logically
/// reset) only by an index rebuild. Migrating values onto new offsets
/// after a rebuild is the mesh-adaptation collaborator's job, via
/// [`set_state`](StateStore::set_state).
#[derive(Clone, Debug)]
pub struct StateStore<M: MemorySpace = Host> {
    state: Block<M>,
    property_values: Block<M>,
}

impl<M: MemorySpace> StateStore<M> {
    /// Create an empty store; call [`reinit`](StateStore::reinit) to size it.
    pub fn new() -> Self {
        Self {
            state: Block::empty(),
            property_values: Block::empty(),
        }
    }

    /// Resize to `n_units`, zeroing all fractions and property values.
    pub fn reinit(&mut self, n_units: usize) {
        self.state.reinit(&[n_units, MaterialState::COUNT]);
        self.property_values
            .reinit(&[n_units, StateProperty::THERMAL_COUNT]);
    }

    /// Number of units the store is sized for.
    pub fn n_units(&self) -> usize {
        if self.state.rank() == 0 {
            0
        } else {
            self.state.extent(0)
        }
    }

    /// Seed fractions one-hot from per-unit initial phase tags.
    ///
    /// # Panics
    ///
    /// Panics if `tags.len()` differs from the unit count.
    pub fn seed(&mut self, tags: &[MaterialState]) {
        assert_eq!(tags.len(), self.n_units(), "one initial phase tag per unit");
        let mut host = Block::<Host>::new(&[tags.len(), MaterialState::COUNT]);
        {
            let mut view = host.view_mut();
            for (i, tag) in tags.iter().enumerate() {
                view.set([i, tag.index()], 1.0);
            }
        }
        deep_copy(&mut self.state, &host);
    }

    /// Overwrite fractions from externally migrated liquid and powder
    /// values; the solid fraction is derived as
    /// `max(1 - liquid - powder, 0)`.
    ///
    /// Used by the mesh-adaptation collaborator to move values onto the
    /// offsets of a freshly rebuilt index.
    ///
    /// # Panics
    ///
    /// Panics if the slice lengths differ from the unit count.
    pub fn set_state(&mut self, liquid: &[f64], powder: &[f64]) {
        let n = self.n_units();
        assert_eq!(liquid.len(), n, "one liquid fraction per unit");
        assert_eq!(powder.len(), n, "one powder fraction per unit");
        let mut host = Block::<Host>::new(&[n, MaterialState::COUNT]);
        {
            let mut view = host.view_mut();
            for i in 0..n {
                view.set([i, MaterialState::Liquid.index()], liquid[i]);
                view.set([i, MaterialState::Powder.index()], powder[i]);
                view.set(
                    [i, MaterialState::Solid.index()],
                    (1.0 - liquid[i] - powder[i]).max(0.0),
                );
            }
        }
        deep_copy(&mut self.state, &host);
    }

    /// The phase-fraction block, space-typed.
    pub fn state(&self) -> &Block<M> {
        &self.state
    }

    /// The property-value block, space-typed.
    pub fn property_values(&self) -> &Block<M> {
        &self.property_values
    }

    /// Host copy of the phase fractions (blocking for device stores).
    pub fn state_to_host(&self) -> Block<Host> {
        let mut host = Block::empty();
        deep_copy(&mut host, &self.state);
        host
    }

    /// Host copy of the property values (blocking for device stores).
    pub fn property_values_to_host(&self) -> Block<Host> {
        let mut host = Block::empty();
        deep_copy(&mut host, &self.property_values);
        host
    }

    pub(crate) fn blocks_mut(&mut self) -> (&mut Block<M>, &mut Block<M>) {
        (&mut self.state, &mut self.property_values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_one_hot() {
        let mut store = StateStore::<Host>::new();
        store.reinit(3);
        store.seed(&[
            MaterialState::Powder,
            MaterialState::Solid,
            MaterialState::Liquid,
        ]);
        let state = store.state_to_host();
        let view = state.view();
        assert_eq!(view.get([0, MaterialState::Powder.index()]), 1.0);
        assert_eq!(view.get([0, MaterialState::Solid.index()]), 0.0);
        assert_eq!(view.get([1, MaterialState::Solid.index()]), 1.0);
        assert_eq!(view.get([2, MaterialState::Liquid.index()]), 1.0);
    }

    #[test]
    fn reinit_resets_everything() {
        let mut store = StateStore::<Host>::new();
        store.reinit(2);
        store.seed(&[MaterialState::Solid, MaterialState::Solid]);
        store.reinit(4);
        assert_eq!(store.n_units(), 4);
        assert!(store.state_to_host().as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn set_state_derives_solid_and_clamps() {
        let mut store = StateStore::<Host>::new();
        store.reinit(2);
        store.set_state(&[0.25, 0.8], &[0.25, 0.4]);
        let state = store.state_to_host();
        let view = state.view();
        assert_eq!(view.get([0, MaterialState::Solid.index()]), 0.5);
        // 1 - 0.8 - 0.4 is negative: clamped, no matter created.
        assert_eq!(view.get([1, MaterialState::Solid.index()]), 0.0);
    }

    #[test]
    #[should_panic(expected = "one initial phase tag per unit")]
    fn seed_length_mismatch_panics() {
        let mut store = StateStore::<Host>::new();
        store.reinit(2);
        store.seed(&[MaterialState::Solid]);
    }
}
