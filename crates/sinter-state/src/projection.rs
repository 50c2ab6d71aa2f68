//! Representative-temperature projection.
//!
//! Properties must be uniform over a spatial unit for consistency with
//! the discretization, so a nodal temperature field is reduced to one
//! scalar per unit: a volume-weighted average over the unit's support.
//! The quadrature geometry (node indices and weights per unit) comes
//! pre-computed from the external mesh collaborator; units whose
//! governing equation is inactive there are skipped.
//!
//! Cross-process consistency of the nodal field (ghost values) must be
//! established by the field-distribution collaborator before this runs.

use sinter_block::{exec, Backend};

/// Per-unit quadrature support in compressed (CSR) form.
///
/// Unit `i` averages the nodal values at
/// `nodes[offsets[i]..offsets[i + 1]]` with the matching `weights`
/// (shape value times quadrature JxW). `active[i]` marks units whose
/// governing equation is active; inactive units keep a 0 average.
#[derive(Clone, Debug)]
pub struct UnitSupport {
    offsets: Vec<usize>,
    nodes: Vec<usize>,
    weights: Vec<f64>,
    active: Vec<bool>,
}

impl UnitSupport {
    /// Build a support description.
    ///
    /// # Panics
    ///
    /// Panics if the CSR structure is inconsistent: `offsets` must be
    /// non-decreasing, start at 0, end at `nodes.len()`, and describe
    /// exactly `active.len()` units; `weights` pairs with `nodes`.
    pub fn new(
        offsets: Vec<usize>,
        nodes: Vec<usize>,
        weights: Vec<f64>,
        active: Vec<bool>,
    ) -> Self {
        assert_eq!(offsets.len(), active.len() + 1, "offsets must bound every unit");
        assert_eq!(offsets.first(), Some(&0), "offsets must start at 0");
        assert_eq!(offsets.last(), Some(&nodes.len()), "offsets must end at nodes.len()");
        assert!(
            offsets.windows(2).all(|w| w[0] <= w[1]),
            "offsets must be non-decreasing"
        );
        assert_eq!(nodes.len(), weights.len(), "one weight per node reference");
        Self {
            offsets,
            nodes,
            weights,
            active,
        }
    }

    /// Number of units described.
    pub fn n_units(&self) -> usize {
        self.active.len()
    }

    /// Volume-weighted average of `nodal` over each active unit.
    ///
    /// Inactive units (and units with zero total weight) stay at 0.
    ///
    /// # Panics
    ///
    /// Panics if a node index is out of range for `nodal`.
    pub fn project(&self, nodal: &[f64], backend: Backend) -> Vec<f64> {
        let mut averages = vec![0.0; self.n_units()];
        exec::for_each_row(backend, &mut averages, 1, |i, out| {
            if !self.active[i] {
                return;
            }
            let mut volume = 0.0;
            let mut weighted = 0.0;
            for k in self.offsets[i]..self.offsets[i + 1] {
                volume += self.weights[k];
                weighted += self.weights[k] * nodal[self.nodes[k]];
            }
            if volume > 0.0 {
                out[0] = weighted / volume;
            }
        });
        averages
    }
}
