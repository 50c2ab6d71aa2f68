//! The per-unit property update kernel and its owning engine.

use sinter_block::{exec, Backend, Host, MemorySpace};
use sinter_core::{
    CellId, MaterialId, MaterialState, ScalarProperty, StateProperty, STEFAN_BOLTZMANN,
};
use sinter_props::{polynomial_value, table_value, CurveFormat, PropertyDatabase};

use crate::index::SpatialUnitIndex;
use crate::projection::UnitSupport;
use crate::store::StateStore;

/// Solid fraction above which a unit participates in mechanical
/// assembly, provided its thermal equation is active there.
pub const MECHANICAL_ACTIVATION_THRESHOLD: f64 = 0.99;

/// Owns the property database, the cell index, and the per-unit state,
/// and advances them from representative temperatures.
///
/// One update step per unit:
///
/// 1. the liquid fraction follows the temperature through the mushy
///    interval `[solidus, liquidus]`, clamped to `[0, 1]`;
/// 2. the powder fraction can only shrink — consumed powder reappears
///    as solid on cooling, never as powder;
/// 3. thermal properties are blended across phases by fraction, with
///    the latent-heat correction added to the specific heat while the
///    unit is mushy;
/// 4. the linearized radiative coefficient is derived in closed form
///    from the blended emissivity, never read from a curve.
///
/// The kernel is elementwise over units and dispatched through the
/// configured [`Backend`]; results are bitwise identical across
/// backends and memory spaces.
#[derive(Clone, Debug)]
pub struct PropertyEngine<M: MemorySpace = Host> {
    database: PropertyDatabase<M>,
    index: SpatialUnitIndex,
    store: StateStore<M>,
    /// Material id per unit, offset-ordered.
    materials: Vec<MaterialId>,
    backend: Backend,
}

impl<M: MemorySpace> PropertyEngine<M> {
    /// Create an engine over a built database. Call
    /// [`rebuild`](PropertyEngine::rebuild) before the first update.
    pub fn new(database: PropertyDatabase<M>, backend: Backend) -> Self {
        Self {
            database,
            index: SpatialUnitIndex::new(),
            store: StateStore::new(),
            materials: Vec::new(),
            backend,
        }
    }

    /// Replace the tracked cell population.
    ///
    /// Assigns dense offsets in iteration order, resizes the state
    /// store, and seeds fractions one-hot from the initial phase tags.
    /// Every previously issued offset and all stored values are
    /// discarded; migration onto the new offsets goes through
    /// [`set_state`](PropertyEngine::set_state).
    ///
    /// # Panics
    ///
    /// Panics on a duplicate cell id or a material id outside the
    /// database.
    pub fn rebuild(&mut self, cells: impl IntoIterator<Item = (CellId, MaterialId, MaterialState)>) {
        let mut ids = Vec::new();
        let mut materials = Vec::new();
        let mut tags = Vec::new();
        for (cell, material, tag) in cells {
            assert!(
                (material.0 as usize) < self.database.n_materials(),
                "material {material} of cell {cell} is not in the database"
            );
            ids.push(cell);
            materials.push(material);
            tags.push(tag);
        }
        self.index.rebuild(ids);
        self.materials = materials;
        self.store.reinit(self.materials.len());
        self.store.seed(&tags);
    }

    /// Overwrite phase fractions from externally migrated liquid and
    /// powder values (see [`StateStore::set_state`]).
    pub fn set_state(&mut self, liquid: &[f64], powder: &[f64]) {
        self.store.set_state(liquid, powder);
    }

    /// Advance phase fractions and recompute all thermal properties
    /// from one representative temperature per unit.
    ///
    /// # Panics
    ///
    /// Panics if `temperatures.len()` differs from the unit count.
    pub fn update(&mut self, temperatures: &[f64]) {
        assert_eq!(
            temperatures.len(),
            self.n_units(),
            "one temperature per unit"
        );

        let format = self.database.format();
        let scalars = self.database.scalars_view();
        let tables = self.database.tables_view();
        let polynomials = self.database.polynomials_view();
        let materials = &self.materials;

        let (state_block, props_block) = self.store.blocks_mut();
        props_block.set_zero();

        exec::for_each_row_pair(
            self.backend,
            state_block.kernel_slice_mut(),
            MaterialState::COUNT,
            props_block.kernel_slice_mut(),
            StateProperty::THERMAL_COUNT,
            |i, state_row, prop_row| {
                let material = materials[i].0 as usize;
                let t = temperatures[i];
                let solidus = scalars.get([material, ScalarProperty::Solidus.index()]);
                let liquidus = scalars.get([material, ScalarProperty::Liquidus.index()]);

                // A degenerate interval (unset scalars default to the
                // f64::MAX sentinel, so liquidus == solidus there)
                // means an instantaneous transition at the solidus.
                let liquid_ratio = if liquidus <= solidus {
                    if t < solidus {
                        0.0
                    } else {
                        1.0
                    }
                } else {
                    ((t - solidus) / (liquidus - solidus)).clamp(0.0, 1.0)
                };

                let prev_powder = state_row[MaterialState::Powder.index()];
                let powder = (1.0 - liquid_ratio).min(prev_powder);
                let solid = (1.0 - liquid_ratio - powder).max(0.0);
                assert!(
                    powder <= prev_powder,
                    "powder fraction of unit {i} grew"
                );
                assert!(
                    (solid + liquid_ratio + powder - 1.0).abs() <= 1e-9,
                    "phase fractions of unit {i} do not sum to 1"
                );

                state_row[MaterialState::Solid.index()] = solid;
                state_row[MaterialState::Liquid.index()] = liquid_ratio;
                state_row[MaterialState::Powder.index()] = powder;

                // MaterialState::index ordering.
                let fractions = [solid, liquid_ratio, powder];
                for p in 0..StateProperty::RadiationHeatTransferCoef.index() {
                    let mut value = 0.0;
                    for (s, &fraction) in fractions.iter().enumerate() {
                        value += fraction
                            * match format {
                                CurveFormat::Table => table_value(tables, material, s, p, t),
                                CurveFormat::Polynomial => {
                                    polynomial_value(polynomials, material, s, p, t)
                                }
                            };
                    }
                    prop_row[p] = value;
                }

                if liquid_ratio > 0.0 && liquid_ratio < 1.0 {
                    let latent = scalars.get([material, ScalarProperty::LatentHeat.index()]);
                    // Fractions sum to 1, so the per-phase weighting of
                    // the correction collapses to a single term.
                    prop_row[StateProperty::SpecificHeat.index()] +=
                        latent / (liquidus - solidus);
                }

                let t_inf =
                    scalars.get([material, ScalarProperty::RadiationTemperatureInfty.index()]);
                let emissivity = prop_row[StateProperty::Emissivity.index()];
                prop_row[StateProperty::RadiationHeatTransferCoef.index()] =
                    emissivity * STEFAN_BOLTZMANN * (t + t_inf) * (t * t + t_inf * t_inf);
            },
        );
    }

    /// Recompute only the boundary-facing properties (emissivity and
    /// the radiative coefficient) from boundary temperatures, without
    /// touching the phase fractions.
    ///
    /// Bulk property slots are zeroed; a boundary pass never leaves
    /// stale interior values behind.
    ///
    /// # Panics
    ///
    /// Panics if `temperatures.len()` differs from the unit count.
    pub fn update_boundary(&mut self, temperatures: &[f64]) {
        assert_eq!(
            temperatures.len(),
            self.n_units(),
            "one temperature per unit"
        );

        let format = self.database.format();
        let scalars = self.database.scalars_view();
        let tables = self.database.tables_view();
        let polynomials = self.database.polynomials_view();
        let materials = &self.materials;

        let (state_block, props_block) = self.store.blocks_mut();
        let state = state_block.kernel_view();
        props_block.set_zero();

        exec::for_each_row(
            self.backend,
            props_block.kernel_slice_mut(),
            StateProperty::THERMAL_COUNT,
            |i, prop_row| {
                let material = materials[i].0 as usize;
                let t = temperatures[i];

                for p in
                    StateProperty::BOUNDARY_START..StateProperty::RadiationHeatTransferCoef.index()
                {
                    let mut value = 0.0;
                    for s in 0..MaterialState::COUNT {
                        value += state.get([i, s])
                            * match format {
                                CurveFormat::Table => table_value(tables, material, s, p, t),
                                CurveFormat::Polynomial => {
                                    polynomial_value(polynomials, material, s, p, t)
                                }
                            };
                    }
                    prop_row[p] = value;
                }

                let t_inf =
                    scalars.get([material, ScalarProperty::RadiationTemperatureInfty.index()]);
                let emissivity = prop_row[StateProperty::Emissivity.index()];
                prop_row[StateProperty::RadiationHeatTransferCoef.index()] =
                    emissivity * STEFAN_BOLTZMANN * (t + t_inf) * (t * t + t_inf * t_inf);
            },
        );
    }

    /// Project a nodal temperature field to per-unit averages through
    /// `support`, then [`update`](PropertyEngine::update).
    ///
    /// # Panics
    ///
    /// Panics if `support` describes a different unit count.
    pub fn update_with_field(&mut self, support: &UnitSupport, nodal: &[f64]) {
        assert_eq!(
            support.n_units(),
            self.n_units(),
            "support does not match the tracked units"
        );
        let temperatures = support.project(nodal, self.backend);
        self.update(&temperatures);
    }

    /// Fraction of `state` in a cell, or `None` if the cell is not
    /// locally owned. Blocking on device-resident engines.
    pub fn state_ratio(&self, cell: CellId, state: MaterialState) -> Option<f64> {
        let i = self.index.offset(cell)?;
        Some(M::element(self.store.state(), [i, state.index()]))
    }

    /// Last computed value of a thermal property in a cell, or `None`
    /// if the cell is not locally owned. Blocking on device-resident
    /// engines.
    ///
    /// # Panics
    ///
    /// Panics if `property` is mechanical; those are material
    /// constants, see [`mechanical_property`](Self::mechanical_property).
    pub fn property_value(&self, cell: CellId, property: StateProperty) -> Option<f64> {
        assert!(
            property.is_thermal(),
            "{property} is not tracked per unit"
        );
        let i = self.index.offset(cell)?;
        Some(M::element(self.store.property_values(), [i, property.index()]))
    }

    /// Phase-independent scalar property of a cell's material, or
    /// `None` if the cell is not locally owned.
    pub fn scalar(&self, cell: CellId, property: ScalarProperty) -> Option<f64> {
        let i = self.index.offset(cell)?;
        Some(self.database.scalar(self.materials[i], property))
    }

    /// Mechanical property of a cell's material, or `None` if the cell
    /// is not locally owned.
    pub fn mechanical_property(&self, cell: CellId, property: StateProperty) -> Option<f64> {
        let i = self.index.offset(cell)?;
        Some(self.database.mechanical(self.materials[i], property))
    }

    /// Per-unit mechanical participation: effectively fully solid and
    /// thermally active.
    ///
    /// # Panics
    ///
    /// Panics if `thermally_active.len()` differs from the unit count.
    pub fn mechanical_activation(&self, thermally_active: &[bool]) -> Vec<bool> {
        assert_eq!(
            thermally_active.len(),
            self.n_units(),
            "one thermal activity flag per unit"
        );
        let state = self.store.state_to_host();
        let view = state.view();
        thermally_active
            .iter()
            .enumerate()
            .map(|(i, &active)| {
                active
                    && view.get([i, MaterialState::Solid.index()])
                        > MECHANICAL_ACTIVATION_THRESHOLD
            })
            .collect()
    }

    /// Number of locally owned units.
    pub fn n_units(&self) -> usize {
        self.index.len()
    }

    /// The property database.
    pub fn database(&self) -> &PropertyDatabase<M> {
        &self.database
    }

    /// The cell-to-offset index.
    pub fn index(&self) -> &SpatialUnitIndex {
        &self.index
    }

    /// The per-unit state store.
    pub fn store(&self) -> &StateStore<M> {
        &self.store
    }

    /// The configured execution backend.
    pub fn backend(&self) -> Backend {
        self.backend
    }
}
