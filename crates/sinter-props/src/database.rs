//! The property database: normalized per-material curve banks and
//! scalar stores.

use indexmap::{IndexMap, IndexSet};

use sinter_block::{deep_copy, Block, BlockView, Host, MemorySpace};
use sinter_core::{ConfigError, MaterialId, MaterialState, ScalarProperty, StateProperty};

use crate::curve::{parse_curve, CurveFormat, ParsedCurve, POLYNOMIAL_ORDER, TABLE_CAPACITY};

/// Raw material specification, as handed over by the external
/// configuration collaborator.
///
/// Curve values are the grammar strings from the configuration file;
/// scalar values are plain numbers. Built with a chained constructor:
///
/// ```
/// use sinter_core::{MaterialId, MaterialState, ScalarProperty, StateProperty};
/// use sinter_props::MaterialSource;
///
/// let steel = MaterialSource::new(MaterialId(0))
///     .scalar(ScalarProperty::Solidus, 1658.0)
///     .scalar(ScalarProperty::Liquidus, 1723.0)
///     .curve(MaterialState::Solid, StateProperty::ThermalConductivity, "300,14.6;1000,28.4");
/// ```
#[derive(Clone, Debug)]
pub struct MaterialSource {
    id: MaterialId,
    scalars: IndexMap<ScalarProperty, f64>,
    curves: IndexMap<(MaterialState, StateProperty), String>,
}

impl MaterialSource {
    /// Start a specification for the given material id.
    pub fn new(id: MaterialId) -> Self {
        Self {
            id,
            scalars: IndexMap::new(),
            curves: IndexMap::new(),
        }
    }

    /// The material id.
    pub fn id(&self) -> MaterialId {
        self.id
    }

    /// Set a phase-independent scalar property.
    pub fn scalar(mut self, property: ScalarProperty, value: f64) -> Self {
        self.scalars.insert(property, value);
        self
    }

    /// Set a curve spec for a (phase, property) pair.
    pub fn curve(
        mut self,
        state: MaterialState,
        property: StateProperty,
        spec: impl Into<String>,
    ) -> Self {
        self.curves.insert((state, property), spec.into());
        self
    }
}

/// Immutable per-material property storage.
///
/// Curve banks and the scalar store live in the memory space `M` so
/// the update kernel can read them in place; the temperature-
/// independent mechanical store stays host-resident (it is consumed by
/// the host-side mechanical assembly, one value per material).
///
/// Built once from [`MaterialSource`]s; any malformed or over-capacity
/// spec aborts construction. Missing scalars default to `f64::MAX`,
/// which downstream logic reads as "no transition possible".
#[derive(Clone, Debug)]
pub struct PropertyDatabase<M: MemorySpace = Host> {
    format: CurveFormat,
    n_materials: usize,
    /// `(materials, ScalarProperty::COUNT)`.
    scalars: Block<M>,
    /// `(materials, phases, thermal properties, TABLE_CAPACITY, 2)`;
    /// empty in polynomial format.
    tables: Block<M>,
    /// `(materials, phases, thermal properties, POLYNOMIAL_ORDER + 1)`;
    /// empty in table format.
    polynomials: Block<M>,
    /// `(materials, StateProperty::MECHANICAL_COUNT)`, host-resident.
    mechanical: Block<Host>,
}

impl<M: MemorySpace> PropertyDatabase<M> {
    /// Build the database from raw material specifications.
    ///
    /// Fails on the first malformed spec, capacity overflow, or
    /// duplicate material id; no partially-loaded database is ever
    /// returned.
    pub fn from_sources(
        format: CurveFormat,
        sources: &[MaterialSource],
    ) -> Result<Self, ConfigError> {
        let mut seen = IndexSet::new();
        for source in sources {
            if !seen.insert(source.id) {
                return Err(ConfigError::DuplicateMaterial {
                    material: source.id,
                });
            }
        }

        // Banks are dense up to the largest id so kernels can index by
        // material id directly.
        let n_materials = sources
            .iter()
            .map(|s| s.id.0 as usize + 1)
            .max()
            .unwrap_or(0);

        let n_states = MaterialState::COUNT;
        let n_thermal = StateProperty::THERMAL_COUNT;

        let mut scalars = Block::<Host>::new(&[n_materials, ScalarProperty::COUNT]);
        scalars.as_mut_slice().fill(f64::MAX);
        let mut tables = Block::<Host>::empty();
        let mut polynomials = Block::<Host>::empty();
        match format {
            CurveFormat::Table => {
                tables.reinit(&[n_materials, n_states, n_thermal, TABLE_CAPACITY, 2]);
            }
            CurveFormat::Polynomial => {
                polynomials.reinit(&[n_materials, n_states, n_thermal, POLYNOMIAL_ORDER + 1]);
            }
        }
        let mut mechanical =
            Block::<Host>::new(&[n_materials, StateProperty::MECHANICAL_COUNT]);

        for source in sources {
            let m = source.id.0 as usize;

            for (&property, &value) in &source.scalars {
                scalars.view_mut().set([m, property.index()], value);
            }

            for (&(state, property), spec) in &source.curves {
                let parsed = parse_curve(source.id, format, spec)?;
                match property.mechanical_index() {
                    None => pack_thermal_curve(
                        &parsed,
                        m,
                        state.index(),
                        property.index(),
                        &mut tables,
                        &mut polynomials,
                    ),
                    Some(mech) => {
                        // Mechanical properties exist only for the solid
                        // phase and are temperature-independent: keep the
                        // first value.
                        if state == MaterialState::Solid {
                            mechanical.view_mut().set([m, mech], first_value(&parsed));
                        }
                    }
                }
            }
        }

        let mut db = Self {
            format,
            n_materials,
            scalars: Block::empty(),
            tables: Block::empty(),
            polynomials: Block::empty(),
            mechanical,
        };
        deep_copy(&mut db.scalars, &scalars);
        deep_copy(&mut db.tables, &tables);
        deep_copy(&mut db.polynomials, &polynomials);
        Ok(db)
    }

    /// Curve form this database was built with.
    pub fn format(&self) -> CurveFormat {
        self.format
    }

    /// Number of dense material slots (largest id + 1).
    pub fn n_materials(&self) -> usize {
        self.n_materials
    }

    /// Read a phase-independent scalar property from host code.
    ///
    /// Returns the `f64::MAX` sentinel for unset entries. On a
    /// device-resident database this performs a full blocking copy.
    pub fn scalar(&self, material: MaterialId, property: ScalarProperty) -> f64 {
        M::element(&self.scalars, [material.0 as usize, property.index()])
    }

    /// Read a temperature-independent mechanical property of the solid.
    ///
    /// # Panics
    ///
    /// Panics if `property` is not in the mechanical block.
    pub fn mechanical(&self, material: MaterialId, property: StateProperty) -> f64 {
        let mech = property
            .mechanical_index()
            .unwrap_or_else(|| panic!("{property} is not a mechanical property"));
        self.mechanical.view().get([material.0 as usize, mech])
    }

    /// Kernel view of the scalar bank.
    pub fn scalars_view(&self) -> BlockView<'_> {
        self.scalars.kernel_view()
    }

    /// Kernel view of the table bank (empty in polynomial format).
    pub fn tables_view(&self) -> BlockView<'_> {
        self.tables.kernel_view()
    }

    /// Kernel view of the polynomial bank (empty in table format).
    pub fn polynomials_view(&self) -> BlockView<'_> {
        self.polynomials.kernel_view()
    }
}

/// Pack a parsed thermal curve into its bank slot, normalizing to
/// fixed capacity: tables repeat the last breakpoint/value pair,
/// polynomials keep their zero padding.
fn pack_thermal_curve(
    parsed: &ParsedCurve,
    material: usize,
    state: usize,
    property: usize,
    tables: &mut Block<Host>,
    polynomials: &mut Block<Host>,
) {
    match parsed {
        ParsedCurve::Table(pairs) => {
            let mut view = tables.view_mut();
            let last = *pairs.last().expect("parser rejects empty curves");
            for i in 0..TABLE_CAPACITY {
                let (b, v) = pairs.get(i).copied().unwrap_or(last);
                view.set([material, state, property, i, 0], b);
                view.set([material, state, property, i, 1], v);
            }
        }
        ParsedCurve::Polynomial(coeffs) => {
            let mut view = polynomials.view_mut();
            for (i, &c) in coeffs.iter().enumerate() {
                view.set([material, state, property, i], c);
            }
        }
    }
}

/// The constant part of a curve: first table value or the zeroth
/// coefficient.
fn first_value(parsed: &ParsedCurve) -> f64 {
    match parsed {
        ParsedCurve::Table(pairs) => pairs[0].1,
        ParsedCurve::Polynomial(coeffs) => coeffs[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sinter_block::Device;

    fn steel() -> MaterialSource {
        MaterialSource::new(MaterialId(0))
            .scalar(ScalarProperty::Solidus, 1000.0)
            .scalar(ScalarProperty::Liquidus, 1100.0)
            .scalar(ScalarProperty::LatentHeat, 500.0)
            .scalar(ScalarProperty::ConvectionTemperatureInfty, 295.0)
            .curve(MaterialState::Solid, StateProperty::Density, "0,7800;2000,7000")
            .curve(MaterialState::Solid, StateProperty::ElasticModulus, "0,2.1e11")
            .curve(MaterialState::Liquid, StateProperty::ElasticModulus, "0,1.0")
    }

    #[test]
    fn missing_scalars_default_to_sentinel() {
        let db = PropertyDatabase::<Host>::from_sources(CurveFormat::Table, &[steel()]).unwrap();
        assert_eq!(db.scalar(MaterialId(0), ScalarProperty::Solidus), 1000.0);
        assert_eq!(
            db.scalar(MaterialId(0), ScalarProperty::ConvectionTemperatureInfty),
            295.0
        );
        assert_eq!(
            db.scalar(MaterialId(0), ScalarProperty::RadiationTemperatureInfty),
            f64::MAX
        );
    }

    #[test]
    fn mechanical_is_solid_only_and_first_value() {
        let db = PropertyDatabase::<Host>::from_sources(CurveFormat::Table, &[steel()]).unwrap();
        // The liquid-phase elastic modulus spec is ignored.
        assert_eq!(
            db.mechanical(MaterialId(0), StateProperty::ElasticModulus),
            2.1e11
        );
        // Unset mechanical entries stay zero.
        assert_eq!(db.mechanical(MaterialId(0), StateProperty::PoissonRatio), 0.0);
    }

    #[test]
    #[should_panic(expected = "not a mechanical property")]
    fn thermal_property_rejected_by_mechanical_query() {
        let db = PropertyDatabase::<Host>::from_sources(CurveFormat::Table, &[steel()]).unwrap();
        db.mechanical(MaterialId(0), StateProperty::Density);
    }

    #[test]
    fn duplicate_material_is_fatal() {
        let err = PropertyDatabase::<Host>::from_sources(
            CurveFormat::Table,
            &[steel(), MaterialSource::new(MaterialId(0))],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateMaterial {
                material: MaterialId(0)
            }
        );
    }

    #[test]
    fn bad_curve_aborts_construction() {
        let bad = MaterialSource::new(MaterialId(1)).curve(
            MaterialState::Powder,
            StateProperty::SpecificHeat,
            "1,2;3",
        );
        let err =
            PropertyDatabase::<Host>::from_sources(CurveFormat::Table, &[steel(), bad])
                .unwrap_err();
        assert!(matches!(err, ConfigError::MalformedPair { .. }));
    }

    #[test]
    fn banks_are_dense_up_to_largest_id() {
        let sparse = MaterialSource::new(MaterialId(4))
            .curve(MaterialState::Solid, StateProperty::Density, "0,1");
        let db =
            PropertyDatabase::<Host>::from_sources(CurveFormat::Table, &[sparse]).unwrap();
        assert_eq!(db.n_materials(), 5);
        assert_eq!(db.tables_view().extent(0), 5);
    }

    #[test]
    fn device_database_reads_through_blocking_copy() {
        let db =
            PropertyDatabase::<Device>::from_sources(CurveFormat::Table, &[steel()]).unwrap();
        assert_eq!(db.scalar(MaterialId(0), ScalarProperty::LatentHeat), 500.0);
        assert_eq!(
            db.mechanical(MaterialId(0), StateProperty::ElasticModulus),
            2.1e11
        );
    }

    proptest! {
        #[test]
        fn packing_preserves_parsed_pairs(
            pairs in prop::collection::vec(
                (-1e6..1e6f64, -1e6..1e6f64),
                1..=TABLE_CAPACITY,
            )
        ) {
            let spec: Vec<String> = pairs.iter().map(|(b, v)| format!("{b},{v}")).collect();
            let source = MaterialSource::new(MaterialId(0)).curve(
                MaterialState::Solid,
                StateProperty::Density,
                spec.join(";"),
            );
            let db =
                PropertyDatabase::<Host>::from_sources(CurveFormat::Table, &[source]).unwrap();

            let view = db.tables_view();
            let s = MaterialState::Solid.index();
            let p = StateProperty::Density.index();
            let last = *pairs.last().unwrap();
            for i in 0..TABLE_CAPACITY {
                let (b, v) = pairs.get(i).copied().unwrap_or(last);
                prop_assert_eq!(view.get([0, s, p, i, 0]), b);
                prop_assert_eq!(view.get([0, s, p, i, 1]), v);
            }
        }
    }

    #[test]
    fn table_bank_pads_with_last_pair() {
        let db = PropertyDatabase::<Host>::from_sources(CurveFormat::Table, &[steel()]).unwrap();
        let view = db.tables_view();
        let m = 0;
        let s = MaterialState::Solid.index();
        let p = StateProperty::Density.index();
        for i in 2..TABLE_CAPACITY {
            assert_eq!(view.get([m, s, p, i, 0]), 2000.0);
            assert_eq!(view.get([m, s, p, i, 1]), 7000.0);
        }
    }
}
