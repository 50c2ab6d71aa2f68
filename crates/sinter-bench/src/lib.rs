//! Benchmark profiles and utilities for the sinter property engine.
//!
//! Provides pre-built material databases and engines for benchmarking
//! and examples:
//!
//! - [`reference_sources`]: a two-material powder-bed stack (steel and
//!   a titanium alloy) with full per-phase curve sets
//! - [`reference_engine`]: an engine tracking `n_units` cells with a
//!   checkerboard material assignment
//! - [`temperature_sweep`]: deterministic pseudo-random temperature
//!   histories via a seeded ChaCha8 RNG

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use sinter_block::{Backend, Host};
use sinter_core::{CellId, MaterialId, MaterialState, ScalarProperty, StateProperty};
use sinter_props::{CurveFormat, MaterialSource, PropertyDatabase};
use sinter_state::PropertyEngine;

/// Two reference materials with full per-phase thermal curve sets and
/// solid mechanical constants.
pub fn reference_sources() -> Vec<MaterialSource> {
    let steel = MaterialSource::new(MaterialId(0))
        .scalar(ScalarProperty::Solidus, 1658.0)
        .scalar(ScalarProperty::Liquidus, 1723.0)
        .scalar(ScalarProperty::LatentHeat, 2.7e5)
        .scalar(ScalarProperty::RadiationTemperatureInfty, 300.0)
        .curve(MaterialState::Solid, StateProperty::Density, "0,7800;1723,7200")
        .curve(MaterialState::Liquid, StateProperty::Density, "1723,6900;3000,6500")
        .curve(MaterialState::Powder, StateProperty::Density, "0,4680;1723,4320")
        .curve(MaterialState::Solid, StateProperty::SpecificHeat, "300,470;1600,760")
        .curve(MaterialState::Liquid, StateProperty::SpecificHeat, "1723,820")
        .curve(MaterialState::Powder, StateProperty::SpecificHeat, "300,470;1600,760")
        .curve(MaterialState::Solid, StateProperty::ThermalConductivity, "300,14.6;1000,28.4")
        .curve(MaterialState::Liquid, StateProperty::ThermalConductivity, "1723,29.0")
        .curve(MaterialState::Powder, StateProperty::ThermalConductivity, "300,0.37;1000,0.71")
        .curve(MaterialState::Solid, StateProperty::Emissivity, "0,0.27")
        .curve(MaterialState::Liquid, StateProperty::Emissivity, "0,0.35")
        .curve(MaterialState::Powder, StateProperty::Emissivity, "0,0.6")
        .curve(MaterialState::Solid, StateProperty::ElasticModulus, "0,2.1e11")
        .curve(MaterialState::Solid, StateProperty::PoissonRatio, "0,0.3");
    let ti64 = MaterialSource::new(MaterialId(1))
        .scalar(ScalarProperty::Solidus, 1878.0)
        .scalar(ScalarProperty::Liquidus, 1928.0)
        .scalar(ScalarProperty::LatentHeat, 2.9e5)
        .scalar(ScalarProperty::RadiationTemperatureInfty, 300.0)
        .curve(MaterialState::Solid, StateProperty::Density, "0,4430")
        .curve(MaterialState::Liquid, StateProperty::Density, "1928,4100")
        .curve(MaterialState::Powder, StateProperty::Density, "0,2660")
        .curve(MaterialState::Solid, StateProperty::SpecificHeat, "300,520;1900,830")
        .curve(MaterialState::Liquid, StateProperty::SpecificHeat, "1928,830")
        .curve(MaterialState::Powder, StateProperty::SpecificHeat, "300,520;1900,830")
        .curve(MaterialState::Solid, StateProperty::ThermalConductivity, "300,6.7;1900,27.0")
        .curve(MaterialState::Liquid, StateProperty::ThermalConductivity, "1928,29.0")
        .curve(MaterialState::Powder, StateProperty::ThermalConductivity, "300,0.2;1900,1.1")
        .curve(MaterialState::Solid, StateProperty::Emissivity, "0,0.3")
        .curve(MaterialState::Liquid, StateProperty::Emissivity, "0,0.4")
        .curve(MaterialState::Powder, StateProperty::Emissivity, "0,0.55")
        .curve(MaterialState::Solid, StateProperty::ElasticModulus, "0,1.14e11")
        .curve(MaterialState::Solid, StateProperty::PoissonRatio, "0,0.34");
    vec![steel, ti64]
}

/// Build a host engine over [`reference_sources`] tracking `n_units`
/// cells: alternating materials, every third cell seeded as powder.
pub fn reference_engine(n_units: usize, backend: Backend) -> PropertyEngine<Host> {
    let db = PropertyDatabase::<Host>::from_sources(CurveFormat::Table, &reference_sources())
        .expect("reference sources are well-formed");
    let mut engine = PropertyEngine::new(db, backend);
    engine.rebuild((0..n_units as u64).map(|i| {
        let material = MaterialId((i % 2) as u32);
        let tag = if i % 3 == 0 {
            MaterialState::Powder
        } else {
            MaterialState::Solid
        };
        (CellId(i), material, tag)
    }));
    engine
}

/// Deterministic temperature histories: `steps` fields of `n_units`
/// temperatures drawn from a seeded ChaCha8 RNG, spanning ambient
/// through fully molten.
pub fn temperature_sweep(n_units: usize, steps: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..steps)
        .map(|_| (0..n_units).map(|_| rng.random_range(300.0..2200.0)).collect())
        .collect()
}
