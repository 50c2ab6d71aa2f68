//! A miniature melt track: heat a strip of powder cells, watch them
//! melt, then cool and consolidate.
//!
//! ```text
//! cargo run -p sinter-bench --example melt_track
//! ```

use sinter_block::{Backend, Host};
use sinter_core::{CellId, MaterialId, MaterialState, StateProperty};
use sinter_props::{CurveFormat, PropertyDatabase};
use sinter_state::PropertyEngine;

use sinter_bench::reference_sources;

fn main() {
    let n_units = 16u64;
    let db = PropertyDatabase::<Host>::from_sources(CurveFormat::Table, &reference_sources())
        .expect("reference sources are well-formed");
    let mut engine = PropertyEngine::new(db, Backend::Sequential);
    engine.rebuild((0..n_units).map(|i| (CellId(i), MaterialId(0), MaterialState::Powder)));

    // A Gaussian-ish heat pulse sweeping along the strip, then cooldown.
    for step in 0..24 {
        let center = step as f64;
        let temps: Vec<f64> = (0..n_units)
            .map(|i| {
                let d = i as f64 - center;
                300.0 + 1600.0 * (-d * d / 4.0).exp()
            })
            .collect();
        engine.update(&temps);

        let line: String = (0..n_units)
            .map(|i| {
                let liquid = engine
                    .state_ratio(CellId(i), MaterialState::Liquid)
                    .unwrap();
                let powder = engine
                    .state_ratio(CellId(i), MaterialState::Powder)
                    .unwrap();
                if liquid > 0.5 {
                    '#'
                } else if powder > 0.5 {
                    '.'
                } else {
                    'o'
                }
            })
            .collect();
        println!("step {step:2}  [{line}]  (. powder, # melt, o consolidated)");
    }

    let consolidated = engine
        .property_value(CellId(8), StateProperty::Density)
        .unwrap();
    println!("\ncell 8 density after the pass: {consolidated:.0} kg/m^3");
}
