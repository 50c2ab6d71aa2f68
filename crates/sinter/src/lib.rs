//! Sinter: a material state and property evaluation engine for
//! powder-bed fusion simulation.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all sinter sub-crates. For most users, adding `sinter` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sinter::prelude::*;
//!
//! // Describe a material: transition scalars plus per-phase property
//! // curves in the piecewise-linear table grammar.
//! let steel = MaterialSource::new(MaterialId(0))
//!     .scalar(ScalarProperty::Solidus, 1658.0)
//!     .scalar(ScalarProperty::Liquidus, 1723.0)
//!     .scalar(ScalarProperty::LatentHeat, 2.7e5)
//!     .curve(MaterialState::Solid, StateProperty::SpecificHeat, "300,470;1600,760")
//!     .curve(MaterialState::Liquid, StateProperty::SpecificHeat, "1723,820")
//!     .curve(MaterialState::Powder, StateProperty::SpecificHeat, "300,470;1600,760");
//!
//! // Build the database and an engine over host memory.
//! let db = PropertyDatabase::<Host>::from_sources(CurveFormat::Table, &[steel]).unwrap();
//! let mut engine = PropertyEngine::new(db, Backend::Sequential);
//!
//! // Track two cells: one starts as powder, one as solid.
//! engine.rebuild([
//!     (CellId(0), MaterialId(0), MaterialState::Powder),
//!     (CellId(1), MaterialId(0), MaterialState::Solid),
//! ]);
//!
//! // One update per thermal step: the powder cell is halfway through
//! // the mushy interval, the solid cell is untouched.
//! engine.update(&[1690.5, 400.0]);
//! let liquid = engine.state_ratio(CellId(0), MaterialState::Liquid).unwrap();
//! assert!((liquid - 0.5).abs() < 1e-12);
//! assert_eq!(engine.state_ratio(CellId(1), MaterialState::Solid), Some(1.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sinter-core` | IDs, phase and property taxonomies, errors, constants |
//! | [`block`] | `sinter-block` | Flattened nd-arrays, memory spaces, execution backends |
//! | [`props`] | `sinter-props` | Curve parsing, the property database, curve evaluation |
//! | [`state`] | `sinter-state` | Cell index, phase-fraction store, the update engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, taxonomies, and errors (`sinter-core`).
///
/// Typed identifiers ([`types::CellId`], [`types::MaterialId`]), the
/// phase taxonomy ([`types::MaterialState`]), the property taxonomies,
/// and [`types::ConfigError`].
pub use sinter_core as types;

/// Flattened nd-array storage and kernel dispatch (`sinter-block`).
///
/// [`block::Block`] owns contiguous f64 storage tagged with a
/// [`block::MemorySpace`]; [`block::exec`] maps elementwise kernels
/// over it sequentially or across threads.
pub use sinter_block as block;

/// Curve parsing and the property database (`sinter-props`).
///
/// [`props::MaterialSource`] carries raw configuration,
/// [`props::PropertyDatabase`] holds the normalized curve banks, and
/// [`props::table_value`] / [`props::polynomial_value`] evaluate them.
pub use sinter_props as props;

/// Per-unit state and the update engine (`sinter-state`).
///
/// [`state::PropertyEngine`] owns the database, the cell index, and
/// the phase-fraction store, and advances them from representative
/// temperatures.
pub use sinter_state as state;

/// Common imports for typical sinter usage.
///
/// ```rust
/// use sinter::prelude::*;
/// ```
pub mod prelude {
    // Core vocabulary
    pub use sinter_core::{
        CellId, ConfigError, MaterialId, MaterialState, ScalarProperty, StateProperty,
        STEFAN_BOLTZMANN,
    };

    // Storage and dispatch
    pub use sinter_block::{Backend, Block, Device, Host, MemorySpace};

    // Database
    pub use sinter_props::{CurveFormat, MaterialSource, PropertyDatabase};

    // Engine
    pub use sinter_state::{
        PropertyEngine, SpatialUnitIndex, StateStore, UnitSupport,
        MECHANICAL_ACTIVATION_THRESHOLD,
    };
}
