//! Core types for the sinter material state & property engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the sinter workspace:
//! typed identifiers, the phase taxonomy, the property taxonomies, the
//! configuration error type, and physical constants.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod error;
pub mod id;
pub mod property;
pub mod state;

pub use constants::STEFAN_BOLTZMANN;
pub use error::ConfigError;
pub use id::{CellId, MaterialId};
pub use property::{ScalarProperty, StateProperty};
pub use state::MaterialState;
