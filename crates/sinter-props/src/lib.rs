//! Property database and curve evaluation.
//!
//! Raw per-material text specifications become normalized, fixed-capacity
//! curve banks (flattened [`sinter_block::Block`]s) that the update kernel
//! evaluates per phase at a representative temperature. Configuration
//! failures are fatal before the simulation starts; missing scalar
//! entries default to a sentinel that disables the dependent phase
//! transition instead of erroring.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod curve;
pub mod database;
pub mod eval;

pub use curve::{CurveFormat, ParsedCurve, POLYNOMIAL_ORDER, TABLE_CAPACITY};
pub use database::{MaterialSource, PropertyDatabase};
pub use eval::{polynomial_value, table_value};
