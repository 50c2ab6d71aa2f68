//! Configuration error type.
//!
//! All failures here are fatal at setup time: the simulation must not
//! proceed with a partially-loaded property database. Runtime invariant
//! violations (fractions out of range, powder creation) are programming
//! errors and assert instead.

use std::error::Error;
use std::fmt;

use crate::id::MaterialId;

/// Errors raised while building the property database from raw
/// per-material specifications.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A table spec has more breakpoint/value pairs than the fixed
    /// table capacity.
    TableTooLong {
        /// Material whose spec overflowed.
        material: MaterialId,
        /// Number of pairs in the spec.
        entries: usize,
        /// Fixed capacity.
        capacity: usize,
    },
    /// A polynomial spec has more coefficients than the fixed degree
    /// bound allows.
    PolynomialTooLong {
        /// Material whose spec overflowed.
        material: MaterialId,
        /// Number of coefficients in the spec.
        entries: usize,
        /// Maximum number of coefficients (degree bound + 1).
        capacity: usize,
    },
    /// A table entry was not a `breakpoint,value` pair.
    MalformedPair {
        /// Material whose spec failed to parse.
        material: MaterialId,
        /// The offending entry text.
        entry: String,
    },
    /// A token could not be parsed as a floating-point number.
    InvalidNumber {
        /// Material whose spec failed to parse.
        material: MaterialId,
        /// The offending token text.
        token: String,
    },
    /// A curve spec was empty after whitespace stripping.
    EmptyCurve {
        /// Material whose spec was empty.
        material: MaterialId,
    },
    /// The same material id appeared twice in the configuration.
    DuplicateMaterial {
        /// The repeated id.
        material: MaterialId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TableTooLong {
                material,
                entries,
                capacity,
            } => write!(
                f,
                "material {material}: table spec has {entries} pairs, capacity is {capacity}"
            ),
            Self::PolynomialTooLong {
                material,
                entries,
                capacity,
            } => write!(
                f,
                "material {material}: polynomial spec has {entries} coefficients, \
                 capacity is {capacity}"
            ),
            Self::MalformedPair { material, entry } => write!(
                f,
                "material {material}: table entry '{entry}' is not a breakpoint,value pair"
            ),
            Self::InvalidNumber { material, token } => {
                write!(f, "material {material}: '{token}' is not a number")
            }
            Self::EmptyCurve { material } => {
                write!(f, "material {material}: empty curve spec")
            }
            Self::DuplicateMaterial { material } => {
                write!(f, "material {material} defined more than once")
            }
        }
    }
}

impl Error for ConfigError {}
