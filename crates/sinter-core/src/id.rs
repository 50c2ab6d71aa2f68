//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a material registered in the property database.
///
/// Material ids come from the mesh (each cell carries the id of the
/// material occupying it). Ids need not be contiguous, but storage is
/// allocated densely up to the largest id, so they should be kept small.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MaterialId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Stable identity of a mesh cell (spatial unit).
///
/// Assigned by the external mesh collaborator and stable across an
/// index rebuild: the same physical cell keeps the same `CellId` even
/// when its linear storage offset changes. Linear offsets themselves
/// are plain `usize` and are only valid until the next rebuild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u64);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CellId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
