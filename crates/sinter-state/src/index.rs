//! Stable cell identity to linear storage offset mapping.

use indexmap::IndexMap;

use sinter_core::CellId;

/// Bijection between stable mesh-cell identities and dense linear
/// offsets into all per-unit arrays.
///
/// Rebuilt wholesale whenever the owning mesh redistributes its cells:
/// a rebuild assigns offsets in iteration order, invalidates every
/// previously-issued offset, and changes the unit count. The engine
/// does not migrate per-unit values across a rebuild; the external
/// mesh-adaptation collaborator pushes migrated state through
/// [`StateStore`](crate::StateStore) setters before the next update.
#[derive(Clone, Debug, Default)]
pub struct SpatialUnitIndex {
    offsets: IndexMap<CellId, usize>,
}

impl SpatialUnitIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole mapping with the given locally owned cells,
    /// assigning offsets 0..n in iteration order.
    ///
    /// # Panics
    ///
    /// Panics on a duplicate cell id — the mesh collaborator must hand
    /// over each owned cell exactly once.
    pub fn rebuild(&mut self, cells: impl IntoIterator<Item = CellId>) {
        self.offsets.clear();
        for (i, cell) in cells.into_iter().enumerate() {
            let previous = self.offsets.insert(cell, i);
            assert!(previous.is_none(), "duplicate cell id {cell} in rebuild");
        }
    }

    /// Linear offset of a cell, if locally owned.
    pub fn offset(&self, cell: CellId) -> Option<usize> {
        self.offsets.get(&cell).copied()
    }

    /// Number of locally owned units.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether no units are indexed.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterate over `(cell, offset)` pairs in offset order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, usize)> + '_ {
        self.offsets.iter().map(|(&cell, &offset)| (cell, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rebuild_assigns_dense_offsets_in_order() {
        let mut index = SpatialUnitIndex::new();
        index.rebuild([CellId(30), CellId(10), CellId(20)]);
        assert_eq!(index.offset(CellId(30)), Some(0));
        assert_eq!(index.offset(CellId(10)), Some(1));
        assert_eq!(index.offset(CellId(20)), Some(2));
        assert_eq!(index.offset(CellId(99)), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn rebuild_invalidates_previous_offsets() {
        let mut index = SpatialUnitIndex::new();
        index.rebuild([CellId(1), CellId(2)]);
        index.rebuild([CellId(2)]);
        assert_eq!(index.offset(CellId(1)), None);
        assert_eq!(index.offset(CellId(2)), Some(0));
        assert_eq!(index.len(), 1);
    }

    #[test]
    #[should_panic(expected = "duplicate cell id")]
    fn duplicate_cell_panics() {
        let mut index = SpatialUnitIndex::new();
        index.rebuild([CellId(5), CellId(5)]);
    }

    proptest! {
        #[test]
        fn offsets_are_a_bijection(ids in prop::collection::hash_set(0u64..1000, 0..64)) {
            let mut index = SpatialUnitIndex::new();
            index.rebuild(ids.iter().map(|&id| CellId(id)));

            let mut seen = vec![false; index.len()];
            for &id in &ids {
                let offset = index.offset(CellId(id)).expect("owned cell must resolve");
                prop_assert!(!seen[offset], "offset {offset} assigned twice");
                seen[offset] = true;
            }
            prop_assert!(seen.into_iter().all(|s| s));
        }
    }
}
