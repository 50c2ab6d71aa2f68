//! Non-owning index-computing views over flattened blocks.

/// Read-only view computing row-major offsets from nd indices.
///
/// The index arity is checked against the block rank at the call site
/// via const generics, so `view.get([m, s, p, i, 0])` on a rank-4 block
/// fails fast instead of silently aliasing.
#[derive(Clone, Copy, Debug)]
pub struct BlockView<'a> {
    data: &'a [f64],
    extents: &'a [usize],
}

impl<'a> BlockView<'a> {
    pub(crate) fn new(data: &'a [f64], extents: &'a [usize]) -> Self {
        Self { data, extents }
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.extents.len()
    }

    /// Extent along dimension `dim`.
    pub fn extent(&self, dim: usize) -> usize {
        self.extents[dim]
    }

    /// Row-major linear offset of an nd index.
    ///
    /// # Panics
    ///
    /// Panics if the arity differs from the rank or any coordinate is
    /// out of range.
    pub fn offset<const N: usize>(&self, index: [usize; N]) -> usize {
        assert_eq!(
            N,
            self.extents.len(),
            "index arity {N} does not match block rank {}",
            self.extents.len()
        );
        let mut offset = 0;
        for (dim, (&i, &extent)) in index.iter().zip(self.extents).enumerate() {
            assert!(
                i < extent,
                "index {i} out of range for extent {extent} in dimension {dim}"
            );
            offset = offset * extent + i;
        }
        offset
    }

    /// Element at an nd index.
    pub fn get<const N: usize>(&self, index: [usize; N]) -> f64 {
        self.data[self.offset(index)]
    }
}

/// Mutable view computing row-major offsets from nd indices.
#[derive(Debug)]
pub struct BlockViewMut<'a> {
    data: &'a mut [f64],
    extents: &'a [usize],
}

impl<'a> BlockViewMut<'a> {
    pub(crate) fn new(data: &'a mut [f64], extents: &'a [usize]) -> Self {
        Self { data, extents }
    }

    /// Row-major linear offset of an nd index.
    pub fn offset<const N: usize>(&self, index: [usize; N]) -> usize {
        BlockView::new(self.data, self.extents).offset(index)
    }

    /// Element at an nd index.
    pub fn get<const N: usize>(&self, index: [usize; N]) -> f64 {
        self.data[self.offset(index)]
    }

    /// Write an element at an nd index.
    pub fn set<const N: usize>(&mut self, index: [usize; N], value: f64) {
        let offset = self.offset(index);
        self.data[offset] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::space::Host;
    use proptest::prelude::*;

    #[test]
    fn offsets_are_row_major() {
        let block = Block::<Host>::new(&[2, 3]);
        let view = block.view();
        assert_eq!(view.offset([0, 0]), 0);
        assert_eq!(view.offset([0, 2]), 2);
        assert_eq!(view.offset([1, 0]), 3);
        assert_eq!(view.offset([1, 2]), 5);
    }

    #[test]
    fn set_then_get_round_trip() {
        let mut block = Block::<Host>::new(&[2, 2, 2]);
        block.view_mut().set([1, 0, 1], 42.0);
        assert_eq!(block.view().get([1, 0, 1]), 42.0);
        assert_eq!(block.as_slice()[5], 42.0);
    }

    #[test]
    #[should_panic(expected = "does not match block rank")]
    fn wrong_arity_panics() {
        let block = Block::<Host>::new(&[2, 3]);
        block.view().get([1, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_coordinate_panics() {
        let block = Block::<Host>::new(&[2, 3]);
        block.view().get([0, 3]);
    }

    proptest! {
        #[test]
        fn offset_is_a_bijection(
            e0 in 1usize..5,
            e1 in 1usize..5,
            e2 in 1usize..5,
        ) {
            let block = Block::<Host>::new(&[e0, e1, e2]);
            let view = block.view();
            let mut seen = vec![false; block.len()];
            for i in 0..e0 {
                for j in 0..e1 {
                    for k in 0..e2 {
                        let off = view.offset([i, j, k]);
                        prop_assert!(!seen[off], "offset {off} hit twice");
                        seen[off] = true;
                    }
                }
            }
            prop_assert!(seen.into_iter().all(|s| s));
        }
    }
}
