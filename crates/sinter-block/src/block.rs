//! The owned flattened nd-array type.

use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::space::{Host, MemorySpace};
use crate::view::{BlockView, BlockViewMut};

/// Maximum block rank. Curve banks use 5 dimensions
/// (material, phase, property, breakpoint, pair).
pub const MAX_RANK: usize = 5;

/// An owned, resizable, row-major flattened multi-dimensional array.
///
/// Storage is a single contiguous `Vec<f64>`; the extents describe the
/// logical shape and views compute `(i, j, ...) -> offset`. Ownership is
/// single: the store or database that allocates a block owns it, and
/// views are non-owning references used only inside a bounded scope.
///
/// The `M` parameter tags the address space. Direct element and slice
/// access exists only for `Block<Host>`; kernels use [`kernel_view`]
/// and [`kernel_slice_mut`] through [`exec`](crate::exec) dispatch, and
/// cross-space transfers go through [`deep_copy`].
///
/// [`kernel_view`]: Block::kernel_view
/// [`kernel_slice_mut`]: Block::kernel_slice_mut
#[derive(Clone, Debug, PartialEq)]
pub struct Block<M: MemorySpace = Host> {
    data: Vec<f64>,
    extents: SmallVec<[usize; MAX_RANK]>,
    _space: PhantomData<M>,
}

impl<M: MemorySpace> Block<M> {
    /// Create a zero-initialised block with the given extents.
    ///
    /// # Panics
    ///
    /// Panics if the rank exceeds [`MAX_RANK`].
    pub fn new(extents: &[usize]) -> Self {
        let mut block = Self::empty();
        block.reinit(extents);
        block
    }

    /// Create an empty rank-0 block. Use [`reinit`](Block::reinit) or
    /// [`deep_copy`] to give it a shape.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            extents: SmallVec::new(),
            _space: PhantomData,
        }
    }

    /// Resize to the given extents, discarding old contents and
    /// zero-initialising the new storage.
    pub fn reinit(&mut self, extents: &[usize]) {
        assert!(
            extents.len() <= MAX_RANK,
            "block rank {} exceeds maximum {MAX_RANK}",
            extents.len()
        );
        let len = extents.iter().product();
        self.extents = SmallVec::from_slice(extents);
        self.data.clear();
        self.data.resize(len, 0.0);
    }

    /// Set every element to zero, keeping the shape.
    pub fn set_zero(&mut self) {
        self.data.fill(0.0);
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.extents.len()
    }

    /// Extent along dimension `dim`.
    pub fn extent(&self, dim: usize) -> usize {
        self.extents[dim]
    }

    /// All extents.
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the block holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view for use inside an elementwise kernel dispatched
    /// to this block's memory space.
    ///
    /// Host code must not use this to inspect device-resident elements;
    /// route inspection through [`MemorySpace::element`] or [`deep_copy`].
    pub fn kernel_view(&self) -> BlockView<'_> {
        BlockView::new(&self.data, &self.extents)
    }

    /// Flat mutable storage for row-chunked kernel dispatch.
    ///
    /// Same discipline as [`kernel_view`](Block::kernel_view): only the
    /// [`exec`](crate::exec) entry points may hand pieces of this slice
    /// to kernel code.
    pub fn kernel_slice_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Flat read-only storage for kernel dispatch.
    pub fn kernel_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Block<Host> {
    /// Read-only index-computing view.
    pub fn view(&self) -> BlockView<'_> {
        BlockView::new(&self.data, &self.extents)
    }

    /// Mutable index-computing view.
    pub fn view_mut(&mut self) -> BlockViewMut<'_> {
        BlockViewMut::new(&mut self.data, &self.extents)
    }

    /// The underlying storage as a flat slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The underlying storage as a flat mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl<M: MemorySpace> Default for Block<M> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Copy `src` into `dst`, reshaping `dst` to match.
///
/// The copy is explicit, synchronous, and layout-exact: extents and
/// element order are preserved bit-for-bit regardless of the source and
/// destination spaces. This is the only cross-space transfer path.
pub fn deep_copy<Dst: MemorySpace, Src: MemorySpace>(dst: &mut Block<Dst>, src: &Block<Src>) {
    dst.extents = src.extents.clone();
    dst.data.clear();
    dst.data.extend_from_slice(&src.data);
}
