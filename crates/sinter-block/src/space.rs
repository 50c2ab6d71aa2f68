//! Memory-space markers.
//!
//! A [`MemorySpace`] tags a [`Block`](crate::Block) with the address
//! space its storage lives in. [`Host`] blocks allow direct element
//! access; [`Device`] blocks model a discrete accelerator space and
//! only permit whole-block copies and kernel-view access.

use crate::block::{deep_copy, Block};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Host {}
    impl Sealed for super::Device {}
}

/// Address space a block's storage belongs to.
///
/// Sealed: the two spaces are [`Host`] and [`Device`].
pub trait MemorySpace: sealed::Sealed + Send + Sync + 'static {
    /// Space name for diagnostics.
    const NAME: &'static str;

    /// Read one element of a block resident in this space from host code.
    ///
    /// For [`Host`] this is a direct indexed read. For [`Device`] it
    /// performs a full synchronous deep copy back to host memory and
    /// indexes the copy, so it must never be called from a hot loop.
    fn element<const N: usize>(block: &Block<Self>, index: [usize; N]) -> f64
    where
        Self: Sized;
}

/// Ordinary host memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Host;

/// Discrete accelerator memory.
///
/// Blocks in this space expose no host-side element access; kernels
/// reach them through [`exec`](crate::exec) dispatch, and inspection
/// paths copy the whole block to host first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Device;

impl MemorySpace for Host {
    const NAME: &'static str = "host";

    fn element<const N: usize>(block: &Block<Self>, index: [usize; N]) -> f64 {
        block.view().get(index)
    }
}

impl MemorySpace for Device {
    const NAME: &'static str = "device";

    fn element<const N: usize>(block: &Block<Self>, index: [usize; N]) -> f64 {
        let mut host = Block::<Host>::empty();
        deep_copy(&mut host, block);
        host.view().get(index)
    }
}
