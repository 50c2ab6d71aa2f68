//! Flattened multi-dimensional storage and elementwise execution.
//!
//! Per-material and per-unit data is stored as contiguous row-major
//! blocks with thin index-computing views, so the same kernel code runs
//! unmodified whether a block lives in ordinary host memory or in a
//! discrete accelerator space.
//!
//! # Architecture
//!
//! ```text
//! Block<M: MemorySpace>      owned, resizable, zero-initialised storage
//! ├── BlockView / ViewMut    (i, j, ...) -> offset, non-owning
//! ├── deep_copy              explicit synchronous cross-space copy
//! └── exec::for_each*        elementwise map over units, per backend
//! ```
//!
//! # Memory-space discipline
//!
//! Host code must never dereference individual elements of a
//! `Block<Device>`. The two sanctioned paths are [`deep_copy`] into a
//! host block (used by inspection and coupling queries) and kernel
//! views inside [`exec`] dispatch. [`MemorySpace::element`] encapsulates
//! the single-element inspection path, performing the full blocking
//! copy for device blocks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod exec;
pub mod space;
pub mod view;

pub use block::{deep_copy, Block};
pub use exec::Backend;
pub use space::{Device, Host, MemorySpace};
pub use view::{BlockView, BlockViewMut};
