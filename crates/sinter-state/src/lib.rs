//! Material state tracking and the property update kernel.
//!
//! Each locally owned spatial unit carries three phase fractions
//! (solid, liquid, powder) and a row of blended thermal property
//! values. The [`PropertyEngine`] evolves the fractions from a
//! representative per-unit temperature, blends property curves across
//! phases, injects the latent-heat correction over the mushy interval,
//! and derives the linearized radiative coefficient — all through a
//! data-parallel elementwise kernel that runs unchanged on host- or
//! device-resident storage.
//!
//! Mesh/DoF management, finite-element assembly, and ghost-value
//! exchange are external collaborators: this crate receives an
//! already-consistent nodal temperature field (or pre-projected unit
//! averages) and hands back per-unit property and fraction arrays.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod index;
pub mod projection;
pub mod store;

pub use engine::{PropertyEngine, MECHANICAL_ACTIVATION_THRESHOLD};
pub use index::SpatialUnitIndex;
pub use projection::UnitSupport;
pub use store::StateStore;
