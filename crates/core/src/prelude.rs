//! Packwise prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    manifest::{Manifest, ManifestError},
    packing::{PackAllocation, Packing},
    packs::{PackSize, PackSizes, PackSizesError},
    solvers::{Solver, SolverError, dp::DynamicProgrammingSolver},
};
