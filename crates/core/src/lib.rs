//! Packwise
//!
//! Packwise works out which whole packs to ship for an order: the fewest items that cover
//! the requested quantity, and of those, the fewest packs.

pub mod manifest;
pub mod packing;
pub mod packs;
pub mod prelude;
pub mod solvers;
