//! Packwise Domain Concerns

pub mod packs;
