//! Calculation Handlers

pub(crate) mod create;
