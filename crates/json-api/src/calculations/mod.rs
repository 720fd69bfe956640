//! Calculations

mod handlers;

pub(crate) use handlers::*;
