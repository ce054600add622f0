//! Command implementations.

pub mod fiscal_year;
pub mod periods;
