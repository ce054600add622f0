//! Period bucketing for report columns.
//!
//! A span (explicit dates, or the combined range of named fiscal years)
//! is cut into yearly, half-yearly, quarterly or monthly buckets, each
//! keyed and labelled. The span never extends past today.

pub mod error;
pub mod label;
pub mod service;
pub mod types;
pub mod walker;

#[cfg(test)]
mod props;

pub use error::PeriodError;
pub use label::{period_key, period_label, range_label};
pub use service::PeriodService;
pub use types::{
    FilterBasedOn, ParsePeriodicityError, Period, PeriodBounds, PeriodListRequest, Periodicity,
};
pub use walker::PeriodWalker;
