//! Core business logic for hrkit.
//!
//! Pure HR helpers with no web or database dependencies. Persistence is
//! reached through traits such as [`fiscal::FiscalYearStore`] and the
//! current date through [`dates::Clock`].
//!
//! # Modules
//!
//! - `dates` - Calendar arithmetic, ranges and formatting
//! - `fiscal` - Fiscal year lookup with a per-company cache
//! - `period` - Report period lists (yearly to monthly buckets)
//! - `company` - Company abbreviation and hierarchy rules
//! - `permission` - Permission request validation
//! - `employee` - Employee contact helpers

pub mod company;
pub mod dates;
pub mod employee;
pub mod fiscal;
pub mod period;
pub mod permission;
