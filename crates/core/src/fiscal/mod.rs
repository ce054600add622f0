//! Fiscal year records and resolution.
//!
//! - `types` - Fiscal year record and store filter
//! - `store` - Record source trait and in-memory implementation
//! - `cache` - Per-company candidate cache
//! - `resolver` - Date/name lookups with explicit not-found results

pub mod cache;
pub mod error;
pub mod resolver;
pub mod store;
pub mod types;

pub use cache::FiscalYearCache;
pub use error::{FiscalError, StoreError};
pub use resolver::{FiscalYearQuery, FiscalYearResolver};
pub use store::{FiscalYearStore, InMemoryFiscalYearStore};
pub use types::{FiscalYear, FiscalYearFilter};
