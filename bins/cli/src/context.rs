//! Wires configuration into the core services.

use std::path::Path;

use hrkit_core::dates::{Clock, FixedClock, SystemClock};
use hrkit_core::fiscal::{
    FiscalError, FiscalYear, FiscalYearCache, FiscalYearResolver, InMemoryFiscalYearStore,
};
use hrkit_core::period::PeriodService;
use hrkit_shared::{AppConfig, AppError, AppResult};
use tracing::{info, warn};

/// Period service over an in-memory store and a configurable clock.
pub type Service = PeriodService<InMemoryFiscalYearStore, Box<dyn Clock>>;

/// Shared state for command handlers.
pub struct Context {
    /// Period service (also exposes the fiscal year resolver).
    pub service: Service,
}

impl Context {
    /// Builds the store, cache and clock described by `config`.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let store = match &config.data.fiscal_years_path {
            Some(path) => load_store(path)?,
            None => {
                warn!("no fiscal year data configured; starting with an empty store");
                InMemoryFiscalYearStore::new()
            }
        };

        let cache = FiscalYearCache::with_config(
            config.fiscal_cache.max_capacity,
            config.fiscal_cache.ttl_secs,
        );

        let clock: Box<dyn Clock> = match config.clock.today {
            Some(today) => {
                info!(%today, "using pinned date");
                Box::new(FixedClock(today))
            }
            None => Box::new(SystemClock),
        };

        Ok(Self {
            service: PeriodService::new(FiscalYearResolver::with_cache(store, cache), clock),
        })
    }
}

/// Reads a JSON array of fiscal years into a validated store.
pub fn load_store(path: &Path) -> AppResult<InMemoryFiscalYearStore> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::Configuration(format!("cannot read {}: {e}", path.display()))
    })?;
    let records = parse_fiscal_years(&raw)
        .map_err(|e| AppError::Configuration(format!("invalid {}: {e}", path.display())))?;

    let count = records.len();
    let store = InMemoryFiscalYearStore::from_records(records).map_err(FiscalError::from)?;
    info!(path = %path.display(), count, "fiscal years loaded");
    Ok(store)
}

fn parse_fiscal_years(raw: &str) -> Result<Vec<FiscalYear>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_fiscal_years_defaults() {
        let years = parse_fiscal_years(
            r#"[{"name": "2024-2025", "year_start_date": "2024-04-01", "year_end_date": "2025-03-31"}]"#,
        )
        .unwrap();
        assert_eq!(years.len(), 1);
        assert!(!years[0].disabled);
        assert!(years[0].companies.is_empty());
        assert_eq!(
            years[0].year_start_date,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_load_store_missing_file_is_configuration_error() {
        let err = load_store(Path::new("definitely/not/here.json")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_context_uses_pinned_clock() {
        let mut config = AppConfig::default();
        config.clock.today = NaiveDate::from_ymd_opt(2024, 6, 30);
        let ctx = Context::from_config(&config).unwrap();
        assert!(ctx.service.resolver().store().is_empty());
    }
}
