//! Fiscal year resolution.
//!
//! Candidates for a company are loaded once from the store and kept in
//! a [`FiscalYearCache`]. Lookups scan candidates newest-start first and
//! take the first hit, so when fiscal years overlap the most recently
//! started one wins.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::cache::FiscalYearCache;
use super::error::FiscalError;
use super::store::FiscalYearStore;
use super::types::{FiscalYear, FiscalYearFilter};

/// What to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalYearQuery {
    /// Date the fiscal year must contain.
    pub date: Option<NaiveDate>,
    /// Exact fiscal year name.
    pub name: Option<String>,
    /// Restricts candidates to years unscoped or associated with this company.
    pub company: Option<String>,
    /// Announce misses with a warning before returning the error.
    pub verbose: bool,
}

impl Default for FiscalYearQuery {
    fn default() -> Self {
        Self {
            date: None,
            name: None,
            company: None,
            verbose: true,
        }
    }
}

impl FiscalYearQuery {
    /// Every candidate, unfiltered.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// The fiscal year containing `date`.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// The fiscal year called `name`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Restricts the lookup to one company.
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Restricts the lookup to `company` when present.
    #[must_use]
    pub fn maybe_company(mut self, company: Option<&str>) -> Self {
        self.company = company.map(str::to_owned);
        self
    }

    /// Suppresses the warning on a miss.
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.verbose = false;
        self
    }

    fn is_unfiltered(&self) -> bool {
        self.date.is_none() && self.name.is_none()
    }

    fn not_found(&self) -> FiscalError {
        FiscalError::NotFound {
            date: self.date,
            name: self.name.clone(),
            company: self.company.clone(),
        }
    }
}

/// Resolves fiscal years against a store through a per-company cache.
#[derive(Debug)]
pub struct FiscalYearResolver<S> {
    store: S,
    cache: FiscalYearCache,
}

impl<S: FiscalYearStore> FiscalYearResolver<S> {
    /// Creates a resolver with a fresh default cache.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_cache(store, FiscalYearCache::new())
    }

    /// Creates a resolver sharing an existing cache.
    #[must_use]
    pub fn with_cache(store: S, cache: FiscalYearCache) -> Self {
        Self { store, cache }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The candidate cache.
    pub fn cache(&self) -> &FiscalYearCache {
        &self.cache
    }

    /// Forgets the cached candidates for `company` so the next lookup
    /// reloads them from the store.
    pub fn invalidate(&self, company: Option<&str>) {
        self.cache.invalidate(company);
    }

    /// Enabled fiscal years for `company`, newest start date first.
    pub fn candidates(&self, company: Option<&str>) -> Result<Arc<Vec<FiscalYear>>, FiscalError> {
        if let Some(cached) = self.cache.get(company) {
            debug!(company = company.unwrap_or("*"), "fiscal year cache hit");
            return Ok(cached);
        }

        let years = Arc::new(
            self.store
                .query(&FiscalYearFilter::active().for_company(company))?,
        );
        debug!(
            company = company.unwrap_or("*"),
            count = years.len(),
            "fiscal year cache miss, loaded from store"
        );
        self.cache.insert(company, Arc::clone(&years));
        Ok(years)
    }

    /// Every candidate for an unfiltered query, otherwise the single match.
    ///
    /// # Errors
    ///
    /// [`FiscalError::NotFound`] when a date or name was given and nothing
    /// matches; store failures are passed through.
    pub fn lookup(&self, query: &FiscalYearQuery) -> Result<Vec<FiscalYear>, FiscalError> {
        if query.is_unfiltered() {
            return Ok(self.candidates(query.company.as_deref())?.to_vec());
        }
        self.resolve(query).map(|year| vec![year])
    }

    /// The first matching fiscal year.
    ///
    /// For an unfiltered query this is the most recently started candidate.
    ///
    /// # Errors
    ///
    /// [`FiscalError::NotFound`] when nothing matches.
    pub fn resolve(&self, query: &FiscalYearQuery) -> Result<FiscalYear, FiscalError> {
        match self.find(query)? {
            Some(year) => Ok(year),
            None => {
                if query.verbose {
                    warn!(
                        date = ?query.date,
                        name = query.name.as_deref(),
                        company = query.company.as_deref(),
                        "no active fiscal year matched"
                    );
                }
                Err(query.not_found())
            }
        }
    }

    /// Boolean check: true when a fiscal year matches.
    ///
    /// A miss is `Ok(false)` and is never announced; store failures are
    /// still errors.
    pub fn exists(&self, query: &FiscalYearQuery) -> Result<bool, FiscalError> {
        Ok(self.find(query)?.is_some())
    }

    /// Combined bounds of every fiscal year whose name sorts between
    /// `from_name` and `to_name` inclusive: the earliest start and the
    /// latest end.
    ///
    /// Disabled flags and company scoping are ignored, and the cache is
    /// bypassed. Returns `None` when no name falls in the range.
    pub fn span_bounds(
        &self,
        from_name: &str,
        to_name: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate)>, FiscalError> {
        let years = self.store.query(&FiscalYearFilter::everything())?;
        let bounds = years
            .iter()
            .filter(|y| y.name.as_str() >= from_name && y.name.as_str() <= to_name)
            .fold(None, |acc: Option<(NaiveDate, NaiveDate)>, y| {
                Some(match acc {
                    None => (y.year_start_date, y.year_end_date),
                    Some((start, end)) => (start.min(y.year_start_date), end.max(y.year_end_date)),
                })
            });
        Ok(bounds)
    }

    fn find(&self, query: &FiscalYearQuery) -> Result<Option<FiscalYear>, FiscalError> {
        let candidates = self.candidates(query.company.as_deref())?;
        let by_name = |y: &&FiscalYear| query.name.as_deref().is_none_or(|n| y.name == n);

        let hit = candidates.iter().filter(by_name).find(|y| {
            query.is_unfiltered()
                || query.name.as_deref() == Some(y.name.as_str())
                || query.date.is_some_and(|d| y.contains_date(d))
        });
        Ok(hit.cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiscal::store::InMemoryFiscalYearStore;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn store() -> Arc<InMemoryFiscalYearStore> {
        Arc::new(
            InMemoryFiscalYearStore::from_records([
                FiscalYear::new("2023-2024", d(2023, 4, 1), d(2024, 3, 31)),
                FiscalYear::new("2024-2025", d(2024, 4, 1), d(2025, 3, 31)),
                FiscalYear::new("Acme 2024", d(2024, 1, 1), d(2024, 12, 31)).with_company("Acme"),
                FiscalYear::new("2022-2023", d(2022, 4, 1), d(2023, 3, 31)).with_disabled(true),
            ])
            .unwrap(),
        )
    }

    fn resolver() -> FiscalYearResolver<Arc<InMemoryFiscalYearStore>> {
        FiscalYearResolver::new(store())
    }

    #[test]
    fn test_resolve_by_date() {
        let year = resolver().resolve(&FiscalYearQuery::for_date(d(2024, 6, 15))).unwrap();
        assert_eq!(year.name, "2024-2025");
    }

    #[test]
    fn test_resolve_by_name() {
        let year = resolver().resolve(&FiscalYearQuery::named("2023-2024")).unwrap();
        assert_eq!(year.year_start_date, d(2023, 4, 1));
    }

    #[test]
    fn test_overlap_prefers_latest_start() {
        // "2024-2025" (Apr 1) and "Acme 2024" (Jan 1) both contain June 15.
        let year = resolver()
            .resolve(&FiscalYearQuery::for_date(d(2024, 6, 15)).company("Acme"))
            .unwrap();
        assert_eq!(year.name, "2024-2025");

        // "Acme 2024" and "2023-2024" both contain February; Acme started later.
        let year = resolver()
            .resolve(&FiscalYearQuery::for_date(d(2024, 2, 1)).company("Acme"))
            .unwrap();
        assert_eq!(year.name, "Acme 2024");
    }

    #[test]
    fn test_company_scoped_year_hidden_from_other_companies() {
        let result = resolver().resolve(&FiscalYearQuery::named("Acme 2024").company("Globex"));
        assert!(matches!(result, Err(FiscalError::NotFound { .. })));
    }

    #[test]
    fn test_disabled_year_never_matches() {
        let result = resolver().resolve(&FiscalYearQuery::for_date(d(2022, 6, 1)).silent());
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_not_found_carries_date_and_company() {
        let err = resolver()
            .resolve(&FiscalYearQuery::for_date(d(2030, 1, 1)).company("Acme"))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("2030-01-01"));
        assert!(message.contains("Acme"));
    }

    #[test]
    fn test_exists_degrades_to_false() {
        let resolver = resolver();
        assert!(resolver.exists(&FiscalYearQuery::for_date(d(2024, 6, 15))).unwrap());
        assert!(!resolver.exists(&FiscalYearQuery::for_date(d(2030, 1, 1))).unwrap());
    }

    #[test]
    fn test_lookup_unfiltered_returns_all_candidates() {
        let years = resolver().lookup(&FiscalYearQuery::all()).unwrap();
        let names: Vec<_> = years.iter().map(|y| y.name.as_str()).collect();
        assert_eq!(names, vec!["2024-2025", "Acme 2024", "2023-2024"]);

        let years = resolver().lookup(&FiscalYearQuery::all().company("Globex")).unwrap();
        let names: Vec<_> = years.iter().map(|y| y.name.as_str()).collect();
        assert_eq!(names, vec!["2024-2025", "2023-2024"]);
    }

    #[test]
    fn test_lookup_filtered_returns_single_match() {
        let years = resolver().lookup(&FiscalYearQuery::for_date(d(2023, 5, 1))).unwrap();
        assert_eq!(years.len(), 1);
        assert_eq!(years[0].name, "2023-2024");
    }

    #[test]
    fn test_empty_store_is_not_found() {
        let resolver = FiscalYearResolver::new(InMemoryFiscalYearStore::new());
        assert!(resolver.lookup(&FiscalYearQuery::all()).unwrap().is_empty());
        assert!(!resolver.exists(&FiscalYearQuery::for_date(d(2024, 1, 1))).unwrap());
        assert!(resolver.resolve(&FiscalYearQuery::all()).is_err());
    }

    #[test]
    fn test_cache_serves_stale_until_invalidated() {
        let store = store();
        let resolver = FiscalYearResolver::new(Arc::clone(&store));
        let query = FiscalYearQuery::for_date(d(2025, 6, 1)).silent();

        assert!(!resolver.exists(&query).unwrap());

        store
            .insert(FiscalYear::new("2025-2026", d(2025, 4, 1), d(2026, 3, 31)))
            .unwrap();
        assert!(!resolver.exists(&query).unwrap(), "cached snapshot is reused");

        resolver.invalidate(None);
        resolver.cache().run_pending_tasks();
        assert!(resolver.exists(&query).unwrap());
    }

    #[test]
    fn test_span_bounds_between_names() {
        let resolver = resolver();
        let bounds = resolver.span_bounds("2022-2023", "2024-2025").unwrap();
        assert_eq!(bounds, Some((d(2022, 4, 1), d(2025, 3, 31))));

        let bounds = resolver.span_bounds("2023-2024", "2023-2024").unwrap();
        assert_eq!(bounds, Some((d(2023, 4, 1), d(2024, 3, 31))));

        assert_eq!(resolver.span_bounds("1990", "1999").unwrap(), None);
        assert_eq!(resolver.span_bounds("2024-2025", "2023-2024").unwrap(), None);
    }
}
