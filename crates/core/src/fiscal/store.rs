//! Fiscal year record source.

use std::sync::{Arc, RwLock};

use super::error::StoreError;
use super::types::{FiscalYear, FiscalYearFilter};

/// Date-ordered fiscal year query.
///
/// Implementations return matching records ordered by
/// `year_start_date`, newest first.
pub trait FiscalYearStore: Send + Sync {
    /// Returns every record satisfying `filter`, newest start date first.
    fn query(&self, filter: &FiscalYearFilter) -> Result<Vec<FiscalYear>, StoreError>;
}

impl<S: FiscalYearStore + ?Sized> FiscalYearStore for Arc<S> {
    fn query(&self, filter: &FiscalYearFilter) -> Result<Vec<FiscalYear>, StoreError> {
        (**self).query(filter)
    }
}

/// Process-local store backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryFiscalYearStore {
    records: RwLock<Vec<FiscalYear>>,
}

impl InMemoryFiscalYearStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records`.
    ///
    /// # Errors
    ///
    /// Rejects records that end before they start or repeat a name.
    pub fn from_records(records: impl IntoIterator<Item = FiscalYear>) -> Result<Self, StoreError> {
        let store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Adds a record.
    ///
    /// # Errors
    ///
    /// Rejects records that end before they start or repeat a name.
    pub fn insert(&self, record: FiscalYear) -> Result<(), StoreError> {
        record.validate().map_err(|e| StoreError::InvalidRecord {
            name: record.name.clone(),
            reason: e.to_string(),
        })?;

        let mut records = self.write()?;
        if records.iter().any(|r| r.name == record.name) {
            return Err(StoreError::InvalidRecord {
                name: record.name,
                reason: "name already exists".to_string(),
            });
        }
        records.push(record);
        Ok(())
    }

    /// Sets the disabled flag of a named record. Returns false if no
    /// record has that name.
    pub fn set_disabled(&self, name: &str, disabled: bool) -> Result<bool, StoreError> {
        let mut records = self.write()?;
        let Some(record) = records.iter_mut().find(|r| r.name == name) else {
            return Ok(false);
        };
        record.disabled = disabled;
        Ok(true)
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().map_or(0, |r| r.len())
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<FiscalYear>>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::Unavailable("fiscal year store lock poisoned".to_string()))
    }
}

impl FiscalYearStore for InMemoryFiscalYearStore {
    fn query(&self, filter: &FiscalYearFilter) -> Result<Vec<FiscalYear>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Unavailable("fiscal year store lock poisoned".to_string()))?;

        let mut matching: Vec<FiscalYear> =
            records.iter().filter(|r| filter.matches(r)).cloned().collect();
        matching.sort_by(|a, b| b.year_start_date.cmp(&a.year_start_date));
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn store() -> InMemoryFiscalYearStore {
        InMemoryFiscalYearStore::from_records([
            FiscalYear::new("2023", d(2023, 1, 1), d(2023, 12, 31)),
            FiscalYear::new("2025", d(2025, 1, 1), d(2025, 12, 31)).with_company("Acme"),
            FiscalYear::new("2024", d(2024, 1, 1), d(2024, 12, 31)),
        ])
        .unwrap()
    }

    #[test]
    fn test_query_orders_newest_first() {
        let names: Vec<_> = store()
            .query(&FiscalYearFilter::active())
            .unwrap()
            .into_iter()
            .map(|y| y.name)
            .collect();
        assert_eq!(names, vec!["2025", "2024", "2023"]);
    }

    #[test]
    fn test_query_by_company() {
        let store = store();
        let globex = store
            .query(&FiscalYearFilter::active().for_company(Some("Globex")))
            .unwrap();
        assert_eq!(globex.len(), 2);
        let acme = store
            .query(&FiscalYearFilter::active().for_company(Some("Acme")))
            .unwrap();
        assert_eq!(acme.len(), 3);
    }

    #[test]
    fn test_disabled_hidden_from_active_filter() {
        let store = store();
        assert!(store.set_disabled("2024", true).unwrap());
        assert!(!store.set_disabled("1999", true).unwrap());
        assert_eq!(store.query(&FiscalYearFilter::active()).unwrap().len(), 2);
        assert_eq!(store.query(&FiscalYearFilter::everything()).unwrap().len(), 3);
    }

    #[test]
    fn test_insert_rejects_duplicates_and_inverted_years() {
        let store = store();
        assert!(matches!(
            store.insert(FiscalYear::new("2024", d(2026, 1, 1), d(2026, 12, 31))),
            Err(StoreError::InvalidRecord { .. })
        ));
        assert!(matches!(
            store.insert(FiscalYear::new("bad", d(2026, 12, 31), d(2026, 1, 1))),
            Err(StoreError::InvalidRecord { .. })
        ));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryFiscalYearStore::new();
        assert!(store.is_empty());
        assert!(store.query(&FiscalYearFilter::active()).unwrap().is_empty());
    }
}
