//! Fiscal year command implementation

use chrono::NaiveDate;
use hrkit_core::fiscal::FiscalYearQuery;
use hrkit_shared::{AppError, AppResult};
use serde_json::{Value, json};

use crate::context::Context;

fn build_query(
    date: Option<NaiveDate>,
    name: Option<String>,
    company: Option<String>,
) -> FiscalYearQuery {
    FiscalYearQuery {
        date,
        name,
        company,
        ..FiscalYearQuery::default()
    }
}

/// Run the fiscal-year command
///
/// With `check`, prints `{"exists": bool}` and never fails on a miss.
/// Without filters, prints every candidate; otherwise the single match.
pub fn run(
    ctx: &Context,
    date: Option<NaiveDate>,
    name: Option<String>,
    company: Option<String>,
    check: bool,
) -> AppResult<Value> {
    let resolver = ctx.service.resolver();
    let unfiltered = date.is_none() && name.is_none();
    let query = build_query(date, name, company);

    if check {
        return Ok(json!({ "exists": resolver.exists(&query)? }));
    }

    let to_json = |v: serde_json::Result<Value>| v.map_err(|e| AppError::Internal(e.to_string()));
    if unfiltered {
        to_json(serde_json::to_value(resolver.lookup(&query)?))
    } else {
        to_json(serde_json::to_value(resolver.resolve(&query)?))
    }
}
