//! Period summaries pairing per-entry lines with aggregate totals.

use crate::error::EngineResult;
use crate::models::{EntryFinancials, PeriodSummary, RateCard, TimeEntry};

use super::aggregate::aggregate;
use super::entry_financials::compute_entry;

/// Builds a full summary over a set of (entry, rate card) pairs.
///
/// The summary carries one [`EntryFinancials`] line per pair, in input
/// order, together with the [`aggregate`] totals over the same pairs. The
/// two always agree because they are derived from the same inputs in one
/// call.
///
/// # Errors
///
/// Fails with the first validation error any pair produces.
pub fn summarize(pairs: &[(TimeEntry, RateCard)]) -> EngineResult<PeriodSummary> {
    let mut lines = Vec::with_capacity(pairs.len());
    for (entry, rate) in pairs {
        let financials = compute_entry(entry, rate)?;
        lines.push(EntryFinancials {
            entry: entry.clone(),
            financials,
        });
    }

    Ok(PeriodSummary {
        totals: aggregate(pairs)?,
        lines,
    })
}
