//! The report aggregator.
//!
//! Given an interval, the full inspection collection, and the catalog:
//! 1. keep inspections whose date falls inside the inclusive interval
//! 2. total quantity and `quantity * points` per activity name, with names
//!    missing from the catalog counting zero points
//! 3. order rows by activity name (see [`tally_core::collation`])
//! 4. sum the row totals
//!
//! Inputs are only borrowed; nothing here mutates or remembers them.

use std::collections::{HashMap, HashSet};

use tally_core::catalog::PointsLookup;
use tally_core::collation::collate;
use tally_core::entities::Inspection;
use tally_core::interval::{DateInterval, IntervalRequest};

use crate::error::ReportError;
use crate::result::{ReportResult, ReportRow};

#[derive(Default)]
struct Totals {
    quantity: u64,
    total_points: u64,
}

/// Resolve `request` and aggregate.
///
/// # Errors
///
/// Returns `ReportError::InvalidInterval` when a bound is missing or the
/// bounds are reversed. No rows are computed in that case.
pub fn generate<L>(
    request: &IntervalRequest,
    inspections: &[Inspection],
    catalog: &L,
) -> Result<ReportResult, ReportError>
where
    L: PointsLookup + ?Sized,
{
    let interval = request.resolve()?;
    Ok(aggregate(&interval, inspections, catalog))
}

/// Aggregate the inspections inside `interval`.
#[must_use]
pub fn aggregate<L>(interval: &DateInterval, inspections: &[Inspection], catalog: &L) -> ReportResult
where
    L: PointsLookup + ?Sized,
{
    let mut totals: HashMap<&str, Totals> = HashMap::new();
    let mut unknown: HashSet<&str> = HashSet::new();
    let mut matched = 0usize;

    for inspection in inspections
        .iter()
        .filter(|inspection| interval.contains(inspection.date))
    {
        matched += 1;
        for entry in &inspection.activities {
            let name = entry.activity_name.as_str();
            let points = catalog.lookup_points(name).unwrap_or_else(|| {
                if unknown.insert(name) {
                    tracing::warn!(
                        activity = name,
                        inspection = %inspection.id,
                        "activity not in catalog; counting zero points"
                    );
                }
                0
            });

            let quantity = u64::from(entry.quantity);
            let current = totals.entry(name).or_default();
            current.quantity += quantity;
            current.total_points += quantity * u64::from(points);
        }
    }

    let mut rows: Vec<ReportRow> = totals
        .into_iter()
        .map(|(name, totals)| ReportRow {
            activity_name: name.to_string(),
            quantity: totals.quantity,
            total_points: totals.total_points,
        })
        .collect();
    rows.sort_by(|a, b| collate(&a.activity_name, &b.activity_name));

    let grand_total_points = rows.iter().map(|row| row.total_points).sum();

    let mut unknown_activities: Vec<String> = unknown.into_iter().map(str::to_string).collect();
    unknown_activities.sort_by(|a, b| collate(a, b));

    tracing::debug!(
        start = %interval.start(),
        end = %interval.end(),
        inspections = matched,
        rows = rows.len(),
        grand_total_points,
        "report aggregated"
    );

    ReportResult {
        interval: *interval,
        rows,
        grand_total_points,
        unknown_activities,
    }
}
