//! Result set model.
//!
//! A [`ResultSet`] is the output of one calculation run: every agent record,
//! ordered for display, plus the aggregate totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AgentRecord;

/// Aggregated totals across all records of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTotals {
    /// Number of agent records.
    pub record_count: usize,
    /// Sum of every record's total beans.
    pub total_beans: Decimal,
    /// Sum of every record's diamonds.
    pub total_diamonds: u64,
}

/// The records of one run, sorted by total beans descending, with totals.
///
/// # Example
///
/// ```
/// use bean_calculator::models::ResultSet;
/// use rust_decimal::Decimal;
///
/// let empty = ResultSet::from_records(vec![]);
/// assert_eq!(empty.totals.record_count, 0);
/// assert_eq!(empty.totals.total_beans, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Agent records, highest total first. Ties keep submission order.
    pub records: Vec<AgentRecord>,
    /// Aggregate totals.
    pub totals: ResultTotals,
}

impl ResultSet {
    /// Sorts the records and sums the totals.
    ///
    /// Sums saturate rather than overflow. Validated batches stay far below
    /// either limit.
    pub fn from_records(mut records: Vec<AgentRecord>) -> Self {
        records.sort_by(|a, b| b.total_beans.cmp(&a.total_beans));

        let totals = ResultTotals {
            record_count: records.len(),
            total_beans: records
                .iter()
                .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.total_beans)),
            total_diamonds: records
                .iter()
                .fold(0u64, |acc, r| acc.saturating_add(r.diamonds)),
        };

        Self { records, totals }
    }
}
