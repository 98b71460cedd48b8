//! Summary metrics shown above the results table.

use serde::{Deserialize, Serialize};

use crate::models::{AgentRecord, ResultSet};

use super::format::format_amount;

/// One agent's diamond breakdown line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// The agent's name.
    pub name: String,
    /// Diamonds the agent receives.
    pub diamonds: u64,
    /// The rendered pack breakdown, e.g. `"5 x 275 + 13 x 2"`.
    pub breakdown: String,
}

/// One agent's amounts, formatted for the results table and the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// The agent's name.
    pub name: String,
    /// Beans earned.
    pub beans_earned: String,
    /// Salary in USD.
    pub salary_usd: String,
    /// Salary converted to beans.
    pub salary_in_beans: String,
    /// Commission in beans.
    pub commission: String,
    /// Salary in beans plus commission.
    pub total_beans: String,
    /// Diamonds received.
    pub diamonds: String,
    /// The rendered pack breakdown.
    pub breakdown: String,
}

impl DisplayRow {
    /// Formats a calculated record with [`format_amount`].
    pub fn from_record(record: &AgentRecord) -> Self {
        Self {
            name: record.name.clone(),
            beans_earned: format_amount(record.beans_earned),
            salary_usd: format_amount(record.salary_usd),
            salary_in_beans: format_amount(record.salary_in_beans),
            commission: format_amount(record.commission),
            total_beans: format_amount(record.total_beans),
            diamonds: record.diamonds.to_string(),
            breakdown: record.breakdown.to_string(),
        }
    }

    /// Returns the cells in column order, optionally ending with the breakdown.
    pub fn cells(&self, include_breakdown: bool) -> Vec<String> {
        let mut cells = vec![
            self.name.clone(),
            self.beans_earned.clone(),
            self.salary_usd.clone(),
            self.salary_in_beans.clone(),
            self.commission.clone(),
            self.total_beans.clone(),
            self.diamonds.clone(),
        ];
        if include_breakdown {
            cells.push(self.breakdown.clone());
        }
        cells
    }
}

/// Display-ready totals for a result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Number of agents calculated.
    pub record_count: usize,
    /// Total beans across all agents, formatted for display.
    pub total_beans: String,
    /// Total diamonds across all agents.
    pub total_diamonds: u64,
    /// Per-agent breakdown lines, in result order.
    pub breakdowns: Vec<BreakdownLine>,
    /// Formatted table rows, in result order.
    pub rows: Vec<DisplayRow>,
}

impl SummaryMetrics {
    /// Builds the summary for a result set.
    pub fn from_result_set(result: &ResultSet) -> Self {
        Self {
            record_count: result.totals.record_count,
            total_beans: format_amount(result.totals.total_beans),
            total_diamonds: result.totals.total_diamonds,
            breakdowns: result
                .records
                .iter()
                .map(|r| BreakdownLine {
                    name: r.name.clone(),
                    diamonds: r.diamonds,
                    breakdown: r.breakdown.to_string(),
                })
                .collect(),
            rows: result.records.iter().map(DisplayRow::from_record).collect(),
        }
    }
}
