//! Calculated agent record models.
//!
//! This module contains the [`AgentRecord`] produced for every validated
//! [`AgentInput`](super::AgentInput), and the [`DiamondBreakdown`] describing
//! how its bean total was split into diamond packs.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditStep;

/// How many of one pack size a bean total was converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackUsage {
    /// Number of packs taken.
    pub pack_count: u64,
    /// Diamonds in one pack.
    pub diamonds_per_pack: u64,
    /// Beans one pack costs.
    pub pack_cost: Decimal,
}

impl PackUsage {
    /// Diamonds received from all packs of this size, saturating at `u64::MAX`.
    pub fn diamonds(&self) -> u64 {
        self.pack_count.saturating_mul(self.diamonds_per_pack)
    }

    /// Beans spent on all packs of this size.
    pub fn beans_spent(&self) -> Decimal {
        Decimal::from(self.pack_count) * self.pack_cost
    }
}

/// The ordered list of packs a bean total was converted into, largest first.
///
/// Renders as `"5 x 275 + 3 x 29 + 13 x 2"`, or `"-"` when nothing converted.
///
/// # Example
///
/// ```
/// use bean_calculator::models::{DiamondBreakdown, PackUsage};
/// use rust_decimal::Decimal;
///
/// let breakdown = DiamondBreakdown::new(vec![PackUsage {
///     pack_count: 5,
///     diamonds_per_pack: 275,
///     pack_cost: Decimal::from(999),
/// }]);
/// assert_eq!(breakdown.to_string(), "5 x 275");
/// assert_eq!(DiamondBreakdown::default().to_string(), "-");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiamondBreakdown(Vec<PackUsage>);

impl DiamondBreakdown {
    /// Wraps an ordered list of pack usages.
    pub fn new(usages: Vec<PackUsage>) -> Self {
        Self(usages)
    }

    /// Returns the pack usages, largest pack first.
    pub fn usages(&self) -> &[PackUsage] {
        &self.0
    }

    /// Returns true if no pack was taken.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total diamonds across all packs, saturating at `u64::MAX`.
    pub fn total_diamonds(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, u| acc.saturating_add(u.diamonds()))
    }

    /// Total beans spent across all packs.
    pub fn total_beans_spent(&self) -> Decimal {
        self.0.iter().map(PackUsage::beans_spent).sum()
    }

    /// Returns `(pack_count, diamonds_per_pack)` pairs.
    pub fn pairs(&self) -> Vec<(u64, u64)> {
        self.0
            .iter()
            .map(|u| (u.pack_count, u.diamonds_per_pack))
            .collect()
    }
}

impl fmt::Display for DiamondBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("-");
        }
        for (i, usage) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{} x {}", usage.pack_count, usage.diamonds_per_pack)?;
        }
        Ok(())
    }
}

/// The full calculation for one agent.
///
/// All amounts are unrounded; rounding happens only when the record is
/// formatted for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// The agent's display name.
    pub name: String,
    /// Beans earned by the host this period.
    pub beans_earned: Decimal,
    /// The target used as the tier key, if one was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_hit: Option<Decimal>,
    /// The threshold of the tier that was reached, if any.
    pub tier_threshold: Option<Decimal>,
    /// The flat USD salary for the reached tier.
    pub salary_usd: Decimal,
    /// The salary converted to beans.
    pub salary_in_beans: Decimal,
    /// Commission on the earned beans.
    pub commission: Decimal,
    /// Salary in beans plus commission.
    pub total_beans: Decimal,
    /// Diamonds the total converts into.
    pub diamonds: u64,
    /// Packs the total was converted into.
    pub breakdown: DiamondBreakdown,
    /// Beans too few to buy the smallest pack.
    pub remainder_beans: Decimal,
    /// The tier, commission and conversion steps for this record.
    pub audit_steps: Vec<AuditStep>,
}
