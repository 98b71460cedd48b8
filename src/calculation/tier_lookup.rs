//! Salary tier lookup functionality.
//!
//! This module maps a cumulative bean total to the flat USD salary of the
//! highest tier it reaches.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TierTable;
use crate::models::AuditStep;

/// The result of a tier lookup, including the salary and audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLookupResult {
    /// The USD salary for the reached tier (zero below every tier).
    pub salary_usd: Decimal,
    /// The threshold of the reached tier, if any was reached.
    pub tier_threshold: Option<Decimal>,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Resolves the USD salary for a tier key.
///
/// Selects the tier with the greatest threshold not exceeding `tier_key`.
/// Keys below every threshold resolve to a salary of zero. Negative keys are
/// not rejected here; callers validate input before reaching the pipeline.
///
/// # Examples
///
/// ```
/// use bean_calculator::calculation::resolve_salary;
/// use bean_calculator::config::CalculatorConfig;
/// use rust_decimal::Decimal;
///
/// let config = CalculatorConfig::reference();
///
/// let result = resolve_salary(Decimal::from(12000), config.tiers(), 1);
/// assert_eq!(result.salary_usd, Decimal::from(23));
/// assert_eq!(result.tier_threshold, Some(Decimal::from(10000)));
///
/// let below = resolve_salary(Decimal::from(4999), config.tiers(), 1);
/// assert_eq!(below.salary_usd, Decimal::ZERO);
/// ```
pub fn resolve_salary(tier_key: Decimal, tiers: &TierTable, step_number: u32) -> TierLookupResult {
    let tier = tiers.tier_for(tier_key);
    let salary_usd = tier.map(|t| t.salary_usd).unwrap_or(Decimal::ZERO);
    let tier_threshold = tier.map(|t| t.threshold);

    let reasoning = match tier_threshold {
        Some(threshold) => format!(
            "{} beans reaches the {} tier: ${}",
            tier_key.normalize(),
            threshold.normalize(),
            salary_usd.normalize()
        ),
        None => format!(
            "{} beans is below every tier: $0",
            tier_key.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tier_lookup".to_string(),
        rule_name: "Salary Tier Lookup".to_string(),
        input: serde_json::json!({
            "tier_key": tier_key.normalize().to_string()
        }),
        output: serde_json::json!({
            "tier_threshold": tier_threshold.map(|t| t.normalize().to_string()),
            "salary_usd": salary_usd.normalize().to_string()
        }),
        reasoning,
    };

    TierLookupResult {
        salary_usd,
        tier_threshold,
        audit_step,
    }
}
