//! Commission calculation functionality.
//!
//! This module converts a USD salary into beans and adds the percentage
//! commission earned on the host's beans.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CommissionRates;
use crate::models::AuditStep;

/// The result of a commission calculation, including the audit step.
///
/// Amounts are unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionResult {
    /// The USD salary expressed in beans.
    pub salary_in_beans: Decimal,
    /// Commission on the earned beans.
    pub commission: Decimal,
    /// `salary_in_beans + commission`.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes salary in beans, commission, and their total.
///
/// # Examples
///
/// ```
/// use bean_calculator::calculation::compute_totals;
/// use bean_calculator::config::CommissionRates;
/// use rust_decimal::Decimal;
///
/// let result = compute_totals(Decimal::from(12000), Decimal::from(23), &CommissionRates::default(), 2);
/// assert_eq!(result.salary_in_beans, Decimal::from(4830));
/// assert_eq!(result.commission, Decimal::from(600));
/// assert_eq!(result.total, Decimal::from(5430));
/// ```
pub fn compute_totals(
    beans_earned: Decimal,
    salary_usd: Decimal,
    rates: &CommissionRates,
    step_number: u32,
) -> CommissionResult {
    let salary_in_beans = salary_usd * rates.beans_per_usd;
    let commission = beans_earned * rates.commission_rate;
    let total = salary_in_beans + commission;

    let audit_step = AuditStep {
        step_number,
        rule_id: "commission".to_string(),
        rule_name: "Salary and Commission".to_string(),
        input: serde_json::json!({
            "beans_earned": beans_earned.normalize().to_string(),
            "salary_usd": salary_usd.normalize().to_string(),
            "beans_per_usd": rates.beans_per_usd.normalize().to_string(),
            "commission_rate": rates.commission_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "salary_in_beans": salary_in_beans.normalize().to_string(),
            "commission": commission.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} + {} x {} = {} beans",
            salary_usd.normalize(),
            rates.beans_per_usd.normalize(),
            beans_earned.normalize(),
            rates.commission_rate.normalize(),
            total.normalize()
        ),
    };

    CommissionResult {
        salary_in_beans,
        commission,
        total,
        audit_step,
    }
}
