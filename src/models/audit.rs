//! Audit trace models.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use bean_calculator::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "tier_lookup".to_string(),
///     rule_name: "Salary Tier Lookup".to_string(),
///     input: serde_json::json!({ "tier_key": "12000" }),
///     output: serde_json::json!({ "salary_usd": "23" }),
///     reasoning: "12000 beans reaches the 10000 tier: $23".to_string(),
/// };
/// assert_eq!(step.rule_id, "tier_lookup");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
