//! Batch calculation pipeline.
//!
//! Validates a batch of agent rows and runs tier lookup, commission, and
//! diamond conversion for each, producing a sorted [`ResultSet`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::{EngineError, EngineResult, NAME_REQUIRED_MESSAGE};
use crate::models::{AgentInput, AgentRecord, ResultSet};

use super::commission::compute_totals;
use super::diamond_conversion::convert_to_diamonds;
use super::tier_lookup::resolve_salary;

/// Largest accepted `beans_earned` or `target_hit`, one trillion beans.
///
/// Keeps every pack count, diamond total and batch sum within `u64` and
/// `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Checks a batch before any record is calculated.
///
/// Returns a single `Validation` error for the whole batch. Blank names are
/// reported first, then negative amounts, then amounts above [`MAX_AMOUNT`],
/// regardless of how many rows fail.
pub fn validate_inputs(inputs: &[AgentInput]) -> EngineResult<()> {
    if inputs.is_empty() {
        return Err(EngineError::Validation {
            message: "at least one record is required".to_string(),
        });
    }

    if inputs.iter().any(AgentInput::has_blank_name) {
        return Err(EngineError::Validation {
            message: NAME_REQUIRED_MESSAGE.to_string(),
        });
    }

    let negative = |value: Decimal| value < Decimal::ZERO;
    if inputs
        .iter()
        .any(|i| negative(i.beans_earned) || i.target_hit.is_some_and(negative))
    {
        return Err(EngineError::Validation {
            message: "beans earned and target hit must not be negative".to_string(),
        });
    }

    let too_large = |value: Decimal| value > MAX_AMOUNT;
    if inputs
        .iter()
        .any(|i| too_large(i.beans_earned) || i.target_hit.is_some_and(too_large))
    {
        return Err(EngineError::Validation {
            message: format!(
                "beans earned and target hit must not exceed {}",
                MAX_AMOUNT
            ),
        });
    }

    Ok(())
}

/// Calculates one agent record without validating it.
///
/// # Examples
///
/// ```
/// use bean_calculator::calculation::calculate_record;
/// use bean_calculator::config::CalculatorConfig;
/// use bean_calculator::models::AgentInput;
/// use rust_decimal::Decimal;
///
/// let config = CalculatorConfig::reference();
/// let record = calculate_record(&AgentInput::new("Ava", Decimal::from(12000)), &config);
///
/// assert_eq!(record.salary_usd, Decimal::from(23));
/// assert_eq!(record.total_beans, Decimal::from(5430));
/// assert_eq!(record.diamonds, 1488);
/// ```
pub fn calculate_record(input: &AgentInput, config: &CalculatorConfig) -> AgentRecord {
    let tier = resolve_salary(input.tier_key(), config.tiers(), 1);
    let totals = compute_totals(input.beans_earned, tier.salary_usd, config.rates(), 2);
    let conversion = convert_to_diamonds(totals.total, config.packs(), 3);

    AgentRecord {
        name: input.name.trim().to_string(),
        beans_earned: input.beans_earned,
        target_hit: input.target_hit,
        tier_threshold: tier.tier_threshold,
        salary_usd: tier.salary_usd,
        salary_in_beans: totals.salary_in_beans,
        commission: totals.commission,
        total_beans: totals.total,
        diamonds: conversion.diamonds,
        breakdown: conversion.breakdown,
        remainder_beans: conversion.remainder_beans,
        audit_steps: vec![tier.audit_step, totals.audit_step, conversion.audit_step],
    }
}

/// Validates a batch and calculates every record.
///
/// Either every row validates and a full result set is returned, or none
/// are calculated.
pub fn calculate_batch(
    inputs: &[AgentInput],
    config: &CalculatorConfig,
) -> EngineResult<ResultSet> {
    validate_inputs(inputs)?;

    let records: Vec<AgentRecord> = inputs
        .iter()
        .map(|input| calculate_record(input, config))
        .collect();
    let result = ResultSet::from_records(records);

    debug!(
        records = result.totals.record_count,
        total_beans = %result.totals.total_beans,
        total_diamonds = result.totals.total_diamonds,
        "Calculated batch"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> CalculatorConfig {
        CalculatorConfig::reference()
    }

    /// PL-001: the 12000 bean worked example end to end
    #[test]
    fn test_end_to_end_12000() {
        let record = calculate_record(&AgentInput::new("Ava", dec("12000")), &config());

        assert_eq!(record.tier_threshold, Some(dec("10000")));
        assert_eq!(record.salary_usd, dec("23"));
        assert_eq!(record.salary_in_beans, dec("4830"));
        assert_eq!(record.commission, dec("600"));
        assert_eq!(record.total_beans, dec("5430"));
        assert_eq!(record.diamonds, 1488);
        assert_eq!(record.breakdown.pairs(), vec![(5, 275), (3, 29), (13, 2)]);
        assert_eq!(record.remainder_beans, dec("4"));
    }

    /// PL-002: zero earned end to end
    #[test]
    fn test_end_to_end_zero() {
        let record = calculate_record(&AgentInput::new("Ben", Decimal::ZERO), &config());

        assert_eq!(record.salary_usd, Decimal::ZERO);
        assert_eq!(record.total_beans, Decimal::ZERO);
        assert_eq!(record.diamonds, 0);
        assert!(record.breakdown.is_empty());
    }

    #[test]
    fn test_audit_steps_are_numbered_in_order() {
        let record = calculate_record(&AgentInput::new("Ava", dec("12000")), &config());

        let ids: Vec<(&str, u32)> = record
            .audit_steps
            .iter()
            .map(|s| (s.rule_id.as_str(), s.step_number))
            .collect();
        assert_eq!(
            ids,
            vec![("tier_lookup", 1), ("commission", 2), ("diamond_conversion", 3)]
        );
    }

    #[test]
    fn test_target_hit_drives_tier_but_not_commission() {
        let input = AgentInput::new("Cy", dec("1000")).with_target_hit(dec("50000"));
        let record = calculate_record(&input, &config());

        assert_eq!(record.salary_usd, dec("112"));
        assert_eq!(record.salary_in_beans, dec("23520"));
        assert_eq!(record.commission, dec("50"));
        assert_eq!(record.total_beans, dec("23570"));
    }

    #[test]
    fn test_name_is_trimmed() {
        let record = calculate_record(&AgentInput::new("  Ava  ", dec("1")), &config());
        assert_eq!(record.name, "Ava");
    }

    /// PL-003: one blank name blocks the batch with one message
    #[test]
    fn test_blank_name_blocks_batch() {
        let inputs = vec![
            AgentInput::new("Ava", dec("12000")),
            AgentInput::new("", dec("500")),
            AgentInput::new("   ", dec("700")),
        ];

        match calculate_batch(&inputs, &config()) {
            Err(EngineError::Validation { message }) => {
                assert_eq!(message, NAME_REQUIRED_MESSAGE);
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_name_reported_before_negative_amount() {
        let inputs = vec![
            AgentInput::new("Ava", dec("-1")),
            AgentInput::new("", dec("500")),
        ];

        match validate_inputs(&inputs) {
            Err(EngineError::Validation { message }) => {
                assert_eq!(message, NAME_REQUIRED_MESSAGE);
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_amount_blocks_batch() {
        let inputs = vec![AgentInput::new("Ava", dec("-0.01"))];
        match validate_inputs(&inputs) {
            Err(EngineError::Validation { message }) => {
                assert!(message.contains("must not be negative"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_target_hit_blocks_batch() {
        let inputs = vec![AgentInput::new("Ava", dec("10")).with_target_hit(dec("-5"))];
        assert!(validate_inputs(&inputs).is_err());
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        match calculate_batch(&[], &config()) {
            Err(EngineError::Validation { message }) => {
                assert_eq!(message, "at least one record is required");
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_sorted_and_summed() {
        let inputs = vec![
            AgentInput::new("Zero", Decimal::ZERO),
            AgentInput::new("Ava", dec("12000")),
            AgentInput::new("Ben", dec("100000")),
        ];
        let result = calculate_batch(&inputs, &config()).unwrap();

        let names: Vec<&str> = result.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ben", "Ava", "Zero"]);

        // Ben: 221 * 210 + 5000 = 51410
        assert_eq!(result.records[0].total_beans, dec("51410"));
        assert_eq!(result.totals.total_beans, dec("56840"));
        assert_eq!(
            result.totals.total_diamonds,
            result.records.iter().map(|r| r.diamonds).sum::<u64>()
        );
        assert_eq!(result.totals.record_count, 3);
    }

    #[test]
    fn test_max_amount_is_one_trillion() {
        assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000i64));
    }

    #[test]
    fn test_amount_at_max_is_accepted_and_fully_converted() {
        let inputs = vec![
            AgentInput::new("Ava", MAX_AMOUNT),
            AgentInput::new("Ben", MAX_AMOUNT).with_target_hit(MAX_AMOUNT),
        ];
        let result = calculate_batch(&inputs, &config()).unwrap();
        let smallest_cost = config().packs().smallest_cost();

        for record in &result.records {
            assert!(record.remainder_beans < smallest_cost);
            assert!(record.diamonds > 0);
            assert_eq!(record.diamonds, record.breakdown.total_diamonds());
            assert_eq!(
                record.breakdown.total_beans_spent() + record.remainder_beans,
                record.total_beans
            );
        }
        assert_eq!(
            result.totals.total_diamonds,
            result.records.iter().map(|r| r.diamonds).sum::<u64>()
        );
    }

    #[test]
    fn test_amount_above_max_blocks_batch() {
        let inputs = vec![
            AgentInput::new("Ava", dec("12000")),
            AgentInput::new("Big", dec("20000000000000000000000000")),
        ];

        match calculate_batch(&inputs, &config()) {
            Err(EngineError::Validation { message }) => {
                assert_eq!(
                    message,
                    "beans earned and target hit must not exceed 1000000000000"
                );
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_target_hit_above_max_blocks_batch() {
        let inputs =
            vec![AgentInput::new("Ava", dec("10")).with_target_hit(MAX_AMOUNT + dec("0.01"))];
        assert!(validate_inputs(&inputs).is_err());
    }

    proptest! {
        #[test]
        fn prop_batch_is_idempotent(amounts in proptest::collection::vec(0i64..10_000_000, 1..8)) {
            let inputs: Vec<AgentInput> = amounts
                .iter()
                .enumerate()
                .map(|(i, a)| AgentInput::new(format!("agent_{}", i), Decimal::from(*a)))
                .collect();
            let config = config();

            let first = calculate_batch(&inputs, &config).unwrap();
            let second = calculate_batch(&inputs, &config).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
