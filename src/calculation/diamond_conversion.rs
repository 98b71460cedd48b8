//! Diamond conversion functionality.
//!
//! This module converts a bean total into diamonds by buying the largest
//! packs first. Beans left over after the smallest pack are dropped.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::config::PackTable;
use crate::models::{AuditStep, DiamondBreakdown, PackUsage};

/// The result of converting beans into diamonds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondConversionResult {
    /// Total diamonds received.
    pub diamonds: u64,
    /// Packs taken, largest first. Sizes that were not used are omitted.
    pub breakdown: DiamondBreakdown,
    /// Beans left after the smallest pack; always less than its cost.
    pub remainder_beans: Decimal,
    /// The audit step recording this conversion.
    pub audit_step: AuditStep,
}

/// Greedily converts a bean total into diamond packs.
///
/// For each pack from largest to smallest, as many packs as the remaining
/// beans afford are taken. The result is only guaranteed to be optimal when
/// the pack ladder is canonical for greedy decomposition.
///
/// Totals produced from amounts within [`MAX_AMOUNT`](super::MAX_AMOUNT)
/// always leave less than the cheapest pack. A pack count beyond `u64` is
/// capped and the uncapped beans carry on to the smaller packs.
///
/// # Examples
///
/// ```
/// use bean_calculator::calculation::convert_to_diamonds;
/// use bean_calculator::config::CalculatorConfig;
/// use rust_decimal::Decimal;
///
/// let config = CalculatorConfig::reference();
/// let result = convert_to_diamonds(Decimal::from(5430), config.packs(), 3);
///
/// assert_eq!(result.diamonds, 1488);
/// assert_eq!(result.breakdown.pairs(), vec![(5, 275), (3, 29), (13, 2)]);
/// assert_eq!(result.remainder_beans, Decimal::from(4));
/// ```
pub fn convert_to_diamonds(
    total_beans: Decimal,
    packs: &PackTable,
    step_number: u32,
) -> DiamondConversionResult {
    let mut remaining = total_beans.max(Decimal::ZERO);
    let mut usages = Vec::new();

    for pack in packs.packs() {
        if remaining < pack.cost_beans {
            continue;
        }

        let leftover = remaining % pack.cost_beans;
        let pack_count = ((remaining - leftover) / pack.cost_beans)
            .to_u64()
            .unwrap_or(u64::MAX);

        remaining -= Decimal::from(pack_count) * pack.cost_beans;
        usages.push(PackUsage {
            pack_count,
            diamonds_per_pack: pack.diamonds,
            pack_cost: pack.cost_beans,
        });
    }

    let breakdown = DiamondBreakdown::new(usages);
    let diamonds = breakdown.total_diamonds();

    let audit_step = AuditStep {
        step_number,
        rule_id: "diamond_conversion".to_string(),
        rule_name: "Diamond Conversion".to_string(),
        input: serde_json::json!({
            "total_beans": total_beans.normalize().to_string()
        }),
        output: serde_json::json!({
            "diamonds": diamonds,
            "breakdown": breakdown.to_string(),
            "remainder_beans": remaining.normalize().to_string()
        }),
        reasoning: format!(
            "{} beans -> {} = {} diamonds, {} beans left over",
            total_beans.normalize(),
            breakdown,
            diamonds,
            remaining.normalize()
        ),
    };

    DiamondConversionResult {
        diamonds,
        breakdown,
        remainder_beans: remaining,
        audit_step,
    }
}
