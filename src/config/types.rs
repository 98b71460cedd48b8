//! Configuration types for the bean calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, along with the two
//! lookup tables whose ordering invariants are enforced on construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the calculator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorMetadata {
    /// The display name of the calculator (used as the page title).
    pub name: String,
    /// The version or effective date of the rate tables.
    pub version: String,
    /// Currency names used in table and export headers.
    #[serde(default)]
    pub currency: CurrencyLabels,
}

/// Display names for the earned and converted currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyLabels {
    /// Plural name of the earned currency, e.g. `Beans`.
    pub base: String,
    /// Plural name of the converted currency, e.g. `Diamonds`.
    pub converted: String,
    /// Singular name of the converted currency, e.g. `Diamond`.
    pub converted_unit: String,
}

impl Default for CurrencyLabels {
    fn default() -> Self {
        Self {
            base: "Beans".to_string(),
            converted: "Diamonds".to_string(),
            converted_unit: "Diamond".to_string(),
        }
    }
}

/// The fixed conversion and commission rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRates {
    /// How many beans one USD of salary is worth.
    pub beans_per_usd: Decimal,
    /// The commission paid on earned beans, as a fraction (0.05 is 5%).
    pub commission_rate: Decimal,
}

impl Default for CommissionRates {
    fn default() -> Self {
        Self {
            beans_per_usd: Decimal::new(210, 0),
            commission_rate: Decimal::new(5, 2),
        }
    }
}

/// Calculator configuration file structure (`calculator.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorFile {
    /// Name and version of the configuration.
    #[serde(flatten)]
    pub metadata: CalculatorMetadata,
    /// Conversion and commission rates.
    pub rates: CommissionRates,
}

/// A single band of the salary lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTier {
    /// Cumulative beans needed to reach this tier.
    pub threshold: Decimal,
    /// The flat USD salary paid at this tier.
    pub salary_usd: Decimal,
}

impl SalaryTier {
    /// Creates a tier from whole-number threshold and salary values.
    pub fn new(threshold: i64, salary_usd: i64) -> Self {
        Self {
            threshold: Decimal::from(threshold),
            salary_usd: Decimal::from(salary_usd),
        }
    }
}

/// Tier configuration file structure (`tiers.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TiersFile {
    /// The salary tiers, in any order.
    pub tiers: Vec<SalaryTier>,
}

/// The salary lookup table, always sorted by threshold ascending.
///
/// Below the lowest threshold the salary is an implicit zero.
///
/// # Example
///
/// ```
/// use bean_calculator::config::{SalaryTier, TierTable};
/// use rust_decimal::Decimal;
///
/// let table = TierTable::new(vec![SalaryTier::new(10000, 23), SalaryTier::new(5000, 23)]).unwrap();
/// assert_eq!(table.salary_for(Decimal::from(4999)), Decimal::ZERO);
/// assert_eq!(table.salary_for(Decimal::from(12000)), Decimal::from(23));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierTable {
    tiers: Vec<SalaryTier>,
}

impl TierTable {
    /// Builds a tier table, sorting the tiers by threshold.
    ///
    /// Returns `InvalidTierTable` if the table is empty, if any threshold or
    /// salary is negative, or if two tiers share a threshold.
    pub fn new(tiers: Vec<SalaryTier>) -> EngineResult<Self> {
        if tiers.is_empty() {
            return Err(EngineError::InvalidTierTable {
                message: "at least one tier is required".to_string(),
            });
        }

        let mut sorted = tiers;
        sorted.sort_by(|a, b| a.threshold.cmp(&b.threshold));

        for tier in &sorted {
            if tier.threshold.is_sign_negative() || tier.salary_usd.is_sign_negative() {
                return Err(EngineError::InvalidTierTable {
                    message: format!(
                        "tier {} -> {} must not be negative",
                        tier.threshold, tier.salary_usd
                    ),
                });
            }
        }

        if let Some(pair) = sorted.windows(2).find(|w| w[0].threshold == w[1].threshold) {
            return Err(EngineError::InvalidTierTable {
                message: format!("duplicate threshold {}", pair[0].threshold),
            });
        }

        Ok(Self { tiers: sorted })
    }

    /// Returns the tiers in ascending threshold order.
    pub fn tiers(&self) -> &[SalaryTier] {
        &self.tiers
    }

    /// Returns the tier with the greatest threshold not exceeding `earned`.
    pub fn tier_for(&self, earned: Decimal) -> Option<&SalaryTier> {
        let reached = self.tiers.partition_point(|t| t.threshold <= earned);
        reached.checked_sub(1).map(|i| &self.tiers[i])
    }

    /// Returns the USD salary for a cumulative bean total.
    pub fn salary_for(&self, earned: Decimal) -> Decimal {
        self.tier_for(earned)
            .map(|t| t.salary_usd)
            .unwrap_or(Decimal::ZERO)
    }
}

/// A purchasable diamond pack: `diamonds` diamonds for `cost_beans` beans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondPack {
    /// Diamonds received for one pack.
    pub diamonds: u64,
    /// Beans spent on one pack.
    pub cost_beans: Decimal,
}

impl DiamondPack {
    /// Creates a pack from a diamond count and a whole-bean cost.
    pub fn new(diamonds: u64, cost_beans: i64) -> Self {
        Self {
            diamonds,
            cost_beans: Decimal::from(cost_beans),
        }
    }
}

/// Pack configuration file structure (`packs.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PacksFile {
    /// The diamond packs, in any order.
    pub packs: Vec<DiamondPack>,
}

/// The diamond exchange ladder, always sorted by diamonds descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackTable {
    packs: Vec<DiamondPack>,
}

impl PackTable {
    /// Builds a pack table, sorting the packs from largest to smallest.
    ///
    /// Every pack needs a positive diamond count and cost. Once sorted, both
    /// diamonds and costs must be strictly decreasing so the cheapest pack is
    /// always the last one tried.
    pub fn new(packs: Vec<DiamondPack>) -> EngineResult<Self> {
        if packs.is_empty() {
            return Err(EngineError::InvalidPackTable {
                message: "at least one pack is required".to_string(),
            });
        }

        let mut sorted = packs;
        sorted.sort_by(|a, b| b.diamonds.cmp(&a.diamonds));

        for pack in &sorted {
            if pack.diamonds == 0 || pack.cost_beans <= Decimal::ZERO {
                return Err(EngineError::InvalidPackTable {
                    message: format!(
                        "pack {} for {} must have positive diamonds and cost",
                        pack.diamonds, pack.cost_beans
                    ),
                });
            }
        }

        for pair in sorted.windows(2) {
            if pair[0].diamonds == pair[1].diamonds {
                return Err(EngineError::InvalidPackTable {
                    message: format!("duplicate pack size {}", pair[0].diamonds),
                });
            }
            if pair[0].cost_beans <= pair[1].cost_beans {
                return Err(EngineError::InvalidPackTable {
                    message: format!(
                        "pack {} costs {} but smaller pack {} costs {}",
                        pair[0].diamonds, pair[0].cost_beans, pair[1].diamonds, pair[1].cost_beans
                    ),
                });
            }
        }

        Ok(Self { packs: sorted })
    }

    /// Returns the packs from largest to smallest.
    pub fn packs(&self) -> &[DiamondPack] {
        &self.packs
    }

    /// Returns the cost of the cheapest pack.
    pub fn smallest_cost(&self) -> Decimal {
        self.packs
            .last()
            .map(|p| p.cost_beans)
            .unwrap_or(Decimal::ZERO)
    }
}

/// The complete calculator configuration.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    metadata: CalculatorMetadata,
    rates: CommissionRates,
    tiers: TierTable,
    packs: PackTable,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(
        metadata: CalculatorMetadata,
        rates: CommissionRates,
        tiers: TierTable,
        packs: PackTable,
    ) -> Self {
        Self {
            metadata,
            rates,
            tiers,
            packs,
        }
    }

    /// Builds the built-in reference configuration.
    pub fn reference() -> Self {
        let tiers = [
            (0, 0),
            (5_000, 23),
            (10_000, 23),
            (20_000, 45),
            (30_000, 67),
            (40_000, 89),
            (50_000, 112),
            (60_000, 134),
            (70_000, 156),
            (80_000, 178),
            (90_000, 200),
            (100_000, 221),
            (110_000, 243),
            (120_000, 263),
            (130_000, 281),
            (170_000, 361),
            (250_000, 525),
            (350_000, 735),
            (450_000, 945),
            (600_000, 1220),
            (800_000, 1613),
            (1_000_000, 2000),
            (1_500_000, 2950),
            (2_000_000, 3925),
            (3_000_000, 5900),
            (4_000_000, 7650),
            (5_000_000, 9200),
            (6_000_000, 10200),
        ]
        .into_iter()
        .map(|(threshold, salary)| SalaryTier::new(threshold, salary))
        .collect();

        let packs = vec![
            DiamondPack::new(3045, 10999),
            DiamondPack::new(1105, 3999),
            DiamondPack::new(275, 999),
            DiamondPack::new(29, 109),
            DiamondPack::new(2, 8),
        ];

        Self {
            metadata: CalculatorMetadata {
                name: "Agent Bean Calculator".to_string(),
                version: "reference".to_string(),
                currency: CurrencyLabels::default(),
            },
            rates: CommissionRates::default(),
            tiers: TierTable { tiers },
            packs: PackTable { packs },
        }
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        &self.metadata
    }

    /// Returns the conversion and commission rates.
    pub fn rates(&self) -> &CommissionRates {
        &self.rates
    }

    /// Returns the salary tier table.
    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Returns the diamond pack table.
    pub fn packs(&self) -> &PackTable {
        &self.packs
    }
}
