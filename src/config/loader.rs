//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CalculatorConfig, CalculatorFile, PackTable, PacksFile, TierTable, TiersFile};

/// Loads and provides access to calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/reference/
/// ├── calculator.yaml  # Name, version, conversion and commission rates
/// ├── tiers.yaml       # Bean threshold -> USD salary table
/// └── packs.yaml       # Diamond pack sizes and bean costs
/// ```
///
/// # Example
///
/// ```no_run
/// use bean_calculator::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/reference")?;
/// let salary = loader.config().tiers().salary_for(Decimal::from(12000));
/// println!("Salary: ${}", salary);
/// # Ok::<(), bean_calculator::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing or unparseable, if either
    /// rate is negative, or if a table breaks its ordering invariants.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calculator_path = path.join("calculator.yaml");
        let calculator = Self::load_yaml::<CalculatorFile>(&calculator_path)?;
        if calculator.rates.beans_per_usd.is_sign_negative()
            || calculator.rates.commission_rate.is_sign_negative()
        {
            return Err(EngineError::ConfigParseError {
                path: calculator_path.display().to_string(),
                message: "rates must not be negative".to_string(),
            });
        }

        let tiers_file = Self::load_yaml::<TiersFile>(&path.join("tiers.yaml"))?;
        let tiers = TierTable::new(tiers_file.tiers)?;

        let packs_file = Self::load_yaml::<PacksFile>(&path.join("packs.yaml"))?;
        let packs = PackTable::new(packs_file.packs)?;

        debug!(
            path = %path.display(),
            tiers = tiers.tiers().len(),
            packs = packs.packs().len(),
            "Loaded calculator configuration"
        );

        let config = CalculatorConfig::new(calculator.metadata, calculator.rates, tiers, packs);

        Ok(Self { config })
    }

    /// Wraps the built-in reference configuration.
    pub fn reference() -> Self {
        Self {
            config: CalculatorConfig::reference(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> CalculatorConfig {
        self.config
    }

    /// Returns the USD salary for a cumulative bean total.
    pub fn salary_for(&self, earned: Decimal) -> Decimal {
        self.config.tiers().salary_for(earned)
    }
}
