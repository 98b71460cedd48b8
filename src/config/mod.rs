//! Configuration loading and management for the bean calculator.
//!
//! This module provides functionality to load calculator configurations from
//! YAML files: the salary tier table, the diamond pack ladder, and the
//! conversion and commission rates. Server settings come from the
//! environment.
//!
//! # Example
//!
//! ```no_run
//! use bean_calculator::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/reference").unwrap();
//! println!("Loaded calculator: {}", loader.config().metadata().name);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::ServerSettings;
pub use types::{
    CalculatorConfig, CalculatorMetadata, CommissionRates, CurrencyLabels, DiamondPack, PackTable,
    SalaryTier, TierTable,
};
