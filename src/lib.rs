//! Agent Bean Calculator
//!
//! This crate converts an agent's earned beans into a tiered USD salary, a
//! percentage commission, and a diamond pack breakdown, and serves the
//! calculation as a form-driven web page with CSV export.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
