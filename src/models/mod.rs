//! Core data models for the bean calculator.
//!
//! This module contains all the domain models used throughout the calculator.

mod agent;
mod agent_record;
mod audit;
mod result_set;

pub use agent::AgentInput;
pub use agent_record::{AgentRecord, DiamondBreakdown, PackUsage};
pub use audit::AuditStep;
pub use result_set::{ResultSet, ResultTotals};
