//! Request types for the bean calculator API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/export` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AgentInput;
use crate::report::ExportOptions;

/// Request body for the `/calculate` and `/export` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// One entry per agent row on the form.
    pub agents: Vec<AgentRequest>,
}

/// Agent row in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRequest {
    /// The agent's name. A missing name is treated as blank and fails validation.
    #[serde(default)]
    pub name: String,
    /// Beans earned by the host.
    pub beans_earned: Decimal,
    /// Optional target used for the tier lookup instead of `beans_earned`.
    #[serde(default)]
    pub target_hit: Option<Decimal>,
}

/// Query string for the `/export` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQuery {
    /// Whether to include the diamond breakdown column (default true).
    #[serde(default)]
    pub include_breakdown: Option<bool>,
}

impl From<AgentRequest> for AgentInput {
    fn from(req: AgentRequest) -> Self {
        AgentInput {
            name: req.name,
            beans_earned: req.beans_earned,
            target_hit: req.target_hit,
        }
    }
}

impl From<ExportQuery> for ExportOptions {
    fn from(query: ExportQuery) -> Self {
        ExportOptions {
            include_breakdown: query.include_breakdown.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "agents": [
                { "name": "Ava", "beans_earned": "12000" },
                { "name": "Ben", "beans_earned": 500, "target_hit": 20000 }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.agents.len(), 2);
        assert_eq!(request.agents[0].name, "Ava");
        assert_eq!(request.agents[1].target_hit, Some(Decimal::from(20000)));
    }

    #[test]
    fn test_missing_name_defaults_to_blank() {
        let json = r#"{ "agents": [ { "beans_earned": 10 } ] }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let input: AgentInput = request.agents[0].clone().into();
        assert!(input.has_blank_name());
    }

    #[test]
    fn test_export_query_defaults_to_breakdown() {
        let options: ExportOptions = ExportQuery::default().into();
        assert!(options.include_breakdown);

        let options: ExportOptions = ExportQuery {
            include_breakdown: Some(false),
        }
        .into();
        assert!(!options.include_breakdown);
    }
}
