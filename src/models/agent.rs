//! Agent input model.
//!
//! One [`AgentInput`] is submitted per form row. The list of rows is passed
//! explicitly into the pipeline; nothing is keyed by row index.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single agent row as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInput {
    /// The agent's display name. Must not be blank.
    pub name: String,
    /// Beans earned by the host this period. Must not be negative.
    pub beans_earned: Decimal,
    /// An already-reached target used as the tier key instead of `beans_earned`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_hit: Option<Decimal>,
}

impl AgentInput {
    /// Creates an input row without a separate target.
    ///
    /// # Examples
    ///
    /// ```
    /// use bean_calculator::models::AgentInput;
    /// use rust_decimal::Decimal;
    ///
    /// let input = AgentInput::new("Ava", Decimal::from(12000));
    /// assert_eq!(input.tier_key(), Decimal::from(12000));
    /// ```
    pub fn new(name: impl Into<String>, beans_earned: Decimal) -> Self {
        Self {
            name: name.into(),
            beans_earned,
            target_hit: None,
        }
    }

    /// Sets the target used for the tier lookup.
    pub fn with_target_hit(mut self, target_hit: Decimal) -> Self {
        self.target_hit = Some(target_hit);
        self
    }

    /// Returns the value used to look up the salary tier.
    pub fn tier_key(&self) -> Decimal {
        self.target_hit.unwrap_or(self.beans_earned)
    }

    /// Returns true if the name is empty or only whitespace.
    pub fn has_blank_name(&self) -> bool {
        self.name.trim().is_empty()
    }
}
