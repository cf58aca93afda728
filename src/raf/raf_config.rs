use crate::model::{AgentSet, ReactionNetwork};

/// A configuration object for RAF detection problems.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RafConfig {
    /// Agents that are freely available without being produced by any reaction.
    pub food_set: AgentSet,
    /// Cancel the procedure if it exceeds the specified number of iterations (default:
    /// `usize::MAX`).
    ///
    /// Each iteration performs one closure computation followed by one reduction of the
    /// reaction set. Since the reaction set only shrinks, `|R| + 1` iterations are always
    /// sufficient.
    pub max_iterations: usize,
}

impl From<AgentSet> for RafConfig {
    fn from(value: AgentSet) -> Self {
        RafConfig::new(value)
    }
}

impl From<&AgentSet> for RafConfig {
    fn from(value: &AgentSet) -> Self {
        RafConfig::new(value.clone())
    }
}

impl From<&ReactionNetwork> for RafConfig {
    fn from(value: &ReactionNetwork) -> Self {
        RafConfig::new(value.food_set.clone())
    }
}

impl RafConfig {
    /// Create a new instance of [`RafConfig`] without an iteration limit.
    pub fn new(food_set: AgentSet) -> RafConfig {
        RafConfig {
            food_set,
            max_iterations: usize::MAX,
        }
    }
}
