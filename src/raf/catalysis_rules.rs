use crate::model::{AgentSet, Reaction};
use crate::raf::CatalysisRule;

/// The standard RAF catalysis: some catalyst set is fully available.
pub struct AnyCatalysis;

/// Strict autocatalysis: some catalyst set is fully available and is not made
/// of food agents only, i.e. catalysis must involve a constructed agent.
pub struct NonFoodCatalysis;

impl CatalysisRule for AnyCatalysis {
    fn is_catalyzed(reaction: &Reaction, available: &AgentSet, _food_set: &AgentSet) -> bool {
        reaction.is_catalyzed(available)
    }
}

impl CatalysisRule for NonFoodCatalysis {
    fn is_catalyzed(reaction: &Reaction, available: &AgentSet, food_set: &AgentSet) -> bool {
        reaction.is_strictly_autocatalyzed(available, food_set)
    }
}
