use crate::model::{AgentSet, Reaction, ReactionSet};

/// A catalytic reaction system: a set of reactions together with the food set.
///
/// The network is not required to be "complete": agents that are neither food nor
/// produced by any reaction are simply unreachable.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionNetwork {
    pub reactions: ReactionSet,
    pub food_set: AgentSet,
}

impl ReactionNetwork {
    pub fn new(reactions: ReactionSet, food_set: AgentSet) -> ReactionNetwork {
        ReactionNetwork {
            reactions,
            food_set,
        }
    }

    /// Build a network from an iterator of reactions and food agents.
    pub fn from_parts<R, F>(reactions: R, food_set: F) -> ReactionNetwork
    where
        R: IntoIterator<Item = Reaction>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        ReactionNetwork {
            reactions: reactions.into_iter().collect(),
            food_set: food_set.into_iter().map(Into::into).collect(),
        }
    }

    /// Agents mentioned anywhere in the network, including the food set.
    pub fn agents(&self) -> AgentSet {
        let mut agents = self.reactions.agents();
        agents.extend(self.food_set.iter().cloned());
        agents
    }
}
