use crate::model::{ReactionNetwork, ReactionSet};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RafState {
    pub iteration: usize,
    pub reactions: ReactionSet,
}

impl From<ReactionSet> for RafState {
    fn from(value: ReactionSet) -> Self {
        RafState {
            iteration: 0,
            reactions: value,
        }
    }
}

impl From<&ReactionSet> for RafState {
    fn from(value: &ReactionSet) -> Self {
        Self::from(value.clone())
    }
}

impl From<&ReactionNetwork> for RafState {
    fn from(value: &ReactionNetwork) -> Self {
        Self::from(value.reactions.clone())
    }
}

impl From<RafState> for ReactionSet {
    fn from(value: RafState) -> Self {
        value.reactions
    }
}
