use crate::model::AgentSet;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosureState {
    pub iteration: usize,
    pub agents: AgentSet,
}

impl From<AgentSet> for ClosureState {
    fn from(value: AgentSet) -> Self {
        ClosureState {
            iteration: 0,
            agents: value,
        }
    }
}

impl From<&AgentSet> for ClosureState {
    fn from(value: &AgentSet) -> Self {
        Self::from(value.clone())
    }
}

impl From<ClosureState> for AgentSet {
    fn from(value: ClosureState) -> Self {
        value.agents
    }
}
