use crate::model::ReactionSet;

/// A "flat" configuration object for the closure computation.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosureConfig {
    /// Reactions that can be applied to extend the available agents. Catalysis of these
    /// reactions is ignored.
    pub reactions: ReactionSet,
    /// Cancel the procedure if it exceeds the specified number of iterations (default:
    /// `usize::MAX`).
    ///
    /// Note that the definition of "iteration" depends on the chosen step operator.
    pub max_iterations: usize,
}

impl From<ReactionSet> for ClosureConfig {
    fn from(value: ReactionSet) -> Self {
        ClosureConfig::new(value)
    }
}

impl From<&ReactionSet> for ClosureConfig {
    fn from(value: &ReactionSet) -> Self {
        ClosureConfig::new(value.clone())
    }
}

impl ClosureConfig {
    /// Create a new instance of [`ClosureConfig`] without an iteration limit.
    pub fn new(reactions: ReactionSet) -> ClosureConfig {
        ClosureConfig {
            reactions,
            max_iterations: usize::MAX,
        }
    }
}
