//! Maximal RAF (Reflexively Autocatalytic, Food-generated set) detection.
//!
//! A RAF is a non-empty set of reactions such that every reactant is constructible from
//! the food set using only reactions of the set, and every reaction is catalyzed by agents
//! constructible the same way. The union of RAFs is a RAF, so every reaction set contains
//! a unique maximal RAF (possibly empty).
//!
//! # Algorithm
//!
//! Starting with the full reaction set, [`IterativeRefinement`] repeatedly computes the
//! closure of the current set and removes every reaction that is not constructible or not
//! catalyzed within that closure, until nothing changes.
//!
//! - [`MaxRaf`]: the standard maximal RAF ([`AnyCatalysis`]).
//! - [`StrictMaxRaf`]: the maximal strictly autocatalytic RAF ([`NonFoodCatalysis`]),
//!   where food agents alone never count as catalysts. It is always a subset of [`MaxRaf`].
//!
//! # Example
//!
//! ```
//! use biodivine_algo_raf::model::{Reaction, ReactionNetwork};
//! use biodivine_algo_raf::raf::MaxRaf;
//! use computation_process::Algorithm;
//!
//! let reactions = ["r1: f [c2] -> c1", "r2: f [c1] -> c2", "r3: f+x [c1] -> y"]
//!     .iter()
//!     .map(|it| it.parse::<Reaction>().unwrap());
//! let network = ReactionNetwork::from_parts(reactions, ["f"]);
//!
//! let raf = MaxRaf::run(&network, &network).unwrap();
//! assert_eq!(raf.labels(), vec!["r1", "r2"]);
//! ```

use crate::closure::closure;
use crate::model::{AgentSet, Reaction, ReactionSet};
use cancel_this::Cancellable;
use computation_process::{Algorithm, Computation};


mod catalysis_rules;
mod iterative_refinement;
mod raf_config;
mod raf_state;

pub use catalysis_rules::{AnyCatalysis, NonFoodCatalysis};
pub use iterative_refinement::IterativeRefinement;
pub use raf_config::RafConfig;
pub use raf_state::RafState;

/// A helper alias which allows us to use [`RafComputation`] as shorthand for
/// `Computation<Context = RafConfig, State = RafState>`.
pub type RafComputation<STEP> = Computation<RafConfig, RafState, ReactionSet, STEP>;

/// A helper trait which allows us to use [`RafAlgorithm`] as shorthand for
/// `Algorithm<Context = RafConfig, State = RafState, Output = ReactionSet>`.
pub trait RafAlgorithm: Algorithm<RafConfig, RafState, ReactionSet> + 'static {}
impl<T: Algorithm<RafConfig, RafState, ReactionSet> + 'static> RafAlgorithm for T {}

/// Computes the maximal RAF of a reaction set.
pub type MaxRaf = RafComputation<IterativeRefinement<AnyCatalysis>>;

/// Computes the maximal strictly autocatalytic RAF of a reaction set.
pub type StrictMaxRaf = RafComputation<IterativeRefinement<NonFoodCatalysis>>;

/// Decides whether a reaction counts as catalyzed given the `available` agents.
pub trait CatalysisRule {
    fn is_catalyzed(reaction: &Reaction, available: &AgentSet, food_set: &AgentSet) -> bool;
}

/// Compute the maximal RAF of `reactions` over `food_set` (empty if there is no RAF).
pub fn max_raf(reactions: &ReactionSet, food_set: &AgentSet) -> Cancellable<ReactionSet> {
    MaxRaf::run(food_set, reactions)
}

/// Compute the maximal strictly autocatalytic RAF of `reactions` over `food_set`.
pub fn strict_max_raf(reactions: &ReactionSet, food_set: &AgentSet) -> Cancellable<ReactionSet> {
    StrictMaxRaf::run(food_set, reactions)
}

/// Check that `reactions` is itself a RAF over `food_set`: it is non-empty, and every
/// reaction is constructible and catalyzed within the closure of `reactions`.
pub fn is_raf(reactions: &ReactionSet, food_set: &AgentSet) -> Cancellable<bool> {
    if reactions.is_empty() {
        return Ok(false);
    }
    let available = closure(reactions, food_set)?;
    Ok(reactions
        .iter()
        .all(|it| it.is_satisfied(&available) && it.is_catalyzed(&available)))
}
