//! Closure of a food set under a reaction set.
//!
//! The closure is the set of agents that can be constructed from the food set by
//! repeatedly applying reactions whose reactants are all available. Catalysis is
//! ignored: closure answers "what is constructible", not "what is catalyzed".
//!
//! # Algorithm Variants
//!
//! - [`Closure`] (default): each iteration scans all reactions and makes new products
//!   available immediately, so long production chains are often resolved in one scan.
//! - [`ClosureLayered`]: each iteration adds exactly one layer of newly constructible
//!   agents. Useful when the number of production "generations" matters.
//!
//! Both variants compute the same set.
//!
//! # Example
//!
//! ```
//! use biodivine_algo_raf::closure::Closure;
//! use biodivine_algo_raf::model::{AgentSet, Reaction, ReactionSet};
//! use computation_process::Algorithm;
//!
//! let reactions: ReactionSet = ["r1: a+b [] -> c", "r2: c [] -> d"]
//!     .iter()
//!     .map(|it| it.parse::<Reaction>().unwrap())
//!     .collect();
//! let food = AgentSet::from(["a".to_string(), "b".to_string()]);
//!
//! let available = Closure::run(&reactions, &food).unwrap();
//! assert_eq!(available.len(), 4);
//! ```

use crate::model::{AgentSet, ReactionSet};
use cancel_this::Cancellable;
use computation_process::{Algorithm, Computation};


mod closure_config;
mod closure_state;
mod iterative_union;
mod step_operators;

pub use closure_config::ClosureConfig;
pub use closure_state::ClosureState;
pub use iterative_union::IterativeUnion;
pub use step_operators::{LayerProducts, ScanProducts};

/// A helper alias which allows us to use [`ClosureComputation`] as shorthand for
/// `Computation<Context = ClosureConfig, State = ClosureState>`.
pub type ClosureComputation<STEP> = Computation<ClosureConfig, ClosureState, AgentSet, STEP>;

/// A type alias for the recommended closure configuration.
pub type Closure = ClosureComputation<IterativeUnion<ScanProducts>>;

/// A type alias for a closure procedure that always extends the available agents
/// one production layer at a time.
pub type ClosureLayered = ClosureComputation<IterativeUnion<LayerProducts>>;

/// Used to reduce code repetition in closure-like algorithms.
///
/// Implementors define a single step of a closure procedure, which is then
/// iterated by [`IterativeUnion`].
pub trait ClosureStep {
    /// Perform a single step of closure computation.
    ///
    /// Returns the set of newly constructed agents (not already in `state`),
    /// or an empty set if no more agents can be constructed.
    fn step(context: &ClosureConfig, state: &AgentSet) -> Cancellable<AgentSet>;
}

/// Compute the closure of `food_set` under `reactions` using [`Closure`].
pub fn closure(reactions: &ReactionSet, food_set: &AgentSet) -> Cancellable<AgentSet> {
    Closure::run(reactions, food_set)
}
