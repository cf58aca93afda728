//! Enumeration of all RAFs contained in a reaction set.
//!
//! Every RAF is either the maximal RAF itself or is contained in the maximal RAF of that
//! set with one reaction removed. The enumeration therefore starts from the maximal RAF
//! and explores "remove one reaction, reduce to the maximal RAF" successors using an
//! explicit worklist, remembering every expanded RAF to avoid repeated work.
//!
//! The number of RAFs can be exponential in the number of reactions. No internal size
//! limit is enforced; restricting the input network is the responsibility of the caller.
//!
//! ```
//! use biodivine_algo_raf::enumeration::AllRafs;
//! use biodivine_algo_raf::model::{Reaction, ReactionNetwork};
//! use computation_process::Stateful;
//!
//! let reactions = ["r1: f [c2] -> c1", "r2: f [c1,c3] -> c2", "r3: f [c2] -> c3"]
//!     .iter()
//!     .map(|it| it.parse::<Reaction>().unwrap());
//! let network = ReactionNetwork::from_parts(reactions, ["f"]);
//!
//! for raf in AllRafs::configure(&network, &network) {
//!     println!("RAF: {:?}", raf.unwrap().labels());
//! }
//! ```

use crate::model::{AgentSet, ReactionSet};
use crate::raf::{MaxRaf, RafConfig, StrictMaxRaf};
use cancel_this::Cancellable;
use computation_process::{Generator, Stateful};
use std::collections::BTreeSet;


mod worklist;

pub use worklist::{AllRafsState, AllRafsStep};

/// Enumerate all (non-empty) RAFs of a reaction set.
pub type AllRafs = Generator<RafConfig, AllRafsState, ReactionSet, AllRafsStep<MaxRaf>>;

/// Enumerate all (non-empty) strictly autocatalytic RAFs of a reaction set.
pub type AllStrictRafs =
    Generator<RafConfig, AllRafsState, ReactionSet, AllRafsStep<StrictMaxRaf>>;

/// Collect all RAFs of `reactions` over `food_set`. The empty set is never included.
pub fn all_rafs(
    reactions: &ReactionSet,
    food_set: &AgentSet,
) -> Cancellable<BTreeSet<ReactionSet>> {
    AllRafs::configure(food_set, reactions).collect()
}
