//! Persistent reactions, i.e. reactions that appear in every RAF of a network.
//!
//! Three procedures are available:
//!
//! - [`persistent_exact`]: enumerates all RAFs and intersects them. Exponential, intended
//!   as ground truth for small networks.
//! - [`persistent_leave_one_out`]: a reaction is persistent iff removing it leaves no RAF.
//!   Needs one maximal RAF computation per reaction.
//! - [`PersistentPoly`] / [`persistent_poly`]: greedy passes that drop every reaction
//!   whose removal still leaves a RAF, until a pass removes nothing.
//!
//! All procedures return an empty set when the network has no RAF. The test suite checks
//! that the three procedures agree.

use crate::enumeration::all_rafs;
use crate::model::{AgentSet, ReactionSet};
use crate::raf::{RafConfig, max_raf};
use cancel_this::{Cancellable, is_cancelled};
use computation_process::{Algorithm, Computation};
use log::info;

#[cfg(test)]
mod tests;

mod greedy_removal;

pub use greedy_removal::{GreedyRemovalState, GreedyRemovalStep};

/// Computes the persistent reactions using greedy removal passes.
pub type PersistentPoly = Computation<RafConfig, GreedyRemovalState, ReactionSet, GreedyRemovalStep>;

/// Intersect all RAFs of `reactions` (empty if there is no RAF).
///
/// The enumeration is exponential in the worst case; the caller is responsible for only
/// using this on small networks.
pub fn persistent_exact(
    reactions: &ReactionSet,
    food_set: &AgentSet,
) -> Cancellable<ReactionSet> {
    let rafs = all_rafs(reactions, food_set)?;
    let mut rafs = rafs.into_iter();
    let Some(first) = rafs.next() else {
        return Ok(ReactionSet::new());
    };
    let persistent = rafs.fold(first, |acc, raf| acc.intersect(&raf));
    info!(
        "Persistent reactions (exact): {:?}.",
        persistent.labels()
    );
    Ok(persistent)
}

/// Reactions whose removal leaves no RAF (empty if there is no RAF to begin with).
pub fn persistent_leave_one_out(
    reactions: &ReactionSet,
    food_set: &AgentSet,
) -> Cancellable<ReactionSet> {
    if max_raf(reactions, food_set)?.is_empty() {
        return Ok(ReactionSet::new());
    }

    let mut persistent = ReactionSet::new();
    for reaction in reactions.iter() {
        is_cancelled!()?;
        if max_raf(&reactions.without(reaction.key()), food_set)?.is_empty() {
            persistent.insert(reaction.clone());
        }
    }
    info!(
        "Persistent reactions (leave-one-out): {:?}.",
        persistent.labels()
    );
    Ok(persistent)
}

/// Compute persistent reactions using [`PersistentPoly`].
pub fn persistent_poly(reactions: &ReactionSet, food_set: &AgentSet) -> Cancellable<ReactionSet> {
    PersistentPoly::run(food_set, reactions)
}
