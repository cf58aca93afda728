//! Linear-time check for a CAF (Constructive Autocatalytic, Food-generated set).
//!
//! A reaction whose reactants are all food and which is catalyzed by a catalyst set made
//! of food only forms a RAF on its own. Finding such a reaction is a cheap sufficient
//! condition for RAF existence; failing to find one says nothing and a full
//! [`MaxRaf`](crate::raf::MaxRaf) computation is still required.

use crate::model::{Reaction, ReactionNetwork};
use log::debug;

/// Return the first reaction (in reaction order) that is constructed and catalyzed
/// directly by the food set.
pub fn find_caf(network: &ReactionNetwork) -> Option<&Reaction> {
    let witness = network.reactions.iter().find(|reaction| {
        reaction.is_satisfied(&network.food_set) && reaction.is_catalyzed(&network.food_set)
    });

    if let Some(reaction) = witness {
        debug!("Found CAF witness `{}`.", reaction.label());
    } else {
        debug!("No CAF witness among {} reactions.", network.reactions.len());
    }

    witness
}

/// True if the network contains a reaction that is a single-reaction RAF using food only.
pub fn caf_existence(network: &ReactionNetwork) -> bool {
    find_caf(network).is_some()
}
