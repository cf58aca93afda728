pub mod arbitrary;
pub mod example_networks;

use crate::model::{Reaction, ReactionNetwork, ReactionSet};

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Parse a list of reactions written in the textual notation.
///
/// # Panics
///
/// Panics if any of the reactions is malformed.
pub fn mk_reactions(reactions: &[&str]) -> ReactionSet {
    reactions
        .iter()
        .map(|it| {
            it.parse::<Reaction>()
                .unwrap_or_else(|e| panic!("Invalid test reaction: {e}"))
        })
        .collect()
}

/// Build a network from reactions in the textual notation and a list of food agents.
pub fn mk_network(reactions: &[&str], food_set: &[&str]) -> ReactionNetwork {
    ReactionNetwork::new(
        mk_reactions(reactions),
        food_set.iter().map(|it| it.to_string()).collect(),
    )
}

/// Select reactions of `network` by their labels.
pub fn mk_subset(network: &ReactionNetwork, labels: &[&str]) -> ReactionSet {
    let result = network
        .reactions
        .filter(|it| labels.contains(&it.label()));
    assert_eq!(result.len(), labels.len(), "Unknown label in {labels:?}");
    result
}
