//! `proptest` strategies producing small random networks.

use crate::model::{Agent, AgentSet, CatalystSet, Reaction, ReactionNetwork, ReactionSet};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

const AGENTS: &[&str] = &["f1", "f2", "x", "y", "z", "w", "α", "Ω_2", "日"];

pub fn arb_agent() -> impl Strategy<Value = Agent> {
    proptest::sample::select(AGENTS).prop_map(str::to_string)
}

pub fn arb_food_set() -> impl Strategy<Value = AgentSet> {
    btree_set(arb_agent(), 0..=3)
}

fn arb_catalyst_sets() -> impl Strategy<Value = Vec<CatalystSet>> {
    vec(btree_set(arb_agent(), 0..=2), 0..=2)
}

/// A single reaction with the given label.
pub fn arb_reaction(label: String) -> impl Strategy<Value = Reaction> {
    (
        vec(arb_agent(), 1..=2),
        arb_catalyst_sets(),
        vec(arb_agent(), 1..=2),
    )
        .prop_map(move |(reactants, catalysts, products)| {
            Reaction::new(label.clone(), reactants, catalysts, products)
        })
}

/// Up to six reactions labelled `r1`, `r2`, ... with pairwise distinct identities.
pub fn arb_reactions() -> impl Strategy<Value = Vec<Reaction>> {
    vec(
        (vec(arb_agent(), 1..=2), arb_catalyst_sets(), vec(arb_agent(), 1..=2)),
        0..=6,
    )
    .prop_map(|parts| {
        let unique: ReactionSet = parts
            .into_iter()
            .enumerate()
            .map(|(i, (reactants, catalysts, products))| {
                Reaction::new(format!("r{}", i + 1), reactants, catalysts, products)
            })
            .collect();
        Vec::from(unique)
    })
}

pub fn arb_network() -> impl Strategy<Value = ReactionNetwork> {
    (arb_reactions(), arb_food_set())
        .prop_map(|(reactions, food_set)| ReactionNetwork::from_parts(reactions, food_set))
}

/// The same reactions in two (generally) different orders, together with a food set.
pub fn arb_shuffled_reactions() -> impl Strategy<Value = (Vec<Reaction>, Vec<Reaction>, AgentSet)> {
    (arb_reactions(), arb_food_set()).prop_flat_map(|(reactions, food_set)| {
        (
            Just(reactions.clone()),
            Just(reactions).prop_shuffle(),
            Just(food_set),
        )
    })
}
