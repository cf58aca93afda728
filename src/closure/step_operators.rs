use crate::closure::{ClosureConfig, ClosureStep};
use crate::model::AgentSet;
use cancel_this::{Cancellable, is_cancelled};
use log::trace;

/// Scans all reactions once (in reaction order), immediately making the products of every
/// satisfied reaction available to the reactions that follow. Returns all agents
/// discovered during the scan.
pub struct ScanProducts;

/// Computes the products of all reactions satisfied by the current agent set, excluding
/// agents that are already available. Each step thus adds exactly one "layer" of agents.
pub struct LayerProducts;

impl ClosureStep for ScanProducts {
    fn step(context: &ClosureConfig, state: &AgentSet) -> Cancellable<AgentSet> {
        let mut available = state.clone();
        let mut discovered = AgentSet::new();
        for reaction in context.reactions.iter() {
            is_cancelled!()?;
            if reaction.is_satisfied(&available) && reaction.needs_change(&available) {
                for product in reaction.products() {
                    if available.insert(product.clone()) {
                        discovered.insert(product.clone());
                    }
                }

                trace!(
                    "Scan applied `{}` ({} new agents).",
                    reaction.label(),
                    discovered.len()
                );
            }
        }
        Ok(discovered)
    }
}

impl ClosureStep for LayerProducts {
    fn step(context: &ClosureConfig, state: &AgentSet) -> Cancellable<AgentSet> {
        let mut layer = AgentSet::new();
        for reaction in context.reactions.iter() {
            is_cancelled!()?;
            if reaction.is_satisfied(state) {
                for product in reaction.products() {
                    if !state.contains(product) {
                        layer.insert(product.clone());
                    }
                }
            }
        }

        trace!("Layer contains {} new agents.", layer.len());
        Ok(layer)
    }
}
