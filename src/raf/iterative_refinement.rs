use crate::closure::Closure;
use crate::model::ReactionSet;
use crate::raf::{CatalysisRule, RafConfig, RafState};
use crate::{log_agents, log_reactions, simple_type_name};
use cancel_this::{Cancelled, is_cancelled};
use computation_process::Incomplete::Suspended;
use computation_process::{Algorithm, Completable, ComputationStep};
use log::{debug, info, trace};
use std::marker::PhantomData;

/// A helper implementation of [`ComputationStep`] that repeatedly removes reactions which
/// are not supported by the closure of the current reaction set: either some reactant is not
/// constructible, or the reaction is not catalyzed (as decided by the [`CatalysisRule`]).
///
/// The greatest fixed point of this operator is the maximal RAF of the initial set.
pub struct IterativeRefinement<C: CatalysisRule>(PhantomData<C>);

impl<C: CatalysisRule> ComputationStep<RafConfig, RafState, ReactionSet>
    for IterativeRefinement<C>
{
    fn step(context: &RafConfig, state: &mut RafState) -> Completable<ReactionSet> {
        if state.iteration >= context.max_iterations {
            debug!(
                "[iteration:{}] Refinement<{}> canceled (exceeded iteration count).",
                state.iteration,
                simple_type_name::<C>()
            );

            return Err(Cancelled::new("RafConfig::max_iterations").into());
        } else {
            state.iteration += 1;
        }

        let available = Closure::run(&state.reactions, &context.food_set)?;
        trace!(
            "[iteration:{}] Closure computed ({}).",
            state.iteration,
            log_agents(&available)
        );

        let mut retained = ReactionSet::new();
        for reaction in state.reactions.iter() {
            is_cancelled!()?;
            if reaction.is_satisfied(&available)
                && C::is_catalyzed(reaction, &available, &context.food_set)
            {
                retained.insert(reaction.clone());
            } else {
                trace!("Reaction `{}` is not supported.", reaction.label());
            }
        }

        if retained == state.reactions {
            info!(
                "[iteration:{}] Refinement<{}> finished with ({}).",
                state.iteration,
                simple_type_name::<C>(),
                log_reactions(&state.reactions)
            );

            Ok(state.reactions.clone())
        } else {
            state.reactions = state.reactions.intersect(&retained);

            debug!(
                "[iteration:{}] Refinement<{}> decreased to ({}).",
                state.iteration,
                simple_type_name::<C>(),
                log_reactions(&state.reactions)
            );

            Err(Suspended)
        }
    }
}
