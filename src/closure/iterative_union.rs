use crate::closure::{ClosureConfig, ClosureState, ClosureStep};
use crate::model::AgentSet;
use crate::{log_agents, simple_type_name};
use cancel_this::Cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::debug;
use std::marker::PhantomData;

/// A helper implementation of [`ComputationStep`] that repeatedly calls a [`ClosureStep`]
/// function, collecting the results into the current `state`.
pub struct IterativeUnion<S: ClosureStep>(PhantomData<S>);

impl<S: ClosureStep> ComputationStep<ClosureConfig, ClosureState, AgentSet> for IterativeUnion<S> {
    fn step(context: &ClosureConfig, state: &mut ClosureState) -> Completable<AgentSet> {
        if state.iteration >= context.max_iterations {
            debug!(
                "[iteration:{}] Union<{}> canceled (exceeded iteration count).",
                state.iteration,
                simple_type_name::<S>()
            );

            return Err(Cancelled::new("ClosureConfig::max_iterations").into());
        } else {
            state.iteration += 1;
        }

        let to_union = S::step(context, &state.agents)?;
        if to_union.is_empty() {
            debug!(
                "[iteration:{}] Union<{}> finished with ({}).",
                state.iteration,
                simple_type_name::<S>(),
                log_agents(&state.agents)
            );

            Ok(state.agents.clone())
        } else {
            state.agents.extend(to_union);

            debug!(
                "[iteration:{}] Union<{}> increased to ({}).",
                state.iteration,
                simple_type_name::<S>(),
                log_agents(&state.agents)
            );

            Err(Suspended)
        }
    }
}
