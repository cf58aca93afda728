use crate::log_reactions;
use crate::model::{ReactionNetwork, ReactionSet};
use crate::raf::{MaxRaf, RafConfig};
use cancel_this::{Cancelled, is_cancelled};
use computation_process::Incomplete::Suspended;
use computation_process::{Algorithm, Completable, ComputationStep};
use log::{debug, info, trace};

/// Internal state of the greedy persistent-reaction computation.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyRemovalState {
    /// Number of completed removal passes.
    pub pass: usize,
    /// Reactions that were not (yet) found to be removable.
    pub remaining: ReactionSet,
    /// Set once the initial set is known to contain a RAF.
    pub has_raf: bool,
}

/// Repeatedly removes every reaction whose removal still leaves a non-empty maximal RAF.
/// One step performs one full pass over the remaining reactions; all reactions marked
/// during a pass are removed together once the pass is over.
pub struct GreedyRemovalStep;

impl From<ReactionSet> for GreedyRemovalState {
    fn from(value: ReactionSet) -> Self {
        GreedyRemovalState {
            pass: 0,
            remaining: value,
            has_raf: false,
        }
    }
}

impl From<&ReactionSet> for GreedyRemovalState {
    fn from(value: &ReactionSet) -> Self {
        GreedyRemovalState::from(value.clone())
    }
}

impl From<&ReactionNetwork> for GreedyRemovalState {
    fn from(value: &ReactionNetwork) -> Self {
        GreedyRemovalState::from(value.reactions.clone())
    }
}

impl ComputationStep<RafConfig, GreedyRemovalState, ReactionSet> for GreedyRemovalStep {
    fn step(context: &RafConfig, state: &mut GreedyRemovalState) -> Completable<ReactionSet> {
        if !state.has_raf {
            let raf = MaxRaf::run(context.clone(), &state.remaining)?;
            if raf.is_empty() {
                info!("No RAF exists; no reaction is persistent.");
                state.remaining = ReactionSet::new();
                return Ok(ReactionSet::new());
            }
            state.has_raf = true;
            return Err(Suspended);
        }

        if state.remaining.is_empty() {
            info!("[pass:{}] Every reaction is removable.", state.pass);
            return Ok(ReactionSet::new());
        }

        if state.pass >= context.max_iterations {
            debug!(
                "[pass:{}] Greedy removal canceled (exceeded iteration count).",
                state.pass
            );
            return Err(Cancelled::new("RafConfig::max_iterations").into());
        }

        let mut removable = ReactionSet::new();
        for reaction in state.remaining.iter() {
            is_cancelled!()?;
            let raf = MaxRaf::run(context.clone(), state.remaining.without(reaction.key()))?;
            if !raf.is_empty() {
                trace!("Reaction `{}` is removable.", reaction.label());
                removable.insert(reaction.clone());
            }
        }
        state.pass += 1;

        if removable.is_empty() {
            info!(
                "[pass:{}] Greedy removal finished with ({}).",
                state.pass,
                log_reactions(&state.remaining)
            );
            Ok(state.remaining.clone())
        } else {
            state.remaining = state.remaining.minus(&removable);
            debug!(
                "[pass:{}] Greedy removal decreased to ({}).",
                state.pass,
                log_reactions(&state.remaining)
            );
            Err(Suspended)
        }
    }
}
