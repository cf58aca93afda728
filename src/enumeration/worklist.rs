use crate::log_reactions;
use crate::model::{ReactionNetwork, ReactionSet};
use crate::raf::{RafAlgorithm, RafConfig};
use cancel_this::is_cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, GeneratorStep};
use log::{debug, info};
use std::collections::BTreeSet;
use std::marker::PhantomData;

/// Internal state of the RAF enumeration.
///
/// Sets waiting in `to_process` are reduced to their maximal RAF before expansion. Every
/// RAF that has been expanded is remembered in `visited`, so each distinct RAF is expanded
/// (and reported) exactly once.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllRafsState {
    to_process: Vec<ReactionSet>,
    visited: BTreeSet<ReactionSet>,
    memo_hits: usize,
}

/// Step implementation for the RAF enumeration.
///
/// Parameterized by the algorithm computing the maximal RAF, so the same enumeration
/// works for [`MaxRaf`](crate::raf::MaxRaf) and [`StrictMaxRaf`](crate::raf::StrictMaxRaf).
pub struct AllRafsStep<RAF: RafAlgorithm> {
    _phantom: PhantomData<RAF>,
}

impl From<ReactionSet> for AllRafsState {
    fn from(value: ReactionSet) -> Self {
        AllRafsState {
            to_process: vec![value],
            visited: BTreeSet::new(),
            memo_hits: 0,
        }
    }
}

impl From<&ReactionSet> for AllRafsState {
    fn from(value: &ReactionSet) -> Self {
        AllRafsState::from(value.clone())
    }
}

impl From<&ReactionNetwork> for AllRafsState {
    fn from(value: &ReactionNetwork) -> Self {
        AllRafsState::from(value.reactions.clone())
    }
}

impl AllRafsState {
    /// Number of distinct RAFs expanded so far.
    pub fn visited(&self) -> usize {
        self.visited.len()
    }

    /// Number of times a RAF was skipped because it had already been expanded.
    pub fn memo_hits(&self) -> usize {
        self.memo_hits
    }

    /// Number of candidate sets waiting for expansion.
    pub fn remaining(&self) -> usize {
        self.to_process.len()
    }
}

impl<RAF: RafAlgorithm> GeneratorStep<RafConfig, AllRafsState, ReactionSet> for AllRafsStep<RAF> {
    fn step(context: &RafConfig, state: &mut AllRafsState) -> Completable<Option<ReactionSet>> {
        // The candidate is only removed once it is fully processed, so a cancelled
        // step can be repeated.
        let Some(candidate) = state.to_process.last() else {
            info!(
                "Enumeration finished; {} RAFs found ({} memo hits).",
                state.visited.len(),
                state.memo_hits
            );
            return Ok(None);
        };

        let raf = RAF::run(context.clone(), candidate)?;

        if raf.is_empty() {
            debug!("Candidate ({}) contains no RAF.", log_reactions(candidate));
            state.to_process.pop();
            return Err(Suspended);
        }

        if state.visited.contains(&raf) {
            debug!("RAF ({}) already expanded.", log_reactions(&raf));
            state.memo_hits += 1;
            state.to_process.pop();
            return Err(Suspended);
        }

        info!(
            "Expanding RAF ({}); {} sets remaining.",
            log_reactions(&raf),
            state.to_process.len() - 1
        );

        let mut successors = Vec::new();
        let mut memo_hits = 0;
        for reaction in raf.iter() {
            is_cancelled!()?;
            let sub_raf = RAF::run(context.clone(), raf.without(reaction.key()))?;
            if sub_raf.is_empty() {
                continue;
            }
            if state.visited.contains(&sub_raf) {
                memo_hits += 1;
                continue;
            }
            successors.push(sub_raf);
        }

        debug!("Adding {} sub-RAFs for expansion.", successors.len());

        state.memo_hits += memo_hits;
        state.to_process.pop();
        state.to_process.extend(successors);
        state.visited.insert(raf.clone());
        Ok(Some(raf))
    }
}
