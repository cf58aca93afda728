use crate::model::{Agent, AgentSet, CatalystSet};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// The identity of a [`Reaction`]: its reactant and product multisets.
///
/// Labels and catalyst sets are not part of the identity. Catalysis is typically
/// (re)assigned after the reaction is already stored in a [`ReactionSet`](crate::model::ReactionSet),
/// so it must never influence equality, ordering or hashing.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionKey {
    reactants: Vec<Agent>,
    products: Vec<Agent>,
}

impl ReactionKey {
    /// Build a key from (not necessarily sorted) reactant and product lists.
    pub fn new(reactants: &[Agent], products: &[Agent]) -> ReactionKey {
        let mut reactants = reactants.to_vec();
        let mut products = products.to_vec();
        reactants.sort();
        products.sort();
        ReactionKey {
            reactants,
            products,
        }
    }
}

/// A single reaction `label: reactants [catalyst sets] -> products`.
///
/// The reaction is catalyzed by a set of available agents if *at least one* of its
/// catalyst sets is fully contained in it. Empty catalyst sets never catalyze anything.
///
/// Equality, ordering and hashing only consider the [`ReactionKey`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ReactionData", into = "ReactionData"))]
pub struct Reaction {
    label: String,
    reactants: Vec<Agent>,
    catalyst_sets: Vec<CatalystSet>,
    products: Vec<Agent>,
    key: ReactionKey,
}

/// Serialized form of a [`Reaction`]. The key is always derived from the reactants
/// and products, never stored.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ReactionData {
    label: String,
    reactants: Vec<Agent>,
    catalyst_sets: Vec<CatalystSet>,
    products: Vec<Agent>,
}

#[cfg(feature = "serde")]
impl From<ReactionData> for Reaction {
    fn from(value: ReactionData) -> Self {
        Reaction::new(
            value.label,
            value.reactants,
            value.catalyst_sets,
            value.products,
        )
    }
}

#[cfg(feature = "serde")]
impl From<Reaction> for ReactionData {
    fn from(value: Reaction) -> Self {
        ReactionData {
            label: value.label,
            reactants: value.reactants,
            catalyst_sets: value.catalyst_sets,
            products: value.products,
        }
    }
}

impl Reaction {
    pub fn new<L, R, C, P>(label: L, reactants: R, catalyst_sets: C, products: P) -> Reaction
    where
        L: Into<String>,
        R: IntoIterator,
        R::Item: Into<Agent>,
        C: IntoIterator<Item = CatalystSet>,
        P: IntoIterator,
        P::Item: Into<Agent>,
    {
        let reactants: Vec<Agent> = reactants.into_iter().map(Into::into).collect();
        let products: Vec<Agent> = products.into_iter().map(Into::into).collect();
        Reaction {
            key: ReactionKey::new(&reactants, &products),
            label: label.into(),
            catalyst_sets: catalyst_sets.into_iter().collect(),
            reactants,
            products,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn key(&self) -> &ReactionKey {
        &self.key
    }

    /// Reactants in their original order (with repetition).
    pub fn reactants(&self) -> &[Agent] {
        &self.reactants
    }

    /// Products in their original order (with repetition).
    pub fn products(&self) -> &[Agent] {
        &self.products
    }

    pub fn catalyst_sets(&self) -> &[CatalystSet] {
        &self.catalyst_sets
    }

    /// Replace the catalysis of this reaction. Reactants and products never change.
    pub fn set_catalyst_sets(&mut self, catalyst_sets: Vec<CatalystSet>) {
        self.catalyst_sets = catalyst_sets;
    }

    /// The set of distinct reactants.
    pub fn rho(&self) -> AgentSet {
        self.reactants.iter().cloned().collect()
    }

    /// The set of distinct products.
    pub fn pi(&self) -> AgentSet {
        self.products.iter().cloned().collect()
    }

    /// True if all reactants are available.
    pub fn is_satisfied(&self, available: &AgentSet) -> bool {
        self.reactants.iter().all(|it| available.contains(it))
    }

    /// True if firing this reaction would add at least one new agent to `available`.
    pub fn needs_change(&self, available: &AgentSet) -> bool {
        self.products.iter().any(|it| !available.contains(it))
    }

    /// True if some (non-empty) catalyst set is fully contained in `available`.
    pub fn is_catalyzed(&self, available: &AgentSet) -> bool {
        self.catalyst_sets
            .iter()
            .any(|set| !set.is_empty() && set.is_subset(available))
    }

    /// Same as [`Reaction::is_catalyzed`], but the satisfying catalyst set must contain at
    /// least one agent outside of `food_set`.
    pub fn is_strictly_autocatalyzed(&self, available: &AgentSet, food_set: &AgentSet) -> bool {
        self.catalyst_sets.iter().any(|set| {
            !set.is_empty() && set.is_subset(available) && !set.is_subset(food_set)
        })
    }
}

impl PartialEq for Reaction {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Reaction {}

impl PartialOrd for Reaction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reaction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Hash for Reaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
