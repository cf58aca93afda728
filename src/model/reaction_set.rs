use crate::model::{AgentSet, Reaction, ReactionKey};
use std::collections::BTreeMap;

/// An ordered set of [`Reaction`] objects, identified by their [`ReactionKey`].
///
/// Iteration always follows the key order, so algorithms that scan a [`ReactionSet`]
/// never depend on insertion order.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Reaction>", into = "Vec<Reaction>"))]
pub struct ReactionSet {
    reactions: BTreeMap<ReactionKey, Reaction>,
}

impl ReactionSet {
    pub fn new() -> ReactionSet {
        ReactionSet::default()
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    /// Insert a reaction unless a reaction with the same key is already present.
    ///
    /// Returns `false` (and keeps the original reaction) for duplicates.
    pub fn insert(&mut self, reaction: Reaction) -> bool {
        if self.reactions.contains_key(reaction.key()) {
            return false;
        }
        self.reactions.insert(reaction.key().clone(), reaction);
        true
    }

    pub fn remove(&mut self, key: &ReactionKey) -> Option<Reaction> {
        self.reactions.remove(key)
    }

    pub fn contains(&self, reaction: &Reaction) -> bool {
        self.reactions.contains_key(reaction.key())
    }

    pub fn contains_key(&self, key: &ReactionKey) -> bool {
        self.reactions.contains_key(key)
    }

    pub fn get(&self, key: &ReactionKey) -> Option<&Reaction> {
        self.reactions.get(key)
    }

    /// Mutable access to a member reaction. Only its catalysis can be changed, hence
    /// the key (and the position in this set) stays valid.
    pub fn get_mut(&mut self, key: &ReactionKey) -> Option<&mut Reaction> {
        self.reactions.get_mut(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reaction> {
        self.reactions.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Reaction> {
        self.reactions.values_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ReactionKey> {
        self.reactions.keys()
    }

    /// A copy of this set without the reaction identified by `key`.
    pub fn without(&self, key: &ReactionKey) -> ReactionSet {
        let mut result = self.clone();
        result.remove(key);
        result
    }

    /// Reactions of this set that also appear in `other`.
    pub fn intersect(&self, other: &ReactionSet) -> ReactionSet {
        self.filter(|it| other.contains(it))
    }

    /// Reactions of this set that do not appear in `other`.
    pub fn minus(&self, other: &ReactionSet) -> ReactionSet {
        self.filter(|it| !other.contains(it))
    }

    pub fn filter<F: Fn(&Reaction) -> bool>(&self, predicate: F) -> ReactionSet {
        self.iter().filter(|it| predicate(it)).cloned().collect()
    }

    pub fn is_subset(&self, other: &ReactionSet) -> bool {
        self.keys().all(|it| other.contains_key(it))
    }

    /// All agents that appear in some reactant, product or catalyst set.
    pub fn agents(&self) -> AgentSet {
        let mut result = AgentSet::new();
        for reaction in self.iter() {
            result.extend(reaction.reactants().iter().cloned());
            result.extend(reaction.products().iter().cloned());
            for set in reaction.catalyst_sets() {
                result.extend(set.iter().cloned());
            }
        }
        result
    }

    /// Sorted reaction labels, mostly useful for logging and reporting.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.iter().map(|it| it.label()).collect();
        labels.sort();
        labels
    }
}

impl FromIterator<Reaction> for ReactionSet {
    fn from_iter<T: IntoIterator<Item = Reaction>>(iter: T) -> Self {
        let mut result = ReactionSet::new();
        for reaction in iter {
            result.insert(reaction);
        }
        result
    }
}

impl Extend<Reaction> for ReactionSet {
    fn extend<T: IntoIterator<Item = Reaction>>(&mut self, iter: T) {
        for reaction in iter {
            self.insert(reaction);
        }
    }
}

impl IntoIterator for ReactionSet {
    type Item = Reaction;
    type IntoIter = std::collections::btree_map::IntoValues<ReactionKey, Reaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.reactions.into_values()
    }
}

impl<'a> IntoIterator for &'a ReactionSet {
    type Item = &'a Reaction;
    type IntoIter = std::collections::btree_map::Values<'a, ReactionKey, Reaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.reactions.values()
    }
}

impl From<Vec<Reaction>> for ReactionSet {
    fn from(value: Vec<Reaction>) -> Self {
        value.into_iter().collect()
    }
}

impl From<ReactionSet> for Vec<Reaction> {
    fn from(value: ReactionSet) -> Self {
        value.into_iter().collect()
    }
}
