//! Data model of catalytic reaction systems.
//!
//! Agents are opaque string labels. A [`Reaction`] consumes reactants and yields products
//! when catalyzed by at least one of its catalyst sets. Reactions are identified by their
//! reactant and product multisets ([`ReactionKey`]), never by their catalysts, which allows
//! catalysis to be reassigned in place (see [`ReactionSet::get_mut`]).
//!
//! The textual notation `label: a+b [c,{d,e}] -> f` is implemented by [`Reaction`]'s
//! `FromStr` and `Display` instances.

use std::collections::BTreeSet;

mod network;
mod notation;
mod reaction;
mod reaction_set;


pub use network::ReactionNetwork;
pub use notation::{NOT_CATALYSED, ParseError, render_reaction};
pub use reaction::{Reaction, ReactionKey};
pub use reaction_set::ReactionSet;

/// A molecular species identifier.
pub type Agent = String;

/// An ordered set of agents (ordering keeps all algorithms deterministic).
pub type AgentSet = BTreeSet<Agent>;

/// One alternative catalyst set of a reaction; all members must be present.
pub type CatalystSet = BTreeSet<Agent>;
