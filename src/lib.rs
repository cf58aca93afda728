use crate::model::{AgentSet, ReactionSet};

#[cfg(test)]
mod test_utils;

pub mod caf;
pub mod closure;
pub mod enumeration;
pub mod io;
pub mod model;
pub mod persistent;
pub mod raf;

/// A utility method for printing useful metadata of reaction sets.
fn log_reactions(set: &ReactionSet) -> String {
    format!("reactions={}; labels={:?}", set.len(), set.labels())
}

/// A utility method for printing useful metadata of agent sets.
fn log_agents(set: &AgentSet) -> String {
    format!("agents={}", set.len())
}

/// Extract the "simple name" of a type argument at compile time.
///
/// In the future, this should be a `const fn`, but `type_name` and `unwrap_or` are not
/// yet stabilized as `const` functions (even thought they probably are).
fn simple_type_name<T>() -> &'static str {
    std::any::type_name::<T>().split("::").last().unwrap_or("?")
}
