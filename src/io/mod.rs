//! Reading and writing reaction networks in the `.crs` text format.
//!
//! ```text
//! # comment (usually the file name)
//!
//! Food: a,b,c
//!
//! r1: a+b [{c},{d,e}] -> f
//! r2: x [] -> z
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. The `Food:` line lists the food
//! agents separated by `,` (surrounding whitespace is ignored). Every other line is a
//! reaction in the notation understood by [`Reaction`]'s `FromStr` instance.

use crate::model::{AgentSet, NOT_CATALYSED, ParseError, Reaction, ReactionNetwork, render_reaction};
use log::{info, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;


const FOOD_PREFIX: &str = "Food:";

/// Failures of [`read_network`] and [`write_network`].
#[derive(Debug, Error)]
pub enum NetworkFileError {
    #[error("file `{}` not found", .0.display())]
    NotFound(PathBuf),
    #[error("line {line}: {source}")]
    Parse {
        /// One-based line number within the file.
        line: usize,
        source: ParseError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Options of [`write_network`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteOptions {
    /// Replace the destination file if it already exists.
    pub overwrite: bool,
    /// Write uncatalyzed reactions with a [`NOT_CATALYSED`] catalyst instead of `[]`.
    pub empty_catalyst_placeholder: bool,
}

/// Result of a [`write_network`] call that did not fail.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WriteOutcome {
    Written,
    /// The destination exists and [`WriteOptions::overwrite`] was not set.
    SkippedExisting,
}

/// Parse the contents of a `.crs` file.
///
/// A reaction whose only catalyst is the [`NOT_CATALYSED`] placeholder is read as
/// uncatalyzed. Duplicate reactions (identical reactants and products) are ignored.
pub fn parse_network(content: &str) -> Result<ReactionNetwork, NetworkFileError> {
    let mut network = ReactionNetwork::default();
    let mut has_food = false;

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(food) = line.strip_prefix(FOOD_PREFIX) {
            if has_food {
                warn!("Line {}: repeated `Food:` line replaces the previous one.", index + 1);
            }
            network.food_set = parse_food(food);
            has_food = true;
            continue;
        }

        let mut reaction = line
            .parse::<Reaction>()
            .map_err(|source| NetworkFileError::Parse {
                line: index + 1,
                source,
            })?;

        if is_placeholder(&reaction) {
            reaction.set_catalyst_sets(Vec::new());
        }

        let label = reaction.label().to_string();
        if !network.reactions.insert(reaction) {
            warn!(
                "Line {}: reaction `{}` duplicates an earlier reaction and is ignored.",
                index + 1,
                label
            );
        }
    }

    if !has_food {
        warn!("No `Food:` line found; using an empty food set.");
    }

    Ok(network)
}

fn parse_food(items: &str) -> AgentSet {
    items
        .split(',')
        .map(str::trim)
        .filter(|it| !it.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_placeholder(reaction: &Reaction) -> bool {
    match reaction.catalyst_sets() {
        [set] => set.len() == 1 && set.contains(NOT_CATALYSED),
        _ => false,
    }
}

/// Read a network from a `.crs` file.
pub fn read_network(path: impl AsRef<Path>) -> Result<ReactionNetwork, NetworkFileError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NetworkFileError::NotFound(path.to_path_buf())
        } else {
            NetworkFileError::Io(e)
        }
    })?;
    let network = parse_network(&content)?;
    info!(
        "Loaded `{}` with {} reactions and {} food agents.",
        path.display(),
        network.reactions.len(),
        network.food_set.len()
    );
    Ok(network)
}

/// Render a network in the `.crs` format with `title` as the leading comment.
pub fn render_network(
    network: &ReactionNetwork,
    title: &str,
    empty_catalyst_placeholder: bool,
) -> String {
    let food: Vec<&str> = network.food_set.iter().map(String::as_str).collect();
    let mut result = format!("# {}\n\n{} {}\n\n", title, FOOD_PREFIX, food.join(","));
    for reaction in &network.reactions {
        result.push_str(&render_reaction(reaction, empty_catalyst_placeholder));
        result.push('\n');
    }
    result
}

/// Write a network to a `.crs` file.
///
/// An existing file is left untouched unless [`WriteOptions::overwrite`] is set; this is
/// reported as [`WriteOutcome::SkippedExisting`] rather than an error.
pub fn write_network(
    network: &ReactionNetwork,
    path: impl AsRef<Path>,
    options: WriteOptions,
) -> Result<WriteOutcome, NetworkFileError> {
    let path = path.as_ref();
    if path.exists() && !options.overwrite {
        warn!("File `{}` already exists. Not writing.", path.display());
        return Ok(WriteOutcome::SkippedExisting);
    }

    let title = path.display().to_string();
    let content = render_network(network, &title, options.empty_catalyst_placeholder);
    std::fs::write(path, content)?;
    info!(
        "Written {} reactions to `{}`.",
        network.reactions.len(),
        path.display()
    );
    Ok(WriteOutcome::Written)
}
