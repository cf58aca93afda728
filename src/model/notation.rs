use crate::model::{Agent, CatalystSet, Reaction};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Placeholder catalyst written for uncatalyzed reactions when requested, because some
/// tools do not accept an empty catalyst list `[]`.
pub const NOT_CATALYSED: &str = "NOT_CATALYSED";

/// Raised when a line cannot be interpreted as a reaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid reaction `{text}` (at column {column}, expected {expected})")]
pub struct ParseError {
    /// The offending reaction text.
    pub text: String,
    /// One-based column where parsing failed.
    pub column: usize,
    /// Tokens the parser would have accepted at `column`.
    pub expected: String,
}

peg::parser! {
    grammar reaction_notation() for str {
        rule ws() = [' ' | '\t']*

        rule name() -> &'input str
            = $([c if c.is_alphanumeric() || c == '_']+)

        rule agent() -> Agent
            = n:name() { n.to_string() }

        rule agents() -> Vec<Agent>
            = agent() ++ (ws() "+" ws())

        rule catalyst_set() -> CatalystSet
            = "{" ws() items:(agent() ** (ws() "," ws())) ws() "}" { items.into_iter().collect() }
            / a:agent() { CatalystSet::from([a]) }

        rule catalysts() -> Vec<CatalystSet>
            = "[" ws() sets:(catalyst_set() ** (ws() "," ws())) ws() "]" { sets }

        pub rule reaction() -> Reaction
            = ws() label:name() ws() ":" ws() reactants:agents() ws() catalysts:catalysts()
              ws() "->" ws() products:agents() ws()
            {
                Reaction::new(label, reactants, catalysts, products)
            }
    }
}

impl FromStr for Reaction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        reaction_notation::reaction(s).map_err(|e| ParseError {
            text: s.to_string(),
            column: e.location.column,
            expected: e.expected.to_string(),
        })
    }
}

/// Render a reaction as `label: a+b [c,{d,e}] -> f`.
///
/// Singleton catalyst sets are written without braces. If `empty_catalyst_placeholder`
/// is set, a reaction without catalysts is written as `[NOT_CATALYSED]` instead of `[]`.
pub fn render_reaction(reaction: &Reaction, empty_catalyst_placeholder: bool) -> String {
    let catalysts = if empty_catalyst_placeholder && reaction.catalyst_sets().is_empty() {
        NOT_CATALYSED.to_string()
    } else {
        reaction
            .catalyst_sets()
            .iter()
            .map(render_catalyst_set)
            .collect::<Vec<_>>()
            .join(",")
    };

    format!(
        "{}: {} [{}] -> {}",
        reaction.label(),
        reaction.reactants().join("+"),
        catalysts,
        reaction.products().join("+")
    )
}

fn render_catalyst_set(set: &CatalystSet) -> String {
    match set.first() {
        Some(agent) if set.len() == 1 => agent.clone(),
        _ => {
            let items: Vec<&str> = set.iter().map(String::as_str).collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

impl Display for Reaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render_reaction(self, false))
    }
}
