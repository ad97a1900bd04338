//! A parser for hierarchical state machine descriptions.
//!
//! See the `fsmtree` crate for more documentation.
mod error;
mod line;

use std::fmt;

use itertools::Itertools as _;
use miette::SourceSpan;

pub use error::LineError;

/// One state declaration: a name, its children in declaration order, and
/// which child the state enters by default.
///
/// A state is built from a single input line and never merged with other
/// lines: repeated names simply coexist in the output model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub name: String,
    /// Declared child names, in the order they appeared, marker stripped.
    pub children: Vec<String>,
    /// The one entry of `children` that carried the `*` marker.
    pub default_child: String,
}

impl fmt::Display for State {
    /// Renders the canonical declaration line, e.g. `cat = play*, eat, silent`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marked = self
            .children
            .iter()
            .position(|child| *child == self.default_child);
        let children = self
            .children
            .iter()
            .enumerate()
            .map(|(ix, child)| match Some(ix) == marked {
                true => format!("{child}*"),
                false => child.clone(),
            })
            .join(", ");
        write!(f, "{} = {}", self.name, children)
    }
}

/// The outcome of one pass over an input text.
#[derive(Debug, Clone, Default)]
pub struct Parsed {
    /// Successfully parsed states, in input order.
    pub states: Vec<State>,
    /// One diagnostic per rejected line, in input order.
    pub errors: Vec<LineError>,
}

/// Parses a full hierarchy description, one state declaration per line.
///
/// Lines are processed independently and strictly in order. A malformed line
/// contributes a [`LineError`] instead of a [`State`] and never aborts the
/// pass, so the returned model is everything that did parse.
pub fn parse(input: &str) -> Parsed {
    let mut parsed = Parsed::default();
    let mut offset = 0;
    for (ix, raw) in input.split_inclusive('\n').enumerate() {
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);
        match line::parse_line(text) {
            Ok(state) => {
                log::debug!(
                    "state `{}`: default `{}`, children [{}]",
                    state.name,
                    state.default_child,
                    state.children.iter().join(", ")
                );
                parsed.states.push(state);
            }
            Err(violation) => {
                let span = SourceSpan::from((offset, text.len()));
                parsed
                    .errors
                    .push(LineError::new(violation, ix + 1, text, input, span));
            }
        }
        offset += raw.len();
    }
    parsed
}
