//! Parse hierarchical state machine descriptions into an ordered model.
//!
//! The input is line-oriented: each line declares one state, its children in
//! order, and marks exactly one child with `*` as the default entered when
//! the parent is entered without an explicit target. Whitespace is
//! insignificant anywhere in a line.
//!
//! ```text
//! cat = play*, eat, silent
//! play = play_find*, play_with_ball
//! silent = silent_calm*, silent_sleep
//! ```
//!
//! Malformed lines are skipped, not fatal: [`parse`] returns the states that
//! did parse together with one [`LineError`] per rejected line, and the
//! caller decides how to render the diagnostics.
//!
//! ```
//! let parsed = fsmtree::parse("cat = play*, eat, silent\ncat = play, eat");
//! assert_eq!(parsed.states.len(), 1);
//! assert_eq!(parsed.states[0].default_child, "play");
//! assert_eq!(parsed.errors.len(), 1);
//! assert_eq!(parsed.errors[0].line(), 2);
//! ```
//!
//! The `cli` feature builds a `fsmtree` binary that reads a description from
//! a file or stdin, prints the parsed model, and renders the diagnostics.
#[doc(inline)]
pub use fsmtree_core::{parse, LineError, Parsed, State};
