use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Which line rule was broken, before the position bookkeeping is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    /// The `*` count is off, or the lone `*` marks no child.
    DefaultMarker,
    /// The `=` count is off.
    Separator,
}

/// A diagnostic for one rejected input line.
///
/// Rejecting a line never aborts the parse; the caller receives every
/// diagnostic alongside the states that did parse and decides how to render
/// them.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum LineError {
    #[error("line {line}: need exactly one `*` marking the default child in `{text}`")]
    #[diagnostic(
        code(fsmtree::default_marker),
        help("mark exactly one child with `*`, e.g. `cat = play*, eat, silent`")
    )]
    MissingOrAmbiguousDefault {
        /// 1-based number of the rejected line.
        line: usize,
        /// The rejected line, verbatim.
        text: String,
        #[source_code]
        src: String,
        #[label("expected one `*` in this line")]
        span: SourceSpan,
    },
    #[error("line {line}: need exactly one `=` between the state name and its children in `{text}`")]
    #[diagnostic(
        code(fsmtree::separator),
        help("declare one state per line, e.g. `cat = play*, eat, silent`")
    )]
    MissingOrAmbiguousSeparator {
        /// 1-based number of the rejected line.
        line: usize,
        /// The rejected line, verbatim.
        text: String,
        #[source_code]
        src: String,
        #[label("expected one `=` in this line")]
        span: SourceSpan,
    },
}

impl LineError {
    pub(crate) fn new(
        violation: Violation,
        line: usize,
        text: &str,
        src: &str,
        span: SourceSpan,
    ) -> Self {
        let text = text.to_owned();
        let src = src.to_owned();
        match violation {
            Violation::DefaultMarker => Self::MissingOrAmbiguousDefault {
                line,
                text,
                src,
                span,
            },
            Violation::Separator => Self::MissingOrAmbiguousSeparator {
                line,
                text,
                src,
                span,
            },
        }
    }

    /// 1-based number of the rejected line.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingOrAmbiguousDefault { line, .. }
            | Self::MissingOrAmbiguousSeparator { line, .. } => *line,
        }
    }

    /// The rejected line, verbatim.
    pub fn text(&self) -> &str {
        match self {
            Self::MissingOrAmbiguousDefault { text, .. }
            | Self::MissingOrAmbiguousSeparator { text, .. } => text,
        }
    }
}
