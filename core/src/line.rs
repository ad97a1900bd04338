use crate::error::Violation;
use crate::State;

/// Tags exactly one child per line as the default.
pub(crate) const DEFAULT_MARKER: char = '*';
/// Separates a state's name from its child list.
pub(crate) const SEPARATOR: char = '=';

/// Parses a single declaration line.
///
/// The checks run in a fixed order and the first failure wins: the marker
/// count, then the separator count. Whitespace is insignificant anywhere in
/// the line. Child tokens are otherwise taken verbatim, so a trailing comma
/// yields an empty child name.
pub(crate) fn parse_line(text: &str) -> Result<State, Violation> {
    if text.chars().filter(|c| *c == DEFAULT_MARKER).count() != 1 {
        return Err(Violation::DefaultMarker);
    }
    let compact = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();
    let (name, child_list) = {
        let mut halves = compact.split(SEPARATOR);
        match (halves.next(), halves.next(), halves.next()) {
            (Some(name), Some(child_list), None) => (name, child_list),
            _ => return Err(Violation::Separator),
        }
    };
    let mut children = child_list
        .split(',')
        .map(str::to_owned)
        .collect::<Vec<_>>();
    // The lone `*` may still sit left of `=`, where it marks nothing.
    let Some(marked) = children.iter().position(|c| c.contains(DEFAULT_MARKER)) else {
        return Err(Violation::DefaultMarker);
    };
    children[marked] = children[marked].replace(DEFAULT_MARKER, "");
    let default_child = children[marked].clone();
    Ok(State {
        name: name.to_owned(),
        children,
        default_child,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_may_prefix_or_suffix_the_child() {
        for text in ["a=b,c*", "a=b,*c"] {
            let state = parse_line(text).unwrap();
            assert_eq!(state.children, ["b", "c"]);
            assert_eq!(state.default_child, "c");
        }
    }

    #[test]
    fn marker_violations() {
        assert_eq!(parse_line("a=b,c").unwrap_err(), Violation::DefaultMarker);
        assert_eq!(parse_line("a=b**,c*").unwrap_err(), Violation::DefaultMarker);
        assert_eq!(parse_line("").unwrap_err(), Violation::DefaultMarker);
        // one `*` overall, but on the name rather than a child
        assert_eq!(parse_line("a*=b,c").unwrap_err(), Violation::DefaultMarker);
    }

    #[test]
    fn separator_violations() {
        assert_eq!(parse_line("a*bc").unwrap_err(), Violation::Separator);
        assert_eq!(parse_line("a*=b=c").unwrap_err(), Violation::Separator);
    }

    #[test]
    fn empty_tokens_pass_through() {
        let state = parse_line("a=b*,").unwrap();
        assert_eq!(state.children, ["b", ""]);

        let state = parse_line("a=*,b").unwrap();
        assert_eq!(state.children, ["", "b"]);
        assert_eq!(state.default_child, "");
    }
}
