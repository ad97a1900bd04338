use fsmtree::{parse, State};
use pretty_assertions::assert_eq;

#[test]
fn cat_demo_parses_end_to_end() {
    let parsed = parse(include_str!("../demos/cat.fsm"));
    assert!(parsed.errors.is_empty());
    assert_eq!(
        parsed.states[0],
        State {
            name: "cat".into(),
            children: vec!["play".into(), "eat".into(), "silent".into()],
            default_child: "play".into(),
        }
    );
    let names = parsed
        .states
        .iter()
        .map(|state| state.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["cat", "play", "silent"]);
}

#[test]
fn rendered_states_reparse_identically() {
    let parsed = parse(include_str!("../demos/cat.fsm"));
    let rendered = parsed
        .states
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(parse(&rendered).states, parsed.states);
}
