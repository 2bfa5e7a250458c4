// Integration tests for the PDA execution engine

use pdatty::automaton::{catalogue, PdaDefinition, StackSymbol, State, Symbol};
use pdatty::engine::{run, run_str, Rejection, Verdict};

fn sym(s: &str) -> Symbol {
    Symbol::new(s).expect("valid symbol")
}

fn parens() -> PdaDefinition {
    let mut pda = PdaDefinition::new();
    pda.add_symbol("(");
    pda.add_symbol(")");
    pda.set_state_count(2);
    pda.toggle_accepting(0);
    pda.define(0, "(", State::Q(0), None, Some("(")).unwrap();
    pda.define(0, ")", State::Q(0), Some("("), None).unwrap();
    pda
}

fn stack_of(cells: &[&str]) -> Vec<StackSymbol> {
    cells
        .iter()
        .map(|cell| match *cell {
            "$" => StackSymbol::Bottom,
            other => StackSymbol::Symbol(sym(other)),
        })
        .collect()
}

#[test]
fn test_single_transition_accepts() {
    let mut pda = PdaDefinition::new();
    pda.add_symbol("a");
    pda.add_symbol("b");
    pda.set_state_count(2);
    pda.toggle_accepting(1);
    pda.define(0, "a", State::Q(1), None, None).unwrap();

    let result = run_str(&pda, "a");
    assert_eq!(result.verdict, Verdict::Accepted);
    assert_eq!(result.trace.len(), 2);

    let first = result.trace.get(0).unwrap();
    assert_eq!(first.state, State::Q(0));
    assert_eq!(first.remaining_text(), "a");
    assert_eq!(first.stack, stack_of(&["$"]));

    let second = result.trace.get(1).unwrap();
    assert_eq!(second.state, State::Q(1));
    assert_eq!(second.remaining_text(), "");
    assert_eq!(second.stack, stack_of(&["$"]));
}

#[test]
fn test_balanced_parentheses() {
    let pda = parens();

    let result = run_str(&pda, "(())");
    assert!(result.verdict.is_accepted());
    assert_eq!(result.trace.last().unwrap().stack, stack_of(&["$"]));

    let result = run_str(&pda, "(()");
    assert!(matches!(
        result.verdict,
        Verdict::Rejected(Rejection::StackNotEmptyAtEnd { height: 1, .. })
    ));
    assert_eq!(result.trace.last().unwrap().stack, stack_of(&["$", "("]));

    let result = run_str(&pda, ")(");
    assert!(matches!(
        result.verdict,
        Verdict::Rejected(Rejection::EmptyStackPop { position: 0, .. })
    ));
    assert_eq!(result.trace.len(), 1);
}

#[test]
fn test_determinism() {
    let pda = catalogue::find("marked-palindrome").unwrap().build().unwrap();
    for input in ["abcba", "abcab", "c", "", "aacaa", "abc"] {
        let first = run_str(&pda, input);
        let second = run_str(&pda, input);
        assert_eq!(first, second, "input {:?}", input);
    }
}

#[test]
fn test_trace_length() {
    let pda = catalogue::find("anbn").unwrap().build().unwrap();

    for input in ["", "ab", "aabb", "aab", "abb"] {
        let result = run_str(&pda, input);
        match result.verdict.rejection().and_then(Rejection::position) {
            Some(k) => assert_eq!(result.trace.len(), k + 1, "input {:?}", input),
            None => assert_eq!(result.trace.len(), input.len() + 1, "input {:?}", input),
        }
    }

    // "abb": second b pops from an empty stack at position 2
    let result = run_str(&pda, "abb");
    assert_eq!(result.trace.len(), 3);
}

#[test]
fn test_stack_floor_invariant() {
    let pda = catalogue::find("marked-palindrome").unwrap().build().unwrap();
    for input in ["abcba", "aabcbaa", "abcab", "bbc", "cab"] {
        let result = run_str(&pda, input);
        for configuration in &result.trace {
            assert!(!configuration.stack.is_empty());
            assert_eq!(configuration.stack[0], StackSymbol::Bottom);
            let bottoms = configuration
                .stack
                .iter()
                .filter(|cell| cell.is_bottom())
                .count();
            assert_eq!(bottoms, 1);
        }
    }
}

#[test]
fn test_idempotent_reset() {
    let mut pda = parens();
    assert!(!pda.table().is_empty());
    pda.add_symbol("[");
    assert!(pda.table().is_empty());

    let mut pda = parens();
    pda.remove_symbol("(");
    assert!(pda.table().is_empty());

    let mut pda = parens();
    pda.set_state_count(pda.state_count());
    assert!(pda.table().is_empty());

    // Nothing to clear is still a clear table
    pda.set_state_count(5);
    assert!(pda.table().is_empty());
}

#[test]
fn test_end_checks_state_before_stack() {
    let mut pda = parens();
    pda.toggle_accepting(0);
    let result = run_str(&pda, "(");
    assert!(matches!(
        result.verdict,
        Verdict::Rejected(Rejection::NotAcceptingAtEnd { state: State::Q(0) })
    ));
}

#[test]
fn test_run_on_pretokenized_input() {
    let mut pda = PdaDefinition::new();
    pda.add_symbol("if");
    pda.add_symbol("fi");
    pda.toggle_accepting(0);
    pda.define(0, "if", State::Q(0), None, Some("if")).unwrap();
    pda.define(0, "fi", State::Q(0), Some("if"), None).unwrap();

    let result = run(&pda, &[sym("if"), sym("if"), sym("fi"), sym("fi")]);
    assert!(result.verdict.is_accepted());

    let result = run_str(&pda, "ififfifi");
    assert!(result.verdict.is_accepted());
    assert_eq!(result.trace.len(), 5);
}

#[test]
fn test_catalogue_samples_accept() {
    for preset in catalogue::PRESETS {
        let pda = preset.build().unwrap();
        let result = run_str(&pda, preset.sample);
        assert!(
            result.verdict.is_accepted(),
            "{} rejected its sample: {}",
            preset.name,
            result.verdict
        );
    }
}

#[test]
fn test_reserved_characters_in_input_reject() {
    let pda = catalogue::find("single-a").unwrap().build().unwrap();

    // (text, index of the reserved marker)
    for (input, position) in [("a$", 1), ("$a", 0), ("aε", 1), ("$$$", 0)] {
        let result = run_str(&pda, input);
        assert_eq!(result.trace.len(), position + 1, "trace for {:?}", input);
        match result.verdict {
            Verdict::Rejected(Rejection::UndefinedInstruction {
                symbol,
                position: at,
                ..
            }) => {
                assert_eq!(at, position, "position for {:?}", input);
                assert!(!pda.alphabet().contains(&symbol));
            }
            other => panic!("{:?} gave {:?}", input, other),
        }
    }

    let result = run_str(&pda, "a$");
    assert!(matches!(
        result.verdict,
        Verdict::Rejected(Rejection::UndefinedInstruction { state: State::Q(1), ref symbol, .. })
            if symbol.as_str() == "$"
    ));
}
