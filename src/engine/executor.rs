// Execution engine for deterministic pushdown automata

use super::verdict::{Rejection, Verdict};
use crate::automaton::{PdaDefinition, StackSymbol, State, Symbol};
use crate::trace::{Configuration, Trace};
use log::{debug, trace};

/// Trace and verdict of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub trace: Trace,
    pub verdict: Verdict,
}

/// Run `definition` on already tokenized input.
///
/// On an early rejection the trace ends at the configuration the failing
/// step started from. The definition is never modified.
pub fn run(definition: &PdaDefinition, input: &[Symbol]) -> Run {
    let mut current = Configuration::initial(input);
    let mut history = Trace::new();
    history.push(current.clone());

    let mut position = 0;
    loop {
        match step(definition, &current, position) {
            Ok(None) => break,
            Ok(Some(next)) => {
                trace!(
                    "step {}: {} -> {} [{}]",
                    position,
                    current.state,
                    next.state,
                    next.stack_text()
                );
                history.push(next.clone());
                current = next;
                position += 1;
            }
            Err(rejection) => {
                debug!("rejected after {} step(s): {}", position, rejection);
                return Run {
                    trace: history,
                    verdict: Verdict::Rejected(rejection),
                };
            }
        }
    }

    let verdict = final_verdict(definition, &current);
    debug!("input consumed: {}", verdict);
    Run {
        trace: history,
        verdict,
    }
}

/// Tokenize `input` against the definition's alphabet, then [`run`]
pub fn run_str(definition: &PdaDefinition, input: &str) -> Run {
    let symbols = definition.tokenize(input);
    run(definition, &symbols)
}

/// Consume the first remaining symbol of `current`.
///
/// Returns `Ok(None)` when no input is left; the end-of-input verdict is
/// decided by [`run`], not here. `position` is the index of the consumed
/// symbol in the full input and is only used for reporting.
pub fn step(
    definition: &PdaDefinition,
    current: &Configuration,
    position: usize,
) -> Result<Option<Configuration>, Rejection> {
    let Some(symbol) = current.remaining.first() else {
        return Ok(None);
    };

    // The sink has no index, so it never matches a key
    let found = current
        .state
        .index()
        .and_then(|state| definition.table().lookup(state, symbol))
        .and_then(|instruction| instruction.target.map(|target| (instruction, target)));
    let Some((instruction, target)) = found else {
        return Err(Rejection::UndefinedInstruction {
            state: current.state,
            symbol: symbol.clone(),
            position,
        });
    };

    let mut stack = current.stack.clone();

    if let Some(expected) = &instruction.pop {
        match current.top() {
            Some(StackSymbol::Symbol(top)) if top == expected => {
                stack.pop();
            }
            Some(StackSymbol::Symbol(top)) => {
                return Err(Rejection::StackMismatchPop {
                    state: current.state,
                    expected: expected.clone(),
                    found: top.clone(),
                    position,
                });
            }
            Some(StackSymbol::Bottom) | None => {
                return Err(Rejection::EmptyStackPop {
                    state: current.state,
                    expected: expected.clone(),
                    position,
                });
            }
        }
    }

    if let Some(pushed) = &instruction.push {
        stack.push(StackSymbol::Symbol(pushed.clone()));
    }

    Ok(Some(Configuration {
        state: target,
        remaining: current.remaining[1..].to_vec(),
        stack,
    }))
}

fn final_verdict(definition: &PdaDefinition, last: &Configuration) -> Verdict {
    if !definition.is_accepting(last.state) {
        return Verdict::Rejected(Rejection::NotAcceptingAtEnd { state: last.state });
    }
    if last.stack.len() != 1 || !last.stack[0].is_bottom() {
        return Verdict::Rejected(Rejection::StackNotEmptyAtEnd {
            state: last.state,
            height: last.stack_height(),
        });
    }
    Verdict::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::catalogue;
    use test_log::test;

    fn parens() -> PdaDefinition {
        catalogue::find("balanced-parens").unwrap().build().unwrap()
    }

    fn cell(s: &str) -> StackSymbol {
        StackSymbol::Symbol(Symbol::new(s).unwrap())
    }

    #[test]
    fn test_empty_input_depends_on_q0() {
        let mut pda = PdaDefinition::new();
        pda.add_symbol("a");
        let result = run_str(&pda, "");
        assert_eq!(result.trace.len(), 1);
        assert!(matches!(
            result.verdict,
            Verdict::Rejected(Rejection::NotAcceptingAtEnd { state: State::Q(0) })
        ));

        pda.toggle_accepting(0);
        assert!(run_str(&pda, "").verdict.is_accepted());
    }

    #[test]
    fn test_step_pushes_and_pops() {
        let pda = parens();
        let input = pda.tokenize("()");
        let start = Configuration::initial(&input);

        let after_open = step(&pda, &start, 0).unwrap().unwrap();
        assert_eq!(after_open.stack, vec![StackSymbol::Bottom, cell("(")]);
        assert_eq!(after_open.remaining_text(), ")");

        let after_close = step(&pda, &after_open, 1).unwrap().unwrap();
        assert_eq!(after_close.stack, vec![StackSymbol::Bottom]);
        assert!(after_close.remaining.is_empty());
    }

    #[test]
    fn test_step_without_input_halts() {
        let pda = parens();
        // q0 is accepting; an exhausted configuration is not a rejection
        let done = Configuration::initial(&[]);
        assert_eq!(step(&pda, &done, 0), Ok(None));
    }

    #[test]
    fn test_stack_mismatch() {
        let pda = catalogue::find("marked-palindrome").unwrap().build().unwrap();
        let result = run_str(&pda, "abca");
        assert_eq!(result.trace.len(), 4);
        match result.verdict {
            Verdict::Rejected(Rejection::StackMismatchPop {
                expected,
                found,
                position,
                ..
            }) => {
                assert_eq!(expected.as_str(), "a");
                assert_eq!(found.as_str(), "b");
                assert_eq!(position, 3);
            }
            other => panic!("unexpected verdict {:?}", other),
        }
    }

    #[test]
    fn test_sink_dead_ends() {
        let pda = catalogue::find("anbn").unwrap().build().unwrap();
        let result = run_str(&pda, "abab");
        // a, b consumed; a moves to qk; b has no instruction from qk
        assert_eq!(result.trace.len(), 4);
        assert_eq!(result.trace.last().unwrap().state, State::Sink);
        assert!(matches!(
            result.verdict,
            Verdict::Rejected(Rejection::UndefinedInstruction {
                state: State::Sink,
                position: 3,
                ..
            })
        ));

        // Ending in qk is never accepting
        let result = run_str(&pda, "aba");
        assert!(matches!(
            result.verdict,
            Verdict::Rejected(Rejection::NotAcceptingAtEnd { state: State::Sink })
        ));
    }

    #[test]
    fn test_unset_target_is_undefined() {
        let mut pda = PdaDefinition::new();
        pda.add_symbol("a");
        pda.toggle_accepting(0);
        pda.generate_instruction_slots();
        let result = run_str(&pda, "a");
        assert_eq!(result.trace.len(), 1);
        assert!(matches!(
            result.verdict,
            Verdict::Rejected(Rejection::UndefinedInstruction { position: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_character_rejects() {
        let pda = parens();
        let result = run_str(&pda, "(x)");
        assert_eq!(result.trace.len(), 2);
        assert_eq!(
            result.verdict.rejection().map(Rejection::kind),
            Some("no instruction defined")
        );
    }

    #[test]
    fn test_definition_unchanged_by_run() {
        let pda = parens();
        let before = pda.instructions().len();
        let _ = run_str(&pda, "(()))(");
        assert_eq!(pda.instructions().len(), before);
        assert!(pda.is_complete());
    }
}
