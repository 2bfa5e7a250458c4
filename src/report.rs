//! Plain-text rendering of definitions and runs, used by `--report`

use crate::automaton::PdaDefinition;
use crate::engine::Run;
use std::fmt::Write;

/// Summary of the machine: alphabet, states, accepting set and table
pub fn describe_definition(definition: &PdaDefinition) -> String {
    let mut out = String::new();
    let alphabet: Vec<&str> = definition.alphabet().iter().map(|s| s.as_str()).collect();
    let accepting: Vec<String> = definition
        .accepting_states()
        .iter()
        .map(|state| format!("q{}", state))
        .collect();

    let _ = writeln!(out, "Alphabet:  {{ {} }}", alphabet.join(", "));
    let _ = writeln!(out, "States:    {}", definition.state_count());
    let _ = writeln!(out, "Accepting: {{ {} }}", accepting.join(", "));
    let _ = writeln!(out, "Transitions:");
    let rows = definition.instructions();
    if rows.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (key, instruction) in rows {
        let _ = writeln!(out, "  {} = ({})", key, instruction);
    }
    out
}

/// One line per configuration followed by the verdict
pub fn describe_run(run: &Run) -> String {
    let mut out = String::new();
    let width = run.trace.len().to_string().len();
    for (index, configuration) in run.trace.iter().enumerate() {
        let remaining = configuration.remaining_text();
        let _ = writeln!(
            out,
            "{:>width$}  {:<4} {:<16} [{}]",
            index,
            configuration.state.to_string(),
            if remaining.is_empty() { "ε" } else { remaining.as_str() },
            configuration.stack_text(),
            width = width
        );
    }
    let _ = writeln!(out, "{}", run.verdict);
    out
}
