// Configuration history for step-through playback

use crate::automaton::{StackSymbol, State, Symbol};

/// Snapshot of the machine between two steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub state: State,
    pub remaining: Vec<Symbol>,
    /// Bottom to top. Always starts with exactly one bottom marker.
    pub stack: Vec<StackSymbol>,
}

impl Configuration {
    /// `(q0, input, [$])`
    pub fn initial(input: &[Symbol]) -> Self {
        Configuration {
            state: State::INITIAL,
            remaining: input.to_vec(),
            stack: vec![StackSymbol::Bottom],
        }
    }

    /// Remaining input joined back into text
    pub fn remaining_text(&self) -> String {
        self.remaining.iter().map(Symbol::as_str).collect()
    }

    /// Stack rendered bottom to top (top last)
    pub fn stack_text(&self) -> String {
        self.stack
            .iter()
            .map(|cell| cell.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn top(&self) -> Option<&StackSymbol> {
        self.stack.last()
    }

    /// Symbols pushed above the bottom marker
    pub fn stack_height(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }
}

/// Ordered history of configurations of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    configurations: Vec<Configuration>,
}

impl Trace {
    pub fn new() -> Self {
        Trace {
            configurations: Vec::new(),
        }
    }

    /// Add a configuration to history
    pub fn push(&mut self, configuration: Configuration) {
        self.configurations.push(configuration);
    }

    /// Get a configuration by index
    pub fn get(&self, index: usize) -> Option<&Configuration> {
        self.configurations.get(index)
    }

    pub fn last(&self) -> Option<&Configuration> {
        self.configurations.last()
    }

    /// Get the number of configurations
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Configuration> {
        self.configurations.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Configuration;
    type IntoIter = std::slice::Iter<'a, Configuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
