//! Transition table: `(state, symbol) -> Instruction`

use super::symbol::{fmt_operand, State, Symbol};
use rustc_hash::FxHashMap;
use std::fmt;

/// Identifies at most one [`Instruction`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionKey {
    pub state: usize,
    pub symbol: Symbol,
}

impl TransitionKey {
    pub fn new(state: usize, symbol: Symbol) -> Self {
        TransitionKey { state, symbol }
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "δ(q{}, {})", self.state, self.symbol)
    }
}

/// What a transition does: move to `target`, optionally pop, optionally push.
///
/// `None` for `pop`/`push` is `ε`. A `None` target means the slot was
/// generated but never filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instruction {
    pub target: Option<State>,
    pub pop: Option<Symbol>,
    pub push: Option<Symbol>,
}

impl Instruction {
    pub fn new(target: State, pop: Option<Symbol>, push: Option<Symbol>) -> Self {
        Instruction {
            target: Some(target),
            pop,
            push,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.target.is_some()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(target) => write!(f, "{}", target)?,
            None => f.write_str("?")?,
        }
        write!(
            f,
            ", pop {}, push {}",
            fmt_operand(self.pop.as_ref()),
            fmt_operand(self.push.as_ref())
        )
    }
}

/// A single-field edit applied by `set_instruction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionField {
    Target(State),
    Pop(Option<Symbol>),
    Push(Option<Symbol>),
}

/// Instruction storage keyed by structured `(state, symbol)` pairs
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    entries: FxHashMap<TransitionKey, Instruction>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &TransitionKey) -> Option<&Instruction> {
        self.entries.get(key)
    }

    /// Instruction that can drive execution: present with a target set
    pub fn lookup(&self, state: usize, symbol: &Symbol) -> Option<&Instruction> {
        self.entries
            .get(&TransitionKey::new(state, symbol.clone()))
            .filter(|instruction| instruction.is_complete())
    }

    pub fn insert(&mut self, key: TransitionKey, instruction: Instruction) {
        self.entries.insert(key, instruction);
    }

    /// Slot for `key`, created as `(unset, ε, ε)` if missing
    pub fn slot_mut(&mut self, key: TransitionKey) -> &mut Instruction {
        self.entries.entry(key).or_default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
