//! PDA definition and its editing operations
//!
//! A [`PdaDefinition`] is edited one discrete action at a time (add/remove
//! symbol, change state count, toggle an accepting state, edit one
//! instruction field). Any edit that changes the domain of the transition
//! table (states × alphabet) clears the table, since old keys may name
//! states or symbols that no longer exist.

use super::errors::DefinitionError;
use super::symbol::{State, Symbol};
use super::table::{Instruction, InstructionField, TransitionKey, TransitionTable};
use log::debug;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone)]
pub struct PdaDefinition {
    /// Alphabet in insertion order (order is for display only)
    alphabet: Vec<Symbol>,
    state_count: usize,
    accepting: FxHashSet<usize>,
    table: TransitionTable,
}

impl Default for PdaDefinition {
    fn default() -> Self {
        Self::new()
    }
}

impl PdaDefinition {
    /// A machine with a single non-accepting state and an empty alphabet
    pub fn new() -> Self {
        PdaDefinition {
            alphabet: Vec::new(),
            state_count: 1,
            accepting: FxHashSet::default(),
            table: TransitionTable::new(),
        }
    }

    // ========== Domain edits (all invalidate the table) ==========

    /// Add a symbol to the alphabet.
    ///
    /// Empty, reserved or duplicate text leaves the alphabet unchanged.
    /// Returns whether the symbol was added.
    pub fn add_symbol(&mut self, text: &str) -> bool {
        let added = match Symbol::new(text) {
            Ok(symbol) if !self.alphabet.contains(&symbol) => {
                self.alphabet.push(symbol);
                true
            }
            _ => false,
        };
        self.invalidate_instructions();
        added
    }

    /// Remove a symbol from the alphabet. Returns whether it was present.
    pub fn remove_symbol(&mut self, text: &str) -> bool {
        let before = self.alphabet.len();
        self.alphabet.retain(|s| s.as_str() != text);
        self.invalidate_instructions();
        self.alphabet.len() != before
    }

    /// Resize the state set. At least one state always exists.
    pub fn set_state_count(&mut self, count: usize) {
        let count = count.max(1);
        self.state_count = count;
        self.accepting.retain(|&state| state < count);
        self.invalidate_instructions();
    }

    fn invalidate_instructions(&mut self) {
        if !self.table.is_empty() {
            debug!(
                "domain changed, dropping {} instruction(s)",
                self.table.len()
            );
        }
        self.table.clear();
    }

    // ========== Edits that keep the table ==========

    /// Flip whether `state` is accepting. Returns the new membership.
    ///
    /// States outside `[0, N)` are ignored and reported as not accepting.
    pub fn toggle_accepting(&mut self, state: usize) -> bool {
        if state >= self.state_count {
            return false;
        }
        if self.accepting.remove(&state) {
            false
        } else {
            self.accepting.insert(state);
            true
        }
    }

    /// Fill the table with one `(unset, ε, ε)` slot per `(state, symbol)`
    pub fn generate_instruction_slots(&mut self) {
        for state in 0..self.state_count {
            for symbol in &self.alphabet {
                self.table
                    .insert(TransitionKey::new(state, symbol.clone()), Instruction::default());
            }
        }
        debug!("generated {} instruction slot(s)", self.table.len());
    }

    /// Overwrite one field of the instruction at `key`.
    ///
    /// A missing slot is created as `(unset, ε, ε)` before the field is
    /// written. Keys and values that fall outside the current domain are
    /// refused.
    pub fn set_instruction(
        &mut self,
        key: TransitionKey,
        field: InstructionField,
    ) -> Result<(), DefinitionError> {
        self.check_state(key.state)?;
        self.check_symbol(&key.symbol)?;
        match &field {
            InstructionField::Target(State::Q(state)) => self.check_state(*state)?,
            InstructionField::Target(State::Sink) => {}
            InstructionField::Pop(Some(symbol)) | InstructionField::Push(Some(symbol)) => {
                self.check_symbol(symbol)?
            }
            InstructionField::Pop(None) | InstructionField::Push(None) => {}
        }

        let slot = self.table.slot_mut(key);
        match field {
            InstructionField::Target(target) => slot.target = Some(target),
            InstructionField::Pop(pop) => slot.pop = pop,
            InstructionField::Push(push) => slot.push = push,
        }
        Ok(())
    }

    /// Set all three fields of the instruction at `(state, symbol)`
    pub fn define(
        &mut self,
        state: usize,
        symbol: &str,
        target: State,
        pop: Option<&str>,
        push: Option<&str>,
    ) -> Result<(), DefinitionError> {
        let key = TransitionKey::new(state, Symbol::new(symbol)?);
        let pop = pop.map(Symbol::new).transpose()?;
        let push = push.map(Symbol::new).transpose()?;
        self.set_instruction(key.clone(), InstructionField::Target(target))?;
        self.set_instruction(key.clone(), InstructionField::Pop(pop))?;
        self.set_instruction(key, InstructionField::Push(push))
    }

    fn check_state(&self, state: usize) -> Result<(), DefinitionError> {
        if state < self.state_count {
            Ok(())
        } else {
            Err(DefinitionError::UnknownState {
                state,
                state_count: self.state_count,
            })
        }
    }

    fn check_symbol(&self, symbol: &Symbol) -> Result<(), DefinitionError> {
        if self.alphabet.contains(symbol) {
            Ok(())
        } else {
            Err(DefinitionError::UnknownSymbol {
                symbol: symbol.to_string(),
            })
        }
    }

    // ========== Queries ==========

    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn is_accepting(&self, state: State) -> bool {
        state.index().is_some_and(|n| self.accepting.contains(&n))
    }

    /// Accepting states in ascending order
    pub fn accepting_states(&self) -> Vec<usize> {
        let mut states: Vec<usize> = self.accepting.iter().copied().collect();
        states.sort_unstable();
        states
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn instruction(&self, key: &TransitionKey) -> Option<&Instruction> {
        self.table.get(key)
    }

    /// Defined instructions, state-major and in alphabet order
    pub fn instructions(&self) -> Vec<(TransitionKey, &Instruction)> {
        let mut rows = Vec::with_capacity(self.table.len());
        for state in 0..self.state_count {
            for symbol in &self.alphabet {
                let key = TransitionKey::new(state, symbol.clone());
                if let Some(instruction) = self.table.get(&key) {
                    rows.push((key, instruction));
                }
            }
        }
        rows
    }

    /// Domain pairs with no usable instruction (missing or unset target)
    pub fn incomplete_slots(&self) -> Vec<TransitionKey> {
        let mut missing = Vec::new();
        for state in 0..self.state_count {
            for symbol in &self.alphabet {
                if self.table.lookup(state, symbol).is_none() {
                    missing.push(TransitionKey::new(state, symbol.clone()));
                }
            }
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.incomplete_slots().is_empty()
    }

    /// Split input text into alphabet symbols by longest match.
    ///
    /// A character that starts no alphabet symbol becomes a one-character
    /// symbol of its own, reserved markers included. Such symbols are never
    /// in the alphabet, so no instruction matches them and the run rejects
    /// when it reaches one.
    pub fn tokenize(&self, input: &str) -> Vec<Symbol> {
        let mut symbols = Vec::new();
        let mut rest = input;
        while let Some(first) = rest.chars().next() {
            let matched = self
                .alphabet
                .iter()
                .filter(|s| rest.starts_with(s.as_str()))
                .max_by_key(|s| s.as_str().len());

            let len = match matched {
                Some(symbol) => {
                    symbols.push(symbol.clone());
                    symbol.as_str().len()
                }
                None => {
                    symbols.push(Symbol::foreign(first));
                    first.len_utf8()
                }
            };
            rest = &rest[len..];
        }
        symbols
    }
}
