//! Pushdown automaton definitions
//!
//! - [`symbol`]: alphabet symbols, states (including the reject sink `qk`) and stack cells
//! - [`table`]: the `(state, symbol) -> Instruction` transition table
//! - [`definition`]: [`PdaDefinition`] and its editing operations
//! - [`catalogue`]: built-in machines selectable from the command line
//! - [`errors`]: [`DefinitionError`] for refused edits
//!
//! # Model
//!
//! Machines are deterministic: each `(state, symbol)` pair has at most one
//! instruction, and every instruction consumes exactly one input symbol.
//! An instruction optionally pops one symbol, optionally pushes one symbol
//! and moves to a target state. The stack-bottom marker `$` is never touched
//! by instructions.

pub mod catalogue;
pub mod definition;
pub mod errors;
pub mod symbol;
pub mod table;

pub use definition::PdaDefinition;
pub use errors::DefinitionError;
pub use symbol::{StackSymbol, State, Symbol};
pub use table::{Instruction, InstructionField, TransitionKey, TransitionTable};
