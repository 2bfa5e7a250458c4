//! Errors raised while editing a PDA definition
//!
//! Editing errors are distinct from run rejections: a [`DefinitionError`]
//! means the requested edit was refused and the definition is unchanged.
//! Rejections are reported by the engine as a [`crate::engine::Verdict`].

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// Symbols must contain at least one character
    EmptySymbol,

    /// `ε` and `$` are reserved markers
    ReservedSymbol { symbol: String },

    /// State index outside `[0, N)`
    UnknownState { state: usize, state_count: usize },

    /// Symbol not part of the alphabet
    UnknownSymbol { symbol: String },
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::EmptySymbol => write!(f, "Symbol must not be empty"),
            DefinitionError::ReservedSymbol { symbol } => {
                write!(f, "'{}' is reserved and cannot be an alphabet symbol", symbol)
            }
            DefinitionError::UnknownState { state, state_count } => {
                write!(
                    f,
                    "State q{} does not exist (machine has {} state{})",
                    state,
                    state_count,
                    if *state_count == 1 { "" } else { "s" }
                )
            }
            DefinitionError::UnknownSymbol { symbol } => {
                write!(f, "Symbol '{}' is not in the alphabet", symbol)
            }
        }
    }
}

impl std::error::Error for DefinitionError {}
