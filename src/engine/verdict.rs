//! Run outcomes
//!
//! This module defines [`Verdict`] and [`Rejection`], the closed set of
//! reasons a run can be rejected. Rejections are ordinary values returned
//! alongside the partial trace, never panics.

use crate::automaton::{State, Symbol};
use std::fmt;

/// Why a run was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// No usable instruction for the current `(state, symbol)`
    UndefinedInstruction {
        state: State,
        symbol: Symbol,
        position: usize,
    },

    /// Pop requested while only the bottom marker remains
    EmptyStackPop {
        state: State,
        expected: Symbol,
        position: usize,
    },

    /// Pop requested for a symbol that is not on top
    StackMismatchPop {
        state: State,
        expected: Symbol,
        found: Symbol,
        position: usize,
    },

    /// Input exhausted in a non-accepting state
    NotAcceptingAtEnd { state: State },

    /// Input exhausted with symbols above the bottom marker
    StackNotEmptyAtEnd { state: State, height: usize },
}

impl Rejection {
    /// Input position of the failing step, `None` for end-of-input checks
    pub fn position(&self) -> Option<usize> {
        match self {
            Rejection::UndefinedInstruction { position, .. } => Some(*position),
            Rejection::EmptyStackPop { position, .. } => Some(*position),
            Rejection::StackMismatchPop { position, .. } => Some(*position),
            Rejection::NotAcceptingAtEnd { .. } => None,
            Rejection::StackNotEmptyAtEnd { .. } => None,
        }
    }

    /// Short classification for status displays
    pub fn kind(&self) -> &'static str {
        match self {
            Rejection::UndefinedInstruction { .. } => "no instruction defined",
            Rejection::EmptyStackPop { .. } => "pop on empty stack",
            Rejection::StackMismatchPop { .. } => "wrong top-of-stack symbol",
            Rejection::NotAcceptingAtEnd { .. } => "final state not accepting",
            Rejection::StackNotEmptyAtEnd { .. } => "stack not empty",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UndefinedInstruction {
                state,
                symbol,
                position,
            } => {
                write!(
                    f,
                    "No instruction defined for ({}, {}) at input position {}",
                    state, symbol, position
                )
            }
            Rejection::EmptyStackPop {
                state,
                expected,
                position,
            } => {
                write!(
                    f,
                    "Cannot pop '{}' from empty stack in {} at input position {}",
                    expected, state, position
                )
            }
            Rejection::StackMismatchPop {
                state,
                expected,
                found,
                position,
            } => {
                write!(
                    f,
                    "Expected '{}' on top of stack but found '{}' in {} at input position {}",
                    expected, found, state, position
                )
            }
            Rejection::NotAcceptingAtEnd { state } => {
                write!(f, "Input consumed but {} is not accepting", state)
            }
            Rejection::StackNotEmptyAtEnd { state, height } => {
                write!(
                    f,
                    "Input consumed in {} with {} symbol{} left on the stack",
                    state,
                    height,
                    if *height == 1 { "" } else { "s" }
                )
            }
        }
    }
}

impl std::error::Error for Rejection {}

/// Accept/reject outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(rejection) => Some(rejection),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("Accepted"),
            Verdict::Rejected(rejection) => write!(f, "Rejected: {}", rejection),
        }
    }
}
