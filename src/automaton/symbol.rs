//! Alphabet symbols, states and stack cells
//!
//! - [`Symbol`]: a user-defined alphabet unit (never `ε` or `$`)
//! - [`State`]: a numbered state or the implicit reject sink `qk`
//! - [`StackSymbol`]: a stack cell, either the bottom marker or a [`Symbol`]

use super::errors::DefinitionError;
use std::fmt;

/// Marker meaning "do not pop" / "do not push"
pub const EPSILON: &str = "ε";

/// Stack-bottom marker
pub const BOTTOM: &str = "$";

/// A single unit of the input alphabet.
///
/// Reserved markers cannot be constructed as alphabet symbols, so an
/// instruction can never pop or push the stack-bottom marker. Input
/// characters outside the alphabet (reserved ones included) are carried as
/// foreign symbols that no instruction can reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(text: impl Into<String>) -> Result<Self, DefinitionError> {
        let text = text.into();
        if text.is_empty() {
            return Err(DefinitionError::EmptySymbol);
        }
        if text == EPSILON || text == BOTTOM {
            return Err(DefinitionError::ReservedSymbol { symbol: text });
        }
        Ok(Symbol(text))
    }

    /// Unchecked one-character symbol for input outside the alphabet
    pub(crate) fn foreign(c: char) -> Self {
        Symbol(c.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the symbol in characters
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats an optional stack operand, using `ε` for `None`
pub fn fmt_operand(operand: Option<&Symbol>) -> &str {
    operand.map(Symbol::as_str).unwrap_or(EPSILON)
}

/// A machine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    /// A user state `q0..q(N-1)`
    Q(usize),
    /// The implicit reject sink. Never accepting, never a transition source.
    Sink,
}

impl State {
    pub const INITIAL: State = State::Q(0);

    /// Index of a user state, `None` for the sink
    pub fn index(self) -> Option<usize> {
        match self {
            State::Q(n) => Some(n),
            State::Sink => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Q(n) => write!(f, "q{}", n),
            State::Sink => f.write_str("qk"),
        }
    }
}

/// One cell of the machine stack
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StackSymbol {
    Bottom,
    Symbol(Symbol),
}

impl StackSymbol {
    pub fn is_bottom(&self) -> bool {
        matches!(self, StackSymbol::Bottom)
    }
}

impl fmt::Display for StackSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackSymbol::Bottom => f.write_str(BOTTOM),
            StackSymbol::Symbol(s) => fmt::Display::fmt(s, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_symbols_rejected() {
        assert!(matches!(
            Symbol::new("$"),
            Err(DefinitionError::ReservedSymbol { .. })
        ));
        assert!(matches!(
            Symbol::new("ε"),
            Err(DefinitionError::ReservedSymbol { .. })
        ));
        assert!(matches!(Symbol::new(""), Err(DefinitionError::EmptySymbol)));
        assert_eq!(Symbol::new("ab").unwrap().char_len(), 2);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(State::Q(3).to_string(), "q3");
        assert_eq!(State::Sink.to_string(), "qk");
        assert_eq!(State::Sink.index(), None);
        assert_eq!(fmt_operand(None), "ε");
    }
}
