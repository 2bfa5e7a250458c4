//! Built-in machines
//!
//! Each entry is built through the same editing operations an interactive
//! editor would call, so the catalogue doubles as a usage reference for
//! [`PdaDefinition`].

use super::definition::PdaDefinition;
use super::errors::DefinitionError;
use super::symbol::State;

pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    /// A sample input shown when no input is given
    pub sample: &'static str,
    build: fn() -> Result<PdaDefinition, DefinitionError>,
}

impl Preset {
    pub fn build(&self) -> Result<PdaDefinition, DefinitionError> {
        (self.build)()
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "balanced-parens",
        description: "Balanced parentheses over { (, ) }",
        sample: "(()())",
        build: balanced_parens,
    },
    Preset {
        name: "anbn",
        description: "a^n b^n for n >= 0",
        sample: "aaabbb",
        build: anbn,
    },
    Preset {
        name: "marked-palindrome",
        description: "w c reverse(w) for w over { a, b }",
        sample: "abcba",
        build: marked_palindrome,
    },
    Preset {
        name: "single-a",
        description: "Exactly the string \"a\" (partial table)",
        sample: "a",
        build: single_a,
    },
];

/// Look up a preset by name
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

fn balanced_parens() -> Result<PdaDefinition, DefinitionError> {
    let mut pda = PdaDefinition::new();
    pda.add_symbol("(");
    pda.add_symbol(")");
    pda.set_state_count(1);
    pda.toggle_accepting(0);
    pda.generate_instruction_slots();
    pda.define(0, "(", State::Q(0), None, Some("("))?;
    pda.define(0, ")", State::Q(0), Some("("), None)?;
    Ok(pda)
}

fn anbn() -> Result<PdaDefinition, DefinitionError> {
    let mut pda = PdaDefinition::new();
    pda.add_symbol("a");
    pda.add_symbol("b");
    pda.set_state_count(2);
    pda.toggle_accepting(0);
    pda.toggle_accepting(1);
    pda.generate_instruction_slots();
    // q0 counts a's, q1 matches them against b's
    pda.define(0, "a", State::Q(0), None, Some("a"))?;
    pda.define(0, "b", State::Q(1), Some("a"), None)?;
    pda.define(1, "a", State::Sink, None, None)?;
    pda.define(1, "b", State::Q(1), Some("a"), None)?;
    Ok(pda)
}

fn marked_palindrome() -> Result<PdaDefinition, DefinitionError> {
    let mut pda = PdaDefinition::new();
    for symbol in ["a", "b", "c"] {
        pda.add_symbol(symbol);
    }
    pda.set_state_count(2);
    pda.toggle_accepting(1);
    pda.generate_instruction_slots();
    pda.define(0, "a", State::Q(0), None, Some("a"))?;
    pda.define(0, "b", State::Q(0), None, Some("b"))?;
    pda.define(0, "c", State::Q(1), None, None)?;
    pda.define(1, "a", State::Q(1), Some("a"), None)?;
    pda.define(1, "b", State::Q(1), Some("b"), None)?;
    pda.define(1, "c", State::Sink, None, None)?;
    Ok(pda)
}

fn single_a() -> Result<PdaDefinition, DefinitionError> {
    let mut pda = PdaDefinition::new();
    pda.add_symbol("a");
    pda.add_symbol("b");
    pda.set_state_count(2);
    pda.toggle_accepting(1);
    pda.define(0, "a", State::Q(1), None, None)?;
    Ok(pda)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_build() {
        for preset in PRESETS {
            let pda = preset
                .build()
                .unwrap_or_else(|e| panic!("{} failed to build: {}", preset.name, e));
            assert!(!pda.alphabet().is_empty(), "{}", preset.name);
        }
    }

    #[test]
    fn test_find() {
        assert!(find("anbn").is_some());
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_complete_tables() {
        assert!(find("balanced-parens").unwrap().build().unwrap().is_complete());
        assert!(find("anbn").unwrap().build().unwrap().is_complete());
        assert!(!find("single-a").unwrap().build().unwrap().is_complete());
    }
}
