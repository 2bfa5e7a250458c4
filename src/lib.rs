//! # Introduction
//!
//! pdatty runs a deterministic pushdown automaton over an input string,
//! recording every configuration (state, remaining input, stack) along the
//! way. The recorded trace is then navigated forward and backward, or played
//! back on a timer, through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! PdaDefinition + input → Engine → Trace + Verdict → PlaybackController → TUI
//! ```
//!
//! 1. [`automaton`]: alphabet, states, transition table and the editing
//!    operations on a [`automaton::PdaDefinition`].
//! 2. [`engine`]: the deterministic step function and
//!    [`engine::run`], producing an [`engine::Run`].
//! 3. [`trace`]: [`trace::Configuration`] snapshots and the ordered
//!    [`trace::Trace`].
//! 4. [`playback`]: cursor over a trace with manual stepping and autoplay.
//! 5. [`report`]: plain-text output for `--report`.
//! 6. [`config`]: command-line options.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Machine model
//!
//! One instruction per `(state, symbol)` pair; every step consumes one input
//! symbol, optionally pops, optionally pushes and moves to a target state or
//! the reject sink `qk`. A run is accepted when the input is consumed in an
//! accepting state with only the bottom marker `$` left on the stack.

pub mod automaton;
pub mod config;
pub mod engine;
pub mod playback;
pub mod report;
pub mod trace;
pub mod ui;
