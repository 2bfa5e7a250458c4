//! PDA execution engine
//!
//! This module provides the core execution logic:
//! - [`executor`]: the deterministic step function and run-to-completion
//! - [`verdict`]: [`Verdict`] and the [`Rejection`] taxonomy
//!
//! # Execution Model
//!
//! A run starts in `(q0, input, [$])` and consumes one input symbol per
//! step, appending the resulting configuration to the trace. The whole trace
//! is computed up front; playback only navigates it. A failing step stops the
//! run without appending anything, so the trace always ends at the last
//! configuration the machine actually reached.

pub mod executor;
pub mod verdict;

pub use executor::{run, run_str, step, Run};
pub use verdict::{Rejection, Verdict};
