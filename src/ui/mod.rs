//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, input edit mode
//! - **[`panes`]**: stateless render functions for each visible pane (tape, trace,
//!   stack, transitions, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`PdaDefinition`] and an input string, then call [`App::run`] to start the
//! event loop.
//!
//! [`PdaDefinition`]: crate::automaton::PdaDefinition
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
