//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`tape`]: Current state and input tape, or the verdict once the run is over
//! - [`stack`]: Stack contents, top first
//! - [`trace`]: Every configuration of the run with the cursor highlighted
//! - [`table`]: Transition table with the next instruction highlighted
//! - [`status`]: Status bar with keybindings and playback state
//! - `utils`: Shared block, scrolling and styling helpers
//!
//! Each pane module exports a stateless `render_*` function. Scroll offsets
//! are owned by the caller and passed in by mutable reference.

mod utils;

pub mod stack;
pub mod status;
pub mod table;
pub mod tape;
pub mod trace;

// Re-export render functions for convenience
pub use stack::render_stack_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use table::render_table_pane;
pub use tape::{render_tape_pane, TapeRenderData};
pub use trace::{render_trace_pane, TraceRenderData};
