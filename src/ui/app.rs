//! Main TUI application state and logic

use crate::automaton::{PdaDefinition, Symbol};
use crate::engine::run_str;
use crate::playback::{Mode, PlaybackController, View};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::info;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Trace,
    Stack,
    Table,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: trace -> stack -> table)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Trace => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Table,
            FocusedPane::Table => FocusedPane::Trace,
        }
    }
}

/// The main application state
pub struct App {
    pub definition: PdaDefinition,

    /// Catalogue name of the machine, for the title bar
    pub machine_name: String,

    /// Tokenized input of the current run
    pub input: Vec<Symbol>,

    pub playback: PlaybackController,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub trace_scroll: usize,
    pub stack_scroll: usize,
    pub table_scroll: usize,

    /// Input being typed while in edit mode
    pub edit_buffer: Option<String>,

    pub should_quit: bool,

    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Run `input` on `definition` and open playback at the first step
    pub fn new(
        definition: PdaDefinition,
        machine_name: String,
        input: &str,
        interval: Duration,
        mode: Mode,
    ) -> Self {
        let symbols = definition.tokenize(input);
        let run = run_str(&definition, input);
        let mut playback = PlaybackController::new(run).with_interval(interval);
        playback.set_mode(mode);

        App {
            definition,
            machine_name,
            input: symbols,
            playback,
            focused_pane: FocusedPane::Trace,
            trace_scroll: 0,
            stack_scroll: 0,
            table_scroll: 0,
            edit_buffer: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.on_tick();

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance autoplay if its timer is due
    fn on_tick(&mut self) {
        if self.playback.mode() != Mode::Auto {
            return;
        }
        if self.playback.tick() {
            self.status_message = "Playing...".to_string();
        }
        if self.playback.is_at_end() {
            self.playback.set_mode(Mode::Manual);
            self.status_message = "Playback complete".to_string();
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Tape (top) | Trace (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(columns[0]);

        // Right column: Stack (top) | Transitions (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        let view = self.playback.current();

        super::panes::render_tape_pane(
            frame,
            left_rows[0],
            super::panes::TapeRenderData {
                machine_name: &self.machine_name,
                input: &self.input,
                view,
                edit_buffer: self.edit_buffer.as_deref(),
            },
            false,
        );

        super::panes::render_trace_pane(
            frame,
            left_rows[1],
            super::panes::TraceRenderData {
                trace: self.playback.trace(),
                verdict: self.playback.verdict(),
                position: self.playback.position(),
            },
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        super::panes::render_stack_pane(
            frame,
            right_rows[0],
            view,
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        super::panes::render_table_pane(
            frame,
            right_rows[1],
            &self.definition,
            view,
            self.focused_pane == FocusedPane::Table,
            &mut self.table_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            super::panes::StatusRenderData {
                message: &self.status_message,
                position: self.playback.position(),
                trace_len: self.playback.len(),
                mode: self.playback.mode(),
                is_editing: self.edit_buffer.is_some(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.edit_buffer.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.playback.set_mode(Mode::Manual);
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.playback.step_forward() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Char('i') => {
                self.playback.set_mode(Mode::Manual);
                self.edit_buffer = Some(self.input.iter().map(Symbol::as_str).collect());
                self.status_message = "Editing input".to_string();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.playback.set_mode(Mode::Manual);
                self.status_message = if self.playback.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Cannot step backward: already at the first configuration".to_string()
                };
            }
            KeyCode::Right => {
                self.playback.set_mode(Mode::Manual);
                self.status_message = if self.playback.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Cannot step forward: run finished".to_string()
                };
            }
            KeyCode::Up => self.scroll(-1),
            KeyCode::Down => self.scroll(1),
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.status_message = match self.playback.toggle_mode() {
                        Mode::Auto if self.playback.is_at_end() => {
                            self.playback.set_mode(Mode::Manual);
                            "Already at the end".to_string()
                        }
                        Mode::Auto => "Playing...".to_string(),
                        Mode::Manual => "Paused".to_string(),
                    };
                }
            }
            KeyCode::Enter => {
                self.playback.set_mode(Mode::Manual);
                self.playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.playback.set_mode(Mode::Manual);
                self.playback.jump_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.edit_buffer.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Esc => {
                self.edit_buffer = None;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Enter => {
                let text = self.edit_buffer.take().unwrap_or_default();
                self.rerun(&text);
            }
            _ => {}
        }
    }

    /// Replace the current run with a run on new input
    pub fn rerun(&mut self, input: &str) {
        info!("re-running {} on {:?}", self.machine_name, input);
        self.input = self.definition.tokenize(input);
        let run = run_str(&self.definition, input);
        self.status_message = format!("Ran {} step(s): {}", run.trace.len() - 1, run.verdict);
        self.playback.load_trace(run);
        self.trace_scroll = 0;
        self.stack_scroll = 0;
    }

    fn scroll(&mut self, delta: isize) {
        match self.focused_pane {
            // The trace pane follows the cursor, so scrolling it steps
            FocusedPane::Trace => {
                self.playback.set_mode(Mode::Manual);
                if delta < 0 {
                    self.playback.step_backward();
                } else {
                    self.playback.step_forward();
                }
            }
            FocusedPane::Stack => {
                self.stack_scroll = self.stack_scroll.saturating_add_signed(delta);
            }
            FocusedPane::Table => {
                self.table_scroll = self.table_scroll.saturating_add_signed(delta);
            }
        }
    }

    /// The configuration or verdict under the cursor
    pub fn current_view(&self) -> View<'_> {
        self.playback.current()
    }
}
