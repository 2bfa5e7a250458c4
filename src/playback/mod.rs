//! Step-through playback of a finished run
//!
//! [`PlaybackController`] owns a [`Run`] and a cursor into its trace. The
//! cursor ranges over `[0, len]`: positions below `len` show a
//! configuration, position `len` shows the verdict. Nothing shows both.
//!
//! # Autoplay
//!
//! In [`Mode::Auto`] the controller holds at most one armed timer, a
//! deadline owned by the controller. The event loop calls
//! [`PlaybackController::tick`] regularly; when the deadline has passed the
//! cursor advances and a fresh deadline is armed. Every transition that
//! changes the cursor, the mode or the trace drops the old deadline before
//! arming a new one, so a stale deadline can never advance a newer trace.
//! Dropping the controller drops the timer with it.

mod clock;

pub use clock::{Clock, SystemClock};

use crate::engine::{Run, Verdict};
use crate::trace::{Configuration, Trace};
use log::debug;
use std::time::{Duration, Instant};

/// Delay between automatic steps
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Auto,
    Manual,
}

/// What the display should show at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Configuration(&'a Configuration),
    Verdict(&'a Verdict),
}

/// The single outstanding autoplay deadline
#[derive(Debug)]
struct AutoplayTimer {
    deadline: Instant,
}

#[derive(Debug)]
pub struct PlaybackController<C: Clock = SystemClock> {
    run: Run,
    cursor: usize,
    mode: Mode,
    interval: Duration,
    timer: Option<AutoplayTimer>,
    clock: C,
}

impl PlaybackController<SystemClock> {
    /// Manual-mode controller at the start of `run`
    pub fn new(run: Run) -> Self {
        Self::with_clock(run, SystemClock)
    }
}

impl<C: Clock> PlaybackController<C> {
    pub fn with_clock(run: Run, clock: C) -> Self {
        PlaybackController {
            run,
            cursor: 0,
            mode: Mode::Manual,
            interval: DEFAULT_INTERVAL,
            timer: None,
            clock,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self.rearm();
        self
    }

    // ========== Transitions ==========

    /// Replace the run and rewind. Re-arms the timer in Auto mode.
    pub fn load_trace(&mut self, run: Run) {
        self.timer = None;
        debug!(
            "loaded trace of {} configuration(s), verdict: {}",
            run.trace.len(),
            run.verdict
        );
        self.run = run;
        self.cursor = 0;
        self.rearm();
    }

    /// Advance one position. Returns false at the end.
    pub fn step_forward(&mut self) -> bool {
        let moved = self.advance();
        self.rearm();
        moved
    }

    /// Go back one position. Returns false at the start.
    pub fn step_backward(&mut self) -> bool {
        let moved = self.cursor > 0;
        self.cursor = self.cursor.saturating_sub(1);
        self.rearm();
        moved
    }

    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.rearm();
    }

    /// Jump to the verdict
    pub fn jump_to_end(&mut self) {
        self.cursor = self.len();
        self.rearm();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("playback mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.rearm();
    }

    /// Switch between Auto and Manual, returning the new mode
    pub fn toggle_mode(&mut self) -> Mode {
        let mode = match self.mode {
            Mode::Auto => Mode::Manual,
            Mode::Manual => Mode::Auto,
        };
        self.set_mode(mode);
        mode
    }

    /// Fire the autoplay timer if its deadline has passed.
    ///
    /// Returns whether the cursor advanced.
    pub fn tick(&mut self) -> bool {
        let due = self
            .timer
            .as_ref()
            .is_some_and(|timer| self.clock.now() >= timer.deadline);
        if !due {
            return false;
        }
        let moved = self.advance();
        self.rearm();
        moved
    }

    fn advance(&mut self) -> bool {
        if self.cursor < self.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Drop the current timer and arm a new one if autoplay can continue
    fn rearm(&mut self) {
        self.timer = None;
        if self.mode == Mode::Auto && self.cursor < self.len() {
            self.timer = Some(AutoplayTimer {
                deadline: self.clock.now() + self.interval,
            });
        }
    }

    // ========== Queries ==========

    pub fn current(&self) -> View<'_> {
        match self.run.trace.get(self.cursor) {
            Some(configuration) => View::Configuration(configuration),
            None => View::Verdict(&self.run.verdict),
        }
    }

    /// Cursor position in `[0, len]`
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of configurations in the trace
    pub fn len(&self) -> usize {
        self.run.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.run.trace.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.len()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// When the armed timer will fire, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(|timer| timer.deadline)
    }

    pub fn trace(&self) -> &Trace {
        &self.run.trace
    }

    pub fn verdict(&self) -> &Verdict {
        &self.run.verdict
    }
}

#[cfg(test)]
mod tests {
    use super::clock::tests::FakeClock;
    use super::*;
    use crate::automaton::catalogue;
    use crate::engine::run_str;
    use test_log::test;

    fn parens_run(input: &str) -> Run {
        let pda = catalogue::find("balanced-parens").unwrap().build().unwrap();
        run_str(&pda, input)
    }

    fn controller(input: &str) -> (PlaybackController<FakeClock>, FakeClock) {
        let clock = FakeClock::new();
        let controller = PlaybackController::with_clock(parens_run(input), clock.clone());
        (controller, clock)
    }

    #[test]
    fn test_manual_bounds() {
        let (mut playback, _) = controller("()");
        assert_eq!(playback.len(), 3);
        assert!(!playback.step_backward());
        assert_eq!(playback.position(), 0);

        assert!(playback.step_forward());
        assert!(playback.step_forward());
        assert!(playback.step_forward());
        assert!(!playback.step_forward());
        assert_eq!(playback.position(), 3);
        assert!(playback.is_at_end());
    }

    #[test]
    fn test_view_is_configuration_or_verdict() {
        let (mut playback, _) = controller("(");
        assert!(matches!(playback.current(), View::Configuration(cfg) if cfg.remaining_text() == "("));
        playback.step_forward();
        assert!(matches!(playback.current(), View::Configuration(cfg) if cfg.stack_height() == 1));
        playback.step_forward();
        assert!(matches!(playback.current(), View::Verdict(v) if !v.is_accepted()));
    }

    #[test]
    fn test_autoplay_fires_after_interval() {
        let (mut playback, clock) = controller("()");
        assert!(!playback.is_armed());
        playback.set_mode(Mode::Auto);
        assert!(playback.is_armed());

        clock.advance(Duration::from_millis(999));
        assert!(!playback.tick());
        assert_eq!(playback.position(), 0);

        clock.advance(Duration::from_millis(1));
        assert!(playback.tick());
        assert_eq!(playback.position(), 1);
        // Re-armed from the moment it fired
        assert!(!playback.tick());
    }

    #[test]
    fn test_autoplay_disarms_at_end_and_on_manual() {
        let (mut playback, clock) = controller("(");
        playback.set_mode(Mode::Auto);
        for _ in 0..2 {
            clock.advance(DEFAULT_INTERVAL);
            assert!(playback.tick());
        }
        assert!(playback.is_at_end());
        assert!(!playback.is_armed());

        playback.jump_to_start();
        assert!(playback.is_armed());
        playback.set_mode(Mode::Manual);
        assert!(!playback.is_armed());
        clock.advance(DEFAULT_INTERVAL * 5);
        assert!(!playback.tick());
        assert_eq!(playback.position(), 0);
    }

    #[test]
    fn test_manual_step_reschedules_timer() {
        let (mut playback, clock) = controller("(())");
        playback.set_mode(Mode::Auto);
        clock.advance(Duration::from_millis(600));
        playback.step_forward();
        assert_eq!(playback.position(), 1);

        // Old deadline would have fired here
        clock.advance(Duration::from_millis(600));
        assert!(!playback.tick());
        clock.advance(Duration::from_millis(400));
        assert!(playback.tick());
        assert_eq!(playback.position(), 2);
    }

    #[test]
    fn test_load_trace_resets_cursor_and_timer() {
        let (mut playback, clock) = controller("(())");
        playback.jump_to_end();
        playback.load_trace(parens_run("()"));
        assert_eq!(playback.position(), 0);
        assert_eq!(playback.len(), 3);
        assert!(!playback.is_armed());

        playback.set_mode(Mode::Auto);
        clock.advance(Duration::from_millis(500));
        playback.load_trace(parens_run("(("));
        let deadline = playback.next_deadline().unwrap();
        assert_eq!(deadline, clock.now() + DEFAULT_INTERVAL);
    }

    #[test]
    fn test_manual_and_auto_show_same_sequence() {
        let run = parens_run("(()())");

        let clock = FakeClock::new();
        let mut manual = PlaybackController::with_clock(run.clone(), clock.clone());
        let mut manual_views = vec![format!("{:?}", manual.current())];
        while manual.step_forward() {
            manual_views.push(format!("{:?}", manual.current()));
        }

        let mut auto = PlaybackController::with_clock(run, clock.clone())
            .with_interval(Duration::from_millis(250));
        auto.set_mode(Mode::Auto);
        let mut auto_views = vec![format!("{:?}", auto.current())];
        while auto.is_armed() {
            clock.advance(Duration::from_millis(250));
            if auto.tick() {
                auto_views.push(format!("{:?}", auto.current()));
            }
        }

        assert_eq!(manual_views, auto_views);
        assert_eq!(auto_views.len(), 8);
    }

    #[test]
    fn test_toggle_mode() {
        let (mut playback, _) = controller("()");
        assert_eq!(playback.toggle_mode(), Mode::Auto);
        assert_eq!(playback.toggle_mode(), Mode::Manual);
        assert_eq!(playback.interval(), DEFAULT_INTERVAL);
    }
}
