//! Command-line options and the settings derived from them

use crate::automaton::catalogue;
use crate::playback::{Mode, DEFAULT_INTERVAL};
use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "pdatty", version, about = "Step through a pushdown automaton run in the terminal")]
pub struct Cli {
    /// Input string (defaults to the machine's sample input)
    pub input: Option<String>,

    /// Built-in machine to run
    #[arg(short, long, default_value = "balanced-parens")]
    pub machine: String,

    /// List built-in machines and exit
    #[arg(long)]
    pub list: bool,

    /// Autoplay interval in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_INTERVAL.as_millis() as u64)]
    pub interval: u64,

    /// Start with autoplay running
    #[arg(long)]
    pub autoplay: bool,

    /// Print the trace and verdict instead of opening the TUI
    #[arg(long)]
    pub report: bool,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Log level used with --log
    #[arg(long, default_value = "debug")]
    pub log_level: LevelFilter,
}

/// Resolved run settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub machine: String,
    pub input: String,
    pub interval: Duration,
    pub mode: Mode,
}

impl Settings {
    /// Resolve CLI options against the catalogue.
    ///
    /// Fails with a message when the machine name is unknown.
    pub fn from_cli(cli: &Cli) -> Result<Self, String> {
        let preset = catalogue::find(&cli.machine).ok_or_else(|| {
            let names: Vec<&str> = catalogue::PRESETS.iter().map(|p| p.name).collect();
            format!(
                "Unknown machine '{}' (available: {})",
                cli.machine,
                names.join(", ")
            )
        })?;

        Ok(Settings {
            machine: preset.name.to_string(),
            input: cli
                .input
                .clone()
                .unwrap_or_else(|| preset.sample.to_string()),
            interval: Duration::from_millis(cli.interval.max(1)),
            mode: if cli.autoplay { Mode::Auto } else { Mode::Manual },
        })
    }
}
