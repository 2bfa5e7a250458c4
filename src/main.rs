// pdatty: step-through pushdown automaton simulator

use std::fs::File;
use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{Config, WriteLogger};

use pdatty::automaton::catalogue;
use pdatty::config::{Cli, Settings};
use pdatty::engine::run_str;
use pdatty::report;
use pdatty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list {
        for preset in catalogue::PRESETS {
            println!("{:<20} {}  (sample: {})", preset.name, preset.description, preset.sample);
        }
        return Ok(());
    }

    // A terminal logger would draw over the TUI, so logs only go to a file
    if let Some(path) = &cli.log {
        WriteLogger::init(cli.log_level, Config::default(), File::create(path)?)?;
    }

    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Run with --list to see the built-in machines");
            std::process::exit(1);
        }
    };

    let preset = catalogue::find(&settings.machine).ok_or("machine disappeared from catalogue")?;
    let definition = preset.build()?;
    info!("loaded machine {}", preset.name);

    if cli.report {
        let run = run_str(&definition, &settings.input);
        print!("{}", report::describe_definition(&definition));
        println!();
        println!("Input: {:?}", settings.input);
        print!("{}", report::describe_run(&run));
        return Ok(());
    }

    let incomplete = definition.incomplete_slots();
    if !incomplete.is_empty() {
        eprintln!(
            "Note: {} transition(s) have no instruction and will reject when reached",
            incomplete.len()
        );
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(
        definition,
        settings.machine.clone(),
        &settings.input,
        settings.interval,
        settings.mode,
    );
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
