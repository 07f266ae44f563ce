use std::io::{self, stdout};
use std::time::Instant;

use anyhow::Context;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

mod app;
mod cli;
mod error;
mod logging;
mod models;
mod notices;
mod theme;
mod timers;
mod ui;
mod utils;
mod widgets;

use app::App;
use cli::CliConfig;

fn main() {
    if let Err(err) = try_main() {
        // Startup wiring failed or the loop died: the session cannot
        // proceed. Surface the error and a restart instruction.
        eprintln!("pmlab-tui error: {:#}", err);
        eprintln!("Please restart the application and try again.");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let config = cli::parse_args(std::env::args().skip(1))?;
    logging::init().context("logging setup")?;

    // Setup terminal
    enable_raw_mode().context("entering raw mode")?;
    stdout().execute(EnterAlternateScreen).context("alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).context("terminal backend")?;

    // Run the app
    let result = run(&mut terminal, config);

    // Restore terminal
    disable_raw_mode().context("leaving raw mode")?;
    stdout().execute(LeaveAlternateScreen).context("main screen")?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: CliConfig) -> anyhow::Result<()> {
    let mut app = App::new(config.seed);
    info!(seed = ?config.seed, "application initialized");

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Handle input, then apply any timers that came due.
        if event::poll(config.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, Instant::now()) {
                    break;
                }
            }
        }
        app.on_tick(Instant::now());
    }

    Ok(())
}
