//! platter - terminal dashboard for a restaurant's menu.
//!
//! Entry point: parses the CLI, loads configuration, sets up file logging
//! and the terminal, then runs the draw/event loop.

mod api;
mod app;
mod cli;
mod config;
mod constants;
mod event;
mod state;
mod theme;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;
use crate::app::App;
use crate::cli::args::{Args, Commands};
use crate::config::Config;
use crate::event::{Event, EventHandler};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    let config = Config::load().with_api_url_override(args.api_url);

    // Non-TUI commands run and exit before any terminal takeover.
    if let Some(Commands::List) = args.command {
        return Ok(cli::commands::run_list(&config.api_url));
    }

    // The guard must outlive the TUI loop or buffered log lines are lost.
    let _log_guard = init_logging();

    let client = ApiClient::new(&config.api_url)?;
    let mut app = App::new(client);
    let events = EventHandler::new(config.tick_rate_ms);

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app, &events);
    ratatui::restore();

    result?;
    Ok(ExitCode::SUCCESS)
}

/// Draw/event loop: render the current state, then block on the next event.
fn run(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;
        match events.next()? {
            Event::Key(key) => app.handle_key(key),
            Event::Tick => app.on_tick(),
            Event::Resize(_, _) => {}
        }
    }
    Ok(())
}

/// Routes tracing output to a file; the TUI owns stdout.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = config::app_dir()?;
    std::fs::create_dir_all(&dir).ok()?;
    let file = tracing_appender::rolling::never(dir, constants::LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
