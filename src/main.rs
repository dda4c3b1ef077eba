mod cli;

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use miette::IntoDiagnostic;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use arcadia::config::AppConfig;
use arcadia::core::character::{codec, CreationSession};
use arcadia::core::logging;
use arcadia::tui::app::AppState;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let _log_guard = logging::init_tui(&logging::default_log_dir());
    log::info!("Arcadia v{} starting", arcadia::VERSION);

    let mut config = AppConfig::load(cli.config.as_deref());
    if let Some(dir) = cli.export_dir {
        config.export.dir = Some(dir);
    }

    // Load the startup sheet before touching the terminal so errors print plainly
    let session = match cli.import {
        Some(ref path) => {
            let record = codec::read_import_blocking(path)?;
            log::info!("Opened {} on startup", path.display());
            CreationSession::from_import(record)
        }
        None => CreationSession::new(),
    };

    let mouse = config.tui.mouse_enabled;
    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms.max(1));

    // Setup terminal
    enable_raw_mode().into_diagnostic()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste).into_diagnostic()?;
    if mouse {
        execute!(stdout, EnableMouseCapture).into_diagnostic()?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).into_diagnostic()?;

    // Run the app
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let mut app = AppState::new(event_rx, event_tx, config).with_session(session);
    let result = app.run(&mut terminal, tick_rate).await;

    // Restore terminal
    disable_raw_mode().into_diagnostic()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture).into_diagnostic()?;
    }
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .into_diagnostic()?;
    terminal.show_cursor().into_diagnostic()?;

    if let Err(ref e) = result {
        log::error!("Event loop failed: {e}");
    }
    log::info!("Arcadia shutting down");
    result.into_diagnostic()
}
