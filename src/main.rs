#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::fs;
use std::io::{self, stdout};
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_appender::non_blocking::WorkerGuard;

use keycheat::storage::ItemStore;
use keycheat::tui::App;

const LOG_FILE: &str = "keycheat.log";

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _log_guard = init_logging()?;

    let store = ItemStore::new()?;
    tracing::info!(
        path = %store.path().display(),
        items = store.items().len(),
        "starting"
    );

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(store);
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    match result {
        Err(e) => {
            tracing::error!(error = %e, "fatal error, exiting");
            Err(e.into())
        }
        Ok(()) => {
            tracing::info!("exiting");
            restore_result.map_err(Into::into)
        }
    }
}

/// Sends tracing output to a file in the data directory; stdout belongs to the TUI.
///
/// The returned guard must stay alive until exit so buffered lines are flushed.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn init_logging() -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let log_dir = dirs::data_dir()
        .map(|dir| dir.join("keycheat"))
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| err as Box<dyn std::error::Error>)?;
    Ok(guard)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
