// Scientific calculator for the terminal

use std::fs::File;
use std::io;
use std::sync::Mutex;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use scicalc::ui::App;

/// Log file written when `RUST_LOG` is set
const LOG_FILE: &str = "calculator.log";

/// Install a file-backed subscriber when `RUST_LOG` is set. The TUI owns
/// stdout and stderr, so logs never go to the terminal.
fn init_logging() -> io::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = init_logging() {
        eprintln!("Warning: could not open {}: {}", LOG_FILE, e);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new();
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
