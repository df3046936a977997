// Module declarations
pub mod widgets;
pub mod screens;

pub mod app;
pub mod component;
pub mod effects;
pub mod keys;
pub mod router;
pub mod runtime;

#[cfg(test)]
pub mod testing;

pub use app::{AppShell, Effect, Selection, Settings};
pub use component::{Command, Screen, ScreenEvent};
pub use effects::DataEffects;
pub use keys::KeyMap;
pub use router::{Route, Router};
pub use runtime::Runtime;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::data_provider::CfbdDataProvider;

/// Main entry point for TUI mode
pub async fn run(client: Arc<dyn CfbdDataProvider>, config: Config) -> Result<(), io::Error> {
    let mut runtime = Runtime::new(AppShell::new(client, Settings::from(&config)));
    runtime
        .start()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut runtime);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    loop {
        // Apply finished fetches FIRST so data loads show on this frame
        let loaded = runtime.process_loaded();
        if loaded > 0 {
            tracing::debug!("LOOP: applied {} fetch results", loaded);
        }

        terminal.draw(|f| {
            let area = f.area();
            runtime.render(area, f.buffer_mut());
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    runtime.handle_key(key);
                }
            }
        }

        if runtime.should_quit() {
            tracing::debug!("LOOP: quitting application");
            return Ok(());
        }
    }
}
