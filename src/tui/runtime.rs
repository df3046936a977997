use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};
use tokio::sync::mpsc;
use tracing::{debug, trace, Instrument};

use super::app::{AppShell, Effect};
use super::component::Loaded;
use super::router::RouterError;

/// Drives an [`AppShell`] from the terminal loop
///
/// Fetches run as tokio tasks. Their results come back over a channel
/// tagged with the generation of the screen that asked for them and are
/// applied on the loop's thread in [`Runtime::process_loaded`], so the
/// shell's selection is never touched from a background task.
pub struct Runtime {
    shell: AppShell,
    loaded_tx: mpsc::UnboundedSender<(u64, Loaded)>,
    loaded_rx: mpsc::UnboundedReceiver<(u64, Loaded)>,
    quit: bool,
}

impl Runtime {
    pub fn new(shell: AppShell) -> Self {
        let (loaded_tx, loaded_rx) = mpsc::unbounded_channel();
        Self {
            shell,
            loaded_tx,
            loaded_rx,
            quit: false,
        }
    }

    /// Initialize the shell and kick off the first screen's fetch
    pub fn start(&mut self) -> Result<(), RouterError> {
        let effect = self.shell.initialize()?;
        self.execute(effect);
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        trace!("KEY: {:?}", key);
        let effect = self.shell.handle_key(key);
        self.execute(effect);
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Quit => {
                debug!("RUNTIME: quit");
                self.quit = true;
            }
            Effect::Spawn { generation, task } => {
                debug!("RUNTIME: spawning fetch for generation={}", generation);
                let tx = self.loaded_tx.clone();
                tokio::spawn(
                    async move {
                        let loaded = task.await;
                        // Receiver is gone only after the loop exits
                        let _ = tx.send((generation, loaded));
                    }
                    .in_current_span(),
                );
            }
            Effect::Batch(effects) => {
                for effect in effects {
                    self.execute(effect);
                }
            }
        }
    }

    /// Apply every fetch result that has arrived
    ///
    /// Returns the number of results processed
    pub fn process_loaded(&mut self) -> usize {
        let mut count = 0;
        while let Ok((generation, loaded)) = self.loaded_rx.try_recv() {
            let effect = self.shell.deliver(generation, loaded);
            self.execute(effect);
            count += 1;
        }
        count
    }

    /// Wait for the next fetch result and apply it
    pub async fn next_loaded(&mut self) -> bool {
        match self.loaded_rx.recv().await {
            Some((generation, loaded)) => {
                let effect = self.shell.deliver(generation, loaded);
                self.execute(effect);
                true
            }
            None => false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.shell.render(area, buf);
    }

    pub fn shell(&self) -> &AppShell {
        &self.shell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::tui::app::Settings;
    use crate::tui::router::Route;
    use crate::tui::testing::{buffer_lines, key, sample_games, sample_teams, StubProvider};
    use crossterm::event::KeyCode;

    fn create_runtime() -> Runtime {
        let stub = StubProvider::new(sample_teams(), sample_games());
        Runtime::new(AppShell::new(Arc::new(stub), Settings::from(&Config::default())))
    }

    #[tokio::test]
    async fn test_start_loads_team_list() {
        let mut runtime = create_runtime();
        runtime.start().unwrap();

        assert!(runtime.next_loaded().await);

        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 8));
        runtime.render(buf.area, &mut buf);
        assert!(buffer_lines(&buf)[3].starts_with("Georgia"));
    }

    #[tokio::test]
    async fn test_select_then_back_runs_on_event_thread() {
        let mut runtime = create_runtime();
        runtime.start().unwrap();
        runtime.next_loaded().await;

        runtime.handle_key(key(KeyCode::Enter));
        assert_eq!(runtime.shell().active_route(), Some(Route::Team));
        assert_eq!(
            runtime.shell().selection().selected_team.as_ref().map(|t| t.school.as_str()),
            Some("Georgia")
        );

        runtime.next_loaded().await;
        runtime.handle_key(key(KeyCode::Backspace));
        assert_eq!(runtime.shell().active_route(), Some(Route::Default));
        assert!(!runtime.should_quit());
    }

    #[tokio::test]
    async fn test_stale_result_is_ignored() {
        let mut runtime = create_runtime();
        runtime.start().unwrap();
        runtime.next_loaded().await;

        // Navigate away before the schedule arrives
        runtime.handle_key(key(KeyCode::Enter));
        runtime.handle_key(key(KeyCode::Backspace));

        runtime.next_loaded().await;
        runtime.next_loaded().await;
        assert_eq!(runtime.process_loaded(), 0);
        assert_eq!(runtime.shell().active_route(), Some(Route::Default));
    }

    #[tokio::test]
    async fn test_quit_key_sets_flag() {
        let mut runtime = create_runtime();
        runtime.start().unwrap();
        runtime.handle_key(key(KeyCode::Char('q')));
        assert!(runtime.should_quit());
    }
}
