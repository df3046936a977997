//! General test utilities for TUI tests.
//!
//! Provides a counting stub data provider, the shared sample data, and
//! buffer helpers used across the widget, screen, and shell tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{buffer::Buffer, layout::Rect};
use reqwest::StatusCode;

use super::app::{AppShell, Effect};
use super::widgets::RenderableWidget;
use crate::cfbd::ApiError;
use crate::data_provider::CfbdDataProvider;
use crate::fixtures;
use crate::types::{Game, Team};

/// Teams used throughout the tests: Georgia, Alabama, Tennessee, ...
pub fn sample_teams() -> Vec<Team> {
    fixtures::mock_teams(Some("SEC"))
}

/// Georgia's 2022 fixture schedule
pub fn sample_games() -> Vec<Game> {
    fixtures::mock_games("Georgia", 2022)
}

/// Shared view of how often a [`StubProvider`] was called
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    teams: Arc<AtomicUsize>,
    games: Arc<AtomicUsize>,
}

impl CallCounter {
    pub fn teams(&self) -> usize {
        self.teams.load(Ordering::SeqCst)
    }

    pub fn games(&self) -> usize {
        self.games.load(Ordering::SeqCst)
    }
}

/// Provider returning canned data, or a 503 for every call when failing
pub struct StubProvider {
    teams: Vec<Team>,
    games: Vec<Game>,
    fail: bool,
    calls: CallCounter,
}

impl StubProvider {
    pub fn new(teams: Vec<Team>, games: Vec<Game>) -> Self {
        Self {
            teams,
            games,
            fail: false,
            calls: CallCounter::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new(), Vec::new())
        }
    }

    pub fn call_counter(&self) -> CallCounter {
        self.calls.clone()
    }

    fn unavailable(path: &str) -> ApiError {
        ApiError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            url: format!("stub://{}", path),
        }
    }
}

#[async_trait]
impl CfbdDataProvider for StubProvider {
    async fn list_teams(&self, _conference: Option<&str>) -> Result<Vec<Team>, ApiError> {
        self.calls.teams.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::unavailable("teams"));
        }
        Ok(self.teams.clone())
    }

    async fn list_games(&self, _team: &str, _season: i32) -> Result<Vec<Game>, ApiError> {
        self.calls.games.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::unavailable("games"));
        }
        Ok(self.games.clone())
    }
}

/// Run every spawned fetch in `effect` to completion, feeding results back
/// into the shell until nothing is pending. Returns true if a quit was seen.
pub async fn settle(shell: &mut AppShell, effect: Effect) -> bool {
    let mut pending = VecDeque::from([effect]);
    let mut quit = false;
    while let Some(effect) = pending.pop_front() {
        match effect {
            Effect::None => {}
            Effect::Quit => quit = true,
            Effect::Spawn { generation, task } => {
                let loaded = task.await;
                pending.push_back(shell.deliver(generation, loaded));
            }
            Effect::Batch(effects) => pending.extend(effects),
        }
    }
    quit
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(area.x + x, area.y + y)].symbol())
                .collect::<String>()
        })
        .collect()
}

pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf);
    buf
}
