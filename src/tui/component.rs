use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};
use thiserror::Error;

use super::router::Route;
use super::widgets::KeyHint;
use crate::cfbd::ApiError;
use crate::types::{Game, Team};

/// Core screen trait - the unit a [`Router`](super::router::Router) can host
///
/// A screen is built from its Props by a route factory, initialized once,
/// then receives events until it is superseded by a route switch. Screens
/// never talk to each other or to shared state directly; they describe what
/// should happen by returning a [`Command`].
pub trait Screen: Send {
    /// Called once right after construction
    fn init(&mut self) -> Command;

    /// Handle a key press or the result of a fetch this screen requested
    fn update(&mut self, event: ScreenEvent) -> Command;

    /// Draw into `area`
    fn render(&mut self, area: Rect, buf: &mut Buffer);

    /// Header text shown above the screen
    fn title(&self) -> String;

    /// Key hints for the footer
    fn hints(&self) -> Vec<KeyHint> {
        Vec::new()
    }
}

/// Events delivered to the active screen
#[derive(Debug)]
pub enum ScreenEvent {
    Key(KeyEvent),
    Loaded(Loaded),
}

/// Results of asynchronous fetches
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    Teams(Result<Vec<Team>, DataFetchError>),
    Games(Result<Vec<Game>, DataFetchError>),
}

/// A failed remote call, as shown to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DataFetchError(pub String);

impl From<ApiError> for DataFetchError {
    fn from(err: ApiError) -> Self {
        DataFetchError(err.to_string())
    }
}

pub type FetchFuture = Pin<Box<dyn Future<Output = Loaded> + Send>>;

/// What a screen asks its owner to do after handling an event
pub enum Command {
    None,
    Quit,
    /// Switch the router to another route
    Navigate(Route),
    /// Record the user's team choice in the shell's selection
    SetTeam(Team),
    /// Record the user's game choice in the shell's selection
    SetGame(Game),
    /// Run a fetch off the event thread; the result comes back as
    /// [`ScreenEvent::Loaded`] if the screen is still active
    Fetch(FetchFuture),
    /// Applied in order
    Batch(Vec<Command>),
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::None => write!(f, "None"),
            Command::Quit => write!(f, "Quit"),
            Command::Navigate(route) => write!(f, "Navigate({})", route),
            Command::SetTeam(team) => write!(f, "SetTeam({})", team.school),
            Command::SetGame(game) => {
                write!(f, "SetGame({} vs {})", game.home_team, game.away_team)
            }
            Command::Fetch(_) => write!(f, "Fetch(..)"),
            Command::Batch(commands) => f.debug_list().entries(commands).finish(),
        }
    }
}

/// Load state shared by the data-backed screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(DataFetchError),
}
