use std::collections::HashMap;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};
use tracing::{debug, info};

use super::component::{Command, FetchFuture, Loaded, Screen, ScreenEvent};
use super::effects::DataEffects;
use super::keys::KeyMap;
use super::router::{Route, RouteFactory, Router, RouterError};
use super::screens::{TeamProps, TeamScreen, TeamsProps, TeamsScreen};
use super::widgets::{RenderableWidget, StatusBar, TitleBar};
use crate::config::Config;
use crate::data_provider::CfbdDataProvider;
use crate::types::{Game, Team};

/// The user's most recent choices, shared across route switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub selected_team: Option<Team>,
    pub selected_game: Option<Game>,
}

/// Inputs the shell hands to screens through their Props
#[derive(Debug, Clone)]
pub struct Settings {
    pub conference: String,
    pub season: i32,
    pub time_format: String,
    pub keys: KeyMap,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Settings {
            conference: config.conference.clone(),
            season: config.season,
            time_format: config.time_format.clone(),
            keys: config.keys.clone(),
        }
    }
}

/// What the runtime has to do after the shell handled an event
pub enum Effect {
    None,
    Quit,
    /// Run `task` in the background and hand its result back through
    /// [`AppShell::deliver`] with the same generation
    Spawn { generation: u64, task: FetchFuture },
    Batch(Vec<Effect>),
}

impl Effect {
    pub fn is_quit(&self) -> bool {
        match self {
            Effect::Quit => true,
            Effect::Batch(effects) => effects.iter().any(Effect::is_quit),
            _ => false,
        }
    }

    fn batch(effects: Vec<Effect>) -> Effect {
        let mut effects: Vec<Effect> = effects
            .into_iter()
            .filter(|effect| !matches!(effect, Effect::None))
            .collect();
        match effects.len() {
            0 => Effect::None,
            1 => effects.remove(0),
            _ => Effect::Batch(effects),
        }
    }
}

/// Process-level root component
///
/// Owns the [`Selection`] and the [`Router`], intercepts the global quit
/// key, and interprets the commands screens return. Selection is only ever
/// written here, on the event thread, while applying a screen's command.
pub struct AppShell {
    router: Router<Selection>,
    selection: Selection,
    settings: Settings,
    effects: Arc<DataEffects>,
}

impl AppShell {
    pub fn new(client: Arc<dyn CfbdDataProvider>, settings: Settings) -> Self {
        Self {
            router: Router::new(),
            selection: Selection::default(),
            settings,
            effects: Arc::new(DataEffects::new(client)),
        }
    }

    /// Register the routes and open the team list
    pub fn initialize(&mut self) -> Result<Effect, RouterError> {
        let mut factories: HashMap<Route, RouteFactory<Selection>> = HashMap::new();
        factories.insert(Route::Default, self.teams_factory());
        factories.insert(Route::Team, self.team_factory());

        let init = self.router.initialize(factories, Route::Default, &self.selection)?;
        self.router.require(&Route::ALL)?;
        let generation = self.router.generation();
        Ok(self.apply(init, generation))
    }

    fn teams_factory(&self) -> RouteFactory<Selection> {
        let props = TeamsProps {
            conference: self.settings.conference.clone(),
            effects: self.effects.clone(),
            keys: self.settings.keys.clone(),
        };
        Box::new(move |_selection: &Selection| {
            let mut screen = TeamsScreen::new(props.clone());
            let init = screen.init();
            (Box::new(screen) as Box<dyn Screen>, init)
        })
    }

    fn team_factory(&self) -> RouteFactory<Selection> {
        let season = self.settings.season;
        let time_format = self.settings.time_format.clone();
        let effects = self.effects.clone();
        let keys = self.settings.keys.clone();
        Box::new(move |selection: &Selection| {
            let mut screen = TeamScreen::new(TeamProps {
                team: selection.selected_team.clone(),
                season,
                time_format: time_format.clone(),
                effects: effects.clone(),
                keys: keys.clone(),
            });
            let init = screen.init();
            (Box::new(screen) as Box<dyn Screen>, init)
        })
    }

    /// Handle a key press; quit bindings never reach the active screen
    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        if self.settings.keys.is_quit(&key) {
            info!("APP: quit requested");
            return Effect::Quit;
        }
        let generation = self.router.generation();
        let command = self.router.dispatch(ScreenEvent::Key(key));
        self.apply(command, generation)
    }

    /// Hand a finished fetch to the screen that asked for it
    pub fn deliver(&mut self, generation: u64, loaded: Loaded) -> Effect {
        let command = self.router.deliver(generation, loaded);
        self.apply(command, generation)
    }

    /// Interpret a command issued by the screen of `generation`
    fn apply(&mut self, command: Command, generation: u64) -> Effect {
        match command {
            Command::None => Effect::None,
            Command::Quit => Effect::Quit,
            Command::SetTeam(team) => {
                debug!("APP: selection team={}", team.school);
                self.selection.selected_team = Some(team);
                Effect::None
            }
            Command::SetGame(game) => {
                debug!("APP: selection game week={}", game.week);
                self.selection.selected_game = Some(game);
                Effect::None
            }
            Command::Navigate(route) => {
                let init = self.router.switch_to(route, &self.selection);
                let generation = self.router.generation();
                self.apply(init, generation)
            }
            Command::Fetch(task) => Effect::Spawn { generation, task },
            Command::Batch(commands) => {
                let effects = commands
                    .into_iter()
                    .map(|command| self.apply(command, generation))
                    .collect();
                Effect::batch(effects)
            }
        }
    }

    /// Title bar, active screen, status bar
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(area);

        let (title, hints) = match self.router.active_screen() {
            Some(screen) => (screen.title(), screen.hints()),
            None => (String::new(), Vec::new()),
        };

        TitleBar::new(title).render(header, buf);
        self.router.render(body, buf);
        StatusBar::new(hints)
            .with_context(format!("{} {}", self.settings.conference, self.settings.season))
            .render(footer, buf);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_route(&self) -> Option<Route> {
        self.router.active_route()
    }

    pub fn generation(&self) -> u64 {
        self.router.generation()
    }
}
