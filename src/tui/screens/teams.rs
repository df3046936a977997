use std::sync::Arc;

use ratatui::{buffer::Buffer, layout::Rect};
use tracing::{debug, info, warn};

use crate::conferences::conference_name;
use crate::tui::component::{Command, LoadState, Loaded, Screen, ScreenEvent};
use crate::tui::effects::DataEffects;
use crate::tui::keys::{KeyAction, KeyMap};
use crate::tui::router::Route;
use crate::tui::widgets::{Column, DataTable, KeyHint, MessagePanel, RenderableWidget};
use crate::types::Team;

const COLUMNS: [Column; 2] = [Column::new("School", 24), Column::new("Mascot", 24)];

/// Props for [`TeamsScreen`]
#[derive(Clone)]
pub struct TeamsProps {
    /// Conference filter passed to the API, e.g. "SEC"
    pub conference: String,
    pub effects: Arc<DataEffects>,
    pub keys: KeyMap,
}

/// List of teams in one conference
pub struct TeamsScreen {
    props: TeamsProps,
    teams: Vec<Team>,
    table: DataTable,
    load: LoadState,
}

impl TeamsScreen {
    pub fn new(props: TeamsProps) -> Self {
        Self {
            props,
            teams: Vec::new(),
            table: DataTable::new(COLUMNS.to_vec()),
            load: LoadState::Loading,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    fn fetch(&mut self) -> Command {
        self.load = LoadState::Loading;
        self.props.effects.fetch_teams(&self.props.conference)
    }

    fn on_loaded(&mut self, loaded: Loaded) -> Command {
        match loaded {
            Loaded::Teams(Ok(teams)) => {
                info!(
                    "TEAMS: loaded {} teams for conference={}",
                    teams.len(),
                    self.props.conference
                );
                self.table.set_rows(
                    teams
                        .iter()
                        .map(|team| vec![team.school.clone(), team.mascot().to_string()])
                        .collect(),
                );
                self.table.focus();
                self.teams = teams;
                self.load = LoadState::Ready;
            }
            Loaded::Teams(Err(err)) => {
                warn!("TEAMS: failed to load conference={}: {}", self.props.conference, err);
                self.table.blur();
                self.load = LoadState::Failed(err);
            }
            Loaded::Games(_) => debug!("TEAMS: ignoring games result"),
        }
        Command::None
    }

    fn selected_team(&self) -> Option<&Team> {
        self.table.selected().and_then(|index| self.teams.get(index))
    }
}

impl Screen for TeamsScreen {
    fn init(&mut self) -> Command {
        self.fetch()
    }

    fn update(&mut self, event: ScreenEvent) -> Command {
        let key = match event {
            ScreenEvent::Loaded(loaded) => return self.on_loaded(loaded),
            ScreenEvent::Key(key) => key,
        };

        match self.props.keys.action(&key) {
            Some(KeyAction::Quit) => Command::Quit,
            Some(KeyAction::Select) => match self.selected_team() {
                Some(team) => {
                    debug!("TEAMS: selected {}", team.school);
                    Command::Batch(vec![Command::SetTeam(team.clone()), Command::Navigate(Route::Team)])
                }
                None => Command::None,
            },
            Some(KeyAction::Retry) if matches!(self.load, LoadState::Failed(_)) => self.fetch(),
            _ => {
                self.table.handle_key(&key);
                Command::None
            }
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        match &self.load {
            LoadState::Loading => MessagePanel::loading("teams").render(area, buf),
            LoadState::Failed(err) => {
                let hint = format!("Press {} to retry", self.props.keys.hint(KeyAction::Retry));
                MessagePanel::error(&err.0, Some(hint)).render(area, buf)
            }
            LoadState::Ready if self.teams.is_empty() => {
                MessagePanel::error("no teams found", None).render(area, buf)
            }
            LoadState::Ready => self.table.render(area, buf),
        }
    }

    fn title(&self) -> String {
        format!("{} Teams", conference_name(&self.props.conference))
    }

    fn hints(&self) -> Vec<KeyHint> {
        let keys = &self.props.keys;
        let mut hints = vec![KeyHint::new("↑/↓", "navigate")];
        match self.load {
            LoadState::Failed(_) => hints.push(KeyHint::new(keys.hint(KeyAction::Retry), "retry")),
            _ => hints.push(KeyHint::new(keys.hint(KeyAction::Select), "view schedule")),
        }
        hints.push(KeyHint::new(keys.hint(KeyAction::Quit), "quit"));
        hints
    }
}
