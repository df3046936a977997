use std::sync::Arc;

use chrono::Utc;
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::{debug, info, warn};

use crate::schedule::{derive_rows, ScheduleRow};
use crate::tui::component::{Command, DataFetchError, LoadState, Loaded, Screen, ScreenEvent};
use crate::tui::effects::DataEffects;
use crate::tui::keys::{KeyAction, KeyMap};
use crate::tui::router::Route;
use crate::tui::widgets::{Column, DataTable, KeyHint, MessagePanel, RenderableWidget};
use crate::types::{Game, Team};

const COLUMNS: [Column; 5] = [
    Column::new("Week", 5),
    Column::new("Time", 20),
    Column::new("Opponent", 24),
    Column::new("Result", 6),
    Column::new("Score", 8),
];

/// Props for [`TeamScreen`]
#[derive(Clone)]
pub struct TeamProps {
    /// Team chosen on the teams screen; `None` if the route was entered
    /// without a selection
    pub team: Option<Team>,
    pub season: i32,
    /// chrono strftime pattern for the Time column
    pub time_format: String,
    pub effects: Arc<DataEffects>,
    pub keys: KeyMap,
}

/// One team's season schedule
pub struct TeamScreen {
    props: TeamProps,
    games: Vec<Game>,
    rows: Vec<ScheduleRow>,
    table: DataTable,
    load: LoadState,
}

impl TeamScreen {
    pub fn new(props: TeamProps) -> Self {
        Self {
            props,
            games: Vec::new(),
            rows: Vec::new(),
            table: DataTable::new(COLUMNS.to_vec()),
            load: LoadState::Loading,
        }
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    fn fetch(&mut self) -> Command {
        match &self.props.team {
            Some(team) => {
                self.load = LoadState::Loading;
                self.props.effects.fetch_games(&team.school, self.props.season)
            }
            None => {
                warn!("TEAM: no team selected");
                self.load = LoadState::Failed(DataFetchError("no team selected".to_string()));
                Command::None
            }
        }
    }

    fn on_loaded(&mut self, loaded: Loaded) -> Command {
        let school = match &self.props.team {
            Some(team) => team.school.clone(),
            None => return Command::None,
        };
        match loaded {
            Loaded::Games(Ok(games)) => {
                info!(
                    "TEAM: loaded {} games for team={} season={}",
                    games.len(),
                    school,
                    self.props.season
                );
                self.rows = derive_rows(&games, &school, Utc::now(), &self.props.time_format);
                self.table
                    .set_rows(self.rows.iter().map(ScheduleRow::cells).collect());
                self.table.focus();
                self.games = games;
                self.load = LoadState::Ready;
            }
            Loaded::Games(Err(err)) => {
                warn!("TEAM: failed to load games for team={}: {}", school, err);
                self.table.blur();
                self.load = LoadState::Failed(err);
            }
            Loaded::Teams(_) => debug!("TEAM: ignoring teams result"),
        }
        Command::None
    }

    fn selected_game(&self) -> Option<&Game> {
        self.table.selected().and_then(|index| self.games.get(index))
    }
}

impl Screen for TeamScreen {
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
            Some(KeyAction::Select) => match self.selected_game() {
                Some(game) => {
                    // No game detail route yet; record the choice and stay here
                    info!(
                        "TEAM: selected week {} ({} vs {}), no game view available",
                        game.week, game.home_team, game.away_team
                    );
                    Command::SetGame(game.clone())
                }
                None => Command::None,
            },
            Some(KeyAction::Back) => Command::Navigate(Route::Default),
            Some(KeyAction::Retry) if matches!(self.load, LoadState::Failed(_)) => self.fetch(),
            _ => {
                self.table.handle_key(&key);
                Command::None
            }
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        match &self.load {
            LoadState::Loading => MessagePanel::loading("schedule").render(area, buf),
            LoadState::Failed(err) => {
                let hint = if self.props.team.is_some() {
                    format!("Press {} to retry", self.props.keys.hint(KeyAction::Retry))
                } else {
                    format!("Press {} to go back", self.props.keys.hint(KeyAction::Back))
                };
                MessagePanel::error(&err.0, Some(hint)).render(area, buf)
            }
            LoadState::Ready if self.rows.is_empty() => {
                MessagePanel::error("no games scheduled", None).render(area, buf)
            }
            LoadState::Ready => self.table.render(area, buf),
        }
    }

    fn title(&self) -> String {
        match &self.props.team {
            Some(team) => format!("{} · {} Schedule", team.display_name(), self.props.season),
            None => format!("{} Schedule", self.props.season),
        }
    }

    fn hints(&self) -> Vec<KeyHint> {
        let keys = &self.props.keys;
        let mut hints = vec![KeyHint::new("↑/↓", "navigate")];
        if matches!(self.load, LoadState::Failed(_)) && self.props.team.is_some() {
            hints.push(KeyHint::new(keys.hint(KeyAction::Retry), "retry"));
        }
        hints.push(KeyHint::new(keys.hint(KeyAction::Back), "back"));
        hints.push(KeyHint::new(keys.hint(KeyAction::Quit), "quit"));
        hints
    }
}
