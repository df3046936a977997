//! # Router
//!
//! Hosts exactly one active [`Screen`] at a time and swaps it on route
//! switches. Each route is registered with a factory that builds a fresh
//! screen from a context `C` supplied at switch time, so a screen always
//! sees the context as it was when it was created.
//!
//! Every switch bumps a generation counter. Fetch results are tagged with
//! the generation of the screen that asked for them and are dropped if that
//! screen has since been replaced.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use ratatui::{buffer::Buffer, layout::Rect};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::component::{Command, Loaded, Screen, ScreenEvent};

/// Named navigational states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Team list for the configured conference
    Default,
    /// Schedule of the selected team
    Team,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Default, Route::Team];

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Default => "default",
            Route::Team => "team",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.as_str() == s)
            .ok_or_else(|| RouterError::UnknownRoute(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("no route registered for {0:?}")]
    UnknownRoute(String),
}

/// Builds a fresh screen and its init command from the context
pub type RouteFactory<C> = Box<dyn Fn(&C) -> (Box<dyn Screen>, Command) + Send>;

struct ActiveRoute {
    route: Route,
    screen: Box<dyn Screen>,
}

pub struct Router<C> {
    factories: HashMap<Route, RouteFactory<C>>,
    active: Option<ActiveRoute>,
    generation: u64,
}

impl<C> Router<C> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            active: None,
            generation: 0,
        }
    }

    /// Register `factories` and activate `start`
    ///
    /// Returns the start screen's init command for the caller to run.
    pub fn initialize(
        &mut self,
        factories: HashMap<Route, RouteFactory<C>>,
        start: Route,
        ctx: &C,
    ) -> Result<Command, RouterError> {
        if !factories.contains_key(&start) {
            return Err(RouterError::UnknownRoute(start.to_string()));
        }
        self.factories = factories;
        info!("ROUTER: initializing at route={}", start);
        Ok(self.activate(start, ctx))
    }

    /// Check at startup that every route in `routes` has a factory
    pub fn require(&self, routes: &[Route]) -> Result<(), RouterError> {
        match routes.iter().find(|route| !self.factories.contains_key(*route)) {
            Some(missing) => Err(RouterError::UnknownRoute(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Replace the active screen with a fresh one for `route`
    ///
    /// An unregistered route leaves the active route and screen untouched.
    pub fn switch_to(&mut self, route: Route, ctx: &C) -> Command {
        if !self.factories.contains_key(&route) {
            warn!("ROUTER: ignoring switch to unregistered route={}", route);
            return Command::None;
        }
        self.activate(route, ctx)
    }

    fn activate(&mut self, route: Route, ctx: &C) -> Command {
        let Some(factory) = self.factories.get(&route) else {
            return Command::None;
        };
        let (screen, init) = factory(ctx);
        self.generation += 1;
        debug!(
            "ROUTER: active route={} generation={}",
            route, self.generation
        );
        self.active = Some(ActiveRoute { route, screen });
        init
    }

    /// Forward an event to the active screen
    pub fn dispatch(&mut self, event: ScreenEvent) -> Command {
        match self.active.as_mut() {
            Some(active) => active.screen.update(event),
            None => Command::None,
        }
    }

    /// Forward a fetch result if it belongs to the active screen
    pub fn deliver(&mut self, generation: u64, loaded: Loaded) -> Command {
        if generation != self.generation {
            debug!(
                "ROUTER: dropping stale result for generation={} (current={})",
                generation, self.generation
            );
            return Command::None;
        }
        self.dispatch(ScreenEvent::Loaded(loaded))
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        if let Some(active) = self.active.as_mut() {
            active.screen.render(area, buf);
        }
    }

    pub fn active_route(&self) -> Option<Route> {
        self.active.as_ref().map(|active| active.route)
    }

    pub fn active_screen(&self) -> Option<&dyn Screen> {
        self.active.as_ref().map(|active| active.screen.as_ref())
    }

    /// Incremented on every route switch
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<C> Default for Router<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{buffer_lines, key};
    use crossterm::event::KeyCode;
    use ratatui::style::Style;

    /// Screen that records what it was built with and how many keys it saw
    struct LabelScreen {
        label: String,
        keys_seen: usize,
    }

    impl Screen for LabelScreen {
        fn init(&mut self) -> Command {
            Command::None
        }

        fn update(&mut self, event: ScreenEvent) -> Command {
            match event {
                ScreenEvent::Key(_) => {
                    self.keys_seen += 1;
                    Command::None
                }
                ScreenEvent::Loaded(_) => Command::Quit,
            }
        }

        fn render(&mut self, area: Rect, buf: &mut Buffer) {
            buf.set_string(area.x, area.y, format!("{} {}", self.label, self.keys_seen), Style::default());
        }

        fn title(&self) -> String {
            self.label.clone()
        }
    }

    fn label_factory(prefix: &'static str) -> RouteFactory<String> {
        Box::new(move |ctx: &String| {
            let screen = LabelScreen {
                label: format!("{}:{}", prefix, ctx),
                keys_seen: 0,
            };
            (Box::new(screen) as Box<dyn Screen>, Command::None)
        })
    }

    fn both_routes() -> HashMap<Route, RouteFactory<String>> {
        let mut factories = HashMap::new();
        factories.insert(Route::Default, label_factory("teams"));
        factories.insert(Route::Team, label_factory("team"));
        factories
    }

    fn render(router: &mut Router<String>) -> Vec<String> {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        router.render(buf.area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn test_route_string_round_trip() {
        assert_eq!("default".parse::<Route>(), Ok(Route::Default));
        assert_eq!("team".parse::<Route>(), Ok(Route::Team));
        assert_eq!(
            "game".parse::<Route>(),
            Err(RouterError::UnknownRoute("game".to_string()))
        );
        assert_eq!(Route::Team.to_string(), "team");
    }

    #[test]
    fn test_initialize_activates_start_route() {
        let mut router = Router::new();
        router
            .initialize(both_routes(), Route::Default, &"SEC".to_string())
            .unwrap();

        assert_eq!(router.active_route(), Some(Route::Default));
        assert_eq!(router.generation(), 1);
        assert_eq!(router.active_screen().unwrap().title(), "teams:SEC");
    }

    #[test]
    fn test_initialize_rejects_unregistered_start() {
        let mut factories = HashMap::new();
        factories.insert(Route::Team, label_factory("team"));

        let mut router = Router::new();
        let result = router.initialize(factories, Route::Default, &String::new());

        assert_eq!(
            result.err(),
            Some(RouterError::UnknownRoute("default".to_string()))
        );
        assert_eq!(router.active_route(), None);
    }

    #[test]
    fn test_require_reports_missing_route() {
        let mut factories = HashMap::new();
        factories.insert(Route::Default, label_factory("teams"));

        let mut router = Router::new();
        router
            .initialize(factories, Route::Default, &String::new())
            .unwrap();

        assert_eq!(router.require(&[Route::Default]), Ok(()));
        assert_eq!(
            router.require(&Route::ALL),
            Err(RouterError::UnknownRoute("team".to_string()))
        );
    }

    #[test]
    fn test_switch_reads_context_at_switch_time() {
        let mut router = Router::new();
        router
            .initialize(both_routes(), Route::Default, &"before".to_string())
            .unwrap();

        router.switch_to(Route::Team, &"after".to_string());

        assert_eq!(router.active_route(), Some(Route::Team));
        assert_eq!(router.active_screen().unwrap().title(), "team:after");
        assert_eq!(router.generation(), 2);
    }

    #[test]
    fn test_switch_builds_fresh_screen() {
        let mut router = Router::new();
        let ctx = "x".to_string();
        router.initialize(both_routes(), Route::Default, &ctx).unwrap();

        router.dispatch(ScreenEvent::Key(key(KeyCode::Down)));
        router.dispatch(ScreenEvent::Key(key(KeyCode::Down)));
        assert_eq!(render(&mut router)[0].trim_end(), "teams:x 2");

        router.switch_to(Route::Team, &ctx);
        router.switch_to(Route::Default, &ctx);
        assert_eq!(render(&mut router)[0].trim_end(), "teams:x 0");
    }

    #[test]
    fn test_switch_to_unregistered_route_is_ignored() {
        let mut factories = HashMap::new();
        factories.insert(Route::Default, label_factory("teams"));

        let mut router = Router::new();
        let ctx = "SEC".to_string();
        router.initialize(factories, Route::Default, &ctx).unwrap();
        router.dispatch(ScreenEvent::Key(key(KeyCode::Down)));
        let before = render(&mut router);

        let command = router.switch_to(Route::Team, &ctx);

        assert!(matches!(command, Command::None));
        assert_eq!(router.active_route(), Some(Route::Default));
        assert_eq!(router.generation(), 1);
        assert_eq!(render(&mut router), before);
    }

    #[test]
    fn test_dispatch_before_initialize_is_noop() {
        let mut router: Router<String> = Router::new();
        let command = router.dispatch(ScreenEvent::Key(key(KeyCode::Enter)));
        assert!(matches!(command, Command::None));
        assert_eq!(router.active_route(), None);
    }

    #[test]
    fn test_deliver_drops_stale_generation() {
        let mut router = Router::new();
        let ctx = String::new();
        router.initialize(both_routes(), Route::Default, &ctx).unwrap();
        let stale = router.generation();
        router.switch_to(Route::Team, &ctx);

        let dropped = router.deliver(stale, Loaded::Teams(Ok(Vec::new())));
        assert!(matches!(dropped, Command::None));

        let current = router.deliver(router.generation(), Loaded::Teams(Ok(Vec::new())));
        assert!(matches!(current, Command::Quit));
    }
}
