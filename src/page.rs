//! The team listing page: list state, the two retrievals, and what to show.

use crate::card::{render_grid, TeamSummaryCard};
use crate::client::TeamsApi;
use crate::navigation::{Navigator, Route};
use crate::notify::Notifier;
use crate::types::Team;

pub const FETCH_FAILED: &str = "Failed to fetch teams";
pub const EMPTY_SEARCH: &str = "Please enter a search term";
pub const LOADING: &str = "Loading Teams...";
pub const NO_TEAMS: &str = "No teams found.";
pub const CREATE_TEAM: &str = "Create New Team";
const LOGIN_REQUIRED: &str = "Log in to create a team";

/// What the page shows, derived from `(loading, teams)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Loading,
    Empty,
    Populated(&'a [Team]),
}

impl<'a> View<'a> {
    pub fn of(loading: bool, teams: &'a [Team]) -> Self {
        if loading {
            View::Loading
        } else if teams.is_empty() {
            View::Empty
        } else {
            View::Populated(teams)
        }
    }

    pub fn render(self, columns: usize) -> String {
        match self {
            View::Loading => format!("⠿ {LOADING}"),
            View::Empty => NO_TEAMS.to_string(),
            View::Populated(teams) => render_grid(teams, columns),
        }
    }
}

type ViewListener = Box<dyn FnMut(View<'_>)>;

pub struct TeamListingPage<A, N, R> {
    api: A,
    notifier: N,
    navigator: R,
    is_login: bool,
    teams: Vec<Team>,
    loading: bool,
    search_query: String,
    listener: Option<ViewListener>,
}

impl<A, N, R> TeamListingPage<A, N, R>
where
    A: TeamsApi,
    N: Notifier,
    R: Navigator,
{
    pub fn new(api: A, notifier: N, navigator: R, is_login: bool) -> Self {
        Self {
            api,
            notifier,
            navigator,
            is_login,
            teams: Vec::new(),
            loading: false,
            search_query: String::new(),
            listener: None,
        }
    }

    /// Called with the current view every time `loading` flips.
    pub fn on_view_change(mut self, listener: impl FnMut(View<'_>) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_login(&self) -> bool {
        self.is_login
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn view(&self) -> View<'_> {
        View::of(self.loading, &self.teams)
    }

    /// The page body plus the create call to action when logged in.
    pub fn render(&self, columns: usize) -> String {
        let body = self.view().render(columns);
        if self.is_login {
            format!("[+] {CREATE_TEAM}\n\n{body}")
        } else {
            body
        }
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if let Some(listener) = self.listener.as_mut() {
            listener(View::of(self.loading, &self.teams));
        }
    }

    /// Initial load when the page is first shown.
    pub async fn mount(&mut self) {
        self.load_all_teams().await;
    }

    /// Show All: clear the query and reload the full list.
    pub async fn show_all(&mut self) {
        self.search_query.clear();
        self.load_all_teams().await;
    }

    /// Replace the list with every team. On failure the previous list stays.
    pub async fn load_all_teams(&mut self) {
        self.set_loading(true);

        match self.api.list_teams().await {
            Ok(response) if response.success => {
                tracing::debug!(count = response.data.len(), "loaded teams");
                self.teams = response.data;
            }
            Ok(response) => {
                tracing::warn!(
                    message = response.message.as_deref().unwrap_or_default(),
                    "team listing reported failure"
                );
                self.notifier.notify_error(FETCH_FAILED);
            }
            Err(e) => {
                tracing::warn!(error = %e, "team listing request failed");
                self.notifier.notify_error(FETCH_FAILED);
            }
        }

        self.set_loading(false);
    }

    /// Search by the current query. On failure the list is cleared.
    pub async fn search_teams(&mut self) {
        if self.search_query.trim().is_empty() {
            self.notifier.notify_info(EMPTY_SEARCH);
            return;
        }

        self.set_loading(true);

        match self.api.search_teams(&self.search_query).await {
            Ok(response) => {
                tracing::debug!(
                    query = %self.search_query,
                    count = response.data.len(),
                    "search finished"
                );
                self.teams = response.data;
            }
            Err(e) => {
                tracing::warn!(error = %e, query = %self.search_query, "team search failed");
                self.teams.clear();
                self.notifier.notify_error(FETCH_FAILED);
            }
        }

        self.search_query.clear();
        self.set_loading(false);
    }

    /// Activate the card at `index`, navigating to that team's detail view.
    /// Returns false when there is no such card.
    pub fn open_team(&mut self, index: usize) -> bool {
        let Some(team) = self.teams.get(index) else {
            self.notifier
                .notify_info(&format!("No team numbered {}", index + 1));
            return false;
        };

        let navigator = &mut self.navigator;
        TeamSummaryCard::new(team)
            .on_click(|| navigator.navigate(Route::team_detail(team)))
            .activate();
        true
    }

    /// The create call to action; only available when logged in.
    pub fn create_team(&mut self) -> bool {
        if !self.is_login {
            self.notifier.notify_info(LOGIN_REQUIRED);
            return false;
        }

        self.navigator.navigate(Route::CreateTeam);
        true
    }
}
