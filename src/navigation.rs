use crate::output;
use crate::types::Team;

/// A view the listing page can send the user to.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Team detail, carrying the record so the detail view need not refetch it.
    TeamDetail { id: String, team: Box<Team> },
    CreateTeam,
}

impl Route {
    pub fn team_detail(team: &Team) -> Self {
        Route::TeamDetail {
            id: team.id.clone(),
            team: Box::new(team.clone()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::TeamDetail { id, .. } => format!("/teams/{id}"),
            Route::CreateTeam => "/teams/create".to_string(),
        }
    }
}

pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Stands in for the router when running in a terminal: prints where the
/// user would go and whatever state travels with them.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, route: Route) {
        tracing::debug!(path = %route.path(), "navigate");

        match &route {
            Route::TeamDetail { team, .. } => {
                output::print_navigation(&route.path(), Some(team.as_ref()));
            }
            Route::CreateTeam => output::print_navigation(&route.path(), None),
        }
    }
}
