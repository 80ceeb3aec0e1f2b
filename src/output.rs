use std::sync::OnceLock;

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;
use crate::types::Team;

/// Global output settings, fixed once at startup
static FORMAT: OnceLock<OutputFormat> = OnceLock::new();
static QUIET: OnceLock<bool> = OnceLock::new();

pub fn set_format(format: OutputFormat) {
    let _ = FORMAT.set(format);
}

pub fn set_quiet(quiet: bool) {
    let _ = QUIET.set(quiet);
}

pub fn format() -> OutputFormat {
    FORMAT.get().copied().unwrap_or_default()
}

pub fn is_json_output() -> bool {
    matches!(format(), OutputFormat::Json)
}

fn is_quiet() -> bool {
    QUIET.get().copied().unwrap_or(false)
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "W")]
    wins: u32,
    #[tabled(rename = "L")]
    losses: u32,
    #[tabled(rename = "D")]
    draws: u32,
    #[tabled(rename = "MP")]
    matches_played: u32,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl TeamRow {
    fn new(number: usize, team: &Team) -> Self {
        Self {
            number,
            name: truncate(&team.name, 30),
            location: truncate(&team.location, 24),
            wins: team.wins,
            losses: team.losses,
            draws: team.draws,
            matches_played: team.matches_played,
            rating: team.rating().label(),
            id: team.id.clone(),
        }
    }
}

/// Print a table or JSON depending on output mode
pub fn print_table<T, R, F>(items: &[T], to_row: F)
where
    T: Serialize,
    R: Tabled,
    F: Fn(usize, &T) -> R,
{
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(items).unwrap_or_default());
    } else {
        let rows: Vec<R> = items
            .iter()
            .enumerate()
            .map(|(i, item)| to_row(i + 1, item))
            .collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
    }
}

/// Print the teams currently on the page in the selected format. `rendered`
/// is the page's own card view, used for the default format.
pub fn print_teams(teams: &[Team], rendered: &str) {
    match format() {
        OutputFormat::Json => print_table(teams, TeamRow::new),
        OutputFormat::Table if !teams.is_empty() => print_table(teams, TeamRow::new),
        _ => println!("{rendered}"),
    }
}

/// Print a message (skipped in quiet mode, simple object in JSON mode)
pub fn print_message(message: &str) {
    if is_quiet() {
        return;
    }
    if is_json_output() {
        println!("{}", serde_json::json!({ "message": message }));
    } else {
        println!("{message}");
    }
}

#[derive(Serialize)]
struct Navigation<'a> {
    navigate: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a Team>,
}

/// Print a navigation target and the record carried along with it
pub fn print_navigation(path: &str, state: Option<&Team>) {
    if is_json_output() {
        let navigation = Navigation {
            navigate: path,
            state,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&navigation).unwrap_or_default()
        );
        return;
    }

    println!("{} {}", "→".cyan().bold(), path.cyan());
    if let Some(team) = state {
        println!("{}", team.name.bold());
        if !team.location.is_empty() {
            println!("Location: {}", team.location);
        }
        if let Some(year) = &team.founded_year {
            println!("Founded:  {year}");
        }
        if let Some(logo) = team.logo() {
            println!("Logo:     {logo}");
        }
        println!(
            "Record:   {}W {}L {}D in {} matches",
            team.wins, team.losses, team.draws, team.matches_played
        );
        println!("Rating:   {}", team.rating().colored());
    }
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
