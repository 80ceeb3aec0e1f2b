//! Compact fixed-width summary of one team.

use colored::{ColoredString, Colorize};

use crate::output::truncate;
use crate::types::Team;

/// Total card width including borders.
pub const CARD_WIDTH: usize = 36;
const INNER_WIDTH: usize = CARD_WIDTH - 4;
const GUTTER: &str = "  ";

fn noop() {}

#[derive(Clone, Copy)]
enum LineStyle {
    Title,
    Muted,
    Plain,
    Rated,
}

impl LineStyle {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            LineStyle::Title => text.bold(),
            LineStyle::Muted => text.bright_black(),
            LineStyle::Plain => text.normal(),
            LineStyle::Rated => text.yellow(),
        }
    }
}

pub struct TeamSummaryCard<'a, F = fn()> {
    team: &'a Team,
    number: Option<usize>,
    on_click: F,
}

impl<'a> TeamSummaryCard<'a> {
    pub fn new(team: &'a Team) -> Self {
        Self {
            team,
            number: None,
            on_click: noop,
        }
    }
}

impl<'a, F> TeamSummaryCard<'a, F> {
    /// Set the callback run on activation.
    pub fn on_click<G: FnMut()>(self, on_click: G) -> TeamSummaryCard<'a, G> {
        TeamSummaryCard {
            team: self.team,
            number: self.number,
            on_click,
        }
    }

    /// Show a 1-based number in the top border so the card can be picked by number.
    pub fn numbered(mut self, number: usize) -> Self {
        self.number = Some(number);
        self
    }

    fn avatar(&self) -> String {
        match self.team.logo() {
            Some(_) => "[◉]".to_string(),
            None => format!("({})", self.team.initials()),
        }
    }

    fn subtitle(&self) -> String {
        let location = self.team.location.trim();
        let founded = self
            .team
            .founded_year
            .as_ref()
            .map(|year| format!("Est. {year}"));

        match (location.is_empty(), founded) {
            (false, Some(founded)) => format!("{location} · {founded}"),
            (false, None) => location.to_string(),
            (true, Some(founded)) => founded,
            (true, None) => String::new(),
        }
    }

    fn counts(&self) -> String {
        format!(
            "W {}  L {}  D {}  MP {}",
            self.team.wins, self.team.losses, self.team.draws, self.team.matches_played
        )
    }

    fn top_border(&self) -> String {
        let label = self.number.map(|n| format!(" {n} ")).unwrap_or_default();
        let fill = (CARD_WIDTH - 3).saturating_sub(label.chars().count());
        format!("╭─{label}{}╮", "─".repeat(fill))
    }

    fn bottom_border() -> String {
        format!("╰{}╯", "─".repeat(CARD_WIDTH - 2))
    }

    fn body(&self) -> Vec<(String, LineStyle)> {
        let rating = self.team.rating();
        let rating_style = if rating.average().is_some() {
            LineStyle::Rated
        } else {
            LineStyle::Muted
        };

        vec![
            (
                format!("{} {}", self.avatar(), self.team.name.trim()),
                LineStyle::Title,
            ),
            (self.subtitle(), LineStyle::Muted),
            (self.counts(), LineStyle::Plain),
            (rating.to_string(), rating_style),
        ]
    }

    /// Card rows without any terminal styling.
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = vec![self.top_border()];
        lines.extend(
            self.body()
                .into_iter()
                .map(|(text, _)| format!("│ {} │", pad(&text))),
        );
        lines.push(Self::bottom_border());
        lines
    }

    /// Card rows styled for the terminal. Padding is applied before styling so
    /// escape codes do not skew the layout.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.top_border().bright_black().to_string()];
        lines.extend(self.body().into_iter().map(|(text, style)| {
            format!(
                "{} {} {}",
                "│".bright_black(),
                style.paint(&pad(&text)),
                "│".bright_black()
            )
        }));
        lines.push(Self::bottom_border().bright_black().to_string());
        lines
    }
}

impl<F: FnMut()> TeamSummaryCard<'_, F> {
    pub fn activate(&mut self) {
        (self.on_click)();
    }
}

fn pad(text: &str) -> String {
    let text = truncate(text, INNER_WIDTH);
    let width = text.chars().count();
    format!("{text}{}", " ".repeat(INNER_WIDTH.saturating_sub(width)))
}

/// Lay numbered cards out `columns` to a row, in list order.
pub fn render_grid(teams: &[Team], columns: usize) -> String {
    let columns = columns.max(1);
    let cards: Vec<Vec<String>> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| TeamSummaryCard::new(team).numbered(i + 1).lines())
        .collect();

    let mut rows = Vec::new();
    for chunk in cards.chunks(columns) {
        let height = chunk.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let row: Vec<&str> = chunk
                .iter()
                .filter_map(|card| card.get(line).map(String::as_str))
                .collect();
            rows.push(row.join(GUTTER));
        }
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(json: &str) -> Team {
        serde_json::from_str(json).unwrap()
    }

    fn rovers() -> Team {
        team(
            r#"{
                "_id": "64f1",
                "name": "Riverside Rovers",
                "location": "Riverside",
                "foundedYear": 1902,
                "logoUrl": "https://cdn.example.com/rovers.png",
                "wins": 10,
                "losses": 2,
                "draws": 3,
                "matchesPlayed": 15,
                "ratingAvg": 4.5,
                "ratingCount": 10
            }"#,
        )
    }

    #[test]
    fn test_full_card() {
        let team = rovers();
        let lines = TeamSummaryCard::new(&team).plain_lines();

        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("[◉] Riverside Rovers"));
        assert!(lines[2].contains("Riverside · Est. 1902"));
        assert!(lines[3].contains("W 10  L 2  D 3  MP 15"));
        assert!(lines[4].contains("★★★★★ 4.5/5 (10)"));
    }

    #[test]
    fn test_card_without_optional_fields() {
        let team = team(r#"{"_id": "t1", "name": "Harbour City"}"#);
        let lines = TeamSummaryCard::new(&team).plain_lines();

        assert!(lines[1].contains("(HC) Harbour City"));
        assert!(lines[3].contains("W 0  L 0  D 0  MP 0"));
        assert!(lines[4].contains("☆☆☆☆☆ No Rating"));
    }

    #[test]
    fn test_zero_rating_shows_no_rating() {
        let team = team(r#"{"_id": "t1", "ratingAvg": 0, "ratingCount": 4}"#);
        let lines = TeamSummaryCard::new(&team).plain_lines();
        assert!(lines[4].contains("No Rating"));
    }

    #[test]
    fn test_lines_have_fixed_width() {
        let mut team = rovers();
        team.name = "A Very Long Team Name That Will Not Fit On The Card".to_string();
        let lines = TeamSummaryCard::new(&team).numbered(12).plain_lines();

        for line in &lines {
            assert_eq!(line.chars().count(), CARD_WIDTH, "{line}");
        }
        assert!(lines[0].starts_with("╭─ 12 ─"));
        assert!(lines[1].contains("..."));
    }

    #[test]
    fn test_activate_runs_callback_once_per_activation() {
        let team = rovers();
        let mut clicks = 0;
        {
            let mut card = TeamSummaryCard::new(&team).on_click(|| clicks += 1);
            card.activate();
            card.activate();
        }
        assert_eq!(clicks, 2);
    }

    #[test]
    fn test_grid_keeps_list_order() {
        let mut second = rovers();
        second.id = "b".to_string();
        second.name = "Second".to_string();
        let mut third = rovers();
        third.id = "c".to_string();
        third.name = "Third".to_string();
        let teams = vec![rovers(), second, third];

        colored::control::set_override(false);
        let grid = render_grid(&teams, 2);
        let lines: Vec<&str> = grid.lines().collect();

        // two rows of cards, six lines each
        assert_eq!(lines.len(), 12);
        assert!(lines[1].find("Riverside Rovers").unwrap() < lines[1].find("Second").unwrap());
        assert!(lines[7].contains("Third"));
    }
}
