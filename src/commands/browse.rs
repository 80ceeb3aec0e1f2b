use std::io::{self, Write};

use colored::Colorize;

use crate::cli::GridArgs;
use crate::client::TeamsClient;
use crate::commands::{terminal_page, TerminalPage};
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::page::CREATE_TEAM;

const PROMPT: &str = "search> ";

/// One line typed at the browse prompt.
#[derive(Debug, PartialEq)]
enum Action {
    /// Plain text is a search; Enter submits it.
    Search(String),
    ShowAll,
    /// 1-based card number.
    Open(usize),
    Create,
    Help,
    Quit,
    Invalid(String),
}

impl Action {
    fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        // `::text` searches for the literal `:text`
        if let Some(literal) = line.trim_start().strip_prefix("::") {
            return Action::Search(format!(":{literal}"));
        }
        let Some(command) = line.trim().strip_prefix(':') else {
            return Action::Search(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("all" | "a"), None) => Action::ShowAll,
            (Some("new" | "n"), None) => Action::Create,
            (Some("help" | "h" | "?"), None) => Action::Help,
            (Some("quit" | "q"), None) => Action::Quit,
            (Some("open" | "o"), Some(number)) => match number.parse::<usize>() {
                Ok(n) if n > 0 => Action::Open(n),
                _ => Action::Invalid(format!("Not a card number: {number}")),
            },
            _ => Action::Invalid(format!("Unknown command: :{command}")),
        }
    }
}

fn print_help(page: &TerminalPage) {
    println!("Type text and press Enter to search.");
    println!("  ::text     search for text starting with ':'");
    println!("  :all       show all teams");
    println!("  :open N    open card N");
    if page.is_login() {
        println!("  :new       {CREATE_TEAM}");
    }
    println!("  :help      show this help");
    println!("  :quit      leave");
}

fn redraw(page: &TerminalPage, columns: usize) {
    println!();
    output::print_teams(page.teams(), &page.render(columns));
    println!();
}

pub async fn run(client: TeamsClient, config: &Config, args: GridArgs) -> Result<()> {
    let columns = config.columns(args.columns);
    let mut page = terminal_page(client, config);

    print_help(&page);
    page.mount().await;
    redraw(&page, columns);

    let stdin = io::stdin();
    loop {
        print!("{}", PROMPT.bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        match Action::parse(&line) {
            Action::Search(query) => {
                let blank = query.trim().is_empty();
                page.set_search_query(query);
                page.search_teams().await;
                if !blank {
                    redraw(&page, columns);
                }
            }
            Action::ShowAll => {
                page.show_all().await;
                redraw(&page, columns);
            }
            Action::Open(number) => {
                page.open_team(number - 1);
            }
            Action::Create => {
                page.create_team();
            }
            Action::Help => print_help(&page),
            Action::Quit => break,
            Action::Invalid(message) => output::print_message(&message),
        }
    }

    Ok(())
}
