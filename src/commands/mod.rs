pub mod browse;
pub mod init;
pub mod teams;

use std::io::IsTerminal;

use crate::client::TeamsClient;
use crate::config::Config;
use crate::navigation::TerminalNavigator;
use crate::notify::TerminalNotifier;
use crate::page::{TeamListingPage, View};

pub type TerminalPage = TeamListingPage<TeamsClient, TerminalNotifier, TerminalNavigator>;

/// A listing page wired to the terminal. While a request is in flight the
/// loading placeholder goes to stderr, when stderr is a terminal.
pub fn terminal_page(client: TeamsClient, config: &Config) -> TerminalPage {
    let interactive = std::io::stderr().is_terminal();

    TeamListingPage::new(client, TerminalNotifier, TerminalNavigator, config.is_login())
        .on_view_change(move |view| {
            if interactive && view == View::Loading {
                eprintln!("{}", view.render(0));
            }
        })
}
