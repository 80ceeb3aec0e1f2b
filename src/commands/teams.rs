use crate::cli::{GridArgs, SearchArgs};
use crate::client::TeamsClient;
use crate::commands::terminal_page;
use crate::config::Config;
use crate::error::Result;
use crate::output;

pub async fn list(client: TeamsClient, config: &Config, args: GridArgs) -> Result<()> {
    let columns = config.columns(args.columns);
    let mut page = terminal_page(client, config);

    page.mount().await;

    output::print_teams(page.teams(), &page.render(columns));

    Ok(())
}

pub async fn search(client: TeamsClient, config: &Config, args: SearchArgs) -> Result<()> {
    let columns = config.columns(args.grid.columns);
    let mut page = terminal_page(client, config);

    page.set_search_query(args.query());
    page.search_teams().await;

    output::print_teams(page.teams(), &page.render(columns));

    Ok(())
}
