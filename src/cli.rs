use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Cards,
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "teams")]
#[command(about = "Browse and search sports teams from the command line", version)]
#[command(after_help = "EXAMPLES:
    teams list                        Show every team as cards
    teams search rovers               Search teams by name
    teams browse                      Interactive listing page
    teams list --format table         Show every team as a table")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the teams API (overrides TEAMS_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (cards, table, json)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "cards")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress informational messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all teams
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    teams list
    teams list --columns 2
    teams list --format json"
    )]
    List(GridArgs),
    /// Search teams by free text
    #[command(
        alias = "s",
        after_help = "EXAMPLES:
    teams search rovers
    teams search \"riverside rovers\" --format table"
    )]
    Search(SearchArgs),
    /// Browse teams interactively
    #[command(
        alias = "b",
        after_help = "EXAMPLES:
    teams browse
    teams browse --columns 4"
    )]
    Browse(GridArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    teams completions bash > ~/.bash_completion.d/teams
    teams completions zsh > ~/.zfunc/_teams
    teams completions fish > ~/.config/fish/completions/teams.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    teams init")]
    Init,
}

#[derive(Args, Clone)]
pub struct GridArgs {
    /// Cards per row (default: from config, else 3)
    #[arg(long, short)]
    pub columns: Option<usize>,
}

#[derive(Args, Clone)]
pub struct SearchArgs {
    /// Search text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    #[command(flatten)]
    pub grid: GridArgs,
}

impl SearchArgs {
    pub fn query(&self) -> String {
        self.query.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_words() {
        let cli = Cli::try_parse_from(["teams", "search", "riverside", "rovers", "-c", "2"]).unwrap();
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query(), "riverside rovers");
                assert_eq!(args.grid.columns, Some(2));
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["teams", "search"]).is_err());
    }

    #[test]
    fn test_json_flag_overrides_format() {
        let cli = Cli::try_parse_from(["teams", "list", "--format", "table", "--json"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Json);

        let cli = Cli::try_parse_from(["teams", "ls"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Cards);
    }

    #[test]
    fn test_global_api_url() {
        let cli =
            Cli::try_parse_from(["teams", "browse", "--api-url", "https://teams.example.com"])
                .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("https://teams.example.com"));
    }
}
