use clap::{CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::Shell;
use repodiscover::commands::{self, ExploreOptions, IssueOptions};
use repodiscover::{ApiClient, Difficulty, DiscoverConfig, Result, SortKey};

#[derive(Parser)]
#[command(name = "repodiscover")]
#[command(about = "Find beginner-friendly open source projects and good first issues", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Backend URL for this run (overrides config and REPODISCOVER_API_URL)
    #[arg(long, global = true, value_hint = ValueHint::Url)]
    api: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore indexed repositories; falls back to a live GitHub search when nothing matches
    #[command(short_flag = 's', visible_alias = "search")]
    Explore {
        /// Name or description to search for
        search: Option<String>,
        /// Only repositories in this language
        #[arg(long, short = 'l')]
        language: Option<String>,
        /// Sort order
        #[arg(long, value_enum, default_value_t = SortKey::CombinedScore)]
        sort: SortKey,
        /// Include repositories without open good first issues
        #[arg(long)]
        any_issues: bool,
        /// Only repositories that are active and merging pull requests
        #[arg(long, short = 'm')]
        merging: bool,
        /// Page number
        #[arg(long, short = 'p', default_value_t = 1)]
        page: u32,
    },
    /// List open, unassigned good first issues
    #[command(short_flag = 'i')]
    Issues {
        /// Title or body text to search for
        search: Option<String>,
        #[arg(long, short = 'l')]
        language: Option<String>,
        #[arg(long, short = 'd', value_enum)]
        difficulty: Option<Difficulty>,
        #[arg(long, short = 'p', default_value_t = 1)]
        page: u32,
    },
    /// Show scores, metrics and recent good first issues of one repository
    #[command(short_flag = 'r')]
    Repo {
        /// Repository id (shown in explore results)
        id: u64,
    },
    /// List open issues of one repository
    RepoIssues {
        id: u64,
        #[arg(long, short = 'p', default_value_t = 1)]
        page: u32,
    },
    /// Show the recorded score and metric history of one repository
    History { id: u64 },
    /// List indexed languages with repository counts
    #[command(short_flag = 'L')]
    Languages,
    /// Show platform-wide totals
    Stats,
    /// Browse interactively, one query per command line
    Interactive {
        /// Browse issues instead of repositories
        #[arg(long)]
        issues: bool,
    },
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Internal command for completion suggestions
    #[command(hide = true)]
    Complete {
        /// What we're completing (languages, sort-keys)
        completion_type: String,
        #[arg(default_value = "")]
        partial: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Save the backend URL
    SetApi {
        #[arg(value_hint = ValueHint::Url)]
        url: String,
    },
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn client_for(config: &DiscoverConfig, api: Option<String>) -> Result<ApiClient> {
    match api {
        Some(url) => {
            let mut config = config.clone();
            config.api_base = url;
            ApiClient::new(&config)
        }
        None => ApiClient::new(config),
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = DiscoverConfig::load()?;

    let Some(command) = cli.command else {
        let mut cmd = Cli::command();
        cmd.print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Completions { shell } => {
            commands::generate_completions(shell, &mut Cli::command());
            Ok(())
        }
        Commands::Config { action } => match action {
            Some(ConfigAction::SetApi { url }) => commands::set_api_base(&mut config, &url),
            Some(ConfigAction::Show) | None => commands::show_config(&config),
        },
        command => {
            let client = client_for(&config, cli.api)?;
            log::debug!("Using backend {}", client.base());
            dispatch(&client, command)
        }
    }
}

fn dispatch(client: &ApiClient, command: Commands) -> Result<()> {
    match command {
        Commands::Explore {
            search,
            language,
            sort,
            any_issues,
            merging,
            page,
        } => {
            commands::explore_repos(
                client,
                ExploreOptions {
                    search,
                    language,
                    sort,
                    require_open_issues: !any_issues,
                    require_active_merge: merging,
                    page,
                },
            );
            Ok(())
        }
        Commands::Issues {
            search,
            language,
            difficulty,
            page,
        } => {
            commands::list_issues(
                client,
                IssueOptions {
                    search,
                    language,
                    difficulty,
                    page,
                },
            );
            Ok(())
        }
        Commands::Repo { id } => commands::show_repo(client, id),
        Commands::RepoIssues { id, page } => commands::show_repo_issues(client, id, page),
        Commands::History { id } => commands::show_history(client, id),
        Commands::Languages => commands::list_languages(client),
        Commands::Stats => commands::show_stats(client),
        Commands::Interactive { issues } => {
            commands::run_interactive(client, issues);
            Ok(())
        }
        Commands::Complete {
            completion_type,
            partial,
        } => {
            commands::complete_suggestions(client, &completion_type, &partial);
            Ok(())
        }
        Commands::Completions { .. } | Commands::Config { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
