pub mod interactive;
pub mod issues;
pub mod list;
pub mod misc;
pub mod repo;
pub mod search;

pub use interactive::run_interactive;
pub use issues::{list_issues, IssueOptions};
pub use list::{list_languages, show_stats};
pub use misc::{complete_suggestions, generate_completions, set_api_base, show_config};
pub use repo::{show_history, show_repo, show_repo_issues};
pub use search::{explore_repos, ExploreOptions};
