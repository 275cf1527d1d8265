use super::issues::print_page_footer;
use crate::api::ApiClient;
use crate::discovery::{FetchStatus, ResultSet, Session, SourceKind};
use crate::format::{format_number, time_ago, ScoreTier};
use crate::query::{QueryState, SortKey};
use crate::types::RepositorySummary;

pub struct ExploreOptions {
    pub search: Option<String>,
    pub language: Option<String>,
    pub sort: SortKey,
    pub require_open_issues: bool,
    pub require_active_merge: bool,
    pub page: u32,
}

impl ExploreOptions {
    pub fn into_query(self) -> QueryState {
        let mut state = QueryState::new();
        if let Some(search) = self.search {
            state.set_search(search);
        }
        if let Some(language) = self.language {
            state.set_language(language);
        }
        state.set_sort(self.sort);
        state.set_require_open_issues(self.require_open_issues);
        state.set_require_active_merge(self.require_active_merge);
        state.set_page(self.page);
        state
    }
}

/// Prints the live-search notice while the fallback runs.
pub fn announce_live_search(status: &FetchStatus) {
    if *status == FetchStatus::LiveSearching {
        eprintln!("Not found locally, searching GitHub...");
    }
}

pub fn explore_repos(client: &ApiClient, options: ExploreOptions) {
    let mut session = Session::new(client, options.into_query());

    let status = session.refresh_with(&mut announce_live_search).clone();
    if let FetchStatus::Failed(message) = status {
        eprintln!("Failed to load repositories: {}", message);
        eprintln!("Run the same command again to retry.");
        std::process::exit(1);
    }
    print_repositories(session.results(), session.query());
}

pub fn print_repositories(results: &ResultSet<RepositorySummary>, state: &QueryState) {
    if results.is_empty() {
        match state.search() {
            Some(search) => println!("No repositories found for \"{}\".", search),
            None => println!("No repositories found."),
        }
        return;
    }

    if results.source == SourceKind::LiveFallback {
        println!("\nNot in the index yet. Live results from GitHub:\n");
    } else {
        println!(
            "\nFound {} repositories ({}):\n",
            results.items.len(),
            state.sort().label()
        );
    }

    let now = chrono::Utc::now();
    for repo in &results.items {
        print_repository(repo, now);
    }

    print_page_footer(results.pagination, state.page());
}

fn print_repository(repo: &RepositorySummary, now: chrono::DateTime<chrono::Utc>) {
    match &repo.primary_language {
        Some(language) => println!("  [{}] {} ({})", repo.id, repo.full_name, language),
        None => println!("  [{}] {}", repo.id, repo.full_name),
    }
    println!(
        "    ⭐ {}  forks {}  contributors {}  GFIs {}  last commit {}",
        format_number(repo.stars),
        format_number(repo.forks),
        repo.metrics.contributor_count,
        repo.metrics.good_first_issue_count,
        time_ago(repo.metrics.last_commit_at, now)
    );
    println!(
        "    combined {:.1} ({})  activity {:.1} ({})  friendliness {:.1} ({})",
        repo.scores.combined,
        ScoreTier::from_score(repo.scores.combined),
        repo.scores.activity,
        ScoreTier::from_score(repo.scores.activity),
        repo.scores.beginner_friendliness,
        ScoreTier::from_score(repo.scores.beginner_friendliness)
    );
    if let Some(desc) = &repo.description {
        println!("    {}", desc);
    }
    if !repo.topics.is_empty() {
        println!("    topics: {}", repo.topics.join(", "));
    }
    println!();
}
