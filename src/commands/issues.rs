use crate::api::ApiClient;
use crate::discovery::{FetchStatus, ResultSet, Session};
use crate::format::{difficulty_label, time_ago};
use crate::query::{Difficulty, IssueQuery};
use crate::types::{Issue, Pagination};

pub struct IssueOptions {
    pub search: Option<String>,
    pub language: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub page: u32,
}

impl IssueOptions {
    pub fn into_query(self) -> IssueQuery {
        let mut query = IssueQuery::new();
        if let Some(search) = self.search {
            query.set_search(search);
        }
        if let Some(language) = self.language {
            query.set_language(language);
        }
        query.set_difficulty(self.difficulty);
        query.set_page(self.page);
        query
    }
}

pub fn list_issues(client: &ApiClient, options: IssueOptions) {
    let mut session = Session::new(client, options.into_query());

    let status = session.refresh().clone();
    if let FetchStatus::Failed(message) = status {
        eprintln!("Failed to load issues: {}", message);
        eprintln!("Run the same command again to retry.");
        std::process::exit(1);
    }
    print_issues(session.results(), session.query().page());
}

pub fn print_issues(results: &ResultSet<Issue>, page: u32) {
    if results.is_empty() {
        println!("No issues found.");
        return;
    }

    println!("\nFound {} open issues:\n", results.items.len());
    print_issue_list(&results.items);
    print_page_footer(results.pagination, page);
}

pub(crate) fn print_issue_list(issues: &[Issue]) {
    let now = chrono::Utc::now();
    for issue in issues {
        match &issue.repo_full_name {
            Some(repo) => println!("  {}  ({})", issue.title, repo),
            None => println!("  {}", issue.title),
        }
        println!(
            "    {}  comments {}  opened {}",
            difficulty_label(issue.difficulty_estimate.as_deref()),
            issue.comment_count,
            time_ago(issue.created_at, now)
        );
        if !issue.labels.is_empty() {
            println!("    labels: {}", issue.labels.join(", "));
        }
        if let Some(url) = &issue.html_url {
            println!("    {}", url);
        }
        println!();
    }
}

pub(crate) fn print_page_footer(pagination: Option<Pagination>, page: u32) {
    if let Some(pagination) = pagination {
        if pagination.total_pages > 1 {
            println!("Page {} of {}", page, pagination.total_pages);
            if page < pagination.total_pages {
                println!("  next: --page {}", page + 1);
            }
        }
    }
}
