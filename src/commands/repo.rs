use super::issues::{print_issue_list, print_page_footer};
use crate::api::ApiClient;
use crate::error::Result;
use crate::format::{format_number, time_ago, ScoreTier};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn hours(value: Option<f64>) -> String {
    match value {
        Some(h) => format!("{:.1}h", h),
        None => "n/a".to_string(),
    }
}

pub fn show_repo(client: &ApiClient, id: u64) -> Result<()> {
    let repo = client.get_repository(id)?;
    let now = chrono::Utc::now();

    println!("\n{}", "=".repeat(60));
    println!("{}", repo.full_name);
    println!("{}", "=".repeat(60));
    if let Some(desc) = &repo.description {
        println!("{}\n", desc);
    }

    println!(
        "Language:     {}",
        repo.primary_language.as_deref().unwrap_or("Unknown")
    );
    println!("License:      {}", repo.license.as_deref().unwrap_or("None"));
    println!(
        "Stars:        {}   Forks: {}   Watchers: {}",
        format_number(repo.stars),
        format_number(repo.forks),
        format_number(repo.watchers)
    );
    if !repo.topics.is_empty() {
        println!("Topics:       {}", repo.topics.join(", "));
    }

    println!("\nScores");
    for (name, score) in [
        ("combined", repo.scores.combined),
        ("activity", repo.scores.activity),
        ("friendliness", repo.scores.beginner_friendliness),
    ] {
        println!("  {:<13} {:>5.1}  {}", name, score, ScoreTier::from_score(score));
    }
    if let Some(trend) = &repo.scores.trend {
        println!("  trend         {}", trend);
    }

    let metrics = &repo.metrics;
    println!("\nMetrics");
    println!("  last commit         {}", time_ago(metrics.last_commit_at, now));
    println!("  contributors        {}", metrics.contributor_count);
    println!("  good first issues   {}", metrics.good_first_issue_count);
    println!("  open / merged PRs   {} / {}", metrics.open_pr_count, metrics.merged_pr_count);
    println!("  avg PR merge time   {}", hours(metrics.avg_pr_merge_hours));
    println!("  avg issue response  {}", hours(metrics.avg_issue_response_hours));

    println!("\nCommunity");
    println!("  contributing guide  {}", yes_no(repo.has_contributing_guide));
    println!("  code of conduct     {}", yes_no(repo.has_code_of_conduct));
    println!("  issue templates     {}", yes_no(repo.has_issue_templates));
    println!("  PR templates        {}", yes_no(repo.has_pr_templates));

    if !repo.languages.is_empty() {
        println!("\nLanguages");
        for lang in &repo.languages {
            println!("  {:<20} {:>5.1}%", lang.language, lang.percentage);
        }
    }

    if !repo.recent_good_first_issues.is_empty() {
        println!("\nRecent good first issues\n");
        print_issue_list(&repo.recent_good_first_issues);
    }

    Ok(())
}

pub fn show_repo_issues(client: &ApiClient, id: u64, page: u32) -> Result<()> {
    let issues = client.repository_issues(id, page)?;
    if issues.data.is_empty() {
        println!("No open issues for repository {}.", id);
        return Ok(());
    }
    println!("\nOpen issues for repository {}:\n", id);
    print_issue_list(&issues.data);
    print_page_footer(issues.pagination, page.max(1));
    Ok(())
}

pub fn show_history(client: &ApiClient, id: u64) -> Result<()> {
    let history = client.metrics_history(id)?;
    if history.is_empty() {
        println!("No metrics history recorded for repository {}.", id);
        return Ok(());
    }

    println!(
        "{:<12} {:>8} {:>12} {:>8} {:>7} {:>5} {:>9}",
        "date", "activity", "friendliness", "stars", "forks", "GFIs", "PR merge"
    );
    for row in &history {
        println!(
            "{:<12} {:>8.1} {:>12.1} {:>8} {:>7} {:>5} {:>9}",
            row.date,
            row.activity_score,
            row.beginner_friendliness_score,
            row.stars,
            row.forks,
            row.good_first_issue_count,
            hours(row.avg_pr_merge_hours)
        );
    }
    Ok(())
}
