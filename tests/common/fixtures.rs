#![allow(dead_code)]

//! JSON bodies in the shape the backend returns.

pub const REPOS_PATH: &str = "/v1/repositories";
pub const LIVE_PATH: &str = "/v1/repositories/live-search";
pub const ISSUES_PATH: &str = "/v1/issues";

pub fn empty_repository_page() -> String {
    r#"{"data": [], "pagination": {"page": 1, "per_page": 12, "total_items": 0, "total_pages": 0}}"#
        .to_string()
}

pub fn repository_page() -> String {
    r#"{
        "data": [{
            "id": 7,
            "full_name": "tokio-rs/tokio",
            "description": "A runtime for writing reliable asynchronous applications",
            "primary_language": "Rust",
            "stars": 25400,
            "forks": 2300,
            "topics": ["async", "networking"],
            "scores": {"activity": 91.2, "beginner_friendliness": 64.0, "combined": 79.1},
            "metrics": {"contributor_count": 700, "good_first_issue_count": 12,
                        "last_commit_at": "2024-05-01T08:00:00+00:00"}
        }],
        "pagination": {"page": 1, "per_page": 12, "total_items": 30, "total_pages": 3}
    }"#
    .to_string()
}

pub fn live_results() -> String {
    r#"{
        "data": [{
            "id": 99,
            "full_name": "zz/pkg",
            "description": null,
            "primary_language": "Go",
            "stars": 15,
            "forks": 1,
            "topics": [],
            "scores": {"activity": 12.0, "beginner_friendliness": 30.5, "combined": 21.0},
            "metrics": {"good_first_issue_count": 0, "contributor_count": 2,
                        "avg_pr_merge_hours": null, "last_commit_at": null}
        }],
        "source": "github",
        "total": 1
    }"#
    .to_string()
}

pub fn live_upstream_error() -> String {
    r#"{"data": [], "source": "github", "error": "rate limited", "total": 0}"#.to_string()
}

pub fn issue_page() -> String {
    r#"{
        "data": [{
            "id": 3,
            "github_id": "I_kw123",
            "repo_id": 7,
            "repo_full_name": "tokio-rs/tokio",
            "title": "Document the shutdown timeout",
            "labels": ["good first issue", "docs"],
            "comment_count": 2,
            "difficulty_estimate": "easy",
            "is_assigned": false,
            "created_at": "2024-04-20T12:00:00"
        }],
        "pagination": {"page": 1, "per_page": 20, "total_items": 1, "total_pages": 1}
    }"#
    .to_string()
}

pub const DETAIL_PATH: &str = "/v1/repositories/7";
pub const REPO_ISSUES_PATH: &str = "/v1/repositories/7/issues";
pub const HISTORY_PATH: &str = "/v1/repositories/7/metrics-history";
pub const LANGUAGES_PATH: &str = "/v1/languages";
pub const STATS_PATH: &str = "/v1/stats";

/// Detail payload; recent issues are the brief shape without ids of the repo.
pub fn repository_detail() -> String {
    r#"{
        "id": 7,
        "full_name": "tokio-rs/tokio",
        "owner": "tokio-rs",
        "name": "tokio",
        "description": "A runtime for writing reliable asynchronous applications",
        "primary_language": "Rust",
        "stars": 25400,
        "forks": 2300,
        "open_issues_count": 310,
        "watchers": 250,
        "license": "MIT",
        "topics": ["async", "networking"],
        "created_at": "2016-09-10T00:00:00",
        "scores": {"activity": 91.2, "beginner_friendliness": 45.0, "combined": 68.1, "trend": "rising"},
        "metrics": {"last_commit_at": "2024-05-01T08:00:00+00:00", "avg_pr_merge_hours": 20.5,
                    "avg_issue_response_hours": null, "contributor_count": 700,
                    "open_pr_count": 40, "closed_pr_count": 12, "merged_pr_count": 900,
                    "good_first_issue_count": 12},
        "languages": [{"language": "Rust", "percentage": 97.5}, {"language": "Shell", "percentage": 2.5}],
        "recent_good_first_issues": [{
            "id": 3,
            "title": "Add an example for UdpSocket",
            "difficulty_estimate": "easy",
            "comment_count": 1,
            "is_assigned": false,
            "created_at": "2024-04-20T12:00:00",
            "labels": ["good first issue"],
            "html_url": "https://github.com/tokio-rs/tokio/issues/3"
        }],
        "has_contributing_guide": true,
        "has_code_of_conduct": false,
        "has_readme": true,
        "has_issue_templates": true,
        "has_pr_templates": false,
        "synced_at": "2024-05-02T00:00:00"
    }"#
    .to_string()
}

pub fn repository_issue_page() -> String {
    r#"{
        "data": [{
            "id": 3,
            "github_id": "I_kw123",
            "title": "Add an example for UdpSocket",
            "body_preview": "We have TcpStream examples but none for UDP.",
            "html_url": "https://github.com/tokio-rs/tokio/issues/3",
            "labels": ["good first issue"],
            "comment_count": 1,
            "difficulty_estimate": "medium",
            "is_assigned": false,
            "created_at": "2024-04-20T12:00:00"
        }],
        "pagination": {"page": 1, "per_page": 20, "total_items": 25, "total_pages": 2}
    }"#
    .to_string()
}

pub fn metrics_history() -> String {
    r#"[
        {"date": "2024-04-30", "activity_score": 88.0, "beginner_friendliness_score": 44.5,
         "stars": 25300, "forks": 2290, "good_first_issue_count": 11, "avg_pr_merge_hours": 12.5},
        {"date": "2024-05-01", "activity_score": 91.2, "beginner_friendliness_score": 45.0,
         "stars": 25400, "forks": 2300, "good_first_issue_count": 12, "avg_pr_merge_hours": null}
    ]"#
    .to_string()
}

pub fn languages() -> String {
    r#"[{"language": "Rust", "repo_count": 42}, {"language": "Go", "repo_count": 7}]"#.to_string()
}

/// Averages come back as a bare integer 0 when nothing is scored yet.
pub fn unscored_stats() -> String {
    r#"{
        "total_repositories": 1500,
        "total_open_issues": 0,
        "total_languages": 3,
        "avg_activity_score": 0,
        "avg_beginner_friendliness_score": 0,
        "total_stars_tracked": 2500000
    }"#
    .to_string()
}
