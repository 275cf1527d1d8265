use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Backend-computed scores, all on a 0-100 scale.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RepoScores {
    pub activity: f64,
    pub beginner_friendliness: f64,
    pub combined: f64,
    pub trend: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RepoMetrics {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub last_commit_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub last_pushed_at: Option<DateTime<Utc>>,
    pub avg_pr_merge_hours: Option<f64>,
    pub avg_issue_response_hours: Option<f64>,
    pub contributor_count: u64,
    pub open_pr_count: u64,
    pub closed_pr_count: u64,
    pub merged_pr_count: u64,
    pub open_closed_pr_ratio: Option<f64>,
    pub good_first_issue_count: u64,
}

/// One repository as listed by the indexed backend or the live search.
///
/// Live results carry only a subset of the metrics, so every field falls
/// back to its default when missing.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RepositorySummary {
    pub id: u64,
    pub full_name: String,
    pub description: Option<String>,
    pub primary_language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub license: Option<String>,
    pub topics: Vec<String>,
    pub scores: RepoScores,
    pub metrics: RepoMetrics,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub synced_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RepoLanguage {
    pub language: String,
    pub percentage: f64,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RepositoryDetail {
    pub id: u64,
    pub full_name: String,
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    pub primary_language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues_count: u64,
    pub watchers: u64,
    pub license: Option<String>,
    pub topics: Vec<String>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    pub scores: RepoScores,
    pub metrics: RepoMetrics,
    pub languages: Vec<RepoLanguage>,
    pub recent_good_first_issues: Vec<Issue>,
    pub has_contributing_guide: bool,
    pub has_code_of_conduct: bool,
    #[serde(default = "default_true")]
    pub has_readme: bool,
    pub has_issue_templates: bool,
    pub has_pr_templates: bool,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub synced_at: Option<DateTime<Utc>>,
}

/// An open issue. Used for the global issue listing, per-repository
/// listings and the "recent good first issues" of a repository detail.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Issue {
    pub id: u64,
    pub github_id: String,
    pub repo_id: u64,
    pub repo_full_name: Option<String>,
    pub repo_language: Option<String>,
    pub title: String,
    pub body_preview: Option<String>,
    pub html_url: Option<String>,
    pub state: Option<String>,
    pub labels: Vec<String>,
    pub comment_count: u64,
    pub difficulty_estimate: Option<String>,
    pub is_assigned: bool,
    pub is_good_first_issue: bool,
    pub is_help_wanted: bool,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

/// `{ data, pagination }` envelope returned by the listing endpoints.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LiveSearchResponse {
    pub data: Vec<RepositorySummary>,
    pub source: Option<String>,
    pub total: Option<u64>,
    pub error: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LanguageCount {
    pub language: String,
    pub repo_count: u64,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PlatformStats {
    pub total_repositories: u64,
    pub total_open_issues: u64,
    pub total_languages: u64,
    pub avg_activity_score: f64,
    pub avg_beginner_friendliness_score: f64,
    pub total_stars_tracked: u64,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MetricsSnapshot {
    pub date: String,
    pub activity_score: f64,
    pub beginner_friendliness_score: f64,
    pub stars: u64,
    pub forks: u64,
    pub good_first_issue_count: u64,
    pub avg_pr_merge_hours: Option<f64>,
}

/// Error body of a non-success response.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(self) -> Option<String> {
        if let Some(error) = self.error {
            return Some(error);
        }
        match self.detail {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
            None => None,
        }
    }
}

/// The backend emits both RFC 3339 timestamps and naive ISO timestamps
/// (no offset). Naive values are taken as UTC.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw))),
        }
    }
}
