//! Blocking HTTP client for the discovery backend.

use crate::config::DiscoverConfig;
use crate::discovery::DiscoveryBackend;
use crate::error::{DiscoverError, Result};
use crate::query::{
    Difficulty, IssueQuery, QueryState, SortKey, ISSUE_PAGE_SIZE, REPOSITORY_PAGE_SIZE,
};
use crate::types::{
    ErrorBody, Issue, LanguageCount, LiveSearchResponse, MetricsSnapshot, Page, PlatformStats,
    RepositoryDetail, RepositorySummary,
};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Parameters of `GET /v1/repositories`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryListParams {
    pub search: Option<String>,
    pub language: Option<String>,
    pub sort_by: SortKey,
    pub has_issues: bool,
    pub actively_merging: bool,
    pub page: u32,
    pub per_page: u32,
}

impl RepositoryListParams {
    pub fn from_query(state: &QueryState) -> Self {
        Self {
            search: state.search().map(str::to_string),
            language: state.language().map(str::to_string),
            sort_by: state.sort(),
            has_issues: state.require_open_issues(),
            actively_merging: state.require_active_merge(),
            page: state.page(),
            per_page: REPOSITORY_PAGE_SIZE,
        }
    }

    /// Flags are only sent when set; absent text filters are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(language) = &self.language {
            pairs.push(("language", language.clone()));
        }
        pairs.push(("sort_by", self.sort_by.as_str().to_string()));
        if self.has_issues {
            pairs.push(("has_issues", "true".to_string()));
        }
        if self.actively_merging {
            pairs.push(("actively_merging", "true".to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("per_page", self.per_page.to_string()));
        pairs
    }
}

/// Parameters of `GET /v1/issues`. Always restricted to unassigned issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueListParams {
    pub search: Option<String>,
    pub language: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub page: u32,
    pub per_page: u32,
}

impl IssueListParams {
    pub fn from_query(query: &IssueQuery) -> Self {
        Self {
            search: query.search().map(str::to_string),
            language: query.language().map(str::to_string),
            difficulty: query.difficulty(),
            page: query.page(),
            per_page: ISSUE_PAGE_SIZE,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(language) = &self.language {
            pairs.push(("language", language.clone()));
        }
        if let Some(difficulty) = self.difficulty {
            pairs.push(("difficulty", difficulty.as_str().to_string()));
        }
        pairs.push(("is_assigned", "false".to_string()));
        pairs.push(("page", self.page.to_string()));
        pairs.push(("per_page", self.per_page.to_string()));
        pairs
    }
}

/// Render `pairs` as a query string, including the leading `?`.
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", joined)
}

pub struct ApiClient {
    client: reqwest::blocking::Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: &DiscoverConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base: config.api_root().to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}/v1{}", self.base, endpoint);
        log::debug!("GET {}", url);

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.json::<ErrorBody>().ok().and_then(ErrorBody::message);
            log::debug!("{} answered {}", url, status);
            return Err(DiscoverError::api(status.as_u16(), message));
        }
        Ok(resp.json::<T>()?)
    }

    pub fn list_repositories(&self, params: &RepositoryListParams) -> Result<Page<RepositorySummary>> {
        self.get(&format!("/repositories{}", encode_query(&params.query_pairs())))
    }

    pub fn get_repository(&self, id: u64) -> Result<RepositoryDetail> {
        self.get(&format!("/repositories/{}", id))
    }

    pub fn repository_issues(&self, id: u64, page: u32) -> Result<Page<Issue>> {
        self.get(&format!("/repositories/{}/issues?page={}", id, page.max(1)))
    }

    pub fn metrics_history(&self, id: u64) -> Result<Vec<MetricsSnapshot>> {
        self.get(&format!("/repositories/{}/metrics-history", id))
    }

    pub fn list_issues(&self, params: &IssueListParams) -> Result<Page<Issue>> {
        self.get(&format!("/issues{}", encode_query(&params.query_pairs())))
    }

    /// On-demand search against the live external index.
    ///
    /// The backend reports upstream failures inside a 200 body
    /// (`{"data": [], "error": ...}`); that counts as no results.
    pub fn live_search(&self, query: &str, per_page: u32) -> Result<Vec<RepositorySummary>> {
        let pairs = [("q", query.to_string()), ("per_page", per_page.to_string())];
        let resp: LiveSearchResponse =
            self.get(&format!("/repositories/live-search{}", encode_query(&pairs)))?;
        if let Some(error) = &resp.error {
            log::debug!("Live search upstream error for '{}': {}", query, error);
        }
        Ok(resp.data)
    }

    pub fn languages(&self) -> Result<Vec<LanguageCount>> {
        self.get("/languages")
    }

    pub fn stats(&self) -> Result<PlatformStats> {
        self.get("/stats")
    }
}

impl DiscoveryBackend for ApiClient {
    fn list_repositories(&self, params: &RepositoryListParams) -> Result<Page<RepositorySummary>> {
        ApiClient::list_repositories(self, params)
    }

    fn live_search_repositories(&self, query: &str, limit: u32) -> Result<Vec<RepositorySummary>> {
        self.live_search(query, limit)
    }

    fn list_issues(&self, params: &IssueListParams) -> Result<Page<Issue>> {
        ApiClient::list_issues(self, params)
    }
}
