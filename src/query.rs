//! Filter, sort and pagination state for the explore and issue listings.
//!
//! Every setter counts as one user interaction: it bumps `revision` exactly
//! once, and every setter except the page ones sends the listing back to
//! page 1.

use crate::error::{DiscoverError, Result};
use std::fmt;
use std::str::FromStr;

pub const REPOSITORY_PAGE_SIZE: u32 = 12;
pub const ISSUE_PAGE_SIZE: u32 = 20;
pub const LIVE_SEARCH_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    #[default]
    #[value(name = "combined_score")]
    CombinedScore,
    #[value(name = "activity_score")]
    ActivityScore,
    #[value(name = "beginner_friendliness_score")]
    BeginnerFriendlinessScore,
    #[value(name = "stars")]
    Stars,
    #[value(name = "last_commit_at")]
    LastCommitAt,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::CombinedScore,
        SortKey::ActivityScore,
        SortKey::BeginnerFriendlinessScore,
        SortKey::Stars,
        SortKey::LastCommitAt,
    ];

    /// Value sent to the backend as `sort_by`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::CombinedScore => "combined_score",
            SortKey::ActivityScore => "activity_score",
            SortKey::BeginnerFriendlinessScore => "beginner_friendliness_score",
            SortKey::Stars => "stars",
            SortKey::LastCommitAt => "last_commit_at",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::CombinedScore => "Best Match",
            SortKey::ActivityScore => "Most Active",
            SortKey::BeginnerFriendlinessScore => "Most Friendly",
            SortKey::Stars => "Most Stars",
            SortKey::LastCommitAt => "Recently Updated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DiscoverError;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DiscoverError::invalid_sort_key(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DiscoverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DiscoverError::invalid_difficulty(other)),
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Explore page state: five filters plus the page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search: String,
    language: String,
    sort: SortKey,
    require_open_issues: bool,
    require_active_merge: bool,
    page: u32,
    revision: u64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            language: String::new(),
            sort: SortKey::default(),
            require_open_issues: true,
            require_active_merge: false,
            page: 1,
            revision: 0,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    pub fn language(&self) -> Option<&str> {
        non_empty(&self.language)
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn require_open_issues(&self) -> bool {
        self.require_open_issues
    }

    pub fn require_active_merge(&self) -> bool {
        self.require_active_merge
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of setter invocations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn filter_changed(&mut self) {
        self.page = 1;
        self.revision += 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.filter_changed();
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
        self.filter_changed();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.filter_changed();
    }

    pub fn set_require_open_issues(&mut self, required: bool) {
        self.require_open_issues = required;
        self.filter_changed();
    }

    pub fn set_require_active_merge(&mut self, required: bool) {
        self.require_active_merge = required;
        self.filter_changed();
    }

    /// Jump to `page`; 0 is treated as 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
        self.revision += 1;
    }

    /// Advance one page, stopping at `total_pages` when it is known.
    pub fn next_page(&mut self, total_pages: Option<u32>) {
        let next = self.page.saturating_add(1);
        self.page = match total_pages {
            Some(total) => next.min(total.max(1)),
            None => next,
        };
        self.revision += 1;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
        self.revision += 1;
    }
}

/// Issue listing state. Unassigned issues only; no live fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    search: String,
    language: String,
    difficulty: Option<Difficulty>,
    page: u32,
    revision: u64,
}

impl Default for IssueQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            language: String::new(),
            difficulty: None,
            page: 1,
            revision: 0,
        }
    }
}

impl IssueQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    pub fn language(&self) -> Option<&str> {
        non_empty(&self.language)
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn filter_changed(&mut self) {
        self.page = 1;
        self.revision += 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.filter_changed();
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
        self.filter_changed();
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty;
        self.filter_changed();
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
        self.revision += 1;
    }

    pub fn next_page(&mut self, total_pages: Option<u32>) {
        let next = self.page.saturating_add(1);
        self.page = match total_pages {
            Some(total) => next.min(total.max(1)),
            None => next,
        };
        self.revision += 1;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
        self.revision += 1;
    }
}
