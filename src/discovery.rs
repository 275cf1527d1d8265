//! Fetch cycles for the explore and issue listings.
//!
//! A repository cycle runs the indexed lookup first. When that comes back
//! empty for a name-like search (two characters or more) it asks the live
//! search endpoint instead; a failed live lookup is logged and otherwise
//! ignored, so the empty indexed result stands. A failed indexed lookup ends
//! the cycle in [`FetchStatus::Failed`] with nothing displayed.
//!
//! [`Session`] owns one listing's state and the result being displayed. Each
//! cycle gets a sequence number and only the latest issued one may replace
//! what is shown.

use crate::api::{IssueListParams, RepositoryListParams};
use crate::error::Result;
use crate::query::{IssueQuery, QueryState, LIVE_SEARCH_LIMIT};
use crate::types::{Issue, Page, Pagination, RepositorySummary};

/// Minimum search length (in characters) before the live fallback fires.
pub const LIVE_FALLBACK_MIN_CHARS: usize = 2;

/// The backend operations a fetch cycle depends on.
pub trait DiscoveryBackend {
    fn list_repositories(&self, params: &RepositoryListParams) -> Result<Page<RepositorySummary>>;
    fn live_search_repositories(&self, query: &str, limit: u32) -> Result<Vec<RepositorySummary>>;
    fn list_issues(&self, params: &IssueListParams) -> Result<Page<Issue>>;
}

impl<B: DiscoveryBackend + ?Sized> DiscoveryBackend for &B {
    fn list_repositories(&self, params: &RepositoryListParams) -> Result<Page<RepositorySummary>> {
        (**self).list_repositories(params)
    }

    fn live_search_repositories(&self, query: &str, limit: u32) -> Result<Vec<RepositorySummary>> {
        (**self).live_search_repositories(query, limit)
    }

    fn list_issues(&self, params: &IssueListParams) -> Result<Page<Issue>> {
        (**self).list_issues(params)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Indexed,
    LiveFallback,
}

/// What a listing displays after a cycle. Replaced wholesale every cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
    pub source: SourceKind,
}

impl<T> ResultSet<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
            source: SourceKind::Indexed,
        }
    }

    pub fn indexed(page: Page<T>) -> Self {
        Self {
            items: page.data,
            pagination: page.pagination,
            source: SourceKind::Indexed,
        }
    }

    pub fn live(items: Vec<T>) -> Self {
        Self {
            items,
            pagination: None,
            source: SourceKind::LiveFallback,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.pagination.map(|p| p.total_pages)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    LiveSearching,
    Ready,
    Failed(String),
}

impl FetchStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchStatus::Ready | FetchStatus::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome<T> {
    pub status: FetchStatus,
    pub results: ResultSet<T>,
}

impl<T> CycleOutcome<T> {
    fn ready(results: ResultSet<T>) -> Self {
        Self {
            status: FetchStatus::Ready,
            results,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            status: FetchStatus::Failed(message),
            results: ResultSet::empty(),
        }
    }
}

/// True when an empty indexed result for `search` should be retried live.
pub fn should_fall_back(search: Option<&str>) -> bool {
    search.is_some_and(|s| s.chars().count() >= LIVE_FALLBACK_MIN_CHARS)
}

fn live_fallback<B: DiscoveryBackend + ?Sized>(
    backend: &B,
    search: &str,
) -> Option<Vec<RepositorySummary>> {
    match backend.live_search_repositories(search, LIVE_SEARCH_LIMIT) {
        Ok(items) => Some(items),
        Err(e) => {
            log::warn!("Live search failed for '{}': {}", search, e);
            None
        }
    }
}

pub fn run_repository_cycle<B: DiscoveryBackend + ?Sized>(
    backend: &B,
    state: &QueryState,
    observer: &mut dyn FnMut(&FetchStatus),
) -> CycleOutcome<RepositorySummary> {
    observer(&FetchStatus::Loading);

    let params = RepositoryListParams::from_query(state);
    let mut results = match backend.list_repositories(&params) {
        Ok(page) => ResultSet::indexed(page),
        Err(e) => {
            log::error!("Repository lookup failed: {}", e);
            let outcome = CycleOutcome::failed(e.to_string());
            observer(&outcome.status);
            return outcome;
        }
    };

    if results.is_empty() && should_fall_back(state.search()) {
        if let Some(search) = state.search() {
            log::info!("No indexed match for '{}', trying live search", search);
            observer(&FetchStatus::LiveSearching);
            match live_fallback(backend, search) {
                Some(items) if !items.is_empty() => results = ResultSet::live(items),
                _ => log::debug!("Live search had nothing for '{}'", search),
            }
        }
    }

    let outcome = CycleOutcome::ready(results);
    observer(&outcome.status);
    outcome
}

pub fn run_issue_cycle<B: DiscoveryBackend + ?Sized>(
    backend: &B,
    query: &IssueQuery,
    observer: &mut dyn FnMut(&FetchStatus),
) -> CycleOutcome<Issue> {
    observer(&FetchStatus::Loading);

    let params = IssueListParams::from_query(query);
    let outcome = match backend.list_issues(&params) {
        Ok(page) => CycleOutcome::ready(ResultSet::indexed(page)),
        Err(e) => {
            log::error!("Issue lookup failed: {}", e);
            CycleOutcome::failed(e.to_string())
        }
    };
    observer(&outcome.status);
    outcome
}

/// A listing whose state can drive a fetch cycle.
pub trait Listing {
    type Item;

    fn run_cycle(
        &self,
        backend: &dyn DiscoveryBackend,
        observer: &mut dyn FnMut(&FetchStatus),
    ) -> CycleOutcome<Self::Item>;

    fn page(&self) -> u32;

    /// Setter invocations so far; a cycle runs only when this moves.
    fn revision(&self) -> u64;

    fn next_page(&mut self, total_pages: Option<u32>);

    fn prev_page(&mut self);
}

impl Listing for QueryState {
    type Item = RepositorySummary;

    fn run_cycle(
        &self,
        backend: &dyn DiscoveryBackend,
        observer: &mut dyn FnMut(&FetchStatus),
    ) -> CycleOutcome<RepositorySummary> {
        run_repository_cycle(backend, self, observer)
    }

    fn page(&self) -> u32 {
        QueryState::page(self)
    }

    fn revision(&self) -> u64 {
        QueryState::revision(self)
    }

    fn next_page(&mut self, total_pages: Option<u32>) {
        QueryState::next_page(self, total_pages)
    }

    fn prev_page(&mut self) {
        QueryState::prev_page(self)
    }
}

impl Listing for IssueQuery {
    type Item = Issue;

    fn run_cycle(
        &self,
        backend: &dyn DiscoveryBackend,
        observer: &mut dyn FnMut(&FetchStatus),
    ) -> CycleOutcome<Issue> {
        run_issue_cycle(backend, self, observer)
    }

    fn page(&self) -> u32 {
        IssueQuery::page(self)
    }

    fn revision(&self) -> u64 {
        IssueQuery::revision(self)
    }

    fn next_page(&mut self, total_pages: Option<u32>) {
        IssueQuery::next_page(self, total_pages)
    }

    fn prev_page(&mut self) {
        IssueQuery::prev_page(self)
    }
}

/// Handle for one issued fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTicket {
    seq: u64,
}

impl CycleTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

pub struct Session<B, Q: Listing> {
    backend: B,
    query: Q,
    results: ResultSet<Q::Item>,
    status: FetchStatus,
    issued: u64,
}

impl<B: DiscoveryBackend, Q: Listing> Session<B, Q> {
    pub fn new(backend: B, query: Q) -> Self {
        Self {
            backend,
            query,
            results: ResultSet::empty(),
            status: FetchStatus::Idle,
            issued: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    pub fn results(&self) -> &ResultSet<Q::Item> {
        &self.results
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Issue a new cycle. Any cycle issued earlier becomes stale.
    pub fn begin(&mut self) -> CycleTicket {
        self.issued += 1;
        self.status = FetchStatus::Loading;
        CycleTicket { seq: self.issued }
    }

    /// Apply `outcome` if `ticket` is the latest issued cycle.
    ///
    /// Returns false, leaving the displayed result untouched, for stale
    /// tickets.
    pub fn complete(&mut self, ticket: CycleTicket, outcome: CycleOutcome<Q::Item>) -> bool {
        if ticket.seq != self.issued {
            log::debug!(
                "Discarding stale cycle {} (latest is {})",
                ticket.seq,
                self.issued
            );
            return false;
        }
        self.results = outcome.results;
        self.status = outcome.status;
        true
    }

    /// Run one full cycle for the current state.
    pub fn refresh(&mut self) -> &FetchStatus {
        self.refresh_with(&mut |_: &FetchStatus| {})
    }

    /// Like [`Session::refresh`], reporting every status change to `observer`.
    pub fn refresh_with(&mut self, observer: &mut dyn FnMut(&FetchStatus)) -> &FetchStatus {
        let ticket = self.begin();
        let outcome = {
            let Session {
                backend,
                query,
                status,
                ..
            } = self;
            query.run_cycle(&*backend, &mut |s: &FetchStatus| {
                *status = s.clone();
                observer(s);
            })
        };
        self.complete(ticket, outcome);
        &self.status
    }

    /// Mutate the state through one setter call and run the dependent cycle.
    ///
    /// Nothing is fetched when `change` left the state's revision untouched.
    pub fn update(&mut self, change: impl FnOnce(&mut Q)) -> &FetchStatus {
        self.update_with(change, &mut |_: &FetchStatus| {})
    }

    pub fn update_with(
        &mut self,
        change: impl FnOnce(&mut Q),
        observer: &mut dyn FnMut(&FetchStatus),
    ) -> &FetchStatus {
        let before = self.query.revision();
        change(&mut self.query);
        if self.query.revision() == before {
            log::debug!("State unchanged at revision {}, no fetch", before);
            return &self.status;
        }
        self.refresh_with(observer)
    }

    /// True when the displayed result is paginated and has a later page.
    ///
    /// Live fallback results and failed cycles carry no pagination.
    pub fn has_next_page(&self) -> bool {
        self.results
            .total_pages()
            .is_some_and(|total| self.query.page() < total)
    }

    pub fn has_prev_page(&self) -> bool {
        self.query.page() > 1
    }

    /// Advance one page and refetch. Does nothing without a later page.
    pub fn next_page_with(&mut self, observer: &mut dyn FnMut(&FetchStatus)) -> &FetchStatus {
        if !self.has_next_page() {
            log::debug!("No page after {}", self.query.page());
            return &self.status;
        }
        let total = self.results.total_pages();
        self.query.next_page(total);
        self.refresh_with(observer)
    }

    /// Go back one page and refetch. Does nothing on page 1.
    pub fn prev_page_with(&mut self, observer: &mut dyn FnMut(&FetchStatus)) -> &FetchStatus {
        if !self.has_prev_page() {
            return &self.status;
        }
        self.query.prev_page();
        self.refresh_with(observer)
    }
}
