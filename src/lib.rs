//! repodiscover - find beginner-friendly open source repositories and good
//! first issues from the terminal.
//!
//! The library half holds everything the binary drives:
//! - [`query`]: filter/sort/page state with the page-reset rule
//! - [`discovery`]: fetch cycles, live-search fallback and [`discovery::Session`]
//! - [`api`]: the blocking backend client
//! - [`format`]: score tiers and display helpers

pub mod api;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod format;
pub mod query;
pub mod types;

pub use api::ApiClient;
pub use config::DiscoverConfig;
pub use discovery::{
    CycleOutcome, CycleTicket, DiscoveryBackend, FetchStatus, ResultSet, Session, SourceKind,
};
pub use error::{DiscoverError, Result};
pub use query::{Difficulty, IssueQuery, QueryState, SortKey};
