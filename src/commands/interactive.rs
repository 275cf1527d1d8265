use super::issues::print_issues;
use super::search::{announce_live_search, print_repositories};
use crate::api::ApiClient;
use crate::discovery::{FetchStatus, Session};
use crate::query::{Difficulty, IssueQuery, QueryState, SortKey};
use std::io::{self, BufRead, Write};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    Language(String),
    Sort(SortKey),
    RequireOpenIssues(bool),
    RequireActiveMerge(bool),
    Difficulty(Option<Difficulty>),
    Page(u32),
    Next,
    Prev,
    Retry,
    Help,
    Quit,
}

fn parse_switch(value: &str) -> Result<bool, String> {
    match value {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        other => Err(format!("Expected on or off, got '{}'", other)),
    }
}

pub fn parse_action(line: &str) -> Result<Action, String> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest.trim()),
        None => (line.trim_end(), ""),
    };

    match word {
        "search" | "s" => Ok(Action::Search(rest.to_string())),
        "lang" | "language" => Ok(Action::Language(rest.to_string())),
        "sort" => rest
            .parse::<SortKey>()
            .map(Action::Sort)
            .map_err(|e| e.to_string()),
        "gfi" | "issues" => parse_switch(rest).map(Action::RequireOpenIssues),
        "merging" => parse_switch(rest).map(Action::RequireActiveMerge),
        "difficulty" => match rest {
            "" | "any" => Ok(Action::Difficulty(None)),
            value => value
                .parse::<Difficulty>()
                .map(|d| Action::Difficulty(Some(d)))
                .map_err(|e| e.to_string()),
        },
        "page" => rest
            .parse::<u32>()
            .map(Action::Page)
            .map_err(|_| format!("Invalid page number: '{}'", rest)),
        "next" | "n" => Ok(Action::Next),
        "prev" | "p" => Ok(Action::Prev),
        "retry" | "r" => Ok(Action::Retry),
        "help" | "?" => Ok(Action::Help),
        "quit" | "exit" | "q" => Ok(Action::Quit),
        "" => Err("Type 'help' for commands".to_string()),
        other => Err(format!("Unknown command '{}'. Type 'help' for commands", other)),
    }
}

fn print_help(issues_mode: bool) {
    println!("Commands:");
    println!("  search <text>          filter by name/description (empty clears)");
    println!("  lang <language>        filter by language (empty clears)");
    if issues_mode {
        println!("  difficulty <level|any> easy, medium, hard");
    } else {
        println!("  sort <key>             combined_score, activity_score,");
        println!("                         beginner_friendliness_score, stars, last_commit_at");
        println!("  gfi on|off             only repositories with good first issues");
        println!("  merging on|off         only repositories actively merging PRs");
    }
    println!("  next | prev | page <n> pagination");
    println!("  retry                  run the last query again");
    println!("  quit");
}

fn report_failure(status: &FetchStatus) -> bool {
    if let FetchStatus::Failed(message) = status {
        eprintln!("Failed: {}", message);
        eprintln!("Type 'retry' to try again.");
        return true;
    }
    false
}

/// Notice for a page move the displayed result cannot make, if any.
fn page_move_blocked(action: &Action, has_next: bool, has_prev: bool) -> Option<&'static str> {
    match action {
        Action::Next if !has_next => Some("No more pages."),
        Action::Prev if !has_prev => Some("Already on the first page."),
        _ => None,
    }
}

fn read_action(stdin: &mut impl BufRead) -> Option<Action> {
    loop {
        print!("> ");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        match parse_action(&line) {
            Ok(action) => return Some(action),
            Err(message) => eprintln!("{}", message),
        }
    }
}

pub fn run_interactive(client: &ApiClient, issues_mode: bool) {
    println!("repodiscover interactive mode. Type 'help' for commands.");
    if issues_mode {
        run_issue_session(client);
    } else {
        run_repository_session(client);
    }
}

fn run_repository_session(client: &ApiClient) {
    let mut session = Session::new(client, QueryState::new());
    let mut stdin = io::stdin().lock();

    session.refresh_with(&mut announce_live_search);
    if !report_failure(session.status()) {
        print_repositories(session.results(), session.query());
    }

    while let Some(action) = read_action(&mut stdin) {
        if let Some(notice) =
            page_move_blocked(&action, session.has_next_page(), session.has_prev_page())
        {
            eprintln!("{}", notice);
            continue;
        }
        let observer = &mut announce_live_search;
        match action {
            Action::Quit => break,
            Action::Help => {
                print_help(false);
                continue;
            }
            Action::Difficulty(_) => {
                eprintln!("'difficulty' only applies to issue mode");
                continue;
            }
            Action::Search(text) => session.update_with(|q| q.set_search(text), observer),
            Action::Language(lang) => session.update_with(|q| q.set_language(lang), observer),
            Action::Sort(key) => session.update_with(|q| q.set_sort(key), observer),
            Action::RequireOpenIssues(on) => {
                session.update_with(|q| q.set_require_open_issues(on), observer)
            }
            Action::RequireActiveMerge(on) => {
                session.update_with(|q| q.set_require_active_merge(on), observer)
            }
            Action::Page(n) => session.update_with(|q| q.set_page(n), observer),
            Action::Next => session.next_page_with(observer),
            Action::Prev => session.prev_page_with(observer),
            Action::Retry => session.refresh_with(observer),
        };
        if !report_failure(session.status()) {
            print_repositories(session.results(), session.query());
        }
    }
}

fn run_issue_session(client: &ApiClient) {
    let mut session = Session::new(client, IssueQuery::new());
    let mut stdin = io::stdin().lock();
    let mut ignore = |_: &FetchStatus| {};

    session.refresh();
    if !report_failure(session.status()) {
        print_issues(session.results(), session.query().page());
    }

    while let Some(action) = read_action(&mut stdin) {
        if let Some(notice) =
            page_move_blocked(&action, session.has_next_page(), session.has_prev_page())
        {
            eprintln!("{}", notice);
            continue;
        }
        match action {
            Action::Quit => break,
            Action::Help => {
                print_help(true);
                continue;
            }
            Action::Sort(_) | Action::RequireOpenIssues(_) | Action::RequireActiveMerge(_) => {
                eprintln!("That filter only applies to repository mode");
                continue;
            }
            Action::Search(text) => session.update(|q| q.set_search(text)),
            Action::Language(lang) => session.update(|q| q.set_language(lang)),
            Action::Difficulty(level) => session.update(|q| q.set_difficulty(level)),
            Action::Page(n) => session.update(|q| q.set_page(n)),
            Action::Next => session.next_page_with(&mut ignore),
            Action::Prev => session.prev_page_with(&mut ignore),
            Action::Retry => session.refresh(),
        };
        if !report_failure(session.status()) {
            print_issues(session.results(), session.query().page());
        }
    }
}
