use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::fixtures::*;
use common::{Route, StubBackend};

/// The binary with an isolated HOME and no backend override from the environment.
fn repodiscover(home: &tempfile::TempDir) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("repodiscover")?;
    cmd.env("HOME", home.path()).env_remove("REPODISCOVER_API_URL");
    Ok(cmd)
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_help_lists_commands() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        repodiscover(&home)?
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("explore"))
            .stdout(predicate::str::contains("issues"))
            .stdout(predicate::str::contains("interactive"));
        Ok(())
    }

    #[test]
    fn test_explore_prints_indexed_results() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let stub = StubBackend::start(vec![Route::ok(REPOS_PATH, repository_page())])?;

        repodiscover(&home)?
            .args(["--api", stub.base.as_str(), "explore", "tokio", "--sort", "stars"])
            .assert()
            .success()
            .stdout(predicate::str::contains("tokio-rs/tokio"))
            .stdout(predicate::str::contains("Most Stars"))
            .stdout(predicate::str::contains("Page 1 of 3"));

        assert!(stub.requests()[0].contains("sort_by=stars"));
        Ok(())
    }

    #[test]
    fn test_explore_falls_back_to_live_search() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let stub = StubBackend::start(vec![
            Route::ok(REPOS_PATH, empty_repository_page()),
            Route::ok(LIVE_PATH, live_results()),
        ])?;

        repodiscover(&home)?
            .args(["--api", stub.base.as_str(), "explore", "zz-nonexistent-pkg"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Live results from GitHub"))
            .stdout(predicate::str::contains("zz/pkg"))
            .stderr(predicate::str::contains("searching GitHub"));
        Ok(())
    }

    #[test]
    fn test_explore_failure_exits_nonzero() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let stub = StubBackend::start(vec![Route::status(
            REPOS_PATH,
            500,
            r#"{"error": "Database unavailable", "status_code": 500}"#,
        )])?;

        repodiscover(&home)?
            .args(["--api", stub.base.as_str(), "explore", "serde"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Failed to load repositories: Database unavailable"));

        assert_eq!(stub.hits(LIVE_PATH), 0);
        Ok(())
    }

    #[test]
    fn test_issues_empty_is_not_an_error() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let stub = StubBackend::start(vec![Route::ok(
            ISSUES_PATH,
            r#"{"data": [], "pagination": {"page": 1, "per_page": 20, "total_items": 0, "total_pages": 0}}"#,
        )])?;

        repodiscover(&home)?
            .args(["--api", stub.base.as_str(), "issues", "--difficulty", "hard"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found."));

        assert!(stub.requests()[0].contains("difficulty=hard&is_assigned=false"));
        Ok(())
    }

    #[test]
    fn test_repo_not_found_reports_detail() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let stub = StubBackend::start(vec![Route::status(
            "/v1/repositories/42",
            404,
            r#"{"error": "Repository '42' not found", "status_code": 404}"#,
        )])?;

        repodiscover(&home)?
            .args(["--api", stub.base.as_str(), "repo", "42"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Repository '42' not found"));
        Ok(())
    }

    #[test]
    fn test_config_set_api_persists() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;

        repodiscover(&home)?
            .args(["config", "set-api", "https://discover.example.org/"])
            .assert()
            .success();

        repodiscover(&home)?
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("https://discover.example.org"));

        assert!(home
            .path()
            .join(".config/repodiscover/config.json")
            .exists());
        Ok(())
    }

    #[test]
    fn test_sort_key_completion() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        repodiscover(&home)?
            .args(["complete", "sort-keys", "la"])
            .assert()
            .success()
            .stdout("last_commit_at\n");
        Ok(())
    }

    #[test]
    fn test_repo_shows_detail_with_tiers() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let stub = StubBackend::start(vec![Route::ok(DETAIL_PATH, repository_detail())])?;

        repodiscover(&home)?
            .args(["--api", stub.base.as_str(), "repo", "7"])
            .assert()
            .success()
            .stdout(predicate::str::contains("tokio-rs/tokio"))
            .stdout(predicate::str::contains("68.1  Good"))
            .stdout(predicate::str::contains("91.2  Excellent"))
            .stdout(predicate::str::contains("45.0  Moderate"))
            .stdout(predicate::str::contains("trend         rising"))
            .stdout(predicate::str::contains("contributing guide  yes"))
            .stdout(predicate::str::contains("97.5%"))
            .stdout(predicate::str::contains("Add an example for UdpSocket"))
            .stdout(predicate::str::contains("Easy"));
        Ok(())
    }

    #[test]
    fn test_repo_issues_prints_page_footer() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let stub = StubBackend::start(vec![Route::ok(REPO_ISSUES_PATH, repository_issue_page())])?;

        repodiscover(&home)?
            .args(["--api", stub.base.as_str(), "repo-issues", "7"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Open issues for repository 7"))
            .stdout(predicate::str::contains("Add an example for UdpSocket"))
            .stdout(predicate::str::contains("Medium"))
            .stdout(predicate::str::contains("Page 1 of 2"))
            .stdout(predicate::str::contains("next: --page 2"));

        assert_eq!(stub.requests(), vec!["/v1/repositories/7/issues?page=1".to_string()]);
        Ok(())
    }

    #[test]
    fn test_history_prints_rows() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let stub = StubBackend::start(vec![Route::ok(HISTORY_PATH, metrics_history())])?;

        repodiscover(&home)?
            .args(["--api", stub.base.as_str(), "history", "7"])
            .assert()
            .success()
            .stdout(predicate::str::contains("2024-04-30"))
            .stdout(predicate::str::contains("2024-05-01"))
            .stdout(predicate::str::contains("12.5h"))
            .stdout(predicate::str::contains("n/a"));
        Ok(())
    }

    #[test]
    fn test_history_empty() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let stub = StubBackend::start(vec![Route::ok(HISTORY_PATH, "[]")])?;

        repodiscover(&home)?
            .args(["--api", stub.base.as_str(), "history", "7"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No metrics history recorded for repository 7."));
        Ok(())
    }

    #[test]
    fn test_languages_lists_counts() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let stub = StubBackend::start(vec![Route::ok(LANGUAGES_PATH, languages())])?;

        repodiscover(&home)?
            .args(["--api", stub.base.as_str(), "languages"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Rust"))
            .stdout(predicate::str::contains("42 repos"))
            .stdout(predicate::str::contains("7 repos"));
        Ok(())
    }

    #[test]
    fn test_stats_accepts_integer_averages() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let stub = StubBackend::start(vec![Route::ok(STATS_PATH, unscored_stats())])?;

        repodiscover(&home)?
            .args(["--api", stub.base.as_str(), "stats"])
            .assert()
            .success()
            .stdout(predicate::str::contains("PLATFORM STATS"))
            .stdout(predicate::str::contains("1.5K"))
            .stdout(predicate::str::contains("2.5M"))
            .stdout(predicate::str::contains("Avg activity:          0.0"));
        Ok(())
    }
}
