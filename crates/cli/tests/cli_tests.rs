//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("recast").unwrap()
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_dry_run_file_input() {
    cmd()
        .args(["--dry-run", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rewrite the following content"))
        .stdout(predicate::str::contains("Acme Announces Portable CT Scanner"));
}

#[test]
fn test_cli_dry_run_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("article.html")).unwrap();
    cmd()
        .args(["--dry-run", "-"])
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains("journalist"));
}

#[test]
fn test_cli_dry_run_embeds_audience_and_context() {
    cmd()
        .args([
            "--dry-run",
            "-a",
            "procurement",
            "-c",
            "podcast",
            &get_fixture_path("article.html"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("for a procurement audience"))
        .stdout(predicate::str::contains("on podcast"));
}

#[test]
fn test_cli_dry_run_embeds_channel() {
    cmd()
        .args([
            "--dry-run",
            "--channel",
            "social-media",
            &get_fixture_path("article.html"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("to be shared via social media"));
}

#[test]
fn test_cli_dry_run_excludes_chrome_text() {
    cmd()
        .args(["--dry-run", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("All rights reserved").not())
        .stdout(predicate::str::contains("navigation banner").not());
}

#[test]
fn test_cli_invalid_audience() {
    cmd()
        .args(["--dry-run", "-a", "board-members", &get_fixture_path("article.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid audience"));
}

#[test]
fn test_cli_invalid_channel() {
    cmd()
        .args(["--dry-run", "--channel", "pigeon", &get_fixture_path("article.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid channel"));
}

#[test]
fn test_cli_missing_file() {
    cmd()
        .args(["--dry-run", "/nonexistent/page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_no_content() {
    cmd()
        .args(["--dry-run", "-"])
        .write_stdin("<html><body><div>nothing recognizable</div></body></html>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to extract content"));
}

#[test]
fn test_cli_verbose_dry_run() {
    cmd()
        .args(["--dry-run", "-v", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Recast"))
        .stderr(predicate::str::contains("Extracting main content"));
}

#[test]
fn test_cli_rewrite_without_api_key_fails() {
    cmd()
        .env_remove("OPENAI_API_KEY")
        .arg(&get_fixture_path("article.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Model API configuration is incomplete"));
}

#[test]
fn test_cli_output_flag_parses() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("rewrite.txt");

    // Dry run prints the prompt to stdout; -o only applies to rewrites.
    cmd()
        .args([
            "--dry-run",
            "-o",
            out.to_str().unwrap(),
            &get_fixture_path("article.html"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rewrite the following content"));
}
