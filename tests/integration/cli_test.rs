//! Integration tests for the chatmd command line.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{chatmd, fixture_path};

fn cmd(config_dir: &TempDir) -> Command {
    Command::from_std(chatmd(config_dir.path()))
}

// ============================================================================
// Argument Errors
// ============================================================================

#[test]
fn no_arguments_is_a_usage_error() {
    Command::new(env!("CARGO_BIN_EXE_chatmd"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn stdout_conflicts_with_output_dir() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["convert", "in.html", "--stdout", "--output-dir", "x"])
        .assert()
        .code(2);
}

#[test]
fn missing_input_exits_1() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.html");
    cmd(&dir)
        .arg("convert")
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("File not found: {}", missing.display())));
}

// ============================================================================
// Convert
// ============================================================================

#[test]
fn writes_file_named_after_title() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("exports");

    cmd(&dir)
        .arg("convert")
        .arg(fixture_path("primary_layout.html"))
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Markdown export generated:"))
        .stdout(predicate::str::contains("Sourdough Starter Help.md"));

    let written = std::fs::read_to_string(out_dir.join("Sourdough Starter Help.md")).unwrap();
    assert!(written.starts_with("# Sourdough Starter Help\n\n- **Source**: primary_layout.html\n"));
    assert!(written.ends_with("Once a week.\n\n---\n"));
}

#[test]
fn explicit_output_path_is_used() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("chat.md");

    cmd(&dir)
        .arg("convert")
        .arg(fixture_path("turn_layout.html"))
        .arg(&output)
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("## User\n\nPlan a two day trip to Lisbon.\n"));
}

#[test]
fn output_dir_comes_from_config() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("from-config");
    std::fs::write(
        dir.path().join("config.toml"),
        format!("[export]\noutput_dir = {:?}\n", out_dir.display().to_string()),
    )
    .unwrap();

    cmd(&dir)
        .arg("convert")
        .arg(fixture_path("turn_layout.html"))
        .assert()
        .success();

    assert!(out_dir.join("Trip Planning.md").exists());
}

#[test]
fn stdout_transcript_snapshot() {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir)
        .arg("convert")
        .arg(fixture_path("turn_layout.html"))
        .arg("--stdout")
        .arg("--title")
        .arg("Lisbon")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    insta::with_settings!({filters => vec![
        (r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}", "[EXPORTED_AT]"),
    ]}, {
        insta::assert_snapshot!(stdout.trim_end(), @r"
        # Lisbon

        - **Source**: turn_layout.html
        - **Exported at**: [EXPORTED_AT]

        ---

        ## User

        Plan a two day trip to Lisbon.

        ---

        ## Assistant

        Day one: Alfama.

        Day two: Belém.

        ---
        ");
    });
}

#[test]
fn invalid_utf8_page_still_converts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("latin1.html");
    std::fs::write(
        &input,
        b"<title>Caf\xe9 notes - ChatGPT</title><div data-message-author-role=\"user\">cr\xe8me \xff</div>",
    )
    .unwrap();

    cmd(&dir)
        .arg("convert")
        .arg(&input)
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Caf\u{FFFD} notes\n"))
        .stdout(predicate::str::contains("## User\n\ncr\u{FFFD}me \u{FFFD}\n"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("-vv")
        .arg("convert")
        .arg(fixture_path("primary_layout.html"))
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Sourdough Starter Help\n"))
        .stderr(predicate::str::contains("selected candidate message nodes"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file created"));
    assert!(dir.path().join("config.toml").exists());

    cmd(&dir)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    cmd(&dir).args(["config", "init", "--force"]).assert().success();

    cmd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[export]"))
        .stdout(predicate::str::contains(r#"product_name = "ChatGPT""#));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[export\n").unwrap();

    cmd(&dir)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn completions_are_generated() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chatmd"));
}
