//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizsheet() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizsheet").unwrap()
}

/// A complete sheet where every question has option `mark` selected.
fn sheet(mark: u8) -> String {
    let mut s = String::new();
    for q in 1..=100 {
        s.push_str(&format!("Question {q}.\n"));
        for opt in 1..=4u8 {
            let box_ = if opt == mark { "[x]" } else { "[ ]" };
            s.push_str(&format!("{box_} choice {opt}\n"));
        }
        s.push('\n');
    }
    s
}

fn write_sheet(dir: &Path, index: u32, mark: u8) {
    std::fs::write(
        dir.join(format!("answers_respondent_{index}.txt")),
        sheet(mark),
    )
    .unwrap();
}

#[test]
fn parse_prints_encoded_line() {
    let dir = TempDir::new().unwrap();
    write_sheet(dir.path(), 1, 2);

    let expected = vec!["2"; 100].join(",");
    quizsheet()
        .current_dir(dir.path())
        .arg("parse")
        .arg("--file")
        .arg("answers_respondent_1.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn parse_json_format() {
    let dir = TempDir::new().unwrap();
    write_sheet(dir.path(), 1, 4);

    quizsheet()
        .current_dir(dir.path())
        .args(["parse", "--file", "answers_respondent_1.txt", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[4,4,4"));
}

#[test]
fn parse_malformed_sheet_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("short.txt"), "Question 1.\n[x] a\n[ ] b\n").unwrap();

    quizsheet()
        .current_dir(dir.path())
        .args(["parse", "--file", "short.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed input"));
}

#[test]
fn parse_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    quizsheet()
        .current_dir(dir.path())
        .args(["parse", "--file", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn parse_rejects_unknown_strategy() {
    let dir = TempDir::new().unwrap();
    write_sheet(dir.path(), 1, 1);
    quizsheet()
        .current_dir(dir.path())
        .args([
            "parse",
            "--file",
            "answers_respondent_1.txt",
            "--strategy",
            "greedy",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scan strategy"));
}

#[test]
fn write_creates_list_file() {
    let dir = TempDir::new().unwrap();
    write_sheet(dir.path(), 3, 1);

    quizsheet()
        .current_dir(dir.path())
        .args([
            "write",
            "--file",
            "answers_respondent_3.txt",
            "--index",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("100/100 answered"));

    let written =
        std::fs::read_to_string(dir.path().join("answers_list_respondent_3.txt")).unwrap();
    assert_eq!(written, vec!["1"; 100].join(","));
}

#[test]
fn write_rejects_zero_index() {
    let dir = TempDir::new().unwrap();
    write_sheet(dir.path(), 1, 1);

    quizsheet()
        .current_dir(dir.path())
        .args(["write", "--file", "answers_respondent_1.txt", "--index", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn collate_directory() {
    let dir = TempDir::new().unwrap();
    write_sheet(dir.path(), 1, 1);
    write_sheet(dir.path(), 2, 3);

    quizsheet()
        .current_dir(dir.path())
        .args(["collate", "--dir", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("answers_respondent_2.txt"))
        .stdout(predicate::str::contains("Collated 2 respondent(s)"));

    let collated = std::fs::read_to_string(dir.path().join("collated_answers.txt")).unwrap();
    let lines: Vec<&str> = collated.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1,1,"));
    assert!(lines[1].starts_with("3,3,"));
}

#[test]
fn collate_lexicographic_order() {
    let dir = TempDir::new().unwrap();
    write_sheet(dir.path(), 2, 2);
    write_sheet(dir.path(), 10, 4);

    quizsheet()
        .current_dir(dir.path())
        .args(["collate", "--dir", ".", "--sort", "lexicographic"])
        .assert()
        .success();

    let collated = std::fs::read_to_string(dir.path().join("collated_answers.txt")).unwrap();
    let first = collated.lines().next().unwrap();
    assert!(first.starts_with("4,"), "respondent 10 sorts first by name");
}

#[test]
fn collate_uses_configured_data_dir() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("responses");
    std::fs::create_dir(&data).unwrap();
    write_sheet(&data, 1, 2);
    std::fs::write(dir.path().join("quizsheet.toml"), "data_dir = \"responses\"\n").unwrap();

    quizsheet()
        .current_dir(dir.path())
        .arg("collate")
        .assert()
        .success();

    assert!(data.join("collated_answers.txt").exists());
}

#[test]
fn collate_empty_directory_fails() {
    let dir = TempDir::new().unwrap();

    quizsheet()
        .current_dir(dir.path())
        .args(["collate", "--dir", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid answer files"));
}

#[test]
fn collate_bad_sheet_names_file() {
    let dir = TempDir::new().unwrap();
    write_sheet(dir.path(), 1, 1);
    std::fs::write(dir.path().join("answers_respondent_2.txt"), "nothing here\n").unwrap();

    quizsheet()
        .current_dir(dir.path())
        .args(["collate", "--dir", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("answers_respondent_2.txt"));

    assert!(!dir.path().join("collated_answers.txt").exists());
}

#[test]
fn fetch_rejects_foreign_link() {
    let dir = TempDir::new().unwrap();

    quizsheet()
        .current_dir(dir.path())
        .args([
            "fetch",
            "--link",
            "https://example.com/sheet.txt",
            "--index",
            "1",
            "--dest",
            "raw",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid link"));

    assert!(!dir.path().join("raw").exists());
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    quizsheet()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizsheet.toml"));

    assert!(dir.path().join("quizsheet.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizsheet()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizsheet()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_config_is_loadable() {
    let dir = TempDir::new().unwrap();
    quizsheet().current_dir(dir.path()).arg("init").assert().success();

    let data = dir.path().join("data");
    std::fs::create_dir(&data).unwrap();
    write_sheet(&data, 1, 1);

    quizsheet()
        .current_dir(dir.path())
        .arg("collate")
        .assert()
        .success();
}

#[test]
fn help_output() {
    quizsheet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz answer-sheet parser and collator"));
}

#[test]
fn version_output() {
    quizsheet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizsheet"));
}
