//! Integration tests for the keywords CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn keywords() -> Command {
    Command::cargo_bin("keywords").unwrap()
}

#[test]
fn test_extract_english_text() {
    keywords()
        .args(["extract", "-n", "0", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("linear Diophantine equations"))
        .stdout(predicate::str::contains("minimal generating sets"))
        .stdout(predicate::str::contains("\tnatural numbers\n"));
}

#[test]
fn test_extract_with_custom_stoplist() {
    keywords()
        .args(["extract", "-i"])
        .arg(fixture_path("regression.txt"))
        .arg("-s")
        .arg(fixture_path("small-stoplist.txt"))
        .assert()
        .success()
        .stdout("9.000\tsupervised learning algorithm\n4.000\tLinear regression\n");
}

#[test]
fn test_ascending_order_and_top() {
    keywords()
        .args(["extract", "--order", "asc", "-n", "1", "-i"])
        .arg(fixture_path("regression.txt"))
        .arg("-s")
        .arg(fixture_path("small-stoplist.txt"))
        .assert()
        .success()
        .stdout("4.000\tLinear regression\n");
}

#[test]
fn test_min_score() {
    keywords()
        .args(["extract", "--min-score", "5", "-i"])
        .arg(fixture_path("regression.txt"))
        .arg("-s")
        .arg(fixture_path("small-stoplist.txt"))
        .assert()
        .success()
        .stdout("9.000\tsupervised learning algorithm\n");
}

#[test]
fn test_json_output() {
    let output = keywords()
        .args(["extract", "-f", "json", "-i"])
        .arg(fixture_path("regression.txt"))
        .arg("-s")
        .arg(fixture_path("small-stoplist.txt"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let documents = json.as_array().unwrap();
    assert_eq!(documents.len(), 1);
    assert!(documents[0]["file"]
        .as_str()
        .unwrap()
        .ends_with("regression.txt"));
    assert_eq!(
        documents[0]["keywords"][0]["phrase"],
        "supervised learning algorithm"
    );
    assert_eq!(documents[0]["keywords"][0]["score"], 9.0);
}

#[test]
fn test_markdown_output() {
    keywords()
        .args(["extract", "-f", "markdown", "-i"])
        .arg(fixture_path("regression.txt"))
        .arg("-s")
        .arg(fixture_path("small-stoplist.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("## "))
        .stdout(predicate::str::contains(
            "1. supervised learning algorithm (9.000)",
        ))
        .stdout(predicate::str::contains("*Total keywords: 2*"));
}

#[test]
fn test_multiple_files_have_headers() {
    keywords()
        .args(["extract", "-q", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("== "))
        .stdout(predicate::str::contains("regression.txt =="))
        .stdout(predicate::str::contains("english-sample.txt =="));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("keywords.txt");

    keywords()
        .args(["extract", "-i"])
        .arg(fixture_path("regression.txt"))
        .arg("-s")
        .arg(fixture_path("small-stoplist.txt"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.starts_with("9.000\tsupervised learning algorithm"));
}

#[test]
fn test_non_text_file_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("notes.md");
    fs::write(&input, "Graph theory and linear algebra").unwrap();

    keywords()
        .args(["extract", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only .txt files are supported"));

    keywords()
        .args(["extract", "--any-extension", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph theory"));
}

#[test]
fn test_missing_file_error() {
    keywords()
        .args(["extract", "-i", "nonexistent-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_config_file_sets_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let stoplist = fs::canonicalize(fixture_path("small-stoplist.txt")).unwrap();
    let config_path = temp_dir.path().join("keywords.toml");
    fs::write(
        &config_path,
        format!(
            "[extraction]\nstopwords = {:?}\n\n[output]\nformat = \"json\"\npretty_json = false\n",
            stoplist.to_str().unwrap()
        ),
    )
    .unwrap();

    keywords()
        .args(["extract", "-i"])
        .arg(fixture_path("regression.txt"))
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{\"phrase\":\"supervised learning algorithm\",\"score\":9.0}",
        ));

    // Flags win over the file
    keywords()
        .args(["extract", "-f", "text", "-i"])
        .arg(fixture_path("regression.txt"))
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("9.000\t"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[output]\nformat = \"yaml\"\n").unwrap();

    keywords()
        .args(["extract", "-i"])
        .arg(fixture_path("regression.txt"))
        .arg("-c")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_validate_stoplist() {
    keywords()
        .args(["validate", "-s"])
        .arg(fixture_path("small-stoplist.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Stoplist is valid"))
        .stdout(predicate::str::contains("Stopwords: 4"));
}

#[test]
fn test_validate_rejects_empty_stoplist() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.txt");
    fs::write(&path, "# nothing here\n").unwrap();

    keywords()
        .args(["validate", "-s"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Stoplist is invalid"));
}

#[test]
fn test_generate_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("keywords.toml");

    keywords()
        .args(["generate-config", "-o"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration template generated successfully",
        ));

    keywords()
        .args(["extract", "-q", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\t"));
}

#[test]
fn test_help_lists_commands() {
    keywords()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("generate-config"));
}
