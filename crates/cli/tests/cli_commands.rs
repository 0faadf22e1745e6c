use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const SEO_INPUT: &str = "seo tools\t90\nseo\t30\ntools\t10\n";

#[allow(deprecated)]
fn keyfield() -> Command {
    let mut cmd = Command::cargo_bin("keyfield").expect("binary");
    cmd.env_remove("KEYFIELD_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn run_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("command run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn optimize_json_reads_stdin() {
    let body = run_json(keyfield().args(["optimize", "--json"]).write_stdin(SEO_INPUT));

    assert_eq!(body["field1"]["content"], "seo tools");
    assert_eq!(body["field1"]["chars_used"], 9);
    assert_eq!(body["field2"]["content"], "");
    assert_eq!(body["field3"]["content"], "");
    assert_eq!(body["total_points"].as_f64(), Some(2610.0));
}

#[test]
fn optimize_prints_report_table() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("keywords.tsv");
    fs::write(&input, SEO_INPUT).unwrap();

    keyfield()
        .args(["--quiet", "optimize"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("| `field1` | seo tools | `9/29` | `2610.00` |"))
        .stdout(predicate::str::contains("Total points: `2610.00`"));
}

#[test]
fn repeated_spaces_do_not_create_extra_keywords() {
    let body = run_json(
        keyfield()
            .args(["optimize", "--json"])
            .write_stdin("seo  tools\t90\nseo\t30\n"),
    );
    assert_eq!(body["field1"]["content"], "seo tools");
    assert_eq!(body["total_points"].as_f64(), Some(2610.0));

    let pool = run_json(
        keyfield()
            .args(["pool", "--json"])
            .write_stdin("seo  tools\t90\nseo\t30\n"),
    );
    assert_eq!(pool.as_array().map(Vec::len), Some(2));
}

#[test]
fn optimize_accepts_json_input() {
    let raw = r#"[{"keyword": "seo tools", "finalScore": 90}, {"keyword": "seo", "final_score": 30}]"#;
    let body = run_json(keyfield().args(["optimize", "--json"]).write_stdin(raw));
    assert_eq!(body["field1"]["content"], "seo tools");
}

#[test]
fn bad_score_reports_line_number() {
    keyfield()
        .args(["optimize", "--format", "delimited"])
        .write_stdin("seo\t1\ntools\tmany\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn empty_input_fails() {
    keyfield()
        .arg("optimize")
        .write_stdin("# nothing here\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No keywords found"));
}

#[test]
fn pool_lists_synthetic_keywords_in_order() {
    let body = run_json(keyfield().args(["pool", "--json"]).write_stdin(SEO_INPUT));
    let texts: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|row| row["text"].as_str().expect("text"))
        .collect();
    assert_eq!(texts, vec!["seo tools", "tools seo", "seo", "tools"]);
    assert_eq!(body[1]["base_points"].as_f64(), Some(55.0));
    assert_eq!(body[0]["field1_points"].as_f64(), Some(90.0));
}

#[test]
fn pool_limit_truncates_json() {
    let body = run_json(
        keyfield()
            .args(["pool", "--json", "--limit", "2"])
            .write_stdin(SEO_INPUT),
    );
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[test]
fn config_flag_disables_expansion() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("keyfield.toml");
    fs::write(&config, "[expansion]\nenabled = false\n").unwrap();

    let body = run_json(
        keyfield()
            .arg("--config")
            .arg(&config)
            .args(["pool", "--json"])
            .write_stdin(SEO_INPUT),
    );
    assert_eq!(body.as_array().map(Vec::len), Some(3));
}

#[test]
fn config_env_var_is_used() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("keyfield.toml");
    fs::write(&config, "[field1]\ncapacity = 4\nmultiplier = 2.0\n").unwrap();

    let body = run_json(
        keyfield()
            .env("KEYFIELD_CONFIG", &config)
            .args(["optimize", "--json"])
            .write_stdin(SEO_INPUT),
    );
    // "seo" plus its separator exactly fills four characters
    assert_eq!(body["field1"]["content"], "seo");
    assert_eq!(body["field1"]["points"].as_f64(), Some(30.0 * 4.0 * 2.0));
    assert_eq!(body["field2"]["content"], "tools");
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("keyfield.toml");
    fs::write(&config, "[field1]\ncapacity = 0\nmultiplier = 1.0\n").unwrap();

    keyfield()
        .arg("--config")
        .arg(&config)
        .arg("optimize")
        .write_stdin(SEO_INPUT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn analyze_reports_missing_words() {
    let dir = tempdir().unwrap();
    let phrases = dir.path().join("phrases.txt");
    let reference = dir.path().join("reference.txt");
    fs::write(&phrases, "red car\n\n  blue car  \n").unwrap();
    fs::write(&reference, "red,green").unwrap();

    let body = run_json(
        keyfield()
            .arg("analyze")
            .arg("--phrases")
            .arg(&phrases)
            .arg("--reference")
            .arg(&reference)
            .arg("--json"),
    );
    assert_eq!(
        body,
        serde_json::json!([
            {"phrase": "red car", "split_words": "red,car", "missing_words": "car"},
            {"phrase": "blue car", "split_words": "blue,car", "missing_words": "blue,car"}
        ])
    );

    keyfield()
        .arg("analyze")
        .arg("--phrases")
        .arg(&phrases)
        .arg("--reference")
        .arg(&reference)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("| Phrase | Split Words | Status |"))
        .stdout(predicate::str::contains("| blue car | blue,car | blue,car |"));
}
