use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FIXTURE: &str = r#"{
  "leagues": {
    "premier-league": ["ars-che", "liv-mci", "ars-che"],
    "la-liga": ["rma-bar"]
  },
  "matches": {
    "ars-che": {
      "Bet365": { "home": 2.3, "draw": 3.2, "away": 4.0 },
      "Unibet": { "1": "2.1", "X": "3.6", "2": "4.4" }
    },
    "liv-mci": {
      "Bet365": { "home": 1.5, "draw": 3.0, "away": 5.0 }
    },
    "rma-bar": {
      "Betway": { "home": 2.0, "draw": "-" }
    }
  }
}"#;

fn arbradar() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_arbradar"));
    cmd.env("RUST_LOG", "error");
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn scan_config(dir: &TempDir, fixture: &Path) -> PathBuf {
    write(
        dir,
        "config.toml",
        &format!(
            "[source]\ntype = \"fixture\"\npath = {:?}\nleagues = [\"premier-league\", \"la-liga\"]\n",
            fixture.display().to_string()
        ),
    )
}

#[test]
fn evaluate_prints_stake_split_for_arbitrage() {
    arbradar()
        .args(["--color", "never", "evaluate", "--home", "2.3", "--draw", "3.6", "--away", "4.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arbitrage found"))
        .stdout(predicate::str::contains("6.40"))
        .stdout(predicate::str::contains("46.26"));
}

#[test]
fn evaluate_reports_overround_without_failing() {
    arbradar()
        .args(["--color", "never", "evaluate", "--home", "1.5", "--draw", "3.0", "--away", "5.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no arbitrage with these odds"))
        .stdout(predicate::str::contains("1.2000"));
}

#[test]
fn evaluate_reports_missing_outcome() {
    arbradar()
        .args(["--color", "never", "evaluate", "--home", "2.0", "--draw", "2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing away"));
}

#[test]
fn evaluate_rejects_invalid_odds() {
    arbradar()
        .args(["evaluate", "--home", "0.5", "--draw", "3.0", "--away", "4.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("odds must be finite and greater than 1.0"));
}

#[test]
fn evaluate_rejects_zero_stake() {
    arbradar()
        .args(["evaluate", "--home", "2.3", "--draw", "3.6", "--away", "4.4", "--stake", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stake budget"));
}

#[test]
fn evaluate_json_is_machine_readable() {
    let output = arbradar()
        .args(["--json", "evaluate", "--home", "2.3", "--draw", "3.6", "--away", "4.4"])
        .output()
        .expect("run arbradar");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    assert_eq!(value["command"], "evaluate");
    assert_eq!(value["result"]["status"], "feasible");
    assert_eq!(value["best_odds"]["home"], 2.3);
}

#[test]
fn scan_json_reports_every_match_and_filters_display() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write(&dir, "boards.json", FIXTURE);
    let config = scan_config(&dir, &fixture);

    let output = arbradar()
        .args(["--json", "scan", "--config"])
        .arg(&config)
        .output()
        .expect("run arbradar");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");

    let leagues = value["report"]["leagues"].as_array().unwrap();
    assert_eq!(leagues.len(), 2);
    assert_eq!(leagues[0]["matches"].as_array().unwrap().len(), 2);
    assert_eq!(
        leagues[1]["matches"][0]["result"]["reason"],
        "incomplete_outcome_set"
    );

    let shown = value["shown"].as_array().unwrap();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0]["match"], "ars-che");
}

#[test]
fn scan_flags_override_config() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write(&dir, "boards.json", FIXTURE);
    let config = scan_config(&dir, &fixture);

    let output = arbradar()
        .args(["--json", "scan", "--all", "--stake", "200", "--league", "premier-league", "--config"])
        .arg(&config)
        .output()
        .expect("run arbradar");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["report"]["total_stake"], 200.0);
    assert_eq!(value["report"]["leagues"].as_array().unwrap().len(), 1);
    assert_eq!(value["shown"].as_array().unwrap().len(), 2);
}

#[test]
fn scan_prints_tables() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write(&dir, "boards.json", FIXTURE);
    let config = scan_config(&dir, &fixture);

    arbradar()
        .args(["--color", "never", "scan", "--all", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("premier-league"))
        .stdout(predicate::str::contains("ars-che"))
        .stdout(predicate::str::contains("overround"))
        .stdout(predicate::str::contains("Best profit"));
}

#[test]
fn scan_warns_when_nothing_is_profitable() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write(&dir, "boards.json", FIXTURE);
    let config = scan_config(&dir, &fixture);

    arbradar()
        .args(["--color", "never", "scan", "--league", "la-liga", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No profitable arbitrage found"));
}

#[test]
fn scan_reports_arbitrage_below_min_profit() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write(&dir, "boards.json", FIXTURE);
    let config = scan_config(&dir, &fixture);

    arbradar()
        .args([
            "--color",
            "never",
            "scan",
            "--league",
            "premier-league",
            "--min-profit",
            "50",
            "--config",
        ])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 arbitrage below the minimum profit of 50.00"))
        .stdout(predicate::str::contains("No profitable arbitrage found").not())
        .stdout(predicate::str::contains("closest").not());
}

#[test]
fn scan_fails_on_missing_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let config = scan_config(&dir, &dir.path().join("absent.json"));

    arbradar()
        .args(["scan", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read fixture"));
}

#[test]
fn config_validate_rejects_out_of_range_stake() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(&dir, "config.toml", "[scan]\ntotal_stake = 5000.0\n");

    arbradar()
        .args(["--color", "never", "config", "validate", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("total_stake"));
}

#[test]
fn config_init_writes_valid_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    arbradar()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();

    arbradar()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));

    arbradar()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}
