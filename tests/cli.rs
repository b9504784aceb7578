use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tomatick(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tomatick").unwrap();
    cmd.env("TOMATICK_HOME", home.path())
        .env_remove("TOMATICK_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_mentions_pomodoro() {
    let home = TempDir::new().unwrap();
    tomatick(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    tomatick(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tomatick"));
}

#[test]
fn test_config_path_uses_home_override() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join("config.yaml");
    tomatick(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_init_then_show_json() {
    let home = TempDir::new().unwrap();
    tomatick(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join("config.yaml").exists());

    tomatick(&home)
        .args(["config", "show", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"notifications\""));

    tomatick(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_stopwatch_json_with_limit() {
    let home = TempDir::new().unwrap();
    let output = tomatick(&home)
        .args(["stopwatch", "--limit", "1s", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("INFO"), "unexpected log lines: {stderr}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["event"], "stopwatch");
    assert_eq!(events[0]["elapsed_seconds"], 0);
    assert_eq!(events[1]["elapsed_seconds"], 1);
    assert_eq!(events[1]["display"], "0:01");
    assert_eq!(events[1]["running"], false);
}

#[test]
fn test_stopwatch_rejects_bad_limit() {
    let home = TempDir::new().unwrap();
    tomatick(&home)
        .args(["stopwatch", "--limit", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn test_broken_config_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "general: [1, 2]").unwrap();

    tomatick(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_config_init_force_repairs_broken_config() {
    let home = TempDir::new().unwrap();
    let config_file = home.path().join("config.yaml");
    std::fs::write(&config_file, "general: [1, 2]").unwrap();

    tomatick(&home).args(["config", "path"]).assert().success();
    tomatick(&home)
        .args(["completions", "zsh"])
        .assert()
        .success();

    tomatick(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    tomatick(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"general\""));
}
