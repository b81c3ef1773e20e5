use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(home: &Path, base_url: &str) {
    let config_dir = home.join(".iftar-countdown");
    fs::create_dir_all(&config_dir).unwrap();
    let config_content = format!(
        r#"
[api]
key = "dummy_key"
base_url = "{}"
max_retries = 0
"#,
        base_url
    );
    fs::write(config_dir.join("config.toml"), config_content).unwrap();
}

fn iftar(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("iftar").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

async fn mount_day(mock_server: &MockServer, city: &str) {
    Mock::given(method("GET"))
        .and(path("/pray/all"))
        .and(query_param("data.city", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "result": [
                { "saat": "04:30", "vakit": "İmsak" },
                { "saat": "13:10", "vakit": "Öğle" },
                { "saat": "19:45", "vakit": "Akşam" },
                { "saat": "21:09", "vakit": "Yatsı" }
            ]
        })))
        .mount(mock_server)
        .await;
}

#[test]
fn test_cities_lists_all_provinces() {
    let temp_home = tempfile::tempdir().unwrap();

    let assert = iftar(temp_home.path()).arg("cities").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert_eq!(stdout.lines().count(), 81);
    assert!(stdout.lines().any(|l| l == "Şanlıurfa"));
}

#[test]
fn test_unknown_city_is_rejected() {
    let temp_home = tempfile::tempdir().unwrap();
    write_config(temp_home.path(), "http://127.0.0.1:9");

    iftar(temp_home.path())
        .args(["times", "--city", "Atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown city 'Atlantis'"));
}

#[test]
fn test_city_set_and_show() {
    let temp_home = tempfile::tempdir().unwrap();

    iftar(temp_home.path())
        .args(["city", "eskisehir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("City set to Eskişehir"));

    iftar(temp_home.path())
        .arg("city")
        .assert()
        .success()
        .stdout(predicate::str::diff("Eskişehir\n"));
}

#[test]
fn test_default_city_when_nothing_remembered() {
    let temp_home = tempfile::tempdir().unwrap();

    iftar(temp_home.path())
        .arg("city")
        .assert()
        .success()
        .stdout(predicate::str::diff("Istanbul\n"));
}

#[tokio::test]
async fn test_countdown_json_contract() {
    let mock_server = MockServer::start().await;
    mount_day(&mock_server, "ankara").await;

    let temp_home = tempfile::tempdir().unwrap();
    write_config(temp_home.path(), &mock_server.uri());

    let assert = iftar(temp_home.path())
        .args(["countdown", "--city", "Ankara", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let snapshot: Value = serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert_eq!(snapshot["city"], "Ankara");
    assert_eq!(snapshot["status"]["state"], "ready");
    assert_eq!(snapshot["times"].as_array().unwrap().len(), 4);

    let countdown = snapshot["countdown"].as_str().expect("countdown present");
    assert_eq!(countdown.len(), 8);
    assert_eq!(&countdown[2..3], ":");

    let label = snapshot["label"].as_str().unwrap();
    assert!(label == "until_iftar" || label == "until_sahur");
    // Progress is only shown while fasting
    if snapshot["phase"] == "fasting" {
        assert!(snapshot["progress"].is_number());
    }
    if snapshot["phase"] == "before_sahur" {
        assert!(snapshot["progress"].is_null());
    }

    // The fetched city is remembered
    let state = fs::read_to_string(temp_home.path().join(".iftar-countdown/state.json")).unwrap();
    let state: Value = serde_json::from_str(&state).unwrap();
    assert_eq!(state["last_city"], "Ankara");
}

#[tokio::test]
async fn test_times_uses_remembered_city() {
    let mock_server = MockServer::start().await;
    mount_day(&mock_server, "canakkale").await;

    let temp_home = tempfile::tempdir().unwrap();
    write_config(temp_home.path(), &mock_server.uri());

    iftar(temp_home.path())
        .args(["city", "Çanakkale"])
        .assert()
        .success();

    let assert = iftar(temp_home.path())
        .args(["times", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output["city"], "Çanakkale");
    assert_eq!(output["anchors"]["sahur"], "04:30:00");
    assert_eq!(output["anchors"]["iftar"], "19:45:00");
    assert_eq!(output["times"][2]["vakit"], "Akşam");
}

#[tokio::test]
async fn test_fetch_failure_shows_generic_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pray/all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let temp_home = tempfile::tempdir().unwrap();
    write_config(temp_home.path(), &mock_server.uri());

    iftar(temp_home.path())
        .args(["countdown", "--city", "Van"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Namaz vakitleri yüklenemedi."));

    assert!(!temp_home.path().join(".iftar-countdown/state.json").exists());
}
