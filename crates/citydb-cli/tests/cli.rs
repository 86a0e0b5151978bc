use assert_cmd::Command;
use predicates::prelude::*;

fn citydb() -> Command {
    let mut cmd = Command::cargo_bin("citydb").expect("binary built");
    cmd.env_remove("CITYDB_INPUT").env_remove("CITYDB_LIMIT");
    cmd
}

#[test]
fn find_resolves_case_and_format_insensitively() {
    citydb()
        .args(["find", "NEW-YORK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New York, NY, USA [new-york]"))
        .stdout(predicate::str::contains("Region: United States"));
}

#[test]
fn find_unknown_exits_with_failure() {
    citydb()
        .args(["find", "atlantis"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No city found for: atlantis"));
}

#[test]
fn search_respects_limit_and_order() {
    citydb()
        .args(["--limit", "5", "search", "lond"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "London, England, United Kingdom [london]\nNew London, CT, USA [new-london]\n",
        ));
}

#[test]
fn search_json_is_an_array() {
    let out = citydb()
        .args(["--json", "--limit", "3", "search"])
        .output()
        .expect("run citydb");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(value.as_array().map(|a| a.len()), Some(3));
}

#[test]
fn region_rejects_unknown_tag() {
    citydb()
        .args(["region", "atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown region"));
}

#[test]
fn nearest_accepts_negative_coordinates() {
    citydb()
        .args(["nearest", "-33.9", "151.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sydney"));
}

#[test]
fn collisions_reports_shadowed_springfield() {
    citydb()
        .arg("collisions")
        .assert()
        .success()
        .stdout(predicate::str::contains("springfield: kept Springfield, IL, USA"));
}

#[test]
fn collisions_json_lists_positions() {
    let out = citydb()
        .args(["--json", "collisions"])
        .output()
        .expect("run citydb");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    let first = &value.as_array().expect("array")[0];
    assert_eq!(first["slug"], "springfield");
    assert!(first["kept"].as_u64() < first["shadowed"].as_u64());
}

#[test]
fn bundled_search_honours_limit_env() {
    let out = citydb()
        .env("CITYDB_LIMIT", "2")
        .args(["--json", "search", "a"])
        .output()
        .expect("run citydb");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(value.as_array().map(|a| a.len()), Some(2));
}

#[test]
fn input_file_replaces_bundled_dataset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mini.json");
    std::fs::write(
        &path,
        r#"[{"name":"Oslo","country":"Norway","countryCode":"NO","timezone":"Europe/Oslo","lat":59.91,"lon":10.75}]"#,
    )
    .expect("write dataset");

    citydb()
        .arg("--input")
        .arg(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cities: 1"))
        .stdout(predicate::str::contains("Europe: 1"));
}
