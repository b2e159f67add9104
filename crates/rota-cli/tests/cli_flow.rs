//! Drives the `rota` binary against a throwaway profile store.

use std::path::Path;
use std::process::Command;

use pretty_assertions::assert_eq;
use serde_json::Value;

fn rota(dir: &Path, args: &[&str]) -> Value {
    let store = dir.join("profiles.json");
    let output = Command::new(env!("CARGO_BIN_EXE_rota"))
        .current_dir(dir)
        .env_remove("ROTA_LOG")
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "--seed", "11"])
        .args(args)
        .output()
        .expect("rota should run");
    assert!(
        output.status.success(),
        "rota {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

#[test]
fn roster_schedule_and_candidates() {
    let dir = tempfile::tempdir().unwrap();

    let ana = rota(
        dir.path(),
        &["profile", "add", "--name", "Ana", "--age", "20", "--role", "audio", "--role", "video"],
    );
    let beto = rota(
        dir.path(),
        &["profile", "add", "--name", "Beto", "--age", "15", "--role", "Audio", "--role", "Video"],
    );
    let ana_id = ana["id"].as_u64().unwrap();
    let beto_id = beto["id"].as_u64().unwrap();
    assert!(beto_id > ana_id);

    let listed = rota(dir.path(), &["profile", "list"]);
    assert_eq!(listed.as_array().map(Vec::len), Some(2));

    let schedule = rota(dir.path(), &["schedule", "--month", "2024-01"]);
    let rows = schedule["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0]["date"], "2024-01-04");
    assert_eq!(rows[0]["slots"].as_array().map(Vec::len), Some(5));
    assert_eq!(schedule["violations"], Value::Array(vec![]));
    assert_eq!(schedule["seed"], 11);

    let set = format!("2024-01-04:audio={beto_id}");
    let candidates = rota(
        dir.path(),
        &[
            "candidates", "--date", "2024-01-04", "--role", "video", "--set", &set, "--include-current",
        ],
    );
    assert_eq!(candidates["seed"], 11);
    let ids: Vec<u64> = candidates["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![ana_id]);
}

#[test]
fn current_holder_is_listed_only_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let ana = rota(
        dir.path(),
        &["profile", "add", "--name", "Ana", "--age", "20", "--role", "usher"],
    );
    let ana_id = ana["id"].clone();
    let query = ["candidates", "--date", "2024-01-04", "--role", "usher"];

    // Ana is the only usher, so generation already put her in this slot.
    let booked = rota(dir.path(), &query);
    assert_eq!(booked["include_current"], false);
    assert_eq!(booked["candidates"], Value::Array(vec![]));

    let mut with_flag = query.to_vec();
    with_flag.push("--include-current");
    let freed = rota(dir.path(), &with_flag);
    assert_eq!(freed["candidates"][0]["id"], ana_id);
}

#[test]
fn unseeded_schedule_reports_a_replayable_seed() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("profiles.json");
    let output = Command::new(env!("CARGO_BIN_EXE_rota"))
        .current_dir(dir.path())
        .env_remove("ROTA_LOG")
        .env_remove("ROTA_SCHEDULE__SEED")
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "schedule", "--month", "2024-01"])
        .output()
        .expect("rota should run");
    assert!(output.status.success());
    let schedule: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schedule["seed"].is_u64());
}

#[test]
fn override_with_unknown_id_is_reported_not_rejected() {
    let dir = tempfile::tempdir().unwrap();
    rota(
        dir.path(),
        &["profile", "add", "--name", "Ana", "--age", "20", "--role", "usher"],
    );

    let schedule = rota(
        dir.path(),
        &["schedule", "--month", "2024-01", "--set", "2024-01-04:platform=424242"],
    );
    let first = &schedule["rows"][0]["slots"];
    let platform = first
        .as_array()
        .unwrap()
        .iter()
        .find(|slot| slot["role"] == "platform")
        .unwrap();
    assert_eq!(platform["status"], "dangling");
    assert_eq!(schedule["violations"][0]["kind"], "unknown_profile");
}

#[test]
fn removed_profile_is_gone() {
    let dir = tempfile::tempdir().unwrap();
    let ana = rota(
        dir.path(),
        &["profile", "add", "--name", "Ana", "--age", "20", "--role", "usher"],
    );
    let id = ana["id"].as_u64().unwrap().to_string();

    let removed = rota(dir.path(), &["profile", "remove", &id]);
    assert_eq!(removed["name"], "Ana");
    assert_eq!(rota(dir.path(), &["profile", "list"]), Value::Array(vec![]));
}
