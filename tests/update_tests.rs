//! Integration tests for `tmbundle update`

#![cfg(unix)]

mod common;

use common::TestHome;
use predicates::prelude::*;

fn pull_calls(home: &TestHome) -> Vec<String> {
    home.calls()
        .into_iter()
        .filter(|call| call.starts_with("git pull --ff-only"))
        .collect()
}

#[test]
fn test_update_processes_first_five() {
    let home = TestHome::new();
    home.fake_git();
    for i in 1..=7 {
        home.create_bundle(&format!("Bundle{i}"), true);
    }

    home.cmd()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("------> Summary"))
        .stdout(predicate::str::contains("Updated (5)"))
        .stdout(predicate::str::contains("Skipped").not())
        .stdout(predicate::str::contains("Errored").not());

    assert_eq!(pull_calls(&home).len(), 5);
}

#[test]
fn test_update_limit_flag() {
    let home = TestHome::new();
    home.fake_git();
    for i in 1..=7 {
        home.create_bundle(&format!("Bundle{i}"), true);
    }

    home.cmd()
        .args(["update", "--limit", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated (7)"));

    assert_eq!(pull_calls(&home).len(), 7);
}

#[test]
fn test_update_classifies_bundles() {
    let home = TestHome::new();
    home.fake_git();
    home.create_bundle("Ruby", true);
    home.create_bundle("Delta", false);
    let broken = home.create_bundle("Broken", true);
    home.fail_pull(&broken);

    home.cmd()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "------> Skipping Delta (not a Git repo, delta bundle?)",
        ))
        .stdout(predicate::str::contains("------> Updating Ruby..."))
        .stdout(predicate::str::contains("Skipped (1)\n- Delta\n"))
        .stdout(predicate::str::contains("Updated (1)\n- Ruby\n"))
        .stdout(predicate::str::contains("Errored (1)\n- Broken\n"));

    let pulls = pull_calls(&home);
    assert_eq!(pulls.len(), 2);
    assert!(pulls.iter().all(|call| !call.contains("Delta")));
}

#[test]
fn test_update_pulls_inside_bundle_dir() {
    let home = TestHome::new();
    home.fake_git();
    home.create_bundle("Ruby", true);

    home.cmd().arg("update").assert().success();

    let pulls = pull_calls(&home);
    assert_eq!(pulls.len(), 1);
    assert!(pulls[0].ends_with("Ruby.tmbundle"), "{}", pulls[0]);
}

#[test]
fn test_update_empty_bundles_dir() {
    let home = TestHome::new();
    home.fake_git();

    home.cmd()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("------> Summary"))
        .stdout(predicate::str::contains("Updated").not());
}
