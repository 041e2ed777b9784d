//! Integration tests for `book`, `show` and `cancel`.
//!
//! Exit codes exercised here:
//! - 0: success
//! - 1: date already booked, or `show` on a free date
//! - 4: malformed input

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// book
// ============================================================================

#[test]
fn test_book_prints_booking_json() {
    let env = TestEnv::new();

    let booking = env.book("2030-01-01", Some("Alice"));

    assert!(booking["id"].as_i64().is_some_and(|id| id > 0));
    assert_eq!(booking["date"], "2030-01-01");
    assert_eq!(booking["name"], "Alice");
    assert!(booking["created_at"]
        .as_str()
        .is_some_and(|ts| ts.ends_with('Z')));
}

#[test]
fn test_book_without_name_prints_null() {
    let env = TestEnv::new();

    let booking = env.book("2030-01-02", None);
    assert!(booking["name"].is_null());
}

#[test]
fn test_book_trims_and_blanks_names() {
    let env = TestEnv::new();

    let padded = env.book("2030-01-03", Some("  Bob  "));
    assert_eq!(padded["name"], "Bob");

    let blank = env.book("2030-01-04", Some("   "));
    assert!(blank["name"].is_null());
}

#[test]
fn test_book_same_date_twice_conflicts() {
    let env = TestEnv::new();
    env.book("2030-02-02", Some("Alice"));

    env.command()
        .args(["book", "2030-02-02", "--name", "Bob"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: date already booked: 2030-02-02"));

    let listed = env.list_json("2030-02-02", "2030-02-02");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Alice");
}

#[test]
fn test_book_rejects_bad_dates() {
    let env = TestEnv::new();

    for bad in ["2030/01/01", "2030-1-1", "2030-02-30", "tomorrow"] {
        env.command()
            .args(["book", bad])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("date must be YYYY-MM-DD"));
    }

    // Validation happens before the data directory is touched
    assert!(!env.data_dir.exists());
}

#[test]
fn test_book_rejects_long_name() {
    let env = TestEnv::new();
    let long = "x".repeat(121);

    env.command()
        .args(["book", "2030-03-03", "--name", &long])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("name too long"));

    let exact = "y".repeat(120);
    let booking = env.book("2030-03-03", Some(&exact));
    assert_eq!(booking["name"], exact.as_str());
}

#[test]
fn test_book_ids_increase() {
    let env = TestEnv::new();

    let first = env.book("2030-04-01", None)["id"].as_i64().unwrap();
    let second = env.book("2030-04-02", None)["id"].as_i64().unwrap();
    assert!(second > first);
}

// ============================================================================
// show
// ============================================================================

#[test]
fn test_show_booked_date() {
    let env = TestEnv::new();
    let booking = env.book("2030-05-05", Some("Carol"));

    let output = env
        .command()
        .args(["show", "2030-05-05"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown, booking);
}

#[test]
fn test_show_free_date_exits_one() {
    let env = TestEnv::new();

    env.command()
        .args(["show", "2030-05-06"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("2030-05-06 is free"));
}

#[test]
fn test_show_bad_date() {
    let env = TestEnv::new();

    env.command().args(["show", "05/06/2030"]).assert().code(4);
}

// ============================================================================
// cancel
// ============================================================================

#[test]
fn test_cancel_frees_the_date() {
    let env = TestEnv::new();
    let booking = env.book("2030-06-06", None);
    let id = booking["id"].as_i64().unwrap().to_string();

    env.command()
        .args(["cancel", &id])
        .assert()
        .success()
        .stderr(predicate::str::contains(format!("Cancelled booking {id}")));

    assert!(env.list_json("2030-06-06", "2030-06-06").is_empty());

    // The date can be booked again, under a fresh id
    let rebooked = env.book("2030-06-06", Some("Dan"));
    assert!(rebooked["id"].as_i64().unwrap() > booking["id"].as_i64().unwrap());
}

#[test]
fn test_cancel_twice_succeeds() {
    let env = TestEnv::new();
    let id = env.book("2030-06-07", None)["id"]
        .as_i64()
        .unwrap()
        .to_string();

    env.command().args(["cancel", &id]).assert().success();
    env.command().args(["cancel", &id]).assert().success();
}

#[test]
fn test_cancel_unknown_id_succeeds() {
    let env = TestEnv::new();
    env.book("2030-06-08", None);

    env.command().args(["cancel", "424242"]).assert().success();
    assert_eq!(env.list_json("2030-06-08", "2030-06-08").len(), 1);
}

#[test]
fn test_cancel_non_integer_id() {
    let env = TestEnv::new();

    env.command()
        .args(["cancel", "abc"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid booking ID"));
}

#[test]
fn test_cancel_quiet_prints_nothing() {
    let env = TestEnv::new();
    let id = env.book("2030-06-09", None)["id"]
        .as_i64()
        .unwrap()
        .to_string();

    env.command()
        .args(["--quiet", "cancel", &id])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}
