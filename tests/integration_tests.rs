use predicates::str::contains;

mod common;
use common::swin;

#[test]
fn status_during_3pm_window() {
    swin()
        .args(["status", "--at", "15:30"])
        .assert()
        .success()
        .stdout(contains("3 PM Report"))
        .stdout(contains("open now"));
}

#[test]
fn status_outside_any_window() {
    swin()
        .args(["status", "--at", "10:00"])
        .assert()
        .success()
        .stdout(contains("No sales window is open"));
}

#[test]
fn status_early_morning_is_closing() {
    swin()
        .args(["status", "--at", "02:00"])
        .assert()
        .success()
        .stdout(contains("Closing Report"));
}

#[test]
fn status_rejects_out_of_range_hour() {
    swin()
        .args(["status", "--at", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time input"));
}

#[test]
fn status_json_reports_active_window() {
    let out = swin()
        .args(["status", "--json", "--at", "21:15"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(v["at"], "21:15");
    assert_eq!(v["active_window"], "9pm");
}

#[test]
fn status_json_null_when_closed() {
    let out = swin()
        .args(["status", "--json", "--at", "10:00"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert!(v["active_window"].is_null());
}

#[test]
fn next_counts_down_to_3pm() {
    swin()
        .args(["next", "--at", "14:30"])
        .assert()
        .success()
        .stdout(contains("3 PM Report"))
        .stdout(contains("3:00 PM"))
        .stdout(contains("30m"));
}

#[test]
fn next_counts_down_to_7pm() {
    swin()
        .args(["next", "--at", "18:15"])
        .assert()
        .success()
        .stdout(contains("7 PM Report"))
        .stdout(contains("7:00 PM"))
        .stdout(contains("45m"));
}

#[test]
fn next_reports_open_now_during_window() {
    swin()
        .args(["next", "--at", "15:30"])
        .assert()
        .success()
        .stdout(contains("3 PM Report is open now"));
}

#[test]
fn next_reports_open_now_during_closing() {
    swin()
        .args(["next", "--at", "23:00"])
        .assert()
        .success()
        .stdout(contains("Closing Report is open now"));
}

#[test]
fn next_json_has_countdown() {
    let out = swin()
        .args(["next", "--json", "--at", "20:30"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(v["next"]["window"], "9pm");
    assert_eq!(v["next"]["opens_at"], "9:00 PM");
    assert_eq!(v["next"]["opens_in"], "30m");
}

#[test]
fn next_json_null_while_closing_open() {
    let out = swin()
        .args(["next", "--json", "--at", "23:00"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(v["active_window"], "closing");
    assert!(v["next"].is_null());
}
