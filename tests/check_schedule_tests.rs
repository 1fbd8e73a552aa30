use predicates::str::contains;

mod common;
use common::swin;

#[test]
fn check_open_window() {
    swin()
        .args(["check", "3pm", "--at", "15:30"])
        .assert()
        .success()
        .stdout(contains("3 PM Report is open"));
}

#[test]
fn check_closed_window_with_countdown() {
    swin()
        .args(["check", "7pm", "--at", "18:15"])
        .assert()
        .success()
        .stdout(contains("7 PM Report is closed"))
        .stdout(contains("Opens at 7:00 PM (in 45m)"));
}

#[test]
fn check_closed_window_while_another_is_open() {
    swin()
        .args(["check", "7pm", "--at", "15:30"])
        .assert()
        .success()
        .stdout(contains("7 PM Report is closed"));
}

#[test]
fn check_is_case_insensitive() {
    swin()
        .args(["check", "CLOSING", "--at", "23:30"])
        .assert()
        .success()
        .stdout(contains("Closing Report is open"));
}

#[test]
fn check_rejects_unknown_window() {
    swin()
        .args(["check", "noon", "--at", "12:00"])
        .assert()
        .failure()
        .stderr(contains("Unknown sales window"));
}

#[test]
fn schedule_lists_all_windows() {
    swin()
        .args(["schedule", "--at", "19:05"])
        .assert()
        .success()
        .stdout(contains("3 PM Report"))
        .stdout(contains("7 PM Report"))
        .stdout(contains("9 PM Report"))
        .stdout(contains("Closing Report"))
        .stdout(contains("open"));
}

#[test]
fn schedule_json_exposes_static_table() {
    let out = swin()
        .args(["schedule", "--json", "--at", "10:00"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    let windows = v["windows"].as_array().expect("windows array");
    assert_eq!(windows.len(), 4);

    let ids: Vec<&str> = windows
        .iter()
        .map(|w| w["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["3pm", "7pm", "9pm", "closing"]);

    let hours: Vec<u64> = windows
        .iter()
        .map(|w| w["start_hour"].as_u64().unwrap())
        .collect();
    assert_eq!(hours, vec![15, 19, 21, 22]);

    assert!(v["active_window"].is_null());
}
