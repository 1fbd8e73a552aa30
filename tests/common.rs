#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};

pub fn swin() -> Command {
    cargo_bin_cmd!("saleswindow")
}
