pub mod check;
pub mod config;
pub mod init;
pub mod next;
pub mod schedule;
pub mod status;
