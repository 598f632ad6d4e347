#[path = "e2e/common.rs"]
mod common;

#[path = "e2e/status.rs"]
mod status;
