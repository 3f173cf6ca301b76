//! Integration tests for typecycle

mod cli_test;
mod config_test;
mod helpers;
mod play_test;
mod timeline_test;
mod trace_test;
