//! Integration tests for termfolio

mod helpers;

mod cli_test;
mod config_test;
mod registry_test;
