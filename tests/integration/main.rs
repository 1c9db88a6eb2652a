//! Integration tests for the scan and scrape stages
//!
//! These tests use wiremock to create mock HTTP servers and run each stage
//! end-to-end against a temporary output directory.

mod common;
mod scrape_tests;
