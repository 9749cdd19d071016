//! End-to-End Tests for the joosc scanner
//!
//! These tests run the `joosc` binary against fixture files and inline
//! sources and check its output and exit codes.

mod cli_tests;
