//! Test Module
//!
//! Aggregated suites for the assistant core.
//!
//! ## Test Categories
//! - `intent_tests`: extractor behavior across languages and pages
//! - `integration_tests`: full multi-turn widget flows with persistence

pub mod intent_tests;
