//! # xkcd Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! Exposes the modules behind the `xkcd` binary so integration tests can
//! drive the process core and handlers directly.
//!
pub mod commands; // Command handlers (comic)
pub mod common; // Shared utilities (process, json)
pub mod core; // Core infrastructure (errors, config)
