//! # xkcd Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Command handlers invoked from `main.rs`. The tool has a single workflow
//! today (`comic`), which defines its own argument structure and handler.
//!

/// Fetch a comic's metadata, open its image and print its transcript.
pub mod comic;
