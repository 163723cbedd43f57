//! # xkcd Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers:
//!
//! - **`process`**: Running external programs, either with inherited stdout
//!   (`run_sync`) or with stdout captured into memory (`run_capture`).
//! - **`json`**: Parsing the metadata document and reading string fields.
//!
//! ```rust,ignore
//! use crate::common::{json, process::{self, Cmd}};
//!
//! let body = process::run_capture(Cmd::new("curl").arg(url))?;
//! let comic = json::parse_object(&body)?;
//! let img = json::lookup_str(&comic, "img")?;
//! ```
//!

/// String-field lookups over the comic metadata JSON.
pub mod json;
/// Launching external programs and capturing their output.
pub mod process;
