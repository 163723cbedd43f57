//! # xkcd Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the application-level error type used by the xkcd
//! command flow and the `Result` alias shared across the crate.
//!
//! ## Architecture
//!
//! The error system consists of three layers:
//! - `ProcessError` (in `common::process`): failures of the external-process core
//! - `LookupError` (in `common::json`): absent or mistyped JSON fields
//! - `XkcdError`: configuration and comic-level failures raised by this crate
//!
//! All of them are converted into `anyhow::Error` at the command level, which
//! lets handlers attach context with `.context(...)` before the error reaches
//! `main`, where it is logged and mapped to exit status 1.
//!
//! ## Examples
//!
//! ```rust,ignore
//! if !template.contains("{number}") {
//!     return Err(XkcdError::Config("url_template is missing {number}".into()).into());
//! }
//!
//! let body = process::run_capture(cmd).context("Failed to fetch comic metadata")?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the xkcd application.
#[derive(Error, Debug)]
pub enum XkcdError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server response for comic {number} is not a JSON object")]
    InvalidResponse { number: u32 },

    #[error("Comic {number} has no usable '{field}' field")]
    MissingField { number: u32, field: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
