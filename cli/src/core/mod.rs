//! # xkcd Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components of the xkcd
//! application:
//! - `config`: Configuration loading, path expansion and validation
//! - `error`: Application error types and the shared `Result` alias
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{Result, XkcdError}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
