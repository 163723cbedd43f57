//! # xkcd JSON Field Lookup (`common::json`)
//!
//! File: cli/src/common/json.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin helpers over `serde_json` for reading the comic metadata document:
//! parse the captured bytes as a JSON object, then look up string fields by
//! name with a typed error that tells "missing" apart from "not a string".
//!
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a string field could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Couldn't find key \"{key}\" in JSON")]
    NotFound { key: String },

    #[error("\"{key}\" field of JSON was not a string")]
    WrongType { key: String },
}

/// Parses `bytes` as a JSON document whose root is an object.
pub fn parse_object(bytes: &[u8]) -> serde_json::Result<Map<String, Value>> {
    serde_json::from_slice(bytes)
}

/// Returns the string stored under `key`.
pub fn lookup_str<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a str, LookupError> {
    match object.get(key) {
        None => Err(LookupError::NotFound {
            key: key.to_string(),
        }),
        Some(value) => value.as_str().ok_or_else(|| LookupError::WrongType {
            key: key.to_string(),
        }),
    }
}
