//! # xkcd Comic Handler
//!
//! File: cli/src/commands/comic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements the whole user-facing workflow of `xkcd <NUMBER>`:
//! fetch the comic's `info.0.json` through the configured fetcher program,
//! optionally open the comic image in the configured viewer, and optionally
//! print the transcript.
//!
//! ## Architecture
//!
//! 1. Resolve the boolean option pairs (`-o/-O`, `-p/-P`) against the
//!    configured defaults into `ComicOptions`.
//! 2. Build the fetch `Cmd` (fetcher program, fetcher args, rendered URL) and
//!    capture its stdout with `process::run_capture`.
//! 3. Parse the body as a JSON object. An unparsable body is printed to
//!    stdout so the user can see what the server actually returned.
//! 4. Open the `img` link with `process::run_sync` (missing link is fatal).
//! 5. Print the `transcript` when non-empty (missing transcript is logged,
//!    not fatal).
//!
//! ## Usage
//!
//! ```bash
//! # Open comic 353 in the viewer and print its transcript
//! xkcd 353
//! # Only print the transcript
//! xkcd -O 353
//! # Only open the image, long form
//! xkcd --no-print 353
//! ```
//!
use crate::common::{
    json,
    process::{self, Cmd},
};
use crate::core::config::{Config, OptionDefaults};
use crate::core::error::{Result, XkcdError};
use anyhow::Context;
use clap::Args;
use tracing::{debug, error, info, warn};

/// # Comic Arguments (`ComicArgs`)
///
/// Positional comic number plus the boolean option pairs. Each pair is a
/// lowercase enabling short flag, an uppercase disabling short flag and the
/// matching `--name` / `--no-name` long flags. Every flag of a pair overrides
/// both members, itself included, so repeats are accepted and the last
/// occurrence wins.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ComicArgs {
    /// Number of the comic to fetch (e.g. 353)
    #[arg(value_name = "NUMBER", value_parser = clap::value_parser!(u32).range(1..))]
    pub number: u32,

    /// Open the comic image in the image viewer
    #[arg(short = 'o', long = "open", overrides_with_all = ["open", "no_open"])]
    pub open: bool,

    /// Do not open the comic image
    #[arg(short = 'O', long = "no-open", overrides_with_all = ["open", "no_open"])]
    pub no_open: bool,

    /// Print the comic transcript
    #[arg(short = 'p', long = "print", overrides_with_all = ["print", "no_print"])]
    pub print: bool,

    /// Do not print the comic transcript
    #[arg(short = 'P', long = "no-print", overrides_with_all = ["print", "no_print"])]
    pub no_print: bool,

    /// Also print the comic title
    #[arg(long)]
    pub title: bool,
}

/// Effective on/off state of every option after flags and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComicOptions {
    pub open_in_image_viewer: bool,
    pub print_transcript: bool,
    pub print_title: bool,
}

impl ComicArgs {
    /// Applies the flags on top of the configured defaults.
    pub fn options(&self, defaults: &OptionDefaults) -> ComicOptions {
        ComicOptions {
            open_in_image_viewer: resolve_pair(self.open, self.no_open, defaults.open),
            print_transcript: resolve_pair(self.print, self.no_print, defaults.print),
            print_title: self.title,
        }
    }
}

// `overrides_with_all` guarantees at most one of the two is set.
fn resolve_pair(enable: bool, disable: bool, default: bool) -> bool {
    if enable {
        true
    } else if disable {
        false
    } else {
        default
    }
}

/// # Handle Comic Command (`handle_comic`)
///
/// ## Arguments
///
/// * `args` - Parsed comic arguments.
/// * `config` - Loaded configuration (programs, URL template, defaults).
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` when every requested step succeeded. Fetch,
///   parse, image lookup and viewer failures are errors; a missing transcript
///   is not.
pub fn handle_comic(args: ComicArgs, config: &Config) -> Result<()> {
    let number = args.number;
    let options = args.options(&config.defaults);
    info!("Handling comic {} with {:?}", number, options);

    let fetch = Cmd::new(config.fetcher.program.as_str())
        .args(config.fetcher.args.iter().cloned())
        .arg(config.fetcher.url_for(number));
    let body = process::run_capture(fetch)
        .with_context(|| format!("Failed to fetch metadata for comic {}", number))?;
    debug!("Fetched {} bytes of metadata", body.len());

    let comic = match json::parse_object(&body) {
        Ok(comic) => comic,
        Err(e) => {
            error!("Could not parse JSON returned by XKCD server: {}", e);
            info!("Here is the response of the server:");
            println!("{}", String::from_utf8_lossy(&body));
            return Err(XkcdError::InvalidResponse { number }.into());
        }
    };

    if options.print_title {
        match json::lookup_str(&comic, "title") {
            Ok(title) => println!("{}", title),
            Err(e) => warn!("{}", e),
        }
    }

    if options.open_in_image_viewer {
        let img = json::lookup_str(&comic, "img").map_err(|e| {
            error!("{}", e);
            XkcdError::MissingField {
                number,
                field: "img".to_string(),
            }
        })?;
        let view = Cmd::new(config.viewer.program.as_str())
            .args(config.viewer.args.iter().cloned())
            .arg(img);
        process::run_sync(view)
            .with_context(|| format!("Failed to open comic {} in the image viewer", number))?;
    }

    if options.print_transcript {
        match json::lookup_str(&comic, "transcript") {
            Ok(transcript) if !transcript.is_empty() => println!("{}", transcript),
            Ok(_) => debug!("Comic {} has an empty transcript", number),
            Err(e) => error!("{}", e),
        }
    }

    Ok(())
}
