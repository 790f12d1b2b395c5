//! Command-line argument dispatch.
//!
//! This module maps parsed CLI arguments to the appropriate action, capturing
//! the signal vector for this evaluation cycle.

use crate::cli::actions::{demo::Args, Action};
use crate::cli::commands::signals;
use anyhow::Result;

/// Map validated CLI matches to a demo action.
///
/// # Errors
///
/// Returns an error if arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let signals = signals::parse(matches);

    Ok(Action::Demo(Args { signals }))
}
