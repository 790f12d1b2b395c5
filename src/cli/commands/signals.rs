//! Contextual signal flags.
//!
//! Each flag marks one signal as matched; omitted flags are unmatched. All of
//! them fall back to a `GARDI_*` environment variable so a signal collector
//! can feed the demo without building a command line.

use clap::{Arg, ArgAction, Command};

use crate::auth::SignalVector;

pub const ARG_SAME_IP: &str = "same-ip";
pub const ARG_SAME_BROWSER: &str = "same-browser";
pub const ARG_SAME_DEVICE: &str = "same-device";
pub const ARG_SAME_LOCATION: &str = "same-location";
pub const ARG_USUAL_TIME: &str = "usual-time";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_SAME_IP)
                .long(ARG_SAME_IP)
                .help("Request originates from a known IP address")
                .env("GARDI_SAME_IP")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_SAME_BROWSER)
                .long(ARG_SAME_BROWSER)
                .help("Same browser as previous logins")
                .env("GARDI_SAME_BROWSER")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_SAME_DEVICE)
                .long(ARG_SAME_DEVICE)
                .help("Same device as previous logins")
                .env("GARDI_SAME_DEVICE")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_SAME_LOCATION)
                .long(ARG_SAME_LOCATION)
                .help("Same location as previous logins")
                .env("GARDI_SAME_LOCATION")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_USUAL_TIME)
                .long(ARG_USUAL_TIME)
                .help("Login happens at the usual time of day")
                .env("GARDI_USUAL_TIME")
                .action(ArgAction::SetTrue),
        )
}

/// Collect the signal flags into a vector for this evaluation cycle.
#[must_use]
pub fn parse(matches: &clap::ArgMatches) -> SignalVector {
    SignalVector {
        same_ip: matches.get_flag(ARG_SAME_IP),
        same_browser: matches.get_flag(ARG_SAME_BROWSER),
        same_device: matches.get_flag(ARG_SAME_DEVICE),
        same_location: matches.get_flag(ARG_SAME_LOCATION),
        usual_time: matches.get_flag(ARG_USUAL_TIME),
    }
}
