//! Contextual signals and risk scoring.
//!
//! A [`SignalVector`] is captured fresh for every evaluation cycle and is
//! immutable once captured; the derived [`RiskScore`] is the sole risk proxy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of contextual signals in a vector; scores live in `0..=SIGNAL_COUNT`.
pub const SIGNAL_COUNT: u8 = 5;

/// Boolean contextual facts about the current login attempt.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SignalVector {
    /// Request originates from a previously seen IP address.
    pub same_ip: bool,
    /// Same browser fingerprint as previous logins.
    pub same_browser: bool,
    /// Same device as previous logins.
    pub same_device: bool,
    /// Same geographic location as previous logins.
    pub same_location: bool,
    /// Login happens at the user's usual time of day.
    pub usual_time: bool,
}

impl SignalVector {
    /// Count the matched signals.
    #[must_use]
    pub const fn score(&self) -> RiskScore {
        let count = self.same_ip as u8
            + self.same_browser as u8
            + self.same_device as u8
            + self.same_location as u8
            + self.usual_time as u8;
        RiskScore(count)
    }
}

/// Count of matched signals, always within `0..=SIGNAL_COUNT`.
///
/// Derived from a [`SignalVector`]; callers cannot construct arbitrary scores.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub struct RiskScore(u8);

impl RiskScore {
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{SIGNAL_COUNT}", self.0)
    }
}
