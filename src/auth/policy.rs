//! Risk policy: mapping scores to authentication methods.
//!
//! Thresholds are fixed and evaluated high-to-low so higher counts win:
//! 4+ matched signals allow the weakest challenge (PIN), exactly 3 require a
//! password, 2 or fewer require the security question. Challenge strength is
//! inverted relative to risk: the less we recognize about the context, the
//! stronger the challenge.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::signals::{RiskScore, SignalVector};

/// Authentication challenge tiers, weakest to strongest.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthMethod {
    /// Low risk: a short numeric PIN is enough.
    Pin,
    /// Medium risk: the account password is required.
    Password,
    /// High risk: the strongest challenge, a personal security question.
    SecurityQuestion,
}

impl AuthMethod {
    /// Select the challenge tier for a risk score.
    #[must_use]
    pub const fn select(score: RiskScore) -> Self {
        if score.value() >= 4 {
            Self::Pin
        } else if score.value() == 3 {
            Self::Password
        } else {
            Self::SecurityQuestion
        }
    }

    /// Risk level this method was selected for, for display purposes.
    #[must_use]
    pub const fn risk_level(self) -> RiskLevel {
        match self {
            Self::Pin => RiskLevel::Low,
            Self::Password => RiskLevel::Medium,
            Self::SecurityQuestion => RiskLevel::High,
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Pin => "PIN",
            Self::Password => "PASSWORD",
            Self::SecurityQuestion => "SECURITY_QUESTION",
        };
        write!(f, "{tag}")
    }
}

/// Risk bucket derived from the selected method.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{level}")
    }
}

/// Outcome of one evaluation cycle, ready for a presentation layer.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Decision {
    pub signals: SignalVector,
    pub score: RiskScore,
    pub method: AuthMethod,
    pub risk: RiskLevel,
}

/// Run the decision engine over a captured signal vector.
///
/// Pure and deterministic: the same vector always yields the same decision.
#[must_use]
pub const fn evaluate(signals: SignalVector) -> Decision {
    let score = signals.score();
    let method = AuthMethod::select(score);
    Decision {
        signals,
        score,
        method,
        risk: method.risk_level(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(count: u8) -> RiskScore {
        let vector = SignalVector {
            same_ip: count >= 1,
            same_browser: count >= 2,
            same_device: count >= 3,
            same_location: count >= 4,
            usual_time: count >= 5,
        };
        vector.score()
    }

    #[test]
    fn select_thresholds() {
        assert_eq!(AuthMethod::select(score_of(0)), AuthMethod::SecurityQuestion);
        assert_eq!(AuthMethod::select(score_of(1)), AuthMethod::SecurityQuestion);
        assert_eq!(AuthMethod::select(score_of(2)), AuthMethod::SecurityQuestion);
        assert_eq!(AuthMethod::select(score_of(3)), AuthMethod::Password);
        assert_eq!(AuthMethod::select(score_of(4)), AuthMethod::Pin);
        assert_eq!(AuthMethod::select(score_of(5)), AuthMethod::Pin);
    }

    #[test]
    fn select_is_pure() {
        for count in 0..=5 {
            assert_eq!(
                AuthMethod::select(score_of(count)),
                AuthMethod::select(score_of(count))
            );
        }
    }

    #[test]
    fn risk_levels_invert_strength() {
        assert_eq!(AuthMethod::Pin.risk_level(), RiskLevel::Low);
        assert_eq!(AuthMethod::Password.risk_level(), RiskLevel::Medium);
        assert_eq!(AuthMethod::SecurityQuestion.risk_level(), RiskLevel::High);
    }

    #[test]
    fn evaluate_carries_all_fields() {
        let signals = SignalVector {
            same_ip: true,
            same_browser: true,
            same_device: true,
            same_location: false,
            usual_time: false,
        };
        let decision = evaluate(signals);
        assert_eq!(decision.signals, signals);
        assert_eq!(decision.score.value(), 3);
        assert_eq!(decision.method, AuthMethod::Password);
        assert_eq!(decision.risk, RiskLevel::Medium);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn method_serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&AuthMethod::SecurityQuestion).unwrap(),
            "\"SECURITY_QUESTION\""
        );
        assert_eq!(serde_json::to_string(&AuthMethod::Pin).unwrap(), "\"PIN\"");
        assert_eq!(AuthMethod::Pin.to_string(), "PIN");
    }
}
