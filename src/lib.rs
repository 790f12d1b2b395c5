//! # Gardi (Adaptive Risk-Based Authentication)
//!
//! `gardi` demonstrates adaptive authentication: the strength of the login
//! challenge is chosen from contextual signals instead of being fixed.
//!
//! ## Decision flow
//!
//! Five boolean signals (same IP, same browser, same device, same location,
//! usual login time) are captured per evaluation cycle and counted into a
//! [`auth::RiskScore`]. Fixed thresholds map the score to an
//! [`auth::AuthMethod`]:
//!
//! - 4 or 5 matched signals → `PIN` (low risk, weakest challenge)
//! - exactly 3 → `PASSWORD` (medium risk)
//! - 2 or fewer → `SECURITY_QUESTION` (high risk, strongest challenge)
//!
//! ## Sessions & gating
//!
//! A [`auth::Session`] is an explicit value owned by the caller: created
//! unauthenticated at login, flipped to authenticated only by a successful
//! [`auth::Verifier::verify`], and consumed by [`auth::Session::end`] at
//! logout. The chat log behind the session gate accepts appends only while
//! the session is authenticated; everything else fails with
//! [`auth::Error::PermissionDenied`].
//!
//! Expected credential values come from an injectable
//! [`auth::CredentialProvider`] so secrets never live inside the decision
//! logic. The bundled [`auth::DemoCredentials`] carries the fixed demo
//! secrets.

pub mod auth;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        // Should be a hex string (full SHA-1 is 40 chars, but could be short)
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
