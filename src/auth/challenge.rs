//! Challenge verification for the selected authentication method.
//!
//! Comparison policy per method (intentionally asymmetric, preserved as
//! documented behavior):
//!
//! | Method            | Comparison                                      |
//! |-------------------|-------------------------------------------------|
//! | PIN               | exact match                                     |
//! | PASSWORD          | exact match                                     |
//! | SECURITY_QUESTION | case-insensitive, surrounding whitespace ignored |
//!
//! Retries are unlimited; there is no lockout. Failed attempts are logged at
//! WARN so retry storms remain visible.

use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{
    credentials::CredentialProvider, error::Error, policy::AuthMethod, session::Session,
};

/// Verifies submitted credentials against an injected provider.
pub struct Verifier {
    provider: Arc<dyn CredentialProvider>,
}

impl Verifier {
    #[must_use]
    pub fn new(provider: Arc<dyn CredentialProvider>) -> Self {
        Self { provider }
    }

    /// Challenge prompt for the given method.
    #[must_use]
    pub fn prompt(&self, method: AuthMethod) -> &str {
        self.provider.prompt(method)
    }

    /// Verify a submitted credential for the selected method.
    ///
    /// On success the session transitions to authenticated; that transition
    /// fires once and never reverses. On failure the session is untouched
    /// and the caller may retry with a new submission.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCredential`] when the submitted value does
    /// not match the expected value for `method`.
    pub fn verify(
        &self,
        session: &mut Session,
        method: AuthMethod,
        submitted: &str,
    ) -> Result<(), Error> {
        let expected = self.provider.expected(method);
        if credentials_match(method, expected.expose_secret(), submitted) {
            session.grant();
            debug!(session = %session.id(), %method, "challenge passed");
            Ok(())
        } else {
            warn!(session = %session.id(), %method, "challenge failed");
            Err(Error::InvalidCredential)
        }
    }
}

fn credentials_match(method: AuthMethod, expected: &str, submitted: &str) -> bool {
    match method {
        AuthMethod::Pin | AuthMethod::Password => submitted == expected,
        AuthMethod::SecurityQuestion => submitted.trim().eq_ignore_ascii_case(expected.trim()),
    }
}
