//! Injectable credential providers.
//!
//! Expected values live behind [`CredentialProvider`] so the decision logic
//! never embeds secrets. Values are wrapped in [`SecretString`] to keep them
//! out of `Debug` output and logs.

use secrecy::SecretString;

use super::policy::AuthMethod;

/// Source of expected credential values and challenge prompts.
pub trait CredentialProvider: Send + Sync {
    /// Expected value for the given method.
    fn expected(&self, method: AuthMethod) -> SecretString;

    /// Human-readable challenge prompt; for the security question this is
    /// the question itself.
    fn prompt(&self, method: AuthMethod) -> &str;
}

const DEMO_PIN: &str = "1234";
const DEMO_PASSWORD: &str = "password123";
const DEMO_ANSWER: &str = "rahul";

/// Fixed demo credentials, matching the documented demo scenarios.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoCredentials;

impl CredentialProvider for DemoCredentials {
    fn expected(&self, method: AuthMethod) -> SecretString {
        let value = match method {
            AuthMethod::Pin => DEMO_PIN,
            AuthMethod::Password => DEMO_PASSWORD,
            AuthMethod::SecurityQuestion => DEMO_ANSWER,
        };
        SecretString::from(value.to_string())
    }

    fn prompt(&self, method: AuthMethod) -> &str {
        match method {
            AuthMethod::Pin => "Enter 4-digit PIN",
            AuthMethod::Password => "Enter Password",
            AuthMethod::SecurityQuestion => "Who was your childhood best friend?",
        }
    }
}
