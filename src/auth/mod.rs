//! Adaptive authentication decision core.
//!
//! The flow is: capture a [`SignalVector`] → count it into a [`RiskScore`] →
//! select an [`AuthMethod`] → verify the challenge with a [`Verifier`] →
//! unlock the chat behind the [`Session`] gate.

pub mod challenge;
pub mod credentials;
pub mod error;
pub mod policy;
pub mod session;
pub mod signals;

pub use challenge::Verifier;
pub use credentials::{CredentialProvider, DemoCredentials};
pub use error::Error;
pub use policy::{evaluate, AuthMethod, Decision, RiskLevel};
pub use session::Session;
pub use signals::{RiskScore, SignalVector};
