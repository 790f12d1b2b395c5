use thiserror::Error;

/// Recoverable failures surfaced by the decision core.
///
/// There are no fatal errors: an invalid credential can be resubmitted any
/// number of times, and a denied chat append succeeds once the session has
/// passed its challenge.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error("invalid credential")]
    InvalidCredential,
    #[error("permission denied")]
    PermissionDenied,
}
