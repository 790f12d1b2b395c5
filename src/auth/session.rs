//! Caller-owned session state and the chat gate.
//!
//! A [`Session`] is created unauthenticated at login and consumed by
//! [`Session::end`] at logout. The authenticated flag is monotonic within a
//! session: only a successful challenge sets it, and nothing in scope clears
//! it. Chat appends are gated on that flag.

use tracing::debug;
use uuid::Uuid;

use super::error::Error;

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    authenticated: bool,
    chat: Vec<String>,
}

impl Session {
    /// Create a new unauthenticated session with an empty chat log.
    #[must_use]
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            authenticated: false,
            chat: Vec::new(),
        };
        debug!(session = %session.id, "session created");
        session
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Append a chat message behind the authentication gate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PermissionDenied`] while the session is
    /// unauthenticated, for any message content.
    pub fn append_message(&mut self, text: impl Into<String>) -> Result<(), Error> {
        if !self.authenticated {
            return Err(Error::PermissionDenied);
        }
        self.chat.push(text.into());
        Ok(())
    }

    /// Chat messages appended so far, in order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.chat
    }

    /// End the session at logout, consuming it and its chat log.
    pub fn end(self) {
        debug!(session = %self.id, messages = self.chat.len(), "session ended");
    }

    // Only challenge::Verifier flips the flag, and only forward.
    pub(crate) fn grant(&mut self) {
        self.authenticated = true;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated_and_empty() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn append_denied_while_unauthenticated() {
        let mut session = Session::new();
        assert_eq!(
            session.append_message("hello"),
            Err(Error::PermissionDenied)
        );
        // Empty messages are rejected the same way
        assert_eq!(session.append_message(""), Err(Error::PermissionDenied));
        assert!(session.messages().is_empty());
    }

    #[test]
    fn append_preserves_order_once_granted() {
        let mut session = Session::new();
        session.grant();
        assert_eq!(session.append_message("first"), Ok(()));
        assert_eq!(session.append_message("second"), Ok(()));
        assert_eq!(session.messages(), ["first", "second"]);
    }

    #[test]
    fn grant_is_monotonic() {
        let mut session = Session::new();
        session.grant();
        session.grant();
        assert!(session.is_authenticated());
    }

    #[test]
    fn ids_are_unique_per_session() {
        assert_ne!(Session::new().id(), Session::new().id());
    }
}
