//! Interactive demo: evaluate signals, run the challenge, unlock the chat.
//!
//! One evaluation cycle runs to completion: the signal vector captured from
//! the CLI is scored, the selected challenge is prompted on stdout, and
//! credentials are read one per line from stdin with unlimited retries.
//! After authentication, every stdin line is appended to the session chat
//! through the gate until EOF or `/quit`, which ends the session.

use crate::auth::{evaluate, DemoCredentials, Error, Session, SignalVector, Verifier};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub signals: SignalVector,
}

/// Execute the demo action.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails.
pub fn execute(args: Args) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&args, &mut stdin.lock(), &mut stdout.lock())
}

fn run(args: &Args, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let decision = evaluate(args.signals);
    info!(
        score = decision.score.value(),
        method = %decision.method,
        risk = %decision.risk,
        "evaluated contextual signals"
    );

    writeln!(output, "Signals matched: {}", decision.score)?;
    writeln!(
        output,
        "Risk level: {} -> {} challenge",
        decision.risk, decision.method
    )?;

    let verifier = Verifier::new(Arc::new(DemoCredentials));
    let mut session = Session::new();

    while !session.is_authenticated() {
        writeln!(output, "{}:", verifier.prompt(decision.method))?;
        output.flush()?;

        let mut submitted = String::new();
        if input.read_line(&mut submitted)? == 0 {
            warn!("stdin closed before authentication");
            session.end();
            return Ok(());
        }
        let submitted = submitted.trim_end_matches(['\r', '\n']);

        match verifier.verify(&mut session, decision.method, submitted) {
            Ok(()) => writeln!(output, "Authentication successful")?,
            Err(Error::InvalidCredential) => writeln!(output, "Invalid credential, try again")?,
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(output, "Chat unlocked. Type messages, /quit to log out.")?;
    writeln!(output, "Auth context: {}", serde_json::to_string(&decision)?)?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line == "/quit" {
            break;
        }
        if line.is_empty() {
            continue;
        }
        session.append_message(line)?;
        writeln!(output, "You: {line}")?;
    }

    info!(messages = session.messages().len(), "logging out");
    session.end();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn low_risk_args() -> Args {
        Args {
            signals: SignalVector {
                same_ip: true,
                same_browser: true,
                same_device: true,
                same_location: true,
                usual_time: true,
            },
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn pin_challenge_then_chat() {
        let mut input = Cursor::new("1234\nhello there\n/quit\n");
        let mut output = Vec::new();

        run(&low_risk_args(), &mut input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Signals matched: 5/5"));
        assert!(output.contains("Enter 4-digit PIN"));
        assert!(output.contains("Authentication successful"));
        assert!(output.contains("You: hello there"));
        assert!(output.contains("\"method\":\"PIN\""));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn wrong_credential_reprompts() {
        let mut input = Cursor::new("0000\n1234\n/quit\n");
        let mut output = Vec::new();

        run(&low_risk_args(), &mut input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Invalid credential, try again"));
        assert!(output.contains("Authentication successful"));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn high_risk_asks_the_security_question() {
        let args = Args {
            signals: SignalVector::default(),
        };
        let mut input = Cursor::new("Rahul \n/quit\n");
        let mut output = Vec::new();

        run(&args, &mut input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Who was your childhood best friend?"));
        assert!(output.contains("Authentication successful"));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn eof_before_authentication_is_not_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        run(&low_risk_args(), &mut input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(!output.contains("Chat unlocked"));
    }
}
