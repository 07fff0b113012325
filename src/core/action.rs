//! # Actions
//!
//! Everything that can happen in the shell becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The generator finishes? That's `Action::ReplyReady(result)`.
//!
//! The `update()` function takes the current session and an action,
//! then mutates the session and returns an `Effect` describing any I/O the
//! caller must perform. No side effects here. I/O happens in the TUI layer.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```
//!
//! This makes the submit protocol testable without a rendering surface:
//! feed actions, assert on the transcript.

use log::{debug, error};

use crate::core::state::{ERROR_LINE, Phase, Session, WELCOME_TEXT};
use crate::generator::GeneratorError;

/// A state transition request.
#[derive(Debug)]
pub enum Action {
    /// Write the one-shot greeting. Safe to dispatch more than once; the
    /// `is_initialized` flag guards the transcript write.
    Initialize,
    /// The input buffer changed; keep the session's draft in sync.
    DraftChanged(String),
    /// The user submitted the draft (Enter).
    Submit(String),
    /// The spawned generator task finished (or failed, or timed out).
    ReplyReady(Result<String, GeneratorError>),
    /// The user asked to quit (Esc / Ctrl+C).
    Quit,
}

/// I/O the caller must perform after a state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Spawn a generator task with this owned snapshot of the request.
    GenerateReply {
        name: String,
        message: String,
        transcript: String,
    },
}

/// The reducer: folds one action into the session.
///
/// Every transcript mutation in the crate lives in this function.
pub fn update(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::Initialize => {
            if !session.is_initialized {
                session.transcript.push_str(WELCOME_TEXT);
                session.is_initialized = true;
                debug!("Session initialized, greeting written");
            }
            Effect::None
        }

        Action::DraftChanged(text) => {
            session.draft = text;
            Effect::None
        }

        Action::Submit(text) => submit(session, text),

        Action::ReplyReady(Ok(reply)) => {
            session.transcript.push_str("\nAI: ");
            session.transcript.push_str(&reply);
            session.is_processing = false;
            debug!("Reply folded into transcript ({} bytes)", reply.len());
            Effect::None
        }

        Action::ReplyReady(Err(e)) => {
            // Operator-facing diagnostic; the user sees only the fixed line.
            error!("Reply generation failed: {e}");
            session.transcript.push_str(ERROR_LINE);
            session.is_processing = false;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

/// The submit protocol: name capture on the first accepted submission,
/// echo turns afterwards. The draft is cleared on every accepted submission,
/// before any fallible work runs.
fn submit(session: &mut Session, text: String) -> Effect {
    if session.is_processing {
        // Controls are disabled while processing; this guard backs them up.
        debug!("Submit ignored: reply pending");
        return Effect::None;
    }

    session.draft.clear();

    match &session.phase {
        Phase::AwaitingName => {
            if text.is_empty() {
                // An empty name is never captured; stay in AwaitingName.
                return Effect::None;
            }
            session.transcript.push_str(&format!(
                "\n\nGreat to meet you, {text}! 😊\nI'm here to help you with \
                 your programming tasks. What would you like to work on today?"
            ));
            debug!("Name captured: {text}");
            session.phase = Phase::Chatting { name: text };
            Effect::None
        }

        Phase::Chatting { name } => {
            session
                .transcript
                .push_str(&format!("\n\n{name}: {text}"));
            session.is_processing = true;
            Effect::GenerateReply {
                name: name.clone(),
                message: text,
                transcript: session.transcript.clone(),
            }
        }
    }
}
