//! # Session State
//!
//! Core business state for the conversational shell. This module contains
//! domain logic only - no TUI-specific types. Presentation state lives in
//! the `tui` module.
//!
//! ```text
//! Session
//! ├── transcript: String     // append-only display log
//! ├── draft: String          // in-progress input text
//! ├── phase: Phase           // AwaitingName | Chatting { name }
//! ├── is_processing: bool    // a reply is pending
//! └── is_initialized: bool   // one-shot greeting written
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

/// One-shot greeting written to the transcript when the session starts.
pub const WELCOME_TEXT: &str = "Welcome to Sentient Studio! May I know your name?";

/// Error paragraph appended when reply generation fails. The user must
/// resubmit manually; no retry is attempted.
pub const ERROR_LINE: &str = "\n\nError: Failed to process request. Please try again.";

/// Conversation phase. The name transitions from `AwaitingName` to
/// `Chatting` at most once per session and is never overwritten after that.
///
/// Modeling this as an enum (rather than an empty-vs-non-empty check on a
/// name string) makes an "empty-string name accepted as captured" state
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// No name captured yet; the next submission is treated as the name.
    AwaitingName,
    /// Name captured; submissions are echoed as conversation turns.
    Chatting { name: String },
}

/// All mutable state for one running conversation.
///
/// Owned exclusively by the event loop; mutated only via `update()`.
pub struct Session {
    pub transcript: String,
    pub draft: String,
    pub phase: Phase,
    pub is_processing: bool,
    pub is_initialized: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            transcript: String::new(),
            draft: String::new(),
            phase: Phase::AwaitingName,
            is_processing: false,
            is_initialized: false,
        }
    }

    /// The captured user name, if the session has progressed past name capture.
    pub fn user_name(&self) -> Option<&str> {
        match &self.phase {
            Phase::AwaitingName => None,
            Phase::Chatting { name } => Some(name),
        }
    }
}
