//! End-to-end conversation flows, driven headlessly through the reducer and
//! a real generator (no terminal involved).

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use sentient_studio::core::action::{Action, Effect, update};
use sentient_studio::core::state::{Phase, Session, WELCOME_TEXT};
use sentient_studio::generator::{
    GeneratorError, PlaceholderGenerator, ReplyRequest, ResponseGenerator, generate_with_timeout,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Perform the I/O an `Effect::GenerateReply` asks for, the way the event
/// loop would, and fold the result back into the session.
async fn run_effect(session: &mut Session, effect: Effect, generator: &dyn ResponseGenerator) {
    if let Effect::GenerateReply {
        name,
        message,
        transcript,
    } = effect
    {
        let request = ReplyRequest {
            user_name: &name,
            message: &message,
            transcript: &transcript,
        };
        let result = generate_with_timeout(generator, request, Duration::from_secs(5)).await;
        update(session, Action::ReplyReady(result));
    }
}

/// Records the request it was called with, then replies normally.
struct RecordingGenerator {
    seen: Mutex<Vec<(String, String, String)>>,
}

impl RecordingGenerator {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ResponseGenerator for RecordingGenerator {
    fn name(&self) -> &str {
        "recording"
    }

    async fn generate(&self, request: ReplyRequest<'_>) -> Result<String, GeneratorError> {
        self.seen.lock().unwrap().push((
            request.user_name.to_string(),
            request.message.to_string(),
            request.transcript.to_string(),
        ));
        Ok("recorded".to_string())
    }
}

/// Never finishes; used to exercise the timeout contract.
struct StalledGenerator;

#[async_trait]
impl ResponseGenerator for StalledGenerator {
    fn name(&self) -> &str {
        "stalled"
    }

    async fn generate(&self, _request: ReplyRequest<'_>) -> Result<String, GeneratorError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("too late".to_string())
    }
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[tokio::test]
async fn test_full_conversation_scenario() {
    // Fresh session: greeting only
    let mut session = Session::new();
    update(&mut session, Action::Initialize);
    assert_eq!(
        session.transcript,
        "Welcome to Sentient Studio! May I know your name?"
    );

    // First submission captures the name
    let effect = update(&mut session, Action::Submit("Sam".to_string()));
    assert_eq!(effect, Effect::None);
    assert_eq!(session.user_name(), Some("Sam"));
    assert!(session.transcript.ends_with(
        "\n\nGreat to meet you, Sam! 😊\nI'm here to help you with your \
         programming tasks. What would you like to work on today?"
    ));

    // Second submission is an echo turn with a placeholder reply
    let generator = PlaceholderGenerator;
    let effect = update(&mut session, Action::Submit("build a parser".to_string()));
    assert!(session.is_processing);
    run_effect(&mut session, effect, &generator).await;

    assert!(
        session
            .transcript
            .ends_with("\n\nSam: build a parser\nAI: Processing...")
    );
    assert!(!session.is_processing);
    assert_eq!(session.draft, "");
}

#[tokio::test]
async fn test_multi_turn_conversation_accumulates() {
    let generator = PlaceholderGenerator;
    let mut session = Session::new();
    update(&mut session, Action::Initialize);
    update(&mut session, Action::Submit("Ada".to_string()));

    for message in ["first question", "second question"] {
        let effect = update(&mut session, Action::Submit(message.to_string()));
        run_effect(&mut session, effect, &generator).await;
    }

    // The transcript is append-only: every turn is still there, in order
    let transcript = &session.transcript;
    assert!(transcript.starts_with(WELCOME_TEXT));
    let first = transcript.find("Ada: first question").unwrap();
    let second = transcript.find("Ada: second question").unwrap();
    assert!(first < second);
    assert_eq!(transcript.matches("AI: Processing...").count(), 2);
}

#[tokio::test]
async fn test_generator_receives_collaborator_contract() {
    let generator = RecordingGenerator::new();
    let mut session = Session::new();
    update(&mut session, Action::Initialize);
    update(&mut session, Action::Submit("Ada".to_string()));

    let effect = update(&mut session, Action::Submit("hello there".to_string()));
    run_effect(&mut session, effect, &generator).await;

    let seen = generator.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (user_name, message, transcript) = &seen[0];
    assert_eq!(user_name, "Ada");
    assert_eq!(message, "hello there");
    // The snapshot includes everything up to and including the echoed line
    assert!(transcript.starts_with(WELCOME_TEXT));
    assert!(transcript.ends_with("\n\nAda: hello there"));

    assert!(session.transcript.ends_with("\nAI: recorded"));
}

#[tokio::test(start_paused = true)]
async fn test_stalled_generator_surfaces_error_line() {
    let mut session = Session::new();
    update(&mut session, Action::Initialize);
    update(&mut session, Action::Submit("Ada".to_string()));

    let effect = update(&mut session, Action::Submit("are you there?".to_string()));
    let Effect::GenerateReply {
        name,
        message,
        transcript,
    } = effect
    else {
        panic!("expected GenerateReply");
    };

    let request = ReplyRequest {
        user_name: &name,
        message: &message,
        transcript: &transcript,
    };
    let result =
        generate_with_timeout(&StalledGenerator, request, Duration::from_millis(100)).await;
    assert!(matches!(result, Err(GeneratorError::Timeout { .. })));
    update(&mut session, Action::ReplyReady(result));

    assert!(
        session
            .transcript
            .ends_with("\n\nError: Failed to process request. Please try again.")
    );
    // The failed turn keeps the session usable: name intact, not processing
    assert_eq!(session.phase, Phase::Chatting { name: "Ada".to_string() });
    assert!(!session.is_processing);
}
