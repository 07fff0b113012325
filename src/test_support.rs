//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::state::Session;
use crate::generator::{GeneratorError, ReplyRequest, ResponseGenerator};

/// A brand new session, greeting not yet written.
pub fn fresh_session() -> Session {
    Session::new()
}

/// A session that has been greeted and has captured `name`.
pub fn chatting_session(name: &str) -> Session {
    let mut session = Session::new();
    update(&mut session, Action::Initialize);
    update(&mut session, Action::Submit(name.to_string()));
    session
}

/// A generator that always fails, for exercising the error path.
pub struct FailingGenerator;

#[async_trait]
impl ResponseGenerator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _request: ReplyRequest<'_>) -> Result<String, GeneratorError> {
        Err(GeneratorError::Failed("simulated failure".to_string()))
    }
}
