//! # Placeholder Generator
//!
//! The shipped stand-in for a real model integration. Every request gets
//! the literal reply `Processing...`, rendered in the transcript as
//! `AI: Processing...`. Swapping in a real backend means implementing
//! `ResponseGenerator` and registering it in `tui::build_generator`.

use async_trait::async_trait;
use log::debug;

use super::capability::{GeneratorError, ReplyRequest, ResponseGenerator};

/// Fixed reply text produced for every request.
pub const PLACEHOLDER_REPLY: &str = "Processing...";

pub struct PlaceholderGenerator;

#[async_trait]
impl ResponseGenerator for PlaceholderGenerator {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn generate(&self, request: ReplyRequest<'_>) -> Result<String, GeneratorError> {
        debug!(
            "Placeholder reply for {} ({} byte message)",
            request.user_name,
            request.message.len()
        );
        Ok(PLACEHOLDER_REPLY.to_string())
    }
}
