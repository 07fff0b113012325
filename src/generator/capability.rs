use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

/// Errors that can occur while generating a reply.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum GeneratorError {
    /// The generator did not produce a reply within the configured limit.
    Timeout { limit: Duration },
    /// The generator failed outright. Catch-all for future real backends.
    Failed(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::Timeout { limit } => {
                write!(f, "reply timed out after {}s", limit.as_secs())
            }
            GeneratorError::Failed(msg) => write!(f, "generation failed: {msg}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Everything a generator needs to produce one reply.
pub struct ReplyRequest<'a> {
    pub user_name: &'a str,
    pub message: &'a str,
    /// Full transcript so far, including the echoed user line.
    pub transcript: &'a str,
}

/// A capability that turns one user message into one reply string.
///
/// The shell awaits this across its only asynchronous boundary; the reply
/// (or a failure) is folded back into the session via `Action::ReplyReady`.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Returns the name of the generator.
    fn name(&self) -> &str;

    /// Produces the reply text for the given request.
    async fn generate(&self, request: ReplyRequest<'_>) -> Result<String, GeneratorError>;
}

/// Run a generator call under a deadline, mapping an elapsed timer to
/// `GeneratorError::Timeout`.
pub async fn generate_with_timeout(
    generator: &dyn ResponseGenerator,
    request: ReplyRequest<'_>,
    limit: Duration,
) -> Result<String, GeneratorError> {
    match tokio::time::timeout(limit, generator.generate(request)).await {
        Ok(result) => result,
        Err(_) => Err(GeneratorError::Timeout { limit }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StalledGenerator;

    #[async_trait]
    impl ResponseGenerator for StalledGenerator {
        fn name(&self) -> &str {
            "stalled"
        }

        async fn generate(
            &self,
            _request: ReplyRequest<'_>,
        ) -> Result<String, GeneratorError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("too late".to_string())
        }
    }

    fn request<'a>() -> ReplyRequest<'a> {
        ReplyRequest {
            user_name: "Alice",
            message: "hello",
            transcript: "Alice: hello",
        }
    }

    #[test]
    fn test_error_display() {
        let timeout = GeneratorError::Timeout {
            limit: Duration::from_secs(30),
        };
        assert_eq!(timeout.to_string(), "reply timed out after 30s");

        let failed = GeneratorError::Failed("backend unreachable".to_string());
        assert_eq!(failed.to_string(), "generation failed: backend unreachable");
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_with_timeout_maps_elapsed_timer() {
        let result =
            generate_with_timeout(&StalledGenerator, request(), Duration::from_secs(1)).await;
        match result {
            Err(GeneratorError::Timeout { limit }) => {
                assert_eq!(limit, Duration::from_secs(1));
            }
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_with_timeout_passes_through_success() {
        struct Instant;

        #[async_trait]
        impl ResponseGenerator for Instant {
            fn name(&self) -> &str {
                "instant"
            }

            async fn generate(
                &self,
                _request: ReplyRequest<'_>,
            ) -> Result<String, GeneratorError> {
                Ok("done".to_string())
            }
        }

        let result =
            generate_with_timeout(&Instant, request(), Duration::from_secs(1)).await;
        assert_eq!(result.unwrap(), "done");
    }
}
