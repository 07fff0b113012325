//! # Response Generation
//!
//! The shell's one external collaborator: a [`ResponseGenerator`] is called
//! with the user's name, their message, and the transcript so far, and is
//! expected to return the reply text to append. The only implementation
//! today is the [`PlaceholderGenerator`].

pub mod capability;
pub mod placeholder;

pub use capability::{GeneratorError, ReplyRequest, ResponseGenerator, generate_with_timeout};
pub use placeholder::{PLACEHOLDER_REPLY, PlaceholderGenerator};
