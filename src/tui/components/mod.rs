//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `Header`: Title line plus the conditional welcome sub-line
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: Single-line text input with horizontal scrolling
//! - `TranscriptView`: Scrollable verbatim transcript (state in `TranscriptState`)
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering logic, event handling, and tests.

pub mod header;
pub mod input_box;
pub mod transcript;

pub use header::Header;
pub use input_box::{InputBox, InputEvent};
pub use transcript::{TranscriptState, TranscriptView};
