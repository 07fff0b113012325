//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core reducer can be driven headlessly (the integration tests do),
//! so swapping this out for a different adapter is possible.
//!
//! ## Event Flow
//!
//! All state mutations happen on this loop's thread. A submission in the
//! chatting phase spawns a tokio task for the generator call; the result
//! comes back over a std mpsc channel as `Action::ReplyReady` and is folded
//! in by the reducer. Submit and editing events are not routed while
//! `is_processing` is set, which serializes the session against its only
//! mutator.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::Session;
use crate::generator::{
    PlaceholderGenerator, ReplyRequest, ResponseGenerator, generate_with_timeout,
};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, TranscriptState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long to block waiting for a terminal event per loop iteration.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub transcript: TranscriptState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            transcript: TranscriptState::new(),
            input_box: InputBox::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show, // Show cursor for input editing
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Build a generator from the resolved config's generator name.
pub fn build_generator(config: &ResolvedConfig) -> Arc<dyn ResponseGenerator> {
    match config.generator.as_str() {
        "placeholder" => Arc::new(PlaceholderGenerator),
        other => {
            warn!("Unknown generator '{other}', falling back to placeholder");
            Arc::new(PlaceholderGenerator)
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let generator = build_generator(&config);
    info!("Conversation shell starting (generator: {})", generator.name());

    let mut session = Session::new();
    // One-shot greeting; the is_initialized flag inside the reducer keeps
    // this from ever firing twice.
    update(&mut session, Action::Initialize);

    let mut tui = TuiState::new();
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background generator tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &session, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Esc and Ctrl+C both quit
            if matches!(event, TuiEvent::ForceQuit | TuiEvent::Quit) {
                if update(&mut session, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Scroll events always go to the transcript
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.transcript.handle_event(&event);
                continue;
            }

            // Input and submit controls are disabled while a reply is pending
            if session.is_processing {
                continue;
            }

            if let Some(input_event) = tui.input_box.handle_event(&event) {
                match input_event {
                    InputEvent::Submit(text) => {
                        let effect = update(&mut session, Action::Submit(text));
                        if let Effect::GenerateReply {
                            name,
                            message,
                            transcript,
                        } = effect
                        {
                            spawn_reply(
                                generator.clone(),
                                config.reply_timeout,
                                name,
                                message,
                                transcript,
                                tx.clone(),
                            );
                        }
                    }
                    InputEvent::ContentChanged(text) => {
                        update(&mut session, Action::DraftChanged(text));
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Fold in completed generator tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut session, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Conversation shell shutting down");
    ratatui::restore();
    Ok(())
}

/// Spawn the generator call for one echo turn. The owned snapshot from
/// `Effect::GenerateReply` moves into the task; the result returns to the
/// event loop as `Action::ReplyReady`.
fn spawn_reply(
    generator: Arc<dyn ResponseGenerator>,
    timeout: Duration,
    name: String,
    message: String,
    transcript: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning reply generation (generator: {})", generator.name());
    tokio::spawn(async move {
        let request = ReplyRequest {
            user_name: &name,
            message: &message,
            transcript: &transcript,
        };
        let result = generate_with_timeout(generator.as_ref(), request, timeout).await;
        if tx.send(Action::ReplyReady(result)).is_err() {
            warn!("Failed to send reply action: receiver dropped");
        }
    });
}
