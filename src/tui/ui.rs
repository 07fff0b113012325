//! Frame layout: header on top, transcript in the middle, input at the
//! bottom. Rendering reads the `Session` immutably — re-rendering can never
//! mutate conversation state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{Phase, Session};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, TranscriptView};

/// Input prompt before the name has been captured.
pub const NAME_PLACEHOLDER: &str = "Enter your name...";
/// Input prompt once the conversation is underway.
pub const MESSAGE_PLACEHOLDER: &str = "Type your message...";

pub fn draw_ui(frame: &mut Frame, session: &Session, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(2), Min(0), Length(3)]);
    let [header_area, transcript_area, input_area] = layout.areas(frame.area());

    let mut header = Header::new(
        session.user_name().map(str::to_string),
        session.is_processing,
    );
    header.render(frame, header_area);

    let mut transcript = TranscriptView {
        text: &session.transcript,
        state: &mut tui.transcript,
    };
    transcript.render(frame, transcript_area);

    // Sync input props with the session before rendering
    tui.input_box.placeholder = match session.phase {
        Phase::AwaitingName => NAME_PLACEHOLDER.to_string(),
        Phase::Chatting { .. } => MESSAGE_PLACEHOLDER.to_string(),
    };
    tui.input_box.dimmed = session.is_processing;
    tui.input_box.render(frame, input_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_to_text(session: &Session, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, session, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_fresh_session_prompts_for_name() {
        let mut session = Session::new();
        update(&mut session, Action::Initialize);
        let mut tui = TuiState::new();

        let text = draw_to_text(&session, &mut tui);
        assert!(text.contains("Welcome to Sentient Studio!"));
        assert!(text.contains(NAME_PLACEHOLDER));
        assert!(!text.contains("Welcome,"));
    }

    #[test]
    fn test_placeholder_switches_after_name_capture() {
        let mut session = Session::new();
        update(&mut session, Action::Initialize);
        update(&mut session, Action::Submit("Sam".to_string()));
        let mut tui = TuiState::new();

        let text = draw_to_text(&session, &mut tui);
        assert!(text.contains("Welcome, Sam!"));
        assert!(text.contains(MESSAGE_PLACEHOLDER));
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let mut session = Session::new();
        update(&mut session, Action::Initialize);
        update(&mut session, Action::Submit("Sam".to_string()));
        session.draft = "draft text".to_string();
        let mut tui = TuiState::new();

        let transcript_before = session.transcript.clone();
        draw_to_text(&session, &mut tui);
        draw_to_text(&session, &mut tui);
        draw_to_text(&session, &mut tui);

        assert_eq!(session.transcript, transcript_before);
        assert_eq!(session.user_name(), Some("Sam"));
        assert_eq!(session.draft, "draft text");
    }
}
