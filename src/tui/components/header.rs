//! # Header Component
//!
//! Two-line header: the application title (with a `Processing...` status
//! while a reply is pending) and a personalized welcome sub-line that only
//! appears once a name has been captured.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! The header is purely presentational — it receives all data as props and
//! has no internal state:
//!
//! ```rust,ignore
//! let mut header = Header {
//!     user_name: session.user_name().map(str::to_string),
//!     is_processing: session.is_processing,
//! };
//! header.render(frame, header_area);
//! ```
//!
//! The header doesn't care where the props come from — it just renders what
//! it's given. This decoupling makes it trivial to test with `TestBackend`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Top header component showing the title and conditional welcome sub-line.
///
/// # Props
///
/// - `user_name`: The captured name, once name capture has happened
/// - `is_processing`: Whether a reply is currently pending
pub struct Header {
    pub user_name: Option<String>,
    pub is_processing: bool,
}

impl Header {
    pub fn new(user_name: Option<String>, is_processing: bool) -> Self {
        Self {
            user_name,
            is_processing,
        }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.is_processing {
            "Sentient Studio | Processing...".to_string()
        } else {
            "Sentient Studio".to_string()
        };

        let mut lines = vec![Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        // Personalized sub-line, shown only once the name is known
        if let Some(name) = &self.user_name {
            lines.push(Line::from(Span::styled(
                format!("Welcome, {name}!"),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
