//! # Transcript Component
//!
//! Scrollable view of the accumulated transcript text.
//!
//! The transcript is a single append-only string rendered verbatim —
//! newlines and whitespace are preserved, long lines wrap without trimming.
//!
//! ## Architecture
//!
//! `TranscriptView` is a transient component (created each frame) that wraps
//! `&mut TranscriptState` (persistent scroll state) and the transcript text
//! (props). Since `Component::render` takes `&mut self`, the scroll state
//! can be updated during the render pass, aligning with Ratatui's
//! `StatefulWidget` pattern.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the transcript view.
/// Must be persisted in the parent TuiState.
pub struct TranscriptState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for paging and clamping between frames)
    pub viewport_height: u16,
    /// Total wrapped content height from the last render
    pub content_height: u16,
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
            content_height: 0,
        }
    }

    /// Largest valid scroll offset for the current content.
    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Move the scroll offset by `delta` lines (negative = up) and update
    /// the stick-to-bottom flag based on where we land.
    fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset().y;
        let target = current
            .saturating_add_signed(delta.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16)
            .min(self.max_offset());
        self.scroll_state.set_offset(Position { x: 0, y: target });
        self.stick_to_bottom = target >= self.max_offset();
    }
}

impl EventHandler for TranscriptState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        let page = i32::from(self.viewport_height.max(1));
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-1),
            TuiEvent::ScrollDown => self.scroll_by(1),
            TuiEvent::ScrollPageUp => self.scroll_by(-page),
            TuiEvent::ScrollPageDown => self.scroll_by(page),
            _ => return None,
        }
        Some(())
    }
}

/// Transient view over the transcript text plus persistent scroll state.
pub struct TranscriptView<'a> {
    pub text: &'a str,
    pub state: &'a mut TranscriptState,
}

impl Component for TranscriptView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Reserve one column for the scrollbar
        let content_width = area.width.saturating_sub(1);

        // Verbatim rendering: no trimming, newlines preserved
        let paragraph = Paragraph::new(self.text).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        self.state.viewport_height = area.height;
        self.state.content_height = content_height;

        if self.state.stick_to_bottom {
            let max_y = content_height.saturating_sub(area.height);
            self.state.scroll_state.set_offset(Position { x: 0, y: max_y });
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
