//! # InputBox Component
//!
//! Single-line text input for the submit form.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Display a phase-dependent placeholder prompt when empty
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. The placeholder text and the
//! dimmed flag are props from the application state. Long input scrolls
//! horizontally to keep the cursor visible; pasted newlines are flattened
//! to spaces since the control is single-line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed; carries the new buffer
    ContentChanged(String),
}

/// Single-line text input component.
///
/// # Props
///
/// - `placeholder`: Prompt shown while the buffer is empty
/// - `dimmed`: Rendered dim while a reply is pending (controls disabled)
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Byte offset of the cursor within the buffer
/// - `scroll`: Horizontal display-column scroll offset
pub struct InputBox {
    pub buffer: String,
    pub placeholder: String,
    pub dimmed: bool,
    cursor: usize,
    scroll: u16,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            placeholder: String::new(),
            dimmed: false,
            cursor: 0,
            scroll: 0,
        }
    }

    /// Byte offset of the previous char boundary, or 0 at the start.
    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Byte offset of the next char boundary, or the current position at the end.
    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.cursor)
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Display column of the cursor (unicode-aware).
    fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    /// Keep the cursor inside the visible window of `inner_width` columns.
    fn update_scroll(&mut self, inner_width: u16) {
        if inner_width == 0 {
            return;
        }
        let col = self.cursor_column();
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + inner_width {
            self.scroll = col - inner_width + 1;
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf));
                Some(InputEvent::ContentChanged(self.buffer.clone()))
            }
            TuiEvent::Paste(data) => {
                // Single-line control: flatten pasted newlines to spaces
                let flattened = data.replace(['\r', '\n'], " ");
                self.insert_str(&flattened);
                Some(InputEvent::ContentChanged(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = self.next_boundary();
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = self.prev_boundary();
                }
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => {
                let text = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                self.scroll = 0;
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        self.update_scroll(inner_width);

        let style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title("Input")
            .border_style(style);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(self.buffer.as_str())
                .style(style)
                .scroll((0, self.scroll))
        };

        frame.render_widget(paragraph.block(block), area);

        // Cursor is hidden while the controls are disabled
        if !self.dimmed {
            let cursor_x = area.x + 1 + self.cursor_column().saturating_sub(self.scroll);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}
