//! # SearchBox Component
//!
//! Single-line name search. Focused with `/`; every edit is reported so the
//! row list narrows as the user types. Esc clears the search and leaves the
//! box, Enter keeps the text and leaves the box.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Buffer changed; carries the full new text (possibly empty).
    Changed(String),
    /// Esc: search cancelled, buffer cleared.
    Cleared,
    /// Enter: keep the current text, return to the list.
    Done,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SearchBox {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            buffer: initial.unwrap_or_default().to_string(),
            focused: false,
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                // Search is single-line
                self.buffer.extend(text.chars().filter(|c| !c.is_control()));
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::ClearLine => {
                if self.buffer.is_empty() {
                    return None;
                }
                self.buffer.clear();
                Some(SearchEvent::Changed(String::new()))
            }
            TuiEvent::Escape => {
                self.buffer.clear();
                Some(SearchEvent::Cleared)
            }
            TuiEvent::Submit => Some(SearchEvent::Done),
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(" Search ")
            .border_style(border)
            .title_style(border);

        let paragraph = if self.buffer.is_empty() && !self.focused {
            Paragraph::new("press / to search by name").style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            // Clamp in usize; a long paste can exceed u16 columns
            let max_x = area.x.saturating_add(area.width.saturating_sub(2));
            let x = (area.x as usize + 1 + self.buffer.width()).min(max_x as usize) as u16;
            frame.set_cursor_position(Position::new(x, area.y.saturating_add(1)));
        }
    }
}
