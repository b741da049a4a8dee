//! # Error Dialog Component
//!
//! Modal shown while `App::errors` is non-empty. Offers exactly two ways
//! out: Dismiss (drop this error) or Retry (drop all errors and fetch again).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorChoice {
    #[default]
    Dismiss,
    Retry,
}

impl ErrorChoice {
    fn toggle(self) -> Self {
        match self {
            ErrorChoice::Dismiss => ErrorChoice::Retry,
            ErrorChoice::Retry => ErrorChoice::Dismiss,
        }
    }
}

#[derive(Debug, Default)]
pub struct ErrorDialogState {
    pub choice: ErrorChoice,
}

impl ErrorDialogState {
    /// Returns the chosen action once the user commits to one.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ErrorChoice> {
        let picked = match event {
            TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::Tab => {
                self.choice = self.choice.toggle();
                None
            }
            TuiEvent::Submit => Some(self.choice),
            TuiEvent::Escape | TuiEvent::InputChar('d') => Some(ErrorChoice::Dismiss),
            TuiEvent::InputChar('r') => Some(ErrorChoice::Retry),
            _ => None,
        };
        if picked.is_some() {
            self.choice = ErrorChoice::default();
        }
        picked
    }
}

pub struct ErrorDialog<'a> {
    state: &'a ErrorDialogState,
    message: &'a str,
    /// Errors queued behind this one.
    remaining: usize,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(state: &'a ErrorDialogState, message: &'a str, remaining: usize) -> Self {
        Self {
            state,
            message,
            remaining,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 30, area);
        frame.render_widget(Clear, overlay);

        let title = if self.remaining > 0 {
            format!(" Error! (+{} more) ", self.remaining)
        } else {
            " Error! ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(title)
            .title_alignment(Alignment::Center)
            .padding(Padding::uniform(1));

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [message_area, buttons_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let message = Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(message, message_area);

        let button = |label: &'static str, choice: ErrorChoice| {
            let style = if self.state.choice == choice {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            Span::styled(label, style)
        };
        let buttons = Line::from(vec![
            button("[ Dismiss ]", ErrorChoice::Dismiss),
            Span::raw("   "),
            button("[ Retry ]", ErrorChoice::Retry),
        ])
        .centered();
        frame.render_widget(Paragraph::new(buttons), buttons_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_enter_confirms_highlighted_choice() {
        let mut state = ErrorDialogState::default();
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(ErrorChoice::Dismiss));
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.choice, ErrorChoice::Retry);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(ErrorChoice::Retry));
        // Highlight resets after a choice
        assert_eq!(state.choice, ErrorChoice::Dismiss);
    }

    #[test]
    fn test_shortcuts() {
        let mut state = ErrorDialogState::default();
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(ErrorChoice::Dismiss));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('r')), Some(ErrorChoice::Retry));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_render_shows_message_and_buttons() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = ErrorDialogState::default();
        terminal
            .draw(|f| {
                ErrorDialog::new(&state, "bad response (HTTP 503)", 1).render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("HTTP 503"));
        assert!(text.contains("Dismiss"));
        assert!(text.contains("Retry"));
        assert!(text.contains("+1 more"));
    }
}
