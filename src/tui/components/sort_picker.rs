//! # Sort Picker Component
//!
//! Small overlay listing the four sort methods. Opened with `s`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::selection::SortMethod;
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

pub struct SortPickerState {
    pub selected: usize,
    pub list_state: ListState,
}

impl SortPickerState {
    pub fn new(current: SortMethod) -> Self {
        let selected = SortMethod::ALL
            .iter()
            .position(|m| *m == current)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            list_state,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<SortPickerEvent> {
        match event {
            TuiEvent::Escape => Some(SortPickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(SortMethod::ALL.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(SortPickerEvent::Select(SortMethod::ALL[self.selected])),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortPickerEvent {
    Select(SortMethod),
    Dismiss,
}

pub struct SortPicker<'a> {
    state: &'a mut SortPickerState,
    current: SortMethod,
}

impl<'a> SortPicker<'a> {
    pub fn new(state: &'a mut SortPickerState, current: SortMethod) -> Self {
        Self { state, current }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(30, 40, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Sort APIs ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter  Esc ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = SortMethod::ALL
            .iter()
            .enumerate()
            .map(|(i, method)| {
                let marker = if *method == self.current { " *" } else { "" };
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(format!("{}{}", method.label(), marker), style))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_current_method() {
        let state = SortPickerState::new(SortMethod::NameAsc);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_select_method() {
        let mut state = SortPickerState::new(SortMethod::CategoryAsc);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SortPickerEvent::Select(SortMethod::NameDesc))
        );
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = SortPickerState::new(SortMethod::CategoryAsc);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(SortPickerEvent::Dismiss));
    }
}
