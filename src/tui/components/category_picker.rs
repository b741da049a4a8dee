//! # Category Picker Component
//!
//! Overlay for choosing the category filter. Opened with `c`.
//! The first item is always "Show all", which clears the filter.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CategoryPickerState` lives in `TuiState`
//! - `CategoryPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::tui::components::{centered_rect, entry_list::truncate_to_width};
use crate::tui::event::TuiEvent;

pub const SHOW_ALL: &str = "Show all";

/// Persistent state for the category picker overlay.
pub struct CategoryPickerState {
    /// `None` is the "Show all" item.
    pub options: Vec<Option<String>>,
    pub selected: usize,
    pub list_state: ListState,
}

impl CategoryPickerState {
    /// Builds the option list, preselecting the active category if present.
    pub fn new(categories: &[String], active: Option<&str>) -> Self {
        let options: Vec<Option<String>> = std::iter::once(None)
            .chain(categories.iter().cloned().map(Some))
            .collect();
        let selected = active
            .and_then(|a| options.iter().position(|o| o.as_deref() == Some(a)))
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            options,
            selected,
            list_state,
        }
    }

    /// Handle a key event, returning a CategoryPickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<CategoryPickerEvent> {
        match event {
            TuiEvent::Escape => Some(CategoryPickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.options.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Home => {
                self.selected = 0;
                self.list_state.select(Some(0));
                None
            }
            TuiEvent::End => {
                self.selected = self.options.len() - 1;
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => self
                .options
                .get(self.selected)
                .map(|option| CategoryPickerEvent::Select(option.clone())),
            _ => None,
        }
    }
}

/// Events emitted by the category picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryPickerEvent {
    Select(Option<String>),
    Dismiss,
}

/// Transient render wrapper for the category picker overlay.
pub struct CategoryPicker<'a> {
    state: &'a mut CategoryPickerState,
    active: Option<&'a str>,
}

impl<'a> CategoryPicker<'a> {
    pub fn new(state: &'a mut CategoryPickerState, active: Option<&'a str>) -> Self {
        Self { state, active }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Categories ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));

        let inner_width = overlay.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let is_active = option.as_deref() == self.active;
                let label = option.as_deref().unwrap_or(SHOW_ALL);
                let marker = if is_active { " *" } else { "" };
                let text = truncate_to_width(label, inner_width.saturating_sub(marker.len()));

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if option.is_none() {
                    Style::default().fg(Color::Red)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(text, style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}
