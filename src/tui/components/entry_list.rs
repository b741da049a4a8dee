//! # EntryList Component
//!
//! Scrollable list of API rows, two lines per row:
//!
//! ```text
//! Cat Facts                                        Animals
//!   Daily cat facts
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EntryListState` lives in `TuiState`
//! - `EntryList` is created each frame with borrowed state and rows
//!
//! Before the first entries arrive the list shows pulsing placeholder rows
//! instead. Placeholders are purely visual; they never enter the row set.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::pipeline::Row;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Number of placeholder rows shown while loading.
pub const PLACEHOLDER_ROWS: usize = 10;
/// Rows skipped by PageUp/PageDown.
const PAGE_SIZE: usize = 10;
const CATEGORY_WIDTH: usize = 24;

pub struct EntryListState {
    pub selected: usize,
    len: usize,
    pub list_state: ListState,
}

impl Default for EntryListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            len: 0,
            list_state: ListState::default(),
        }
    }

    /// Called whenever the row set is republished. Jumps back to the top,
    /// since the old index points at a different row now.
    pub fn rows_changed(&mut self, len: usize) {
        self.len = len;
        self.selected = 0;
        *self.list_state.offset_mut() = 0;
        self.list_state.select(if len == 0 { None } else { Some(0) });
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn select(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.selected = index.min(self.len - 1);
        self.list_state.select(Some(self.selected));
    }
}

/// Events emitted by the entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryListEvent {
    Open(usize),
}

impl EventHandler for EntryListState {
    type Event = EntryListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<EntryListEvent> {
        match event {
            TuiEvent::CursorUp => self.select(self.selected.saturating_sub(1)),
            TuiEvent::CursorDown => self.select(self.selected + 1),
            TuiEvent::PageUp => self.select(self.selected.saturating_sub(PAGE_SIZE)),
            TuiEvent::PageDown => self.select(self.selected + PAGE_SIZE),
            TuiEvent::Home => self.select(0),
            TuiEvent::End => self.select(self.len.saturating_sub(1)),
            TuiEvent::Submit if self.len > 0 => return Some(EntryListEvent::Open(self.selected)),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the entry list.
pub struct EntryList<'a> {
    state: &'a mut EntryListState,
    rows: &'a [Row],
    /// `Some(pulse)` while loading, pulse in 0.0..=1.0.
    placeholder_pulse: Option<f32>,
}

impl<'a> EntryList<'a> {
    pub fn new(state: &'a mut EntryListState, rows: &'a [Row], placeholder_pulse: Option<f32>) -> Self {
        Self {
            state,
            rows,
            placeholder_pulse,
        }
    }

    fn row_item(row: &Row, inner_width: usize, selected: bool) -> ListItem<'static> {
        let category_width = CATEGORY_WIDTH.min(inner_width / 3);
        let name_width = inner_width.saturating_sub(category_width + 1);

        let name = pad_to_width(&truncate_to_width(&row.name, name_width), name_width);
        let category = truncate_to_width(&row.category, category_width);
        let description = truncate_to_width(&row.description, inner_width.saturating_sub(2));

        let (name_style, category_style, description_style) = if selected {
            let base = Style::default().add_modifier(Modifier::REVERSED);
            (base.add_modifier(Modifier::BOLD), base, base)
        } else {
            (
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Gray),
            )
        };

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(name, name_style),
                Span::styled(" ", name_style),
                Span::styled(format!("{category:>category_width$}"), category_style),
            ]),
            Line::from(Span::styled(format!("  {description}"), description_style)),
        ])
    }

    fn placeholder_items(inner_width: usize, pulse: f32) -> Vec<ListItem<'static>> {
        // Grayscale ramp between indexed colors 237 and 243
        let shade = 237 + (pulse.clamp(0.0, 1.0) * 6.0) as u8;
        let style = Style::default().fg(Color::Indexed(shade));
        (0..PLACEHOLDER_ROWS)
            .map(|i| {
                let name_len = (12 + (i * 7) % 14).min(inner_width);
                let desc_len = (30 + (i * 11) % 25).min(inner_width.saturating_sub(2));
                ListItem::new(vec![
                    Line::from(Span::styled("░".repeat(name_len), style)),
                    Line::from(Span::styled(format!("  {}", "░".repeat(desc_len)), style)),
                ])
            })
            .collect()
    }
}

impl Component for EntryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner_width = area.width as usize;

        if let Some(pulse) = self.placeholder_pulse {
            let list = List::new(Self::placeholder_items(inner_width, pulse)).block(block);
            frame.render_widget(list, area);
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| Self::row_item(row, inner_width, i == self.state.selected))
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncates to at most `max_width` display columns, adding "..." if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}
