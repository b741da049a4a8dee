//! # TitleBar Component
//!
//! Two-line header above the API list.
//!
//! ```text
//! Public APIs                               ⠋ 12/1425 | Updated 14:02
//! Some public API for Your new portfolio project...   Animals · "cat" · Name ↓
//! ```
//!
//! Stateless: everything it shows arrives as props, so it renders the same
//! output for the same props and is trivial to test against `TestBackend`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub const TITLE: &str = "Public APIs";
pub const SUBTITLE: &str = "Some public API for Your new portfolio project...";

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub status_message: String,
    pub shown: usize,
    pub total: usize,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_label: &'static str,
    pub fetching: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    /// Describes the active selection, e.g. `Animals · "cat" · Name ↓`.
    fn selection_summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(category) = &self.category {
            parts.push(category.clone());
        }
        if let Some(search) = &self.search {
            parts.push(format!("\"{search}\""));
        }
        parts.push(self.sort_label.to_string());
        parts.join(" · ")
    }

    fn status_line(&self) -> String {
        let counts = format!("{}/{}", self.shown, self.total);
        let mut status = if self.status_message.is_empty() {
            counts
        } else {
            format!("{} | {}", counts, self.status_message)
        };
        if self.fetching {
            let frame = SPINNER[self.spinner_frame % SPINNER.len()];
            status = format!("{frame} {status}");
        }
        status
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [top, bottom] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let status = self.status_line();
        let [title_area, status_area] = split_right(top, &status);
        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);
        frame.render_widget(
            Paragraph::new(status)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Right),
            status_area,
        );

        let summary = self.selection_summary();
        let [subtitle_area, summary_area] = split_right(bottom, &summary);
        let subtitle = Paragraph::new(Line::from(Span::styled(
            SUBTITLE,
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(subtitle, subtitle_area);
        frame.render_widget(
            Paragraph::new(summary)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Right),
            summary_area,
        );
    }
}

/// Splits a one-line area so `right` fits flush against the right edge.
fn split_right(area: Rect, right: &str) -> [Rect; 2] {
    let width = u16::try_from(right.width())
        .unwrap_or(u16::MAX)
        .saturating_add(1)
        .min(area.width);
    Layout::horizontal([Constraint::Fill(1), Constraint::Length(width)]).areas(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn title_bar() -> TitleBar {
        TitleBar {
            status_message: String::new(),
            shown: 2,
            total: 3,
            category: None,
            search: None,
            sort_label: "Category ↓",
            fetching: false,
            spinner_frame: 0,
        }
    }

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(120, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_and_subtitle_render() {
        let text = rendered(&mut title_bar());
        assert!(text.contains("Public APIs"));
        assert!(text.contains("portfolio project"));
        assert!(text.contains("2/3"));
    }

    #[test]
    fn test_selection_summary_lists_active_filters() {
        let mut bar = title_bar();
        bar.category = Some("Animals".to_string());
        bar.search = Some("cat".to_string());
        bar.sort_label = "Name ↑";
        assert_eq!(bar.selection_summary(), "Animals · \"cat\" · Name ↑");
    }

    #[test]
    fn test_status_line_with_message() {
        let mut bar = title_bar();
        bar.status_message = "Updated 14:02".to_string();
        assert_eq!(bar.status_line(), "2/3 | Updated 14:02");
    }

    #[test]
    fn test_huge_search_text_still_renders() {
        let mut bar = title_bar();
        bar.search = Some("x".repeat(70_000));
        let text = rendered(&mut bar);
        assert!(text.contains("2/3"));
        assert!(text.contains("xxxx"));
    }

    #[test]
    fn test_spinner_only_while_fetching() {
        let mut bar = title_bar();
        assert!(!bar.status_line().contains('⠋'));
        bar.fetching = true;
        assert!(bar.status_line().starts_with('⠋'));
        bar.spinner_frame = 11;
        assert!(bar.status_line().starts_with('⠙'));
    }
}
