//! # DetailPane Component
//!
//! Shows the highlighted row in full: name, category, wrapped description
//! and the documentation link that Enter will open.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::pipeline::Row;
use crate::tui::component::Component;

pub struct DetailPane<'a> {
    pub row: Option<&'a Row>,
}

impl DetailPane<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let Some(row) = self.row else {
            return vec![Line::styled(
                "Nothing selected",
                Style::default().fg(Color::DarkGray),
            )];
        };

        let mut lines = vec![
            Line::styled(
                row.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Line::styled(row.category.clone(), Style::default().fg(Color::Cyan)),
            Line::default(),
        ];
        lines.extend(
            textwrap::wrap(&row.description, width.max(1))
                .into_iter()
                .map(|l| Line::raw(l.into_owned())),
        );
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Link: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                row.link.clone(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
        lines
    }
}

impl Component for DetailPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Details ")
            .border_style(Style::default().fg(Color::DarkGray));
        let width = block.inner(area).width as usize;
        frame.render_widget(Paragraph::new(self.lines(width)).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pane() {
        let pane = DetailPane { row: None };
        let lines = pane.lines(40);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_description_is_wrapped() {
        let row = Row {
            name: "Cat Facts".to_string(),
            category: "Animals".to_string(),
            description: "Daily cat facts delivered straight to your terminal".to_string(),
            link: "https://example.com".to_string(),
        };
        let pane = DetailPane { row: Some(&row) };
        let lines = pane.lines(20);
        // name, category, blank, at least 3 wrapped lines, blank, link
        assert!(lines.len() >= 8);
        let last = lines.last().unwrap().to_string();
        assert!(last.contains("https://example.com"));
    }
}
