use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    CategoryPicker, DetailPane, EntryList, ErrorDialog, SortPicker, TitleBar,
};
use crate::tui::{InputMode, Overlay, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Below this width the detail pane is hidden.
const DETAIL_MIN_WIDTH: u16 = 100;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(2), Length(3), Min(0), Length(1)]);
    let [title_area, search_area, body_area, help_area] = layout.areas(frame.area());

    let selection = app.selection();
    let mut title_bar = TitleBar {
        status_message: app.status_message.clone(),
        shown: app.rows().len(),
        total: app.entries().len(),
        category: selection.category().map(str::to_string),
        search: selection.search().map(str::to_string),
        sort_label: selection.sort_method.label(),
        fetching: app.is_fetching(),
        spinner_frame,
    };
    title_bar.render(frame, title_area);

    tui.search_box.focused = tui.input_mode == InputMode::Search;
    tui.search_box.render(frame, search_area);

    let (list_area, detail_area) = if body_area.width >= DETAIL_MIN_WIDTH {
        let [list, detail] = Layout::horizontal([Percentage(60), Percentage(40)]).areas(body_area);
        (list, Some(detail))
    } else {
        (body_area, None)
    };

    let pulse = (!app.is_loaded).then_some(tui.pulse_value);
    EntryList::new(&mut tui.entry_list, app.rows(), pulse).render(frame, list_area);

    if let Some(area) = detail_area {
        let row = if app.is_loaded {
            app.rows().get(tui.entry_list.selected)
        } else {
            None
        };
        DetailPane { row }.render(frame, area);
    }

    draw_help(frame, help_area, tui);

    match tui.overlay.as_mut() {
        Some(Overlay::Category(state)) => {
            CategoryPicker::new(state, selection.category()).render(frame, frame.area());
        }
        Some(Overlay::Sort(state)) => {
            SortPicker::new(state, selection.sort_method).render(frame, frame.area());
        }
        None => {}
    }

    // Errors sit above everything else
    if let Some(error) = app.errors.front() {
        let message = error.to_string();
        ErrorDialog::new(&tui.error_dialog, &message, app.errors.len() - 1)
            .render(frame, frame.area());
    }
}

fn help_text(tui: &TuiState) -> &'static str {
    match (tui.input_mode, tui.overlay.is_some()) {
        (_, true) => " ↑↓ Move  Enter Select  Esc Cancel ",
        (InputMode::Search, false) => " Type to search  Enter Done  Esc Clear ",
        (InputMode::Browse, false) => " / Search  c Category  s Sort  Enter Open link  q Quit ",
    }
}

fn draw_help(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let help = Paragraph::new(Line::from(help_text(tui)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
